use std::time::Duration;

/// Через сколько snackbar скрывается сам.
pub const SNACKBAR_AUTO_HIDE: Duration = Duration::from_millis(6000);

pub const POST_CREATED: &str = "Post created successfully!";
pub const POST_UPDATED: &str = "Post updated successfully!";
pub const POST_DELETED: &str = "Post deleted successfully!";

/// Всплывающее уведомление об успешной операции.
///
/// `seq` растёт с каждым `show`, чтобы таймер автоскрытия старого
/// сообщения не закрыл более новое.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snackbar {
    message: String,
    open: bool,
    seq: u64,
}

impl Snackbar {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.open = true;
        self.seq += 1;
        self.seq
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Закрывает уведомление, только если оно не было заменено новым.
    pub fn close_if(&mut self, seq: u64) -> bool {
        if self.open && self.seq == seq {
            self.open = false;
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}
