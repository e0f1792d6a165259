use post_client::{Post, PostsApi};

use crate::actions;
use crate::error::ManagerError;
use crate::image::ImageFile;
use crate::state::ManagerState;

/// Менеджер постов: состояние плюс клиент API.
///
/// Владеет состоянием напрямую, поэтому годится для хоста и тестов.
/// Браузерный UI хранит `ManagerState` в сигнале и не может держать его
/// через `await`, так что компоненты повторяют те же шаги
/// (`begin_*`, [`actions`], `apply_*`) в том же порядке.
///
/// Каждое действие выполняется до конца (включая сетевые вызовы), прежде
/// чем изменится состояние. При ошибке состояние остаётся прежним, ошибка
/// логируется и возвращается вызывающему.
pub struct PostManager<A> {
    api: A,
    state: ManagerState,
}

impl<A: PostsApi> PostManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ManagerState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &ManagerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ManagerState {
        &mut self.state
    }

    /// Загружает коллекцию. При ошибке коллекция остаётся пустой.
    pub async fn load(&mut self) -> Result<(), ManagerError> {
        let posts = actions::fetch_posts(&self.api).await?;
        self.state.set_posts(posts);
        Ok(())
    }

    /// Выбор файла; не-изображения отклоняются без изменения состояния.
    pub fn select_image(
        &mut self,
        name: &str,
        bytes: Vec<u8>,
        mime: Option<&str>,
    ) -> Result<(), ManagerError> {
        let image = ImageFile::new(name, bytes, mime).inspect_err(|err| {
            tracing::warn!(error = %err, "ignoring selected file");
        })?;
        self.state.select_image(image);
        Ok(())
    }

    pub async fn create(&mut self) -> Result<(), ManagerError> {
        let submission = self.state.begin_create()?;
        let committed = actions::submit(&self.api, submission).await?;
        self.state.apply_created(committed.saved);
        Ok(())
    }

    /// Открывает окно редактирования с превью текущего изображения поста.
    pub fn open_edit(&mut self, post: &Post) {
        let preview = post.image().map(|path| self.api.asset_url(path));
        self.state.open_edit(post, preview);
    }

    pub fn close_edit(&mut self) {
        self.state.close_edit();
    }

    pub async fn update(&mut self) -> Result<(), ManagerError> {
        let submission = self.state.begin_update()?;
        let committed = actions::submit(&self.api, submission).await?;
        self.state.apply_updated(committed);
        Ok(())
    }

    pub fn request_delete(&mut self, post: &Post) {
        self.state.request_delete(post);
    }

    pub fn cancel_delete(&mut self) {
        self.state.cancel_delete();
    }

    /// Удаляет помеченный пост. Подтверждение закрывается в любом случае.
    pub async fn confirm_delete(&mut self) -> Result<(), ManagerError> {
        let id = self.state.begin_delete()?;
        let result = actions::remove(&self.api, id).await;
        if result.is_ok() {
            self.state.apply_deleted(id);
        }
        self.state.finish_delete();
        result
    }
}
