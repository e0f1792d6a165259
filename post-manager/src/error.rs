use post_client::PostClientError;
use thiserror::Error;

use crate::draft::FieldErrors;

#[derive(Debug, Error)]
/// Ошибки действий над постами.
pub enum ManagerError {
    /// Черновик не прошёл проверку; сообщения уже записаны в состояние.
    #[error("validation failed: {0:?}")]
    Validation(FieldErrors),

    /// Ошибка обращения к API.
    #[error(transparent)]
    Api(#[from] PostClientError),

    /// Окно редактирования не открыто.
    #[error("no post is being edited")]
    NotEditing,

    /// У поста нет серверного идентификатора.
    #[error("post has no id")]
    MissingId,

    /// Нет поста, ожидающего подтверждения удаления.
    #[error("no post is pending deletion")]
    NothingToDelete,

    /// Выбранный файл не является изображением.
    #[error("not an image: {0}")]
    NotAnImage(String),
}
