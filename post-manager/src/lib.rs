//! Состояние и действия UI управления постами блога.
//!
//! `ManagerState` хранит коллекцию, страницу, черновики, ошибки полей,
//! модальные окна, выбранное изображение и уведомление. Меняется оно только
//! синхронными методами; сетевые шаги живут в [`actions`] и вызываются между
//! `begin_*` и `apply_*`. `PostManager` связывает оба слоя для вызывающих,
//! которые владеют состоянием напрямую.

pub mod actions;
mod draft;
mod error;
mod image;
mod manager;
mod notification;
pub mod pagination;
mod state;

pub use draft::{FieldErrors, PostDraft};
pub use error::ManagerError;
pub use image::ImageFile;
pub use manager::PostManager;
pub use notification::{POST_CREATED, POST_DELETED, POST_UPDATED, SNACKBAR_AUTO_HIDE, Snackbar};
pub use state::{Committed, ManagerState, Modal, Submission};

pub use post_client::{Post, PostClient, PostClientError, PostsApi};
