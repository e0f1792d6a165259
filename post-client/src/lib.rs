//! Клиентская библиотека для REST API постов блога.
//!
//! Предоставляет `PostClient` поверх `reqwest` (в браузере `reqwest`
//! использует `fetch`) и трейт `PostsApi`, через который UI вызывает
//! пять удалённых операций: список, создание, обновление, удаление постов
//! и загрузку изображения.
#![warn(missing_docs)]

mod api;
mod error;
mod http_client;
mod models;

pub use api::PostsApi;
pub use error::{PostClientError, PostClientResult};
pub use http_client::PostClient;
pub use models::Post;

/// Адрес API по умолчанию.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
