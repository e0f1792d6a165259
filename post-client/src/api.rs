use async_trait::async_trait;

use crate::error::PostClientResult;
use crate::http_client::PostClient;
use crate::models::Post;

/// Операции удалённого API постов, от которых зависит UI.
///
/// Фьючерсы не требуют `Send`: в браузере запросы выполняются
/// в однопоточном event loop.
#[async_trait(?Send)]
pub trait PostsApi {
    /// Возвращает всю коллекцию постов.
    async fn list_posts(&self) -> PostClientResult<Vec<Post>>;

    /// Создаёт пост.
    async fn create_post(
        &self,
        title: &str,
        content: &str,
        image_url: Option<&str>,
    ) -> PostClientResult<Post>;

    /// Обновляет пост по идентификатору.
    async fn update_post(
        &self,
        id: i64,
        title: &str,
        content: &str,
        image_url: Option<&str>,
    ) -> PostClientResult<Post>;

    /// Удаляет пост по идентификатору.
    async fn delete_post(&self, id: i64) -> PostClientResult<()>;

    /// Загружает изображение и возвращает серверный путь к нему.
    async fn upload_image(&self, file_name: &str, bytes: Vec<u8>, mime: &str)
    -> PostClientResult<String>;

    /// Абсолютный URL для серверного пути к изображению.
    fn asset_url(&self, path: &str) -> String;
}

#[async_trait(?Send)]
impl PostsApi for PostClient {
    async fn list_posts(&self) -> PostClientResult<Vec<Post>> {
        PostClient::list_posts(self).await
    }

    async fn create_post(
        &self,
        title: &str,
        content: &str,
        image_url: Option<&str>,
    ) -> PostClientResult<Post> {
        PostClient::create_post(self, title, content, image_url).await
    }

    async fn update_post(
        &self,
        id: i64,
        title: &str,
        content: &str,
        image_url: Option<&str>,
    ) -> PostClientResult<Post> {
        PostClient::update_post(self, id, title, content, image_url).await
    }

    async fn delete_post(&self, id: i64) -> PostClientResult<()> {
        PostClient::delete_post(self, id).await
    }

    async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> PostClientResult<String> {
        PostClient::upload_image(self, file_name, bytes, mime).await
    }

    fn asset_url(&self, path: &str) -> String {
        PostClient::asset_url(self, path)
    }
}
