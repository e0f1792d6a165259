use reqwest::{Client, Method, multipart};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{PostClientError, PostClientResult};
use crate::models::Post;

const POSTS_PATH: &str = "/api/posts";
const UPLOAD_PATH: &str = "/api/posts/upload";
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostPayloadDto<'a> {
    title: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API постов.
pub struct PostClient {
    base_url: String,
    client: Client,
}

impl PostClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Базовый URL сервера, с которым работает клиент.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Превращает серверный путь к изображению в абсолютный URL.
    ///
    /// Уже абсолютные ссылки (`http://`, `https://`, `data:`) возвращаются как есть.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:")
        {
            return path.to_string();
        }
        self.endpoint(path)
    }

    async fn decode_error(response: reqwest::Response) -> PostClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        PostClientError::from_http_status(status, &body)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> PostClientResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(PostClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    /// универсальный helper для отправки запросов с json-payload
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
    ) -> PostClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self.send(self.client.request(method, url).json(body)).await?;

        response
            .json::<TRes>()
            .await
            .map_err(PostClientError::from_reqwest)
    }

    /// Возвращает все посты.
    pub async fn list_posts(&self) -> PostClientResult<Vec<Post>> {
        let url = self.endpoint(POSTS_PATH);
        let response = self.send(self.client.get(url)).await?;

        response
            .json::<Vec<Post>>()
            .await
            .map_err(PostClientError::from_reqwest)
    }

    /// Получает пост по идентификатору.
    pub async fn get_post(&self, id: i64) -> PostClientResult<Post> {
        let url = self.endpoint(&format!("{POSTS_PATH}/{id}"));
        let response = self.send(self.client.get(url)).await?;

        response
            .json::<Post>()
            .await
            .map_err(PostClientError::from_reqwest)
    }

    /// Создаёт пост и возвращает его в том виде, в каком его сохранил сервер.
    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        image_url: Option<&str>,
    ) -> PostClientResult<Post> {
        let payload = PostPayloadDto {
            title,
            content,
            image_url,
        };
        tracing::debug!(title, has_image = image_url.is_some(), "creating post");
        self.send_json(Method::POST, POSTS_PATH, &payload).await
    }

    /// Обновляет пост по идентификатору.
    pub async fn update_post(
        &self,
        id: i64,
        title: &str,
        content: &str,
        image_url: Option<&str>,
    ) -> PostClientResult<Post> {
        let payload = PostPayloadDto {
            title,
            content,
            image_url,
        };
        tracing::debug!(id, title, has_image = image_url.is_some(), "updating post");
        self.send_json(Method::PUT, &format!("{POSTS_PATH}/{id}"), &payload)
            .await
    }

    /// Удаляет пост по идентификатору.
    pub async fn delete_post(&self, id: i64) -> PostClientResult<()> {
        let url = self.endpoint(&format!("{POSTS_PATH}/{id}"));
        tracing::debug!(id, "deleting post");
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    /// Загружает изображение (`multipart/form-data`, поле `file`) и возвращает
    /// серверный путь к нему.
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> PostClientResult<String> {
        let url = self.endpoint(UPLOAD_PATH);
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(PostClientError::from_reqwest)?;
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(file_name, mime, "uploading image");
        let response = self.send(self.client.post(url).multipart(form)).await?;
        let body = response
            .text()
            .await
            .map_err(PostClientError::from_reqwest)?;

        parse_upload_reference(&body)
    }
}

/// Сервер отвечает `200` даже при неудачной записи файла, поэтому путь
/// принимается только если он начинается с `/`.
fn parse_upload_reference(body: &str) -> PostClientResult<String> {
    let reference = body.trim().trim_matches('"');
    if reference.starts_with('/') && reference.len() > 1 {
        return Ok(reference.to_string());
    }
    if reference.is_empty() {
        return Err(PostClientError::Upload("empty response".to_string()));
    }
    Err(PostClientError::Upload(reference.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = PostClient::new("http://localhost:8080/");
        let full = client.endpoint("/api/posts");
        assert_eq!(full, "http://localhost:8080/api/posts");
    }

    #[test]
    fn asset_url_prefixes_server_relative_paths() {
        let client = PostClient::new("http://localhost:8080");
        assert_eq!(
            client.asset_url("/uploads/1_cat.png"),
            "http://localhost:8080/uploads/1_cat.png"
        );
    }

    #[test]
    fn asset_url_keeps_absolute_and_data_urls() {
        let client = PostClient::new("http://localhost:8080");
        assert_eq!(
            client.asset_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(client.asset_url("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }

    #[test]
    fn payload_omits_missing_image() {
        let payload = PostPayloadDto {
            title: "A",
            content: "B",
            image_url: None,
        };
        let value = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(value, serde_json::json!({"title": "A", "content": "B"}));
    }

    #[test]
    fn upload_reference_accepts_server_path() {
        let reference = parse_upload_reference("/uploads/1700000000_cat.png\n")
            .expect("path must be accepted");
        assert_eq!(reference, "/uploads/1700000000_cat.png");
    }

    #[test]
    fn upload_reference_rejects_error_text() {
        let err = parse_upload_reference("Error uploading image: disk full")
            .expect_err("error text must be rejected");
        match err {
            PostClientError::Upload(msg) => assert!(msg.contains("disk full")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn upload_reference_rejects_empty_body() {
        let err = parse_upload_reference("   ").expect_err("empty body must be rejected");
        assert!(matches!(err, PostClientError::Upload(_)));
    }
}
