use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста. Отсутствует, пока сервер не создал пост.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Заголовок поста.
    #[serde(default)]
    pub title: String,
    /// Содержимое поста.
    #[serde(default)]
    pub content: String,
    /// Серверный путь к изображению, например `/uploads/1700000000_cat.png`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
    /// Дата и время создания (локальное время сервера).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    /// Дата и время последнего обновления (локальное время сервера).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Post {
    /// Возвращает ссылку на изображение, если она задана и не пуста.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Сервер хранит «нет картинки» и как `null`, и как пустую строку.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_post_with_timestamps() {
        let raw = r#"{
            "id": 7,
            "title": "Hello",
            "content": "World",
            "imageUrl": "/uploads/1_cat.png",
            "createdAt": "2024-11-02T10:15:30.123456",
            "updatedAt": "2024-11-02T10:15:30.123456"
        }"#;

        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.id, Some(7));
        assert_eq!(post.image(), Some("/uploads/1_cat.png"));
        assert!(post.created_at.is_some());
    }

    #[test]
    fn empty_image_url_is_treated_as_missing() {
        let raw = r#"{"id":1,"title":"t","content":"c","imageUrl":""}"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.image_url, None);
    }

    #[test]
    fn serializes_without_absent_id() {
        let post = Post {
            title: "A".to_string(),
            content: "B".to_string(),
            ..Post::default()
        };

        let value = serde_json::to_value(&post).expect("post should serialize");
        assert!(value.get("id").is_none());
        assert_eq!(value["title"], "A");
    }
}
