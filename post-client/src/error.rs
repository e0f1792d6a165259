use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `post-client`.
pub enum PostClientError {
    /// Ошибка HTTP-транспорта или декодирования ответа (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Запрошенный пост не найден.
    #[error("not found")]
    NotFound,

    /// Сервер отклонил запрос (ошибки валидации полей).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Неуспешный HTTP-статус без более точной классификации.
    #[error("http status {status}: {message}")]
    Status {
        /// Код HTTP-ответа.
        status: u16,
        /// Текст ответа или описание статуса.
        message: String,
    },

    /// Сервер не сохранил изображение и вернул текст ошибки вместо пути.
    #[error("image upload failed: {0}")]
    Upload(String),
}

/// Результат операций `post-client`.
pub type PostClientResult<T> = Result<T, PostClientError>;

/// Ошибка биндинга полей, которую сервер отдаёт в теле `400 Bad Request`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldErrorDto {
    field: Option<String>,
    default_message: Option<String>,
}

impl PostClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            reqwest::StatusCode::BAD_REQUEST => {
                let message = parse_field_errors(body)
                    .unwrap_or_else(|| fallback_message(status, body));
                Self::InvalidRequest(message)
            }
            _ => Self::Status {
                status: status.as_u16(),
                message: fallback_message(status, body),
            },
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, "");
        }
        Self::Http(err)
    }
}

fn parse_field_errors(body: &str) -> Option<String> {
    let errors = serde_json::from_str::<Vec<FieldErrorDto>>(body).ok()?;
    let messages: Vec<String> = errors
        .into_iter()
        .filter_map(|err| match (err.field, err.default_message) {
            (Some(field), Some(message)) => Some(format!("{field}: {message}")),
            (None, Some(message)) => Some(message),
            (Some(field), None) => Some(format!("{field}: invalid value")),
            (None, None) => None,
        })
        .collect();

    if messages.is_empty() {
        return None;
    }
    Some(messages.join("; "))
}

fn fallback_message(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("http status {status}")
    } else {
        body.to_string()
    }
}
