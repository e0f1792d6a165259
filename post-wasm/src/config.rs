//! Настройки, зашиваемые в сборку через переменные окружения `trunk build`.

use post_client::DEFAULT_BASE_URL;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Адрес API постов: `POSTS_API_BASE_URL` или `http://localhost:8080`.
pub(crate) fn api_base_url() -> String {
    normalize_base_url(option_env!("POSTS_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
}

/// Фильтр логов в формате `EnvFilter`: `POSTS_LOG_LEVEL` или `info`.
pub(crate) fn log_level() -> &'static str {
    non_blank(option_env!("POSTS_LOG_LEVEL")).unwrap_or(DEFAULT_LOG_LEVEL)
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn normalize_base_url(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');
    if raw.is_empty() {
        return DEFAULT_BASE_URL.to_string();
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    format!("http://{raw}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_keeps_scheme() {
        assert_eq!(
            normalize_base_url("https://blog.example.com:8443"),
            "https://blog.example.com:8443"
        );
    }

    #[test]
    fn normalize_base_url_adds_http_scheme() {
        assert_eq!(normalize_base_url("127.0.0.1:8080"), "http://127.0.0.1:8080");
    }

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        assert_eq!(normalize_base_url("http://localhost:8080/"), "http://localhost:8080");
    }

    #[test]
    fn normalize_base_url_falls_back_to_default() {
        assert_eq!(normalize_base_url("   "), DEFAULT_BASE_URL);
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some(" debug ")), Some("debug"));
        assert_eq!(non_blank(None), None);
    }
}
