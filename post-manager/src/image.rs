use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::ManagerError;

/// Выбранный пользователем файл изображения, уже прочитанный в память.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Собирает файл из имени, содержимого и MIME-типа из браузера.
    ///
    /// Если браузер не сообщил тип, он угадывается по расширению.
    /// Файлы не `image/*` отклоняются.
    pub fn new(
        name: impl Into<String>,
        bytes: Vec<u8>,
        mime: Option<&str>,
    ) -> Result<Self, ManagerError> {
        let name = name.into();
        let mime = match mime.map(str::trim).filter(|mime| !mime.is_empty()) {
            Some(mime) => mime.to_string(),
            None => mime_guess::from_path(&name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        };

        if !mime.starts_with("image/") {
            return Err(ManagerError::NotAnImage(format!("{name} ({mime})")));
        }

        Ok(Self { name, mime, bytes })
    }

    /// `data:`-URL для превью до загрузки на сервер.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_browser_mime() {
        let file = ImageFile::new("photo", vec![1], Some("image/webp")).expect("image accepted");
        assert_eq!(file.mime, "image/webp");
    }

    #[test]
    fn guesses_mime_from_extension() {
        let file = ImageFile::new("cat.png", vec![1], None).expect("image accepted");
        assert_eq!(file.mime, "image/png");

        let file = ImageFile::new("cat.jpg", vec![1], Some("  ")).expect("image accepted");
        assert_eq!(file.mime, "image/jpeg");
    }

    #[test]
    fn rejects_non_images() {
        let err = ImageFile::new("notes.txt", vec![1], None).expect_err("text rejected");
        assert!(matches!(err, ManagerError::NotAnImage(_)));

        let err = ImageFile::new("blob", vec![1], None).expect_err("octet-stream rejected");
        assert!(matches!(err, ManagerError::NotAnImage(_)));
    }

    #[test]
    fn data_url_encodes_bytes() {
        let file = ImageFile::new("a.png", b"abc".to_vec(), None).expect("image accepted");
        assert_eq!(file.data_url(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn debug_hides_content() {
        let file = ImageFile::new("a.png", vec![0; 1024], None).expect("image accepted");
        let debug = format!("{file:?}");
        assert!(debug.contains("len: 1024"));
    }
}
