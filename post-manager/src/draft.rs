use post_client::Post;
use validator::{Validate, ValidationErrors};

/// Рабочая копия поста для формы создания или окна редактирования.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PostDraft {
    /// Идентификатор редактируемого поста; `None` для нового.
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub image_url: Option<String>,
}

impl PostDraft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            image_url: post.image().map(str::to_string),
        }
    }

    /// Проверяет черновик и возвращает сообщения по полям.
    pub fn check(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from_validation(&errors),
        }
    }
}

/// Сообщения об ошибках по полям формы; пустая строка значит «ошибки нет».
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: String,
    pub content: String,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    fn from_validation(errors: &ValidationErrors) -> Self {
        Self {
            title: first_message(errors, "title"),
            content: first_message(errors, "content"),
        }
    }
}

fn first_message(errors: &ValidationErrors, field: &str) -> String {
    errors
        .field_errors()
        .get(field)
        .and_then(|list| list.first())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_reports_both_fields() {
        let errors = PostDraft::default().check();
        assert_eq!(errors.title, "Title is required");
        assert_eq!(errors.content, "Content is required");
        assert!(!errors.is_clear());
    }

    #[test]
    fn filled_draft_passes() {
        let draft = PostDraft {
            title: "A".to_string(),
            content: "B".to_string(),
            ..PostDraft::default()
        };
        assert!(draft.check().is_clear());
    }

    #[test]
    fn only_missing_field_is_reported() {
        let draft = PostDraft {
            title: "A".to_string(),
            ..PostDraft::default()
        };
        let errors = draft.check();
        assert!(errors.title.is_empty());
        assert_eq!(errors.content, "Content is required");
    }

    #[test]
    fn from_post_copies_editable_fields() {
        let post = Post {
            id: Some(3),
            title: "X".to_string(),
            content: "Y".to_string(),
            image_url: Some("/img/1.png".to_string()),
            ..Post::default()
        };

        let draft = PostDraft::from_post(&post);
        assert_eq!(draft.id, Some(3));
        assert_eq!(draft.title, "X");
        assert_eq!(draft.content, "Y");
        assert_eq!(draft.image_url.as_deref(), Some("/img/1.png"));
    }
}
