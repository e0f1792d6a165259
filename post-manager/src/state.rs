use post_client::Post;

use crate::draft::{FieldErrors, PostDraft};
use crate::error::ManagerError;
use crate::image::ImageFile;
use crate::notification::{POST_CREATED, POST_DELETED, POST_UPDATED, Snackbar};
use crate::pagination;

/// Какое модальное окно сейчас открыто.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    /// Редактирование поста; внутри рабочая копия.
    Edit(PostDraft),
    /// Подтверждение удаления указанного поста.
    ConfirmDelete(Post),
}

/// Работа, которую нужно отправить на сервер после успешной проверки.
#[derive(Debug, Clone)]
pub struct Submission {
    pub draft: PostDraft,
    pub image: Option<ImageFile>,
}

/// Результат успешной отправки черновика.
#[derive(Debug, Clone)]
pub struct Committed {
    /// Черновик с подставленной ссылкой на загруженное изображение.
    pub draft: PostDraft,
    /// Пост в том виде, в каком его вернул сервер.
    pub saved: Post,
}

/// Состояние менеджера постов.
///
/// Все изменения выполняются синхронными методами; сетевые вызовы делаются
/// снаружи, между `begin_*` и `apply_*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerState {
    posts: Vec<Post>,
    page: usize,
    show_posts: bool,
    new_draft: PostDraft,
    errors: FieldErrors,
    image: Option<ImageFile>,
    image_preview: Option<String>,
    /// Превью текущего изображения редактируемого поста.
    edit_preview: Option<String>,
    modal: Modal,
    snackbar: Snackbar,
}

impl Default for ManagerState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            page: 1,
            show_posts: true,
            new_draft: PostDraft::default(),
            errors: FieldErrors::default(),
            image: None,
            image_preview: None,
            edit_preview: None,
            modal: Modal::Closed,
            snackbar: Snackbar::default(),
        }
    }
}

impl ManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.posts.len())
    }

    /// Посты текущей страницы.
    pub fn visible_posts(&self) -> &[Post] {
        self.posts_on_page(self.page)
    }

    pub fn posts_on_page(&self, page: usize) -> &[Post] {
        pagination::page_slice(&self.posts, page)
    }

    pub fn show_posts(&self) -> bool {
        self.show_posts
    }

    pub fn new_draft(&self) -> &PostDraft {
        &self.new_draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn selected_image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    pub fn image_preview(&self) -> Option<&str> {
        self.image_preview.as_deref()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn edit_draft(&self) -> Option<&PostDraft> {
        match &self.modal {
            Modal::Edit(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<&Post> {
        match &self.modal {
            Modal::ConfirmDelete(post) => Some(post),
            _ => None,
        }
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    /// Заменяет коллекцию целиком (после загрузки с сервера).
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.clamp_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.posts.len());
    }

    pub fn toggle_posts_visibility(&mut self) {
        self.show_posts = !self.show_posts;
    }

    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.new_draft.title = title.into();
    }

    pub fn set_new_content(&mut self, content: impl Into<String>) {
        self.new_draft.content = content.into();
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        if let Modal::Edit(draft) = &mut self.modal {
            draft.title = title.into();
        }
    }

    pub fn set_edit_content(&mut self, content: impl Into<String>) {
        if let Modal::Edit(draft) = &mut self.modal {
            draft.content = content.into();
        }
    }

    /// Запоминает выбранный файл и строит превью из его содержимого.
    ///
    /// Чтение файлов не отменяется, поэтому побеждает последний вызов.
    pub fn select_image(&mut self, image: ImageFile) {
        tracing::debug!(name = %image.name, mime = %image.mime, "image selected");
        self.image_preview = Some(image.data_url());
        self.image = Some(image);
    }

    /// Сбрасывает выбранный файл. В окне редактирования превью
    /// возвращается к текущему изображению поста, которое и будет сохранено.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.image_preview = match self.modal {
            Modal::Edit(_) => self.edit_preview.clone(),
            _ => None,
        };
    }

    /// Проверяет активный черновик: редактируемый, если открыто окно
    /// редактирования, иначе черновик нового поста.
    pub fn validate(&mut self) -> bool {
        let errors = match &self.modal {
            Modal::Edit(draft) => draft.check(),
            _ => self.new_draft.check(),
        };
        let ok = errors.is_clear();
        self.errors = errors;
        ok
    }

    /// Проверяет черновик нового поста и снимает с него копию для отправки.
    pub fn begin_create(&mut self) -> Result<Submission, ManagerError> {
        let errors = self.new_draft.check();
        self.errors = errors.clone();
        if !errors.is_clear() {
            return Err(ManagerError::Validation(errors));
        }

        Ok(Submission {
            draft: self.new_draft.clone(),
            image: self.image.clone(),
        })
    }

    pub fn apply_created(&mut self, post: Post) {
        if post.id.is_none() {
            tracing::warn!(title = %post.title, "server returned created post without id");
        }
        self.posts.push(post);
        self.new_draft = PostDraft::default();
        self.clear_image();
        self.errors = FieldErrors::default();
        self.clamp_page();
        self.snackbar.show(POST_CREATED);
    }

    /// Открывает окно редактирования с копией поста.
    ///
    /// `preview` — абсолютный URL текущего изображения поста, если оно есть.
    pub fn open_edit(&mut self, post: &Post, preview: Option<String>) {
        self.modal = Modal::Edit(PostDraft::from_post(post));
        self.image = None;
        self.image_preview = preview.clone();
        self.edit_preview = preview;
    }

    /// Закрывает окно редактирования, отбрасывая черновик и выбранный файл.
    pub fn close_edit(&mut self) {
        if matches!(self.modal, Modal::Edit(_)) {
            self.modal = Modal::Closed;
        }
        self.edit_preview = None;
        self.clear_image();
        self.errors = FieldErrors::default();
    }

    pub fn begin_update(&mut self) -> Result<Submission, ManagerError> {
        let Modal::Edit(draft) = &self.modal else {
            return Err(ManagerError::NotEditing);
        };
        if draft.id.is_none() {
            return Err(ManagerError::MissingId);
        }

        let errors = draft.check();
        let draft = draft.clone();
        self.errors = errors.clone();
        if !errors.is_clear() {
            return Err(ManagerError::Validation(errors));
        }

        Ok(Submission {
            draft,
            image: self.image.clone(),
        })
    }

    /// Заменяет пост с тем же id значениями из черновика.
    ///
    /// Окно закрывается, только если в нём всё ещё открыт этот пост.
    pub fn apply_updated(&mut self, committed: Committed) {
        let Committed { draft, saved } = committed;
        let Some(id) = draft.id else {
            tracing::warn!("updated draft has no id, collection left unchanged");
            return;
        };

        match self.posts.iter_mut().find(|post| post.id == Some(id)) {
            Some(post) => {
                post.title = draft.title;
                post.content = draft.content;
                post.image_url = draft.image_url;
                if saved.updated_at.is_some() {
                    post.updated_at = saved.updated_at;
                }
            }
            None => tracing::warn!(id, "updated post is not in the loaded collection"),
        }

        if matches!(&self.modal, Modal::Edit(open) if open.id == Some(id)) {
            self.modal = Modal::Closed;
            self.edit_preview = None;
            self.clear_image();
        }
        self.errors = FieldErrors::default();
        self.snackbar.show(POST_UPDATED);
    }

    /// Помечает пост к удалению и открывает подтверждение.
    pub fn request_delete(&mut self, post: &Post) {
        self.modal = Modal::ConfirmDelete(post.clone());
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.modal, Modal::ConfirmDelete(_)) {
            self.modal = Modal::Closed;
        }
    }

    pub fn begin_delete(&self) -> Result<i64, ManagerError> {
        let post = self.pending_delete().ok_or(ManagerError::NothingToDelete)?;
        post.id.ok_or(ManagerError::MissingId)
    }

    /// Удаляет из коллекции ровно один пост с указанным id.
    pub fn apply_deleted(&mut self, id: i64) -> bool {
        let Some(index) = self.posts.iter().position(|post| post.id == Some(id)) else {
            tracing::warn!(id, "deleted post is not in the loaded collection");
            return false;
        };
        self.posts.remove(index);
        self.clamp_page();
        self.snackbar.show(POST_DELETED);
        true
    }

    /// Закрывает подтверждение удаления независимо от исхода запроса.
    pub fn finish_delete(&mut self) {
        self.cancel_delete();
    }

    pub fn close_snackbar(&mut self) {
        self.snackbar.close();
    }

    pub fn close_snackbar_if(&mut self, seq: u64) -> bool {
        self.snackbar.close_if(seq)
    }

    fn clamp_page(&mut self) {
        self.page = pagination::clamp_page(self.page, self.posts.len());
    }
}
