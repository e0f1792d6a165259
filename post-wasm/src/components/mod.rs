pub(crate) mod delete_confirm;
pub(crate) mod edit_modal;
pub(crate) mod field_error;
pub(crate) mod image_preview;
pub(crate) mod notification;
pub(crate) mod post_form;
pub(crate) mod post_list;
