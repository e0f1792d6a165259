use leptos::prelude::*;
use post_client::PostClient;
use post_manager::{ManagerState, SNACKBAR_AUTO_HIDE};

use crate::config;

thread_local! {
    static CLIENT: PostClient = PostClient::new(config::api_base_url());
}

/// HTTP-клиент API; внутри `reqwest::Client`, клонирование дешёвое.
pub(crate) fn client() -> PostClient {
    CLIENT.with(PostClient::clone)
}

/// Абсолютный URL изображения по серверному пути.
pub(crate) fn asset_url(path: &str) -> String {
    CLIENT.with(|client| client.asset_url(path))
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) manager: RwSignal<ManagerState>,
    /// Идёт запрос к API; кнопки действий заблокированы.
    pub(crate) busy: RwSignal<bool>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            manager: RwSignal::new(ManagerState::new()),
            busy: RwSignal::new(false),
        }
    }

    /// Закрывает текущее уведомление через `SNACKBAR_AUTO_HIDE`, если его
    /// к тому времени не сменило новое.
    pub(crate) fn hide_snackbar_later(&self) {
        let seq = self.manager.with_untracked(|s| s.snackbar().seq());
        let manager = self.manager;
        set_timeout(
            move || {
                manager.update(|s| {
                    s.close_snackbar_if(seq);
                });
            },
            SNACKBAR_AUTO_HIDE,
        );
    }
}
