use leptos::prelude::*;
use post_manager::ManagerState;

use crate::state::AppState;

#[component]
pub(crate) fn Notification(state: AppState) -> impl IntoView {
    let message = move || state.manager.with(|s| s.snackbar().message().to_string());

    view! {
        <Show when=move || state.manager.with(|s| s.snackbar().is_open())>
            <div class="snackbar" role="status">
                <span>{message}</span>
                <button
                    class="snackbar-close"
                    on:click=move |_| state.manager.update(ManagerState::close_snackbar)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
