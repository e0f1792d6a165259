use leptos::prelude::*;
use leptos::task::spawn_local;
use post_manager::{ManagerState, actions};

use crate::state::{AppState, client};

#[component]
pub(crate) fn DeleteConfirm(state: AppState) -> impl IntoView {
    let pending_title = move || {
        state
            .manager
            .with(|s| s.pending_delete().map(|post| post.title.clone()))
    };

    let on_confirm = move |_| {
        let id = match state.manager.with_untracked(ManagerState::begin_delete) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(error = %err, "nothing to delete");
                state.manager.update(ManagerState::finish_delete);
                return;
            }
        };

        state.busy.set(true);
        spawn_local(async move {
            let deleted = actions::remove(&client(), id).await.is_ok();
            state.manager.update(|s| {
                if deleted {
                    s.apply_deleted(id);
                }
                s.finish_delete();
            });
            if deleted {
                state.hide_snackbar_later();
            }
            state.busy.set(false);
        });
    };

    view! {
        <Show when=move || pending_title().is_some()>
            <div class="modal-backdrop">
                <div class="modal" role="alertdialog">
                    <h2>"Delete post?"</h2>
                    <p>
                        "\u{201C}" {move || pending_title().unwrap_or_default()} "\u{201D}"
                        " will be removed permanently."
                    </p>
                    <div class="modal-actions">
                        <button
                            id="cancel-delete-btn"
                            class="secondary"
                            on:click=move |_| state.manager.update(ManagerState::cancel_delete)
                        >
                            "Cancel"
                        </button>
                        <button
                            id="confirm-delete-btn"
                            class="danger"
                            on:click=on_confirm
                            disabled=move || state.busy.get()
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
