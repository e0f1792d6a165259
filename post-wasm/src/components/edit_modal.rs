use leptos::prelude::*;
use leptos::task::spawn_local;
use post_manager::{ManagerState, actions};

use crate::components::field_error::FieldError;
use crate::components::image_preview::ImagePreview;
use crate::files;
use crate::state::{AppState, client};

#[component]
pub(crate) fn EditModal(state: AppState) -> impl IntoView {
    let is_open = move || state.manager.with(|s| s.edit_draft().is_some());
    let title = move || {
        state
            .manager
            .with(|s| s.edit_draft().map(|d| d.title.clone()).unwrap_or_default())
    };
    let content = move || {
        state
            .manager
            .with(|s| s.edit_draft().map(|d| d.content.clone()).unwrap_or_default())
    };
    let title_error = Signal::derive(move || state.manager.with(|s| s.errors().title.clone()));
    let content_error =
        Signal::derive(move || state.manager.with(|s| s.errors().content.clone()));

    let close = move || state.manager.update(ManagerState::close_edit);

    let on_update = move |_| {
        let submission = match state.manager.try_update(ManagerState::begin_update) {
            Some(Ok(submission)) => submission,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "update rejected");
                return;
            }
            None => return,
        };

        state.busy.set(true);
        spawn_local(async move {
            if let Ok(committed) = actions::submit(&client(), submission).await {
                state.manager.update(|s| s.apply_updated(committed));
                state.hide_snackbar_later();
            }
            state.busy.set(false);
        });
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Edit Post"</h2>

                    <label for="edit-post-title">"Title"</label>
                    <input
                        id="edit-post-title"
                        prop:value=title
                        on:input=move |ev| {
                            state.manager.update(|s| s.set_edit_title(event_target_value(&ev)))
                        }
                    />
                    <FieldError message=title_error />

                    <label for="edit-post-content">"Content"</label>
                    <textarea
                        id="edit-post-content"
                        rows="4"
                        prop:value=content
                        on:input=move |ev| {
                            state.manager.update(|s| s.set_edit_content(event_target_value(&ev)))
                        }
                    ></textarea>
                    <FieldError message=content_error />

                    <input
                        id="edit-post-image-upload"
                        type="file"
                        accept="image/*"
                        on:change=move |ev| files::select_from_event(state, &ev)
                    />
                    <ImagePreview state=state />

                    <div class="modal-actions">
                        <button class="secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button
                            id="update-post-btn"
                            on:click=on_update
                            disabled=move || state.busy.get()
                        >
                            "Update"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
