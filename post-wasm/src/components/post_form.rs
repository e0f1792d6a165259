use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use post_manager::{ManagerState, actions};

use crate::components::field_error::FieldError;
use crate::components::image_preview::ImagePreview;
use crate::files;
use crate::state::{AppState, client};

#[component]
pub(crate) fn PostForm(state: AppState) -> impl IntoView {
    let editing = move || state.manager.with(|s| s.edit_draft().is_some());

    let on_create = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submission = match state.manager.try_update(ManagerState::begin_create) {
            Some(Ok(submission)) => submission,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "create rejected");
                return;
            }
            None => return,
        };

        state.busy.set(true);
        spawn_local(async move {
            if let Ok(committed) = actions::submit(&client(), submission).await {
                state.manager.update(|s| s.apply_created(committed.saved));
                state.hide_snackbar_later();
            }
            state.busy.set(false);
        });
    };

    // Ошибки общие для формы и окна редактирования; пока окно открыто,
    // они показываются там.
    let title_error = Signal::derive(move || {
        state.manager.with(|s| match s.edit_draft() {
            Some(_) => String::new(),
            None => s.errors().title.clone(),
        })
    });
    let content_error = Signal::derive(move || {
        state.manager.with(|s| match s.edit_draft() {
            Some(_) => String::new(),
            None => s.errors().content.clone(),
        })
    });

    view! {
        <form class="post-form" on:submit=on_create>
            <label for="post-title">"Title"</label>
            <input
                id="post-title"
                prop:value=move || state.manager.with(|s| s.new_draft().title.clone())
                on:input=move |ev| {
                    state.manager.update(|s| s.set_new_title(event_target_value(&ev)))
                }
            />
            <FieldError message=title_error />

            <label for="post-content">"Content"</label>
            <textarea
                id="post-content"
                rows="4"
                prop:value=move || state.manager.with(|s| s.new_draft().content.clone())
                on:input=move |ev| {
                    state.manager.update(|s| s.set_new_content(event_target_value(&ev)))
                }
            ></textarea>
            <FieldError message=content_error />

            <input
                id="post-image-upload"
                type="file"
                accept="image/*"
                on:change=move |ev| files::select_from_event(state, &ev)
            />
            <Show when=move || !editing()>
                <ImagePreview state=state />
            </Show>

            <button id="create-post-btn" type="submit" disabled=move || state.busy.get()>
                "Create Post"
            </button>
        </form>
    }
}
