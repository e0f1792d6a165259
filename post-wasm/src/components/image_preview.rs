use leptos::prelude::*;

use crate::state::AppState;

/// Превью выбранного файла или текущего изображения редактируемого поста.
#[component]
pub(crate) fn ImagePreview(state: AppState) -> impl IntoView {
    let preview = move || {
        state
            .manager
            .with(|s| s.image_preview().map(str::to_string))
    };

    view! {
        <Show when=move || preview().is_some()>
            <div class="image-preview">
                <img src=move || preview().unwrap_or_default() alt="Preview" />
            </div>
        </Show>
    }
}
