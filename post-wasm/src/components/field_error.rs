use leptos::prelude::*;

#[component]
pub(crate) fn FieldError(message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="field-error">{move || message.get()}</p>
        </Show>
    }
}
