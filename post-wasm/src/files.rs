use anyhow::{Result, anyhow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use post_manager::ImageFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::state::AppState;

/// Обработчик `change` у `<input type="file">`: читает выбранный файл и
/// кладёт его в состояние вместе с превью.
///
/// Чтения не отменяются: если пользователь быстро сменил файл, в состоянии
/// останется тот, что дочитался последним.
pub(crate) fn select_from_event(state: AppState, ev: &leptos::ev::Event) {
    let input: HtmlInputElement = event_target(ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        state.manager.update(|s| s.clear_image());
        return;
    };

    spawn_local(async move {
        let name = file.name();
        let mime = file.type_();

        let bytes = match read_bytes(&file).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(error = %err, file = %name, "error reading selected file");
                return;
            }
        };

        match ImageFile::new(name, bytes, Some(&mime)) {
            Ok(image) => state.manager.update(|s| s.select_image(image)),
            Err(err) => tracing::warn!(error = %err, "ignoring selected file"),
        }
    });
}

async fn read_bytes(file: &File) -> Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| anyhow!("failed to read file: {err:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
