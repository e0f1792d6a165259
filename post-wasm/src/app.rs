use leptos::prelude::*;
use leptos::task::spawn_local;
use post_manager::actions;

use crate::components::delete_confirm::DeleteConfirm;
use crate::components::edit_modal::EditModal;
use crate::components::notification::Notification;
use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::state::{AppState, client};

fn load_posts(state: AppState) {
    state.busy.set(true);

    spawn_local(async move {
        // ошибка уже в логе; коллекция остаётся пустой
        if let Ok(posts) = actions::fetch_posts(&client()).await {
            state.manager.update(|s| s.set_posts(posts));
        }
        state.busy.set(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    load_posts(state);

    view! {
        <main class="page">
            <section class="container">
                <h1>"Blog"</h1>

                <PostForm state=state />
                <PostList state=state />

                <EditModal state=state />
                <DeleteConfirm state=state />
                <Notification state=state />
            </section>
        </main>
    }
}
