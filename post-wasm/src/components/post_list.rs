use leptos::prelude::*;
use post_client::Post;
use post_manager::ManagerState;

use crate::state::{AppState, asset_url};

fn card_key(post: &Post) -> (Option<i64>, String, String, Option<String>) {
    (
        post.id,
        post.title.clone(),
        post.content.clone(),
        post.image_url.clone(),
    )
}

#[component]
pub(crate) fn PostList(state: AppState) -> impl IntoView {
    let visible_posts = move || state.manager.with(|s| s.visible_posts().to_vec());
    let pages = move || (1..=state.manager.with(ManagerState::page_count)).collect::<Vec<_>>();
    let show_posts = move || state.manager.with(ManagerState::show_posts);

    view! {
        <h2>"Posts"</h2>

        <button
            class="toggle-posts"
            on:click=move |_| state.manager.update(ManagerState::toggle_posts_visibility)
        >
            {move || if show_posts() { "Hide Posts" } else { "Show Posts" }}
        </button>

        <Show when=show_posts>
            <div class="post-grid">
                <For
                    each=visible_posts
                    key=card_key
                    children=move |post: Post| view! { <PostCard state=state post=post /> }
                />
            </div>
        </Show>

        <nav class="pagination">
            <For
                each=pages
                key=|page| *page
                children=move |page: usize| {
                    view! {
                        <button
                            class:active=move || state.manager.with(|s| s.page() == page)
                            on:click=move |_| state.manager.update(|s| s.set_page(page))
                        >
                            {page}
                        </button>
                    }
                }
            />
        </nav>
    }
}

#[component]
fn PostCard(state: AppState, post: Post) -> impl IntoView {
    let id = post.id.unwrap_or_default();
    let image = post.image().map(|path| {
        view! {
            <div class="image-container">
                <img src=asset_url(path) alt="Post" />
            </div>
        }
    });

    let on_delete = {
        let post = post.clone();
        move |_| state.manager.update(|s| s.request_delete(&post))
    };
    let on_edit = {
        let post = post.clone();
        move |_| {
            let preview = post.image().map(asset_url);
            state.manager.update(|s| s.open_edit(&post, preview));
        }
    };

    view! {
        <article class="post-card">
            <h3>{post.title.clone()}</h3>
            <p class="post-content">{post.content.clone()}</p>
            {image}
            <div class="post-actions">
                <button
                    id=format!("delete-post-{id}")
                    class="secondary"
                    on:click=on_delete
                    disabled=move || state.busy.get()
                >
                    "Delete"
                </button>
                <button
                    id=format!("edit-post-{id}")
                    on:click=on_edit
                    disabled=move || state.busy.get()
                >
                    "Edit"
                </button>
            </div>
        </article>
    }
}
