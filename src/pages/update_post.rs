//! Admin page for editing an existing post.
//!
//! The post is loaded by the `:post_id` route parameter and the editor is
//! only mounted once it arrives, so the form always starts from the stored
//! values.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::post_editor::{EditorTarget, PostEditor};
use crate::net::api;
use crate::net::types::PostDraft;
use crate::state::forms::PostForm;
use crate::state::loader::{LoadState, failure_notice};
use crate::util::loader::use_loader;

#[component]
pub fn UpdatePostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.read().get("post_id").unwrap_or_default();
    let post = use_loader(post_id, |id: String| async move { api::fetch_post_by_id(&id).await });

    view! {
        <section class="editor-page">
            <h1>"Update post"</h1>
            {move || match post.with(|m| m.state().clone()) {
                LoadState::Idle | LoadState::Loading => view! { <p class="editor-page__status">"Loading..."</p> }.into_any(),
                LoadState::Failed(e) => {
                    view! { <p class="editor-page__status editor-page__status--error">{failure_notice(&e, "An error occurred while loading the post.")}</p> }
                        .into_any()
                }
                LoadState::Loaded(post) => {
                    let initial = PostForm::from(PostDraft::from(&post));
                    let target = EditorTarget::Update { post_id: post.id };
                    view! { <PostEditor initial=initial target=target/> }.into_any()
                }
            }}
        </section>
    }
}
