//! Single post view: article body, comments and recent articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent loaders run on this page: the post itself (keyed by the
//! `:slug` route parameter) and the recent-articles strip. Navigating from
//! one post to another reuses the page, so the post loader resets to loading
//! and the previous article's late response is discarded.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_section::CommentSection;
use crate::components::post_card::PostCard;
use crate::net::api;
use crate::net::types::Post;
use crate::pages::search::category_location;
use crate::state::loader::{LoadState, failure_notice};
use crate::util::loader::use_loader;

const RECENT_LIMIT: usize = 3;

#[component]
pub fn PostDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let post = use_loader(slug, |slug: String| async move { api::fetch_post_by_slug(&slug).await });
    let recent = use_loader(|| (), |()| async { api::fetch_recent_posts(RECENT_LIMIT).await });

    view! {
        <main class="post-page">
            {move || match post.with(|m| m.state().clone()) {
                LoadState::Idle | LoadState::Loading => view! { <p class="post-page__status">"Loading..."</p> }.into_any(),
                LoadState::Failed(e) => {
                    view! {
                        <p class="post-page__status post-page__status--error">
                            {failure_notice(&e, "An error occurred while loading the post.")}
                        </p>
                    }
                        .into_any()
                }
                LoadState::Loaded(post) => view! { <Article post=post/> }.into_any(),
            }}
            <section class="post-page__recent">
                <h2>"Recent articles"</h2>
                {move || recent.with(|m| match m.state() {
                    LoadState::Loaded(posts) => posts
                        .iter()
                        .cloned()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect_view()
                        .into_any(),
                    LoadState::Failed(e) => {
                        leptos::logging::warn!("recent articles failed: {e}");
                        ().into_any()
                    }
                    LoadState::Idle | LoadState::Loading => ().into_any(),
                })}
            </section>
        </main>
    }
}

#[component]
fn Article(post: Post) -> impl IntoView {
    let minutes = post.reading_minutes();
    let date = post.created_date().to_owned();
    let category_href = category_location(&post.category);

    view! {
        <article class="post">
            <h1 class="post__title">{post.title.clone()}</h1>
            <a class="post__category" href=category_href>{post.category.clone()}</a>
            <img class="post__image" src=post.image.clone() alt=post.title.clone()/>
            <div class="post__meta">
                <span>{date}</span>
                <span>{format!("{minutes} mins read")}</span>
            </div>
            <div class="post__content" inner_html=post.content.clone()></div>
        </article>
        <CommentSection post_id=post.id/>
    }
}
