//! Front page: introduction plus the most recent posts.

use leptos::prelude::*;

use crate::components::post_list::PostList;
use crate::config::POSTS_PAGE_SIZE;
use crate::net::api::{self, PostQuery};
use crate::state::loader::Paged;
use crate::util::loader::{load_more, use_cancel_token, use_loader};

fn latest() -> PostQuery {
    PostQuery::recent(POSTS_PAGE_SIZE)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let posts = use_loader(
        || (),
        |()| async { api::fetch_posts(&latest()).await.map(|envelope| Paged::first(envelope.posts, POSTS_PAGE_SIZE)) },
    );
    let alive = use_cancel_token();
    let on_more = Callback::new(move |()| {
        let Some(start) = posts.with_untracked(|m| m.state().payload().map(Paged::next_start)) else {
            return;
        };
        let query = latest().starting_at(start);
        load_more(posts, alive.clone(), POSTS_PAGE_SIZE, async move {
            api::fetch_posts(&query).await.map(|envelope| envelope.posts)
        });
    });

    view! {
        <section class="home">
            <div class="home__hero">
                <h1>"Welcome to Daily Updates"</h1>
                <p>"Fresh stories from around the world, every day."</p>
                <a class="home__search-link" href="/search">"Browse all posts"</a>
            </div>
            <h2 class="home__heading">"Recent posts"</h2>
            <PostList posts=posts on_more=on_more/>
        </section>
    }
}
