//! Card for a post in list views (home, search, recent articles).

use leptos::prelude::*;

use crate::net::types::Post;
use crate::pages::search::category_location;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/post/{}", post.slug);
    let category_href = category_location(&post.category);

    view! {
        <article class="post-card">
            <a class="post-card__image-link" href=href.clone()>
                <img class="post-card__image" src=post.image alt=post.title.clone()/>
            </a>
            <div class="post-card__body">
                <a class="post-card__title" href=href.clone()>{post.title}</a>
                <a class="post-card__category" href=category_href>{post.category}</a>
                <a class="post-card__read" href=href>"Read article"</a>
            </div>
        </article>
    }
}
