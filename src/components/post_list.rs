//! Loader-backed grid of post cards with an optional "show more" control.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::loader::{LoadMachine, LoadState, Paged, failure_notice};

use super::post_card::PostCard;

#[component]
pub fn PostList(
    posts: RwSignal<LoadMachine<Paged<Post>>>,
    #[prop(optional)] on_more: Option<Callback<()>>,
    #[prop(default = "No posts found.")] empty: &'static str,
) -> impl IntoView {
    move || {
        posts.with(|m| match m.state() {
            LoadState::Idle | LoadState::Loading => view! { <p class="post-list__status">"Loading..."</p> }.into_any(),
            LoadState::Failed(e) => {
                view! { <p class="post-list__status post-list__status--error">{failure_notice(e, "Could not load posts.")}</p> }
                    .into_any()
            }
            LoadState::Loaded(paged) if paged.items.is_empty() => {
                view! { <p class="post-list__status">{empty}</p> }.into_any()
            }
            LoadState::Loaded(paged) => {
                let cards = paged.items.iter().cloned().map(|post| view! { <PostCard post=post/> }).collect_view();
                let more = on_more.filter(|_| paged.show_more).map(|on_more| {
                    view! {
                        <button class="post-list__more" type="button" on:click=move |_| on_more.run(())>
                            "Show more"
                        </button>
                    }
                });
                view! {
                    <div class="post-list">{cards}</div>
                    {more}
                }
                    .into_any()
            }
        })
    }
}
