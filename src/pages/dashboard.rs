//! Signed-in user's dashboard: profile summary and, for admins, their posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind the authenticated guard, so a session is present while the
//! page is visible. Admins additionally get a table of the posts they wrote
//! with edit links and a confirmed delete action.
//!
//! ERROR HANDLING
//! ==============
//! A failed delete leaves the row in place and reports through a toast. A
//! 401/403 ends the session, which makes the guard redirect to sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::POSTS_PAGE_SIZE;
use crate::net::api::{self, PostQuery};
use crate::state::loader::{LoadState, Paged, failure_notice};
use crate::state::session::{Session, use_session, use_session_writer};
use crate::state::submit::{DELETE_POST, SubmitState};
use crate::state::toast::use_notifier;
use crate::util::actions::perform;
use crate::util::loader::{load_more, spawn_task, use_cancel_token, use_loader};

fn authored_by(user_id: &str) -> PostQuery {
    PostQuery { user_id: Some(user_id.to_owned()), limit: Some(POSTS_PAGE_SIZE), ..PostQuery::default() }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        <section class="dashboard">
            {move || session.with(|s| s.cloned()).map(|profile| view! { <Profile profile=profile/> })}
            {move || {
                session
                    .with(|s| s.filter(|s| s.is_admin()).map(|s| s.user_id.clone()))
                    .map(|user_id| view! { <AuthoredPosts user_id=user_id/> })
            }}
        </section>
    }
}

#[component]
fn Profile(profile: Session) -> impl IntoView {
    let role = if profile.is_admin() { "Admin" } else { "Reader" };
    view! {
        <div class="dashboard__profile">
            {profile
                .profile_picture
                .clone()
                .map(|src| view! { <img class="dashboard__avatar" src=src alt="profile picture"/> })}
            <h1>{format!("@{}", profile.username)}</h1>
            <p>{profile.email.clone()}</p>
            <span class="dashboard__role">{role}</span>
        </div>
    }
}

#[component]
fn AuthoredPosts(user_id: String) -> impl IntoView {
    let writer = use_session_writer();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let key = user_id.clone();
    let posts = use_loader(
        move || key.clone(),
        |user_id: String| async move {
            api::fetch_posts(&authored_by(&user_id))
                .await
                .map(|envelope| Paged::first(envelope.posts, POSTS_PAGE_SIZE))
        },
    );
    let alive = use_cancel_token();
    let more_for = user_id.clone();
    let on_more = move |_: leptos::ev::MouseEvent| {
        let Some(start) = posts.with_untracked(|m| m.state().payload().map(Paged::next_start)) else {
            return;
        };
        let next = authored_by(&more_for).starting_at(start);
        load_more(posts, alive.clone(), POSTS_PAGE_SIZE, async move {
            api::fetch_posts(&next).await.map(|envelope| envelope.posts)
        });
    };

    let pending_delete = RwSignal::new(None::<String>);
    let submit = RwSignal::new(SubmitState::default());

    let on_confirm_delete = move |_: leptos::ev::MouseEvent| {
        let Some(post_id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        if !submit.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let user_id = user_id.clone();
        let navigate = navigate.clone();
        spawn_task(async move {
            let result = api::delete_post(&post_id, &user_id).await;
            if let Err(e) = &result {
                writer.expire_if_unauthorized(e);
            }
            let Some(completion) = submit.try_update(|s| s.complete(result, &DELETE_POST, |_| None)) else {
                return;
            };
            if completion.value.is_some() {
                posts.try_update(|m| m.map_loaded(|paged| paged.items.retain(|post| post.id != post_id)));
            }
            perform(completion.actions, notifier, &navigate);
        });
    };

    view! {
        <div class="dashboard__posts">
            <h2>"Your posts"</h2>
            {move || match posts.with(|m| m.state().clone()) {
                LoadState::Idle | LoadState::Loading => view! { <p>"Loading..."</p> }.into_any(),
                LoadState::Failed(e) => view! { <p class="dashboard__error">{failure_notice(&e, "Could not load your posts.")}</p> }.into_any(),
                LoadState::Loaded(paged) if paged.items.is_empty() => {
                    view! { <p>"You have no posts yet!"</p> }.into_any()
                }
                LoadState::Loaded(paged) => {
                    let rows = paged
                        .items
                        .into_iter()
                        .map(|post| {
                            let id = post.id.clone();
                            view! {
                                <tr>
                                    <td>{post.created_date().to_owned()}</td>
                                    <td><a href=format!("/post/{}", post.slug)>{post.title.clone()}</a></td>
                                    <td>{post.category.clone()}</td>
                                    <td><a href=format!("/update-post/{}", post.id)>"Edit"</a></td>
                                    <td>
                                        <button
                                            class="dashboard__delete"
                                            type="button"
                                            disabled=move || submit.with(SubmitState::is_busy)
                                            on:click=move |_| pending_delete.set(Some(id.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view();
                    let on_more = on_more.clone();
                    let more = paged.show_more.then(move || {
                        view! {
                            <button class="dashboard__more" type="button" on:click=on_more>
                                "Show more"
                            </button>
                        }
                    });
                    view! {
                        <table class="dashboard__table">
                            <thead>
                                <tr>
                                    <th>"Date updated"</th>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Edit"</th>
                                    <th>"Delete"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                        {more}
                    }
                        .into_any()
                }
            }}
            <Show when=move || pending_delete.with(Option::is_some)>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <p>"Are you sure you want to delete this post?"</p>
                        <div class="dialog__actions">
                            <button class="dialog__confirm" type="button" on:click=on_confirm_delete.clone()>
                                "Yes, I'm sure"
                            </button>
                            <button class="dialog__cancel" type="button" on:click=move |_| pending_delete.set(None)>
                                "No, cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
