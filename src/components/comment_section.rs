//! Comment thread for a single post.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads independently of the post body it sits under, so a slow or failing
//! comment fetch never blocks the article itself. Signed-out readers see the
//! thread plus a prompt to sign in; signed-in readers also get the form.
//!
//! ERROR HANDLING
//! ==============
//! A rejected comment stays in the textarea with an inline error. A 401/403
//! additionally ends the local session, which swaps the form for the prompt.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::Comment;
use crate::state::forms::{COMMENT_MAX_CHARS, CommentForm};
use crate::state::loader::{LoadState, failure_notice};
use crate::state::session::{use_session, use_session_writer};
use crate::state::submit::{POST_COMMENT, SubmitState};
use crate::state::toast::use_notifier;
use crate::util::actions::perform;
use crate::util::loader::{spawn_task, use_loader};
use crate::util::validation::Validate;

use super::field_error::{FieldError, FormError};

#[component]
pub fn CommentSection(post_id: String) -> impl IntoView {
    let session = use_session();
    let writer = use_session_writer();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let key = post_id.clone();
    let comments = use_loader(move || key.clone(), |id: String| async move { api::fetch_post_comments(&id).await });

    let content = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(author) = session.get_untracked() else {
            return;
        };
        let form = CommentForm { content: content.get_untracked() };
        if let Err(errors) = form.validate() {
            submit.update(|s| s.reject_fields(errors));
            return;
        }
        if !submit.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let request = form.to_request(&post_id, &author.user_id);
        let navigate = navigate.clone();
        spawn_task(async move {
            let result = api::create_comment(&request).await;
            if let Err(e) = &result {
                writer.expire_if_unauthorized(e);
            }
            let Some(completion) = submit.try_update(|s| s.complete(result, &POST_COMMENT, |_| None)) else {
                return;
            };
            if let Some(comment) = completion.value {
                comments.try_update(|m| m.map_loaded(|list| list.insert(0, comment)));
                content.try_set(String::new());
            }
            perform(completion.actions, notifier, &navigate);
        });
    };

    view! {
        <section class="comments">
            <Show
                when=move || session.is_signed_in()
                fallback=|| view! {
                    <p class="comments__prompt">
                        "You must be signed in to comment. "
                        <a href="/sign-in">"Sign in"</a>
                    </p>
                }
            >
                <p class="comments__author">
                    "Signed in as "
                    {move || session.with(|s| s.map(|s| format!("@{}", s.username)).unwrap_or_default())}
                </p>
                <form class="comments__form" on:submit=on_submit.clone()>
                    <textarea
                        class="comments__input"
                        placeholder="Add a comment..."
                        maxlength=COMMENT_MAX_CHARS.to_string()
                        rows="3"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <FieldError submit=submit field="content"/>
                    <div class="comments__footer">
                        <span class="comments__remaining">
                            {move || {
                                let left = content.with(|c| CommentForm { content: c.clone() }.remaining_chars());
                                format!("{left} characters remaining")
                            }}
                        </span>
                        <button type="submit" disabled=move || submit.with(SubmitState::is_busy)>
                            "Submit"
                        </button>
                    </div>
                    <FormError submit=submit/>
                </form>
            </Show>
            {move || comments.with(|m| match m.state() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="comments__status">"Loading comments..."</p> }.into_any()
                }
                LoadState::Failed(e) => {
                    view! { <p class="comments__status comments__status--error">{failure_notice(e, "Could not load comments.")}</p> }
                        .into_any()
                }
                LoadState::Loaded(list) if list.is_empty() => {
                    view! { <p class="comments__status">"No comments yet!"</p> }.into_any()
                }
                LoadState::Loaded(list) => {
                    let count = list.len();
                    let items = list.iter().cloned().map(|comment| view! { <CommentItem comment=comment/> }).collect_view();
                    view! {
                        <p class="comments__count">"Comments " <span>{count}</span></p>
                        <ul class="comments__list">{items}</ul>
                    }
                        .into_any()
                }
            })}
        </section>
    }
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let date = comment.created_date().to_owned();
    view! {
        <li class="comment">
            <p class="comment__content">{comment.content}</p>
            <p class="comment__meta">
                <span>{date}</span>
                <span>{format!("{} likes", comment.number_of_likes)}</span>
            </p>
        </li>
    }
}
