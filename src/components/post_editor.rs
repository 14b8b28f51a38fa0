//! Authoring form shared by the create and update post pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both admin pages run the same submission flow; they differ only in the
//! endpoint called and the toast wording. A successful save navigates to the
//! post's public page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, ApiError};
use crate::net::types::{Post, PostDraft};
use crate::state::forms::{CATEGORIES, PostForm};
use crate::state::session::{use_session, use_session_writer};
use crate::state::submit::{CREATE_POST, SubmitState, UPDATE_POST};
use crate::state::toast::use_notifier;
use crate::util::actions::perform;
use crate::util::loader::spawn_task;
use crate::util::validation::Validate;

use super::field_error::{FieldError, FormError};

/// Which backend operation a save performs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorTarget {
    Create,
    Update { post_id: String },
}

impl EditorTarget {
    fn button_label(&self) -> &'static str {
        match self {
            Self::Create => "Publish",
            Self::Update { .. } => "Update post",
        }
    }
}

async fn save(target: EditorTarget, user_id: String, draft: PostDraft) -> Result<Post, ApiError> {
    match target {
        EditorTarget::Create => api::create_post(&draft).await,
        EditorTarget::Update { post_id } => api::update_post(&post_id, &user_id, &draft).await,
    }
}

#[component]
pub fn PostEditor(initial: PostForm, target: EditorTarget) -> impl IntoView {
    let session = use_session();
    let writer = use_session_writer();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let title = RwSignal::new(initial.title);
    let category = RwSignal::new(initial.category);
    let content = RwSignal::new(initial.content);
    let image = RwSignal::new(initial.image);
    let submit = RwSignal::new(SubmitState::default());
    let label = target.button_label();
    let flow = match target {
        EditorTarget::Create => CREATE_POST,
        EditorTarget::Update { .. } => UPDATE_POST,
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(author) = session.get_untracked() else {
            return;
        };
        let form = PostForm {
            title: title.get_untracked(),
            category: category.get_untracked(),
            content: content.get_untracked(),
            image: image.get_untracked(),
        };
        if let Err(errors) = form.validate() {
            submit.update(|s| s.reject_fields(errors));
            return;
        }
        if !submit.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let request = save(target.clone(), author.user_id, form.to_draft());
        let navigate = navigate.clone();
        spawn_task(async move {
            let result = request.await;
            if let Err(e) = &result {
                writer.expire_if_unauthorized(e);
            }
            let redirect = |post: &Post| Some(format!("/post/{}", post.slug));
            let Some(completion) = submit.try_update(|s| s.complete(result, &flow, redirect)) else {
                return;
            };
            perform(completion.actions, notifier, &navigate);
        });
    };

    view! {
        <form class="post-editor" on:submit=on_submit>
            <div class="post-editor__row">
                <input
                    class="post-editor__title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <select
                    class="post-editor__category"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {CATEGORIES
                        .iter()
                        .map(|(value, name)| view! { <option value=*value>{*name}</option> })
                        .collect_view()}
                </select>
            </div>
            <FieldError submit=submit field="title"/>
            <FieldError submit=submit field="category"/>
            <input
                class="post-editor__image"
                type="url"
                placeholder="Cover image URL (optional)"
                prop:value=move || image.get()
                on:input=move |ev| image.set(event_target_value(&ev))
            />
            <FieldError submit=submit field="image"/>
            <textarea
                class="post-editor__content"
                rows="16"
                placeholder="Write something..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <FieldError submit=submit field="content"/>
            <button class="post-editor__submit" type="submit" disabled=move || submit.with(SubmitState::is_busy)>
                {move || if submit.with(SubmitState::is_busy) { "Saving..." } else { label }}
            </button>
            <FormError submit=submit/>
        </form>
    }
}
