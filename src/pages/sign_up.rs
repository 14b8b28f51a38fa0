//! Account registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Success is exactly HTTP 201 from the backend; the user is sent to the
//! sign-in page with a success toast and is not signed in automatically.
//! Failures keep the entered values so the user can correct and resubmit.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::{FieldError, FormError};
use crate::net::api;
use crate::state::forms::SignUpForm;
use crate::state::submit::{SIGN_UP, SubmitState};
use crate::state::toast::use_notifier;
use crate::util::actions::perform;
use crate::util::auth::SIGN_IN_PATH;
use crate::util::loader::spawn_task;
use crate::util::validation::Validate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignUpForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(errors) = form.validate() {
            submit.update(|s| s.reject_fields(errors));
            return;
        }
        if !submit.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let request = form.to_request();
        let navigate = navigate.clone();
        spawn_task(async move {
            let result = api::signup(&request).await;
            if let Err(e) = &result {
                leptos::logging::warn!("sign up rejected: {e}");
            }
            let Some(completion) = submit.try_update(|s| s.complete(result, &SIGN_UP, |_| Some(SIGN_IN_PATH.to_owned())))
            else {
                return;
            };
            perform(completion.actions, notifier, &navigate);
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="sign-up-username">"Username"</label>
                    <input
                        id="sign-up-username"
                        class="auth-form__input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <FieldError submit=submit field="username"/>
                    <label class="auth-form__label" for="sign-up-email">"Email"</label>
                    <input
                        id="sign-up-email"
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError submit=submit field="email"/>
                    <label class="auth-form__label" for="sign-up-password">"Password"</label>
                    <input
                        id="sign-up-password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError submit=submit field="password"/>
                    <button class="auth-form__submit" type="submit" disabled=move || submit.with(SubmitState::is_busy)>
                        {move || if submit.with(SubmitState::is_busy) { "Loading..." } else { "Sign Up" }}
                    </button>
                    <FormError submit=submit/>
                </form>
                <p class="auth-card__switch">
                    "Have an account? "
                    <a href="/sign-in">"Sign In"</a>
                </p>
            </div>
        </section>
    }
}
