//! Sign-in page.
//!
//! On success the returned user becomes the active session (persisted across
//! reloads) before navigating home, so guarded pages render immediately.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::{FieldError, FormError};
use crate::net::api;
use crate::state::forms::SignInForm;
use crate::state::session::{Session, use_session_writer};
use crate::state::submit::{SIGN_IN, SubmitState};
use crate::state::toast::use_notifier;
use crate::util::actions::perform;
use crate::util::loader::spawn_task;
use crate::util::time::now_ms;
use crate::util::validation::Validate;

#[component]
pub fn SignInPage() -> impl IntoView {
    let writer = use_session_writer();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignInForm { email: email.get_untracked(), password: password.get_untracked() };
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
            let result = api::signin(&request).await;
            let Some(completion) = submit.try_update(|s| s.complete(result, &SIGN_IN, |_| Some("/".to_owned()))) else {
                return;
            };
            if let Some(user) = completion.value {
                leptos::logging::log!("signed in as {}", user.username);
                writer.sign_in(Session::from_user(user, now_ms()));
            }
            perform(completion.actions, notifier, &navigate);
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="sign-in-email">"Email"</label>
                    <input
                        id="sign-in-email"
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError submit=submit field="email"/>
                    <label class="auth-form__label" for="sign-in-password">"Password"</label>
                    <input
                        id="sign-in-password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError submit=submit field="password"/>
                    <button class="auth-form__submit" type="submit" disabled=move || submit.with(SubmitState::is_busy)>
                        {move || if submit.with(SubmitState::is_busy) { "Loading..." } else { "Sign In" }}
                    </button>
                    <FormError submit=submit/>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/sign-up">"Sign Up"</a>
                </p>
            </div>
        </section>
    }
}
