//! Top navigation bar with the session summary and sign-out control.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::{Session, use_session, use_session_writer};
use crate::state::toast::use_notifier;
use crate::util::auth::SIGN_IN_PATH;
use crate::util::loader::spawn_task;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let writer = use_session_writer();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let navigate = navigate.clone();
        spawn_task(async move {
            if let Err(e) = api::signout().await {
                leptos::logging::warn!("sign out request failed: {e}");
            }
            // The local session goes regardless of what the backend said.
            writer.clear();
            notifier.success("Signed out.");
            signing_out.try_set(false);
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        });
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">"Daily Updates"</a>
            <nav class="header__nav">
                <a href="/">"Home"</a>
                <a href="/about">"About"</a>
                <a href="/search">"Search"</a>
                <Show when=move || session.with(|s| s.is_some_and(Session::is_admin))>
                    <a href="/create-post">"Write"</a>
                </Show>
            </nav>
            <Show
                when=move || session.is_signed_in()
                fallback=|| view! { <a class="header__sign-in" href="/sign-in">"Sign In"</a> }
            >
                <div class="header__account">
                    <a class="header__user" href="/dashboard">
                        {move || session.with(|s| s.map(|s| format!("@{}", s.username)).unwrap_or_default())}
                    </a>
                    <button
                        class="header__sign-out"
                        type="button"
                        disabled=move || signing_out.get()
                        on:click=on_sign_out.clone()
                    >
                        "Sign Out"
                    </button>
                </div>
            </Show>
        </header>
    }
}
