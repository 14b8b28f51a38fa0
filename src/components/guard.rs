//! Route guard wrapper for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router wraps private and admin pages in [`Guarded`]. The access
//! decision itself lives in `util::auth`; this component only renders or
//! redirects based on it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::{Requirement, can_access, install_guard_redirect};

/// Renders `children` only while the session satisfies `requirement`, and
/// silently navigates to `/sign-in` otherwise.
#[component]
pub fn Guarded(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_guard_redirect(session, requirement, use_navigate());

    view! {
        <Show when=move || session.with(|s| can_access(s, requirement))>
            {children()}
        </Show>
    }
}
