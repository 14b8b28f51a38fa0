//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private and admin routes apply identical redirect behavior: anything short
//! of the required capability goes back to `/sign-in` without an error
//! message. A signed-in user without the admin role is treated exactly like a
//! signed-out one on admin routes; there is no separate "forbidden" state.
//!
//! The decision reads only the already-loaded session and never calls the
//! backend; the backend still enforces access on every request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionReader};

/// Where every failed guard sends the user.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Capability a protected route needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Authenticated,
    Admin,
}

/// Outcome of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Whether `session` satisfies `requirement`.
pub fn can_access(session: Option<&Session>, requirement: Requirement) -> bool {
    match (session, requirement) {
        (None, _) => false,
        (Some(_), Requirement::Authenticated) => true,
        (Some(session), Requirement::Admin) => session.is_admin(),
    }
}

pub fn decide(session: Option<&Session>, requirement: Requirement) -> GuardDecision {
    if can_access(session, requirement) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(SIGN_IN_PATH)
    }
}

/// Navigate away whenever the session stops satisfying `requirement`.
///
/// Re-evaluates on every session change, so signing out (or an expired
/// session) while on a protected page also redirects.
pub fn install_guard_redirect<F>(session: SessionReader, requirement: Requirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = session.with(|s| decide(s, requirement)) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
