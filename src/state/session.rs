//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! The session lives in one signal split into a read half and a write half.
//! Guards and pages receive [`SessionReader`] from context and cannot mutate
//! it; the sign-in, sign-out, and unauthorized-response paths hold
//! [`SessionWriter`]. The write half also mirrors the session into
//! `localStorage` so a reload keeps the user signed in until the backend says
//! otherwise.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::api::ApiError;
use crate::net::types::User;
use crate::util::storage;

const STORAGE_KEY: &str = "dailyupdates_session";

/// Capability level of the signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Normal,
    Admin,
}

/// Client-held record of who is signed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub profile_picture: Option<String>,
    /// Wall-clock milliseconds when the backend accepted the credentials.
    pub issued_at_ms: f64,
}

impl Session {
    /// Build a session from the sign-in response body.
    pub fn from_user(user: User, issued_at_ms: f64) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role: if user.is_admin { Role::Admin } else { Role::Normal },
            profile_picture: user.profile_picture,
            issued_at_ms,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Read-only view of the session, handed to guards and pages.
#[derive(Clone, Copy)]
pub struct SessionReader(ReadSignal<Option<Session>>);

impl SessionReader {
    /// Current session (tracked).
    pub fn get(&self) -> Option<Session> {
        self.0.get()
    }

    /// Borrow the current session without cloning it (tracked).
    pub fn with<R>(&self, f: impl FnOnce(Option<&Session>) -> R) -> R {
        self.0.with(|session| f(session.as_ref()))
    }

    pub fn get_untracked(&self) -> Option<Session> {
        self.0.get_untracked()
    }

    pub fn is_signed_in(&self) -> bool {
        self.with(|session| session.is_some())
    }
}

/// Write access to the session, held only by auth flows.
#[derive(Clone, Copy)]
pub struct SessionWriter(WriteSignal<Option<Session>>);

impl SessionWriter {
    /// Replace the active session; any previous one is dropped.
    pub fn sign_in(&self, session: Session) {
        storage::save_json(STORAGE_KEY, &session);
        self.0.set(Some(session));
    }

    pub fn clear(&self) {
        storage::remove(STORAGE_KEY);
        self.0.set(None);
    }

    /// Clear the session when a backend call reports it is no longer valid.
    ///
    /// Returns `true` if the session was cleared.
    pub fn expire_if_unauthorized(&self, error: &ApiError) -> bool {
        if should_expire(error) {
            leptos::logging::log!("session expired by backend response: {error}");
            self.clear();
            true
        } else {
            false
        }
    }
}

/// Whether `error` means the held session is no longer accepted.
pub fn should_expire(error: &ApiError) -> bool {
    error.is_unauthorized()
}

/// Create the session signal, restore any persisted session, and provide both
/// halves as context.
pub fn provide_session() -> (SessionReader, SessionWriter) {
    let (read, write) = signal(storage::load_json::<Session>(STORAGE_KEY));
    let reader = SessionReader(read);
    let writer = SessionWriter(write);
    provide_context(reader);
    provide_context(writer);
    (reader, writer)
}

pub fn use_session() -> SessionReader {
    expect_context::<SessionReader>()
}

pub fn use_session_writer() -> SessionWriter {
    expect_context::<SessionWriter>()
}
