//! Form submission lifecycle.
//!
//! DESIGN
//! ======
//! [`SubmitState`] is the per-form record of "request in flight" plus the
//! last inline error. `begin` refuses a second submission while one is
//! pending, which is what keeps the submit button disabled. `complete` turns
//! the backend result into the UI actions the page performs (toast, navigate)
//! and always re-enables the form. Field values are never touched here, so a
//! failed submission leaves the user's input in place.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::net::api::ApiError;
use crate::state::toast::ToastKind;
use crate::util::validation::FieldErrors;

/// Message shown when the backend gave no reason (network failures included).
pub const TRANSPORT_FALLBACK: &str = "Something went wrong! Please try again.";

/// Static description of one submission flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flow {
    pub success_toast: Option<&'static str>,
    /// Used when the backend rejects without a `message`.
    pub failure_fallback: &'static str,
}

pub const SIGN_UP: Flow =
    Flow { success_toast: Some("Sign up successful!"), failure_fallback: "Sign up failed! Please try again." };

pub const SIGN_IN: Flow =
    Flow { success_toast: Some("Signed in successfully!"), failure_fallback: "Sign in failed! Please try again." };

pub const CREATE_POST: Flow =
    Flow { success_toast: Some("Post published."), failure_fallback: "Could not publish the post." };

pub const UPDATE_POST: Flow =
    Flow { success_toast: Some("Post updated."), failure_fallback: "Could not update the post." };

pub const DELETE_POST: Flow = Flow { success_toast: Some("Post deleted."), failure_fallback: "Could not delete the post." };

pub const POST_COMMENT: Flow = Flow { success_toast: None, failure_fallback: "Could not post your comment." };

/// Something the page does once a submission completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    Toast(ToastKind, String),
    Navigate(String),
}

/// Result of [`SubmitState::complete`].
#[derive(Clone, Debug, PartialEq)]
pub struct Completion<T> {
    pub value: Option<T>,
    pub error: Option<ApiError>,
    pub actions: Vec<UiAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    in_flight: bool,
    error: Option<String>,
    field_errors: FieldErrors,
}

impl SubmitState {
    /// Submit control is disabled while this holds.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Inline error from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field_error(&self, field: &str) -> Option<&'static str> {
        self.field_errors.get(field)
    }

    /// Record local validation failures; no request is started.
    pub fn reject_fields(&mut self, errors: FieldErrors) {
        self.field_errors = errors;
        self.error = None;
    }

    /// Start a submission. Returns `false` if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        self.field_errors = FieldErrors::default();
        true
    }

    /// Finish the in-flight submission and derive the follow-up actions.
    pub fn complete<T>(
        &mut self,
        result: Result<T, ApiError>,
        flow: &Flow,
        redirect: impl FnOnce(&T) -> Option<String>,
    ) -> Completion<T> {
        self.in_flight = false;
        match result {
            Ok(value) => {
                self.error = None;
                let mut actions = Vec::new();
                if let Some(toast) = flow.success_toast {
                    actions.push(UiAction::Toast(ToastKind::Success, toast.to_owned()));
                }
                if let Some(path) = redirect(&value) {
                    actions.push(UiAction::Navigate(path));
                }
                Completion { value: Some(value), error: None, actions }
            }
            Err(error) => {
                let message = failure_message(&error, flow);
                self.error = Some(message.clone());
                Completion { value: None, error: Some(error), actions: vec![UiAction::Toast(ToastKind::Error, message)] }
            }
        }
    }
}

/// User-facing text for a failed submission.
pub fn failure_message(error: &ApiError, flow: &Flow) -> String {
    match error {
        ApiError::Transport(_) => TRANSPORT_FALLBACK.to_owned(),
        _ => error.user_message(flow.failure_fallback),
    }
}
