use super::*;
use crate::util::validation::{FieldSpec, Rule, validate_fields};

fn to_sign_in(_: &()) -> Option<String> {
    Some("/sign-in".to_owned())
}

// =============================================================
// In-flight gating
// =============================================================

#[test]
fn begin_disables_until_complete() {
    let mut state = SubmitState::default();
    assert!(!state.is_busy());
    assert!(state.begin());
    assert!(state.is_busy());
    assert!(!state.begin(), "duplicate submission must be refused");
    state.complete(Ok(()), &SIGN_UP, to_sign_in);
    assert!(!state.is_busy());
    assert!(state.begin());
}

// =============================================================
// Sign-up round trip
// =============================================================

#[test]
fn sign_up_created_navigates_to_sign_in_with_one_toast() {
    let mut state = SubmitState::default();
    state.begin();
    let done = state.complete(Ok(()), &SIGN_UP, to_sign_in);

    assert_eq!(done.value, Some(()));
    assert_eq!(
        done.actions,
        vec![
            UiAction::Toast(ToastKind::Success, "Sign up successful!".to_owned()),
            UiAction::Navigate("/sign-in".to_owned()),
        ]
    );
    let toasts = done.actions.iter().filter(|a| matches!(a, UiAction::Toast(..))).count();
    assert_eq!(toasts, 1);
    assert!(state.error().is_none());
}

#[test]
fn sign_up_rejected_stays_and_shows_backend_message() {
    let mut state = SubmitState::default();
    assert!(state.begin());
    assert!(state.is_busy());

    let rejected: Result<(), ApiError> =
        Err(ApiError::Rejected { status: 400, message: Some("Email in use".to_owned()) });
    let done = state.complete(rejected, &SIGN_UP, to_sign_in);

    assert!(!state.is_busy(), "submit control re-enabled");
    assert_eq!(state.error(), Some("Email in use"));
    assert!(done.value.is_none());
    assert_eq!(done.actions, vec![UiAction::Toast(ToastKind::Error, "Email in use".to_owned())]);
    assert!(!done.actions.iter().any(|a| matches!(a, UiAction::Navigate(_))));
}

#[test]
fn rejection_without_message_uses_flow_fallback() {
    let mut state = SubmitState::default();
    state.begin();
    let done = state.complete::<()>(Err(ApiError::Rejected { status: 500, message: None }), &SIGN_UP, to_sign_in);
    assert_eq!(state.error(), Some("Sign up failed! Please try again."));
    assert_eq!(done.error, Some(ApiError::Rejected { status: 500, message: None }));
}

#[test]
fn transport_failure_uses_fixed_fallback() {
    let mut state = SubmitState::default();
    state.begin();
    state.complete::<()>(Err(ApiError::Transport("connection refused".to_owned())), &SIGN_IN, |_| None);
    assert_eq!(state.error(), Some(TRANSPORT_FALLBACK));
}

#[test]
fn flow_without_toast_or_redirect_has_no_actions() {
    let mut state = SubmitState::default();
    state.begin();
    let done = state.complete(Ok(5), &POST_COMMENT, |_| None);
    assert!(done.actions.is_empty());
    assert_eq!(done.value, Some(5));
}

#[test]
fn redirect_can_depend_on_created_value() {
    let mut state = SubmitState::default();
    state.begin();
    let done = state.complete(Ok("my-slug"), &CREATE_POST, |slug| Some(format!("/post/{slug}")));
    assert!(done.actions.contains(&UiAction::Navigate("/post/my-slug".to_owned())));
}

// =============================================================
// Validation errors
// =============================================================

#[test]
fn field_errors_are_cleared_by_next_submission() {
    let schema = [FieldSpec { name: "username", rules: &[(Rule::MinLen(2), "too short")] }];
    let mut state = SubmitState::default();
    state.reject_fields(validate_fields(&schema, |_| "a").unwrap_err());
    assert_eq!(state.field_error("username"), Some("too short"));
    assert!(!state.is_busy());

    assert!(state.begin());
    assert_eq!(state.field_error("username"), None);
}
