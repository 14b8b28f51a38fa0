use super::*;
use crate::state::session::Role;

fn session(role: Role) -> Session {
    Session {
        user_id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        profile_picture: None,
        issued_at_ms: 0.0,
    }
}

#[test]
fn no_session_is_redirected_from_private_routes() {
    assert!(!can_access(None, Requirement::Authenticated));
    assert_eq!(decide(None, Requirement::Authenticated), GuardDecision::Redirect("/sign-in"));
}

#[test]
fn no_session_is_redirected_from_admin_routes() {
    assert_eq!(decide(None, Requirement::Admin), GuardDecision::Redirect("/sign-in"));
}

#[test]
fn normal_user_is_redirected_from_admin_routes() {
    let normal = session(Role::Normal);
    assert!(!can_access(Some(&normal), Requirement::Admin));
    assert_eq!(decide(Some(&normal), Requirement::Admin), GuardDecision::Redirect(SIGN_IN_PATH));
}

#[test]
fn admin_user_renders_admin_routes() {
    let admin = session(Role::Admin);
    assert_eq!(decide(Some(&admin), Requirement::Admin), GuardDecision::Render);
}

#[test]
fn any_signed_in_user_renders_private_routes() {
    for role in [Role::Normal, Role::Admin] {
        let user = session(role);
        assert_eq!(decide(Some(&user), Requirement::Authenticated), GuardDecision::Render);
    }
}

#[test]
fn guard_truth_table_renders_iff_requirement_met() {
    let cases = [
        (None, Requirement::Authenticated, false),
        (None, Requirement::Admin, false),
        (Some(Role::Normal), Requirement::Authenticated, true),
        (Some(Role::Normal), Requirement::Admin, false),
        (Some(Role::Admin), Requirement::Authenticated, true),
        (Some(Role::Admin), Requirement::Admin, true),
    ];
    for (role, requirement, expected) in cases {
        let held = role.map(session);
        let decision = decide(held.as_ref(), requirement);
        assert_eq!(decision == GuardDecision::Render, expected, "{role:?} / {requirement:?}");
        if !expected {
            assert_eq!(decision, GuardDecision::Redirect("/sign-in"));
        }
    }
}
