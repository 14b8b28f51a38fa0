use super::*;

fn make_user(is_admin: bool) -> User {
    User {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_admin,
        profile_picture: None,
    }
}

#[test]
fn session_from_normal_user_has_normal_role() {
    let session = Session::from_user(make_user(false), 1_000.0);
    assert_eq!(session.user_id, "u-1");
    assert_eq!(session.username, "alice");
    assert_eq!(session.role, Role::Normal);
    assert!(!session.is_admin());
    assert!((session.issued_at_ms - 1_000.0).abs() < f64::EPSILON);
}

#[test]
fn session_from_admin_user_has_admin_role() {
    let session = Session::from_user(make_user(true), 0.0);
    assert_eq!(session.role, Role::Admin);
    assert!(session.is_admin());
}

#[test]
fn role_default_is_normal() {
    assert_eq!(Role::default(), Role::Normal);
}

#[test]
fn session_persists_as_json() {
    let session = Session::from_user(make_user(true), 42.0);
    let raw = serde_json::to_string(&session).unwrap();
    assert!(raw.contains("\"role\":\"admin\""));
    let restored: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn only_unauthorized_errors_expire_the_session() {
    assert!(should_expire(&ApiError::Unauthorized { status: 401, message: None }));
    assert!(!should_expire(&ApiError::Rejected { status: 500, message: None }));
    assert!(!should_expire(&ApiError::Transport("offline".to_owned())));
    assert!(!should_expire(&ApiError::NotFound));
}

#[test]
fn reader_and_writer_share_one_session() {
    let owner = Owner::new();
    owner.with(|| {
        let (reader, writer) = provide_session();
        assert!(reader.get_untracked().is_none());

        writer.sign_in(Session::from_user(make_user(false), 1.0));
        assert_eq!(reader.get_untracked().map(|s| s.username), Some("alice".to_owned()));

        let expired = writer.expire_if_unauthorized(&ApiError::Unauthorized { status: 401, message: None });
        assert!(expired);
        assert!(reader.get_untracked().is_none());
    });
}
