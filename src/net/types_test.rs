use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_post(content: &str) -> Post {
    Post {
        id: "p-1".to_owned(),
        slug: "hello-world".to_owned(),
        title: "Hello World".to_owned(),
        category: "rust".to_owned(),
        content: content.to_owned(),
        image: "https://example.com/cover.png".to_owned(),
        user_id: "u-1".to_owned(),
        created_at: "2024-05-02T10:11:12.000Z".to_owned(),
        updated_at: String::new(),
    }
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_deserializes_backend_field_names() {
    let raw = serde_json::json!({
        "_id": "p-9",
        "userId": "u-2",
        "slug": "first-post",
        "title": "First post",
        "category": "news",
        "content": "<p>hi</p>",
        "image": "https://img",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-02T00:00:00.000Z",
        "__v": 0
    });
    let post: Post = serde_json::from_value(raw).unwrap();
    assert_eq!(post.id, "p-9");
    assert_eq!(post.user_id, "u-2");
    assert_eq!(post.slug, "first-post");
    assert_eq!(post.created_date(), "2024-01-01");
}

#[test]
fn post_missing_optional_fields_use_defaults() {
    let raw = serde_json::json!({ "_id": "p-1", "slug": "s", "title": "t" });
    let post: Post = serde_json::from_value(raw).unwrap();
    assert_eq!(post.category, "uncategorized");
    assert!(post.content.is_empty());
    assert!(post.image.is_empty());
    assert_eq!(post.created_date(), "");
}

#[test]
fn reading_minutes_rounds_up_per_hundred_chars() {
    assert_eq!(make_post("").reading_minutes(), 0);
    assert_eq!(make_post(&"a".repeat(1)).reading_minutes(), 1);
    assert_eq!(make_post(&"a".repeat(100)).reading_minutes(), 1);
    assert_eq!(make_post(&"a".repeat(101)).reading_minutes(), 2);
}

#[test]
fn reading_minutes_counts_characters_not_bytes() {
    assert_eq!(make_post(&"é".repeat(100)).reading_minutes(), 1);
}

#[test]
fn post_draft_from_post_copies_editable_fields() {
    let post = make_post("<p>body</p>");
    let draft = PostDraft::from(&post);
    assert_eq!(draft.title, "Hello World");
    assert_eq!(draft.category, "rust");
    assert_eq!(draft.content, "<p>body</p>");
    assert_eq!(draft.image, "https://example.com/cover.png");
}

#[test]
fn post_draft_omits_empty_image() {
    let draft = PostDraft {
        title: "t".to_owned(),
        category: "c".to_owned(),
        content: "body".to_owned(),
        image: String::new(),
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("image").is_none());
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn posts_envelope_parses_totals_when_present() {
    let raw = serde_json::json!({ "posts": [], "totalPosts": 12, "lastMonthPosts": 3 });
    let envelope: PostsEnvelope = serde_json::from_value(raw).unwrap();
    assert!(envelope.posts.is_empty());
    assert_eq!(envelope.total_posts, Some(12));
    assert_eq!(envelope.last_month_posts, Some(3));
}

#[test]
fn posts_envelope_requires_posts_key() {
    let raw = serde_json::json!({ "items": [] });
    assert!(serde_json::from_value::<PostsEnvelope>(raw).is_err());
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Email in use"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Email in use"));
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());
}

// =============================================================
// User / Comment
// =============================================================

#[test]
fn user_parses_admin_flag() {
    let raw = serde_json::json!({
        "_id": "u-1",
        "username": "alice",
        "email": "alice@example.com",
        "isAdmin": true,
        "profilePicture": "https://pic"
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert!(user.is_admin);
    assert_eq!(user.profile_picture.as_deref(), Some("https://pic"));
}

#[test]
fn user_admin_flag_defaults_false() {
    let raw = serde_json::json!({ "_id": "u-1", "username": "bob" });
    let user: User = serde_json::from_value(raw).unwrap();
    assert!(!user.is_admin);
}

#[test]
fn new_comment_serializes_camel_case() {
    let comment = NewComment {
        content: "nice".to_owned(),
        post_id: "p-1".to_owned(),
        user_id: "u-1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&comment).unwrap(),
        serde_json::json!({ "content": "nice", "postId": "p-1", "userId": "u-1" })
    );
}

#[test]
fn comment_parses_like_count() {
    let raw = serde_json::json!({
        "_id": "c-1",
        "postId": "p-1",
        "userId": "u-1",
        "content": "hi",
        "likes": ["u-2"],
        "numberOfLikes": 1,
        "createdAt": "2024-03-04T05:06:07Z"
    });
    let comment: Comment = serde_json::from_value(raw).unwrap();
    assert_eq!(comment.number_of_likes, 1);
    assert_eq!(comment.likes, vec!["u-2".to_owned()]);
    assert_eq!(comment.created_date(), "2024-03-04");
}
