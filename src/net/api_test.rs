use super::*;

fn post_json(slug: &str) -> serde_json::Value {
    serde_json::json!({ "_id": format!("id-{slug}"), "slug": slug, "title": slug })
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn post_query_by_slug_encodes_slug() {
    assert_eq!(PostQuery::by_slug("hello-world").endpoint(), "/api/post/getposts?slug=hello-world");
}

#[test]
fn post_query_recent_sets_limit() {
    assert_eq!(PostQuery::recent(3).endpoint(), "/api/post/getposts?limit=3");
}

#[test]
fn post_query_empty_has_no_query_string() {
    assert_eq!(PostQuery::default().endpoint(), "/api/post/getposts");
}

#[test]
fn post_query_skips_blank_values_and_escapes_text() {
    let query = PostQuery {
        search_term: Some("rust & wasm".to_owned()),
        category: Some("   ".to_owned()),
        order: Some("desc".to_owned()),
        ..PostQuery::default()
    };
    assert_eq!(query.to_query_string(), "searchTerm=rust+%26+wasm&order=desc");
}

#[test]
fn post_query_starting_at_keeps_filters() {
    let query = PostQuery {
        user_id: Some("u-1".to_owned()),
        limit: Some(9),
        ..PostQuery::default()
    };
    assert_eq!(query.starting_at(9).to_query_string(), "userId=u-1&startIndex=9&limit=9");
}

#[test]
fn mutation_endpoints_embed_ids() {
    assert_eq!(update_post_endpoint("p-1", "u-1"), "/api/post/updatepost/p-1/u-1");
    assert_eq!(delete_post_endpoint("p-1", "u-1"), "/api/post/deletepost/p-1/u-1");
    assert_eq!(post_comments_endpoint("p-1"), "/api/comment/getPostComments/p-1");
}

// =============================================================
// Classification
// =============================================================

#[test]
fn classify_accepts_any_2xx_with_valid_body() {
    let body = serde_json::json!({ "posts": [post_json("a")] }).to_string();
    let envelope: PostsEnvelope = classify(200, &body).unwrap();
    assert_eq!(envelope.posts.len(), 1);
    let envelope: PostsEnvelope = classify(201, &body).unwrap();
    assert_eq!(envelope.posts[0].slug, "a");
}

#[test]
fn classify_checks_status_before_body() {
    // A well-formed envelope under an error status is still a failure.
    let body = serde_json::json!({ "posts": [post_json("a")] }).to_string();
    let result = classify::<PostsEnvelope>(500, &body);
    assert_eq!(result, Err(ApiError::Rejected { status: 500, message: None }));
}

#[test]
fn classify_reports_malformed_success_body() {
    let result = classify::<PostsEnvelope>(200, "<html>oops</html>");
    assert!(matches!(result, Err(ApiError::Malformed(_))));
}

#[test]
fn rejection_extracts_backend_message() {
    assert_eq!(
        rejection(400, r#"{"success":false,"statusCode":400,"message":"Email in use"}"#),
        ApiError::Rejected { status: 400, message: Some("Email in use".to_owned()) }
    );
}

#[test]
fn rejection_tolerates_non_json_body() {
    assert_eq!(rejection(502, "Bad Gateway"), ApiError::Rejected { status: 502, message: None });
}

#[test]
fn rejection_maps_401_and_403_to_unauthorized() {
    assert!(rejection(401, "{}").is_unauthorized());
    assert!(rejection(403, r#"{"message":"You are not allowed"}"#).is_unauthorized());
    assert!(!rejection(404, "{}").is_unauthorized());
}

#[test]
fn classify_status_uses_predicate() {
    assert_eq!(classify_status(201, "", |s| s == 201), Ok(()));
    assert_eq!(
        classify_status(200, "{}", |s| s == 201),
        Err(ApiError::Rejected { status: 200, message: None })
    );
}

#[test]
fn first_post_takes_head_of_collection() {
    let envelope: PostsEnvelope =
        serde_json::from_value(serde_json::json!({ "posts": [post_json("a"), post_json("b")] })).unwrap();
    assert_eq!(first_post(envelope).unwrap().slug, "a");
}

#[test]
fn first_post_of_empty_collection_is_not_found() {
    assert_eq!(first_post(PostsEnvelope::default()), Err(ApiError::NotFound));
}

#[test]
fn comments_envelope_decodes_to_list() {
    let body = r#"{"comments":[{"_id":"c1","postId":"p1","userId":"u1","content":"hi"}]}"#;
    let comments = classify::<CommentsEnvelope>(200, body).map(CommentsEnvelope::into_comments).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, "c1");
    assert_eq!(comments[0].content, "hi");
}

#[test]
fn comments_bare_array_is_tolerated() {
    let body = r#"[{"_id":"c1","postId":"p1","userId":"u1","content":"hi"},{"_id":"c2","postId":"p1","userId":"u2","content":"yo"}]"#;
    let comments = classify::<CommentsEnvelope>(200, body).unwrap().into_comments();
    assert_eq!(comments.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c1", "c2"]);
}

#[test]
fn comments_with_wrong_shape_are_malformed() {
    let result = classify::<CommentsEnvelope>(200, r#"{"posts":[]}"#);
    assert!(matches!(result, Err(ApiError::Malformed(_))));
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn user_message_prefers_backend_message() {
    let err = ApiError::Rejected { status: 400, message: Some("Email in use".to_owned()) };
    assert_eq!(err.user_message("Sign up failed"), "Email in use");
}

#[test]
fn user_message_falls_back_for_transport_and_blank_messages() {
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Something went wrong"), "Something went wrong");
    let blank = ApiError::Rejected { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(blank.user_message("fallback"), "fallback");
    assert_eq!(ApiError::NotFound.user_message("fallback"), "fallback");
}

#[cfg(not(feature = "csr"))]
#[test]
fn transport_stub_fails_outside_browser() {
    let result = block_on(fetch_posts(&PostQuery::recent(3)));
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

/// Minimal executor for futures that complete without ever pending.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
