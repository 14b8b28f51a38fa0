//! REST API helpers for communicating with the blog backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, cookies included so the
//! backend's session cookie travels with every request.
//! Native builds: the transport is stubbed to a `Transport` error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Success is decided by HTTP status, never by body shape. Every response is
//! run through [`classify`] (or a sibling) so the status check, error-body
//! extraction, and JSON decoding live in one testable place.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Comment, CommentsEnvelope, ErrorBody, NewComment, Post, PostDraft, PostsEnvelope, SignInRequest, SignUpRequest, User,
};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

/// Failure taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the backend's `{message}` when present.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// 401/403: the session cookie is missing or no longer valid.
    #[error("not authorized (status {status})")]
    Unauthorized { status: u16, message: Option<String> },
    /// 2xx response whose body did not decode.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Network-level failure: unreachable host, aborted request, etc.
    #[error("network error: {0}")]
    Transport(String),
    /// A lookup by slug or id returned an empty collection.
    #[error("not found")]
    NotFound,
}

impl ApiError {
    /// Text to show the user: the backend's message if it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } | Self::Unauthorized { message: Some(message), .. }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Query parameters accepted by `GET /api/post/getposts`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub slug: Option<String>,
    pub post_id: Option<String>,
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub search_term: Option<String>,
    /// `asc` or `desc` by update time.
    pub order: Option<String>,
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}

impl PostQuery {
    pub fn by_slug(slug: &str) -> Self {
        Self { slug: Some(slug.to_owned()), ..Self::default() }
    }

    pub fn by_id(post_id: &str) -> Self {
        Self { post_id: Some(post_id.to_owned()), ..Self::default() }
    }

    pub fn recent(limit: usize) -> Self {
        Self { limit: Some(limit), ..Self::default() }
    }

    /// Copy of this query starting at `start_index`, for "show more" pages.
    #[must_use]
    pub fn starting_at(&self, start_index: usize) -> Self {
        Self { start_index: Some(start_index), ..self.clone() }
    }

    /// Encoded query string (without the leading `?`). Blank values are skipped.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        let text_params = [
            ("slug", &self.slug),
            ("postId", &self.post_id),
            ("userId", &self.user_id),
            ("category", &self.category),
            ("searchTerm", &self.search_term),
            ("order", &self.order),
        ];
        for (key, value) in text_params {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                serializer.append_pair(key, value);
            }
        }
        if let Some(start_index) = self.start_index {
            serializer.append_pair("startIndex", &start_index.to_string());
        }
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        serializer.finish()
    }

    pub fn endpoint(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/api/post/getposts".to_owned()
        } else {
            format!("/api/post/getposts?{query}")
        }
    }
}

fn update_post_endpoint(post_id: &str, user_id: &str) -> String {
    format!("/api/post/updatepost/{post_id}/{user_id}")
}

fn delete_post_endpoint(post_id: &str, user_id: &str) -> String {
    format!("/api/post/deletepost/{post_id}/{user_id}")
}

fn post_comments_endpoint(post_id: &str) -> String {
    format!("/api/comment/getPostComments/{post_id}")
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build the error for a non-success `status`, pulling `{message}` out of the body if it parses.
pub fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
    if status == 401 || status == 403 {
        ApiError::Unauthorized { status, message }
    } else {
        ApiError::Rejected { status, message }
    }
}

/// Classify a response as 2xx + decodable `T`, or an [`ApiError`].
///
/// # Errors
///
/// `Rejected`/`Unauthorized` for non-2xx statuses, `Malformed` when a 2xx
/// body does not decode as `T`.
pub fn classify<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Classify a response whose body is irrelevant on success.
///
/// # Errors
///
/// Returns an error unless `accept(status)` holds.
pub fn classify_status(status: u16, body: &str, accept: impl Fn(u16) -> bool) -> Result<(), ApiError> {
    if accept(status) { Ok(()) } else { Err(rejection(status, body)) }
}

/// Take the single entity a detail lookup expects from a posts envelope.
///
/// # Errors
///
/// Returns `NotFound` when the collection is empty.
pub fn first_post(envelope: PostsEnvelope) -> Result<Post, ApiError> {
    envelope.posts.into_iter().next().ok_or(ApiError::NotFound)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Issue one request and return `(status, body text)`.
async fn send(method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::Request;

        let url = crate::config::api_url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        let request = match body {
            Some(payload) => builder.json(&payload),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request.send().await.map_err(|e| {
            leptos::logging::warn!("{method:?} {path} failed: {e}");
            ApiError::Transport(e.to_string())
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if !is_success(status) {
            leptos::logging::warn!("{method:?} {path} -> {status}");
        }
        Ok((status, text))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Transport(UNAVAILABLE.to_owned()))
    }
}

fn to_payload<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Register a new account via `POST /api/auth/signup`. Only `201 Created` counts as success.
///
/// # Errors
///
/// Any other status, or a transport failure.
pub async fn signup(request: &SignUpRequest) -> Result<(), ApiError> {
    let (status, body) = send(Method::Post, "/api/auth/signup", Some(to_payload(request)?)).await?;
    classify_status(status, &body, |s| s == 201)
}

/// Authenticate via `POST /api/auth/signin`, returning the signed-in user.
///
/// # Errors
///
/// Non-2xx status, undecodable user body, or transport failure.
pub async fn signin(request: &SignInRequest) -> Result<User, ApiError> {
    let (status, body) = send(Method::Post, "/api/auth/signin", Some(to_payload(request)?)).await?;
    classify(status, &body)
}

/// End the backend session via `POST /api/user/signout`.
///
/// # Errors
///
/// Non-2xx status or transport failure.
pub async fn signout() -> Result<(), ApiError> {
    let (status, body) = send(Method::Post, "/api/user/signout", None).await?;
    classify_status(status, &body, is_success)
}

/// Fetch a page of posts matching `query`.
///
/// # Errors
///
/// Non-2xx status, malformed envelope, or transport failure.
pub async fn fetch_posts(query: &PostQuery) -> Result<PostsEnvelope, ApiError> {
    let (status, body) = send(Method::Get, &query.endpoint(), None).await?;
    classify(status, &body)
}

/// Fetch the post with `slug`.
///
/// # Errors
///
/// As [`fetch_posts`], plus `NotFound` for an empty result.
pub async fn fetch_post_by_slug(slug: &str) -> Result<Post, ApiError> {
    fetch_posts(&PostQuery::by_slug(slug)).await.and_then(first_post)
}

/// Fetch the post with database id `post_id`.
///
/// # Errors
///
/// As [`fetch_posts`], plus `NotFound` for an empty result.
pub async fn fetch_post_by_id(post_id: &str) -> Result<Post, ApiError> {
    fetch_posts(&PostQuery::by_id(post_id)).await.and_then(first_post)
}

/// Fetch the `limit` most recent posts.
///
/// # Errors
///
/// As [`fetch_posts`].
pub async fn fetch_recent_posts(limit: usize) -> Result<Vec<Post>, ApiError> {
    fetch_posts(&PostQuery::recent(limit)).await.map(|envelope| envelope.posts)
}

/// Publish a new post (admin only).
///
/// # Errors
///
/// Non-2xx status, undecodable post, or transport failure.
pub async fn create_post(draft: &PostDraft) -> Result<Post, ApiError> {
    let (status, body) = send(Method::Post, "/api/post/create", Some(to_payload(draft)?)).await?;
    classify(status, &body)
}

/// Replace an existing post's editable fields (admin only).
///
/// # Errors
///
/// Non-2xx status, undecodable post, or transport failure.
pub async fn update_post(post_id: &str, user_id: &str, draft: &PostDraft) -> Result<Post, ApiError> {
    let path = update_post_endpoint(post_id, user_id);
    let (status, body) = send(Method::Put, &path, Some(to_payload(draft)?)).await?;
    classify(status, &body)
}

/// Delete a post (admin only).
///
/// # Errors
///
/// Non-2xx status or transport failure.
pub async fn delete_post(post_id: &str, user_id: &str) -> Result<(), ApiError> {
    let (status, body) = send(Method::Delete, &delete_post_endpoint(post_id, user_id), None).await?;
    classify_status(status, &body, is_success)
}

/// Fetch all comments on a post.
///
/// # Errors
///
/// Non-2xx status, malformed list, or transport failure.
pub async fn fetch_post_comments(post_id: &str) -> Result<Vec<Comment>, ApiError> {
    let (status, body) = send(Method::Get, &post_comments_endpoint(post_id), None).await?;
    classify::<CommentsEnvelope>(status, &body).map(CommentsEnvelope::into_comments)
}

/// Add a comment to a post as the signed-in user.
///
/// # Errors
///
/// Non-2xx status, undecodable comment, or transport failure.
pub async fn create_comment(comment: &NewComment) -> Result<Comment, ApiError> {
    let (status, body) = send(Method::Post, "/api/comment/create", Some(to_payload(comment)?)).await?;
    classify(status, &body)
}
