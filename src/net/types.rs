//! Wire DTOs for the blog backend's JSON API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend documents (`_id`, camelCase timestamps) via
//! serde renames so responses deserialize without hand-written mapping. The
//! client treats every value here as a transient, non-authoritative copy.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A blog post as returned by `/api/post/getposts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique, URL-safe identifier used in `/post/<slug>` routes.
    pub slug: String,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// Rich text, stored as HTML.
    #[serde(default)]
    pub content: String,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Post {
    /// Estimated reading time: one minute per hundred characters, rounded up.
    pub fn reading_minutes(&self) -> usize {
        self.content.chars().count().div_ceil(100)
    }

    /// Calendar date portion of `created_at` (`YYYY-MM-DD`), if present.
    pub fn created_date(&self) -> &str {
        date_part(&self.created_at)
    }
}

fn default_category() -> String {
    "uncategorized".to_owned()
}

/// A comment attached to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub number_of_likes: u32,
    #[serde(default)]
    pub created_at: String,
}

impl Comment {
    pub fn created_date(&self) -> &str {
        date_part(&self.created_at)
    }
}

/// Body of `GET /api/comment/getPostComments/<postId>`.
///
/// The `{ comments: [...] }` envelope is the documented shape; a bare array
/// is also accepted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommentsEnvelope {
    Wrapped { comments: Vec<Comment> },
    Bare(Vec<Comment>),
}

impl CommentsEnvelope {
    pub fn into_comments(self) -> Vec<Comment> {
        match self {
            Self::Wrapped { comments } | Self::Bare(comments) => comments,
        }
    }
}

/// User document returned by a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// `{ posts: [...] }` envelope used by post listing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsEnvelope {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total_posts: Option<u64>,
    #[serde(default)]
    pub last_month_posts: Option<u64>,
}

/// Error body carried by non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/signin`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body of post create/update requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub category: String,
    pub content: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            category: post.category.clone(),
            content: post.content.clone(),
            image: post.image.clone(),
        }
    }
}

/// Body of `POST /api/comment/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub post_id: String,
    pub user_id: String,
}

fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or_default()
}
