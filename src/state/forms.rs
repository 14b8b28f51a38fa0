//! Form models and their validation schemas.
//!
//! Each form is plain data filled from input signals at submit time, checked
//! against its schema, then converted into the request DTO it submits.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{NewComment, PostDraft, SignInRequest, SignUpRequest};
use crate::util::validation::{FieldSpec, Rule, Validate};

/// Maximum comment length accepted by the comment box.
pub const COMMENT_MAX_CHARS: usize = 200;

/// Categories offered by the authoring form and search filter.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("uncategorized", "Uncategorized"),
    ("worlds", "World"),
    ("local", "Local"),
    ("sports", "Sports"),
    ("technology", "Technology"),
    ("business", "Business"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validate for SignUpForm {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "username",
            rules: &[(Rule::MinLen(2), "Username must be at least 2 characters.")],
        },
        FieldSpec {
            name: "email",
            rules: &[(Rule::Required, "Email is required."), (Rule::Email, "Invalid email address.")],
        },
        FieldSpec {
            name: "password",
            rules: &[(Rule::MinLen(8), "Password must be at least 8 characters.")],
        },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "username" => &self.username,
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

impl SignUpForm {
    pub fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl Validate for SignInForm {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec {
            name: "email",
            rules: &[(Rule::Required, "Email is required."), (Rule::Email, "Invalid email address.")],
        },
        FieldSpec { name: "password", rules: &[(Rule::Required, "Password is required.")] },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

impl SignInForm {
    pub fn to_request(&self) -> SignInRequest {
        SignInRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

/// Admin authoring form shared by create and update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub category: String,
    pub content: String,
    pub image: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: CATEGORIES[0].0.to_owned(),
            content: String::new(),
            image: String::new(),
        }
    }
}

impl Validate for PostForm {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec { name: "title", rules: &[(Rule::Required, "Title is required.")] },
        FieldSpec { name: "category", rules: &[(Rule::Required, "Pick a category.")] },
        FieldSpec {
            name: "content",
            rules: &[(Rule::Required, "Content is required."), (Rule::MinLen(10), "Content is too short.")],
        },
        FieldSpec { name: "image", rules: &[(Rule::HttpUrl, "Image must be an http(s) URL.")] },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "title" => &self.title,
            "category" => &self.category,
            "content" => &self.content,
            "image" => &self.image,
            _ => "",
        }
    }
}

impl PostForm {
    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.trim().to_owned(),
            category: self.category.clone(),
            content: self.content.clone(),
            image: self.image.trim().to_owned(),
        }
    }
}

impl From<PostDraft> for PostForm {
    fn from(draft: PostDraft) -> Self {
        Self { title: draft.title, category: draft.category, content: draft.content, image: draft.image }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub content: String,
}

impl Validate for CommentForm {
    const SCHEMA: &'static [FieldSpec] = &[FieldSpec {
        name: "content",
        rules: &[
            (Rule::Required, "Write something first."),
            (Rule::MaxLen(COMMENT_MAX_CHARS), "Comments are limited to 200 characters."),
        ],
    }];

    fn field(&self, name: &str) -> &str {
        match name {
            "content" => &self.content,
            _ => "",
        }
    }
}

impl CommentForm {
    pub fn remaining_chars(&self) -> usize {
        COMMENT_MAX_CHARS.saturating_sub(self.content.chars().count())
    }

    pub fn to_request(&self, post_id: &str, user_id: &str) -> NewComment {
        NewComment {
            content: self.content.trim().to_owned(),
            post_id: post_id.to_owned(),
            user_id: user_id.to_owned(),
        }
    }
}
