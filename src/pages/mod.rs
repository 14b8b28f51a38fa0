//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loaders, submissions) and
//! delegates rendering details to `components`.

pub mod about;
pub mod create_post;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod post_details;
pub mod search;
pub mod sign_in;
pub mod sign_up;
pub mod update_post;
