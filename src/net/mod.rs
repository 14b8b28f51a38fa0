//! Networking modules for the blog backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls and response classification, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
