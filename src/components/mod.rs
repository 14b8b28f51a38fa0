//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, toasts) and post/comment surfaces
//! while reading session and notification state from context providers.

pub mod comment_section;
pub mod field_error;
pub mod guard;
pub mod header;
pub mod post_card;
pub mod post_editor;
pub mod post_list;
pub mod toaster;
