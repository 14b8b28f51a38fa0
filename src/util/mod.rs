//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page and component code to improve reuse and testability.

pub mod actions;
pub mod auth;
pub mod loader;
pub mod storage;
pub mod time;
pub mod validation;
