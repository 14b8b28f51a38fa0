//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `loader`, `toast`, `forms`, `submit`)
//! so individual pages and components depend on small focused models.

pub mod forms;
pub mod loader;
pub mod session;
pub mod submit;
pub mod toast;
