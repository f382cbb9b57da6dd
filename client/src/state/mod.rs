//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `dialog`, `content`, `ui`) so
//! individual components can depend on small focused models.

pub mod content;
pub mod dialog;
pub mod session;
pub mod ui;
