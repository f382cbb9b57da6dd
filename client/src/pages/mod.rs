//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`. Pages pick up the session with `use_session()`.

pub mod admin_dashboard;
pub mod home;
pub mod manage_content;
