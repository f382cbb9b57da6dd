//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, the route guard and the upload dialogs.
//! Session access is passed in explicitly as a `Session` prop.

pub mod blog_upload_dialog;
pub mod collection_upload_dialog;
pub mod dashboard_card;
pub mod page_footer;
pub mod page_header;
pub mod protected_route;
