//! View state for the content upload dialogs.
//!
//! DESIGN
//! ======
//! Each dialog kind owns a separate `DialogState`, held by the page that
//! renders it. Submitting never writes anywhere; it records a diagnostic line
//! and closes.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use leptos::prelude::*;
use serde::Serialize;

/// The two upload forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    /// Collection item or service form.
    Collection,
    /// Blog post form.
    Blog,
}

impl DialogKind {
    pub fn description(self) -> &'static str {
        match self {
            Self::Collection => "Fill out the details below to add or update content.",
            Self::Blog => "Create or edit a blog post.",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Collection => "Save Content",
            Self::Blog => "Save Post",
        }
    }
}

/// Open flag and heading for one dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    pub open: bool,
    pub title: String,
}

impl DialogState {
    /// Retitle and show the dialog.
    pub fn open_with(&mut self, title: &str) {
        title.clone_into(&mut self.title);
        self.open = true;
    }

    /// Apply an open/close request coming from the dialog itself.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// JSON diagnostic line for a dialog submission.
pub fn submission_record(kind: DialogKind, title: &str) -> String {
    serde_json::json!({
        "event": "dialog:submit",
        "variant": kind,
        "title": title,
    })
    .to_string()
}

/// Log a submission attempt to the console.
pub fn log_submission(kind: DialogKind, title: &str) {
    leptos::logging::log!("{}", submission_record(kind, title));
}

/// Submit handler shared by both dialogs: log the attempt, then ask the owner
/// to close. Nothing is stored.
pub fn submit(kind: DialogKind, title: &str, on_open_change: Callback<bool>) {
    log_submission(kind, title);
    on_open_change.run(false);
}
