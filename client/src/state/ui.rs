//! Local UI chrome state (management tabs).
//!
//! DESIGN
//! ======
//! Keeps presentation choices out of the content fixtures so switching views
//! can never touch row data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the content management page. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManageTab {
    #[default]
    Collections,
    Blogs,
    Services,
}

impl ManageTab {
    pub const ALL: [Self; 3] = [Self::Collections, Self::Blogs, Self::Services];

    pub fn label(self) -> &'static str {
        match self {
            Self::Collections => "Collections",
            Self::Blogs => "Blog Posts",
            Self::Services => "Services",
        }
    }

    /// Stable identifier used for element ids and `aria-controls`.
    pub fn value(self) -> &'static str {
        match self {
            Self::Collections => "collections",
            Self::Blogs => "blogs",
            Self::Services => "services",
        }
    }

    /// Column headings of this tab's table.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Collections => &["Title", "Type", "Status", "Actions"],
            Self::Blogs => &["Title", "Category", "Status", "Actions"],
            Self::Services => &["Title", "Type", "Actions"],
        }
    }
}
