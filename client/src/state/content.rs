//! Fixture content shown on the management page.
//!
//! There is no content backend; these lists exist so the tables have rows.
//! They are `const`, so nothing in the UI can change them.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::Serialize;

/// Stock availability of a collection item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

/// Publication state of a blog post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    Draft,
    Published,
}

/// Badge tone for a status cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Negative,
    Neutral,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Positive => "status-badge status-badge--positive",
            Self::Negative => "status-badge status-badge--negative",
            Self::Neutral => "status-badge status-badge--neutral",
        }
    }
}

impl StockStatus {
    pub const ALL: [Self; 2] = [Self::InStock, Self::OutOfStock];

    /// Form value used by the stock-status select.
    pub fn value(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::InStock => BadgeTone::Positive,
            Self::OutOfStock => BadgeTone::Negative,
        }
    }
}

impl PublishStatus {
    pub const ALL: [Self; 2] = [Self::Draft, Self::Published];

    /// Form value used by the blog status select.
    pub fn value(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Published => BadgeTone::Positive,
            Self::Draft => BadgeTone::Neutral,
        }
    }
}

/// A carpet or shawl in the collections list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionRecord {
    pub id: u32,
    pub title: &'static str,
    pub kind: &'static str,
    pub status: StockStatus,
}

/// A blog post summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BlogRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub status: PublishStatus,
}

/// A cleaning or repair service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub id: u32,
    pub title: &'static str,
    pub kind: &'static str,
}

pub const COLLECTIONS: &[CollectionRecord] = &[
    CollectionRecord { id: 1, title: "Imperial Medallion Carpet", kind: "Carpet", status: StockStatus::InStock },
    CollectionRecord { id: 2, title: "Kashmiri Paisley Shawl", kind: "Shawl", status: StockStatus::InStock },
    CollectionRecord { id: 3, title: "Persian Garden Runner", kind: "Carpet", status: StockStatus::OutOfStock },
];

pub const BLOGS: &[BlogRecord] = &[
    BlogRecord {
        id: 1,
        title: "The Art of Traditional Carpet Weaving",
        category: "Craftsmanship",
        status: PublishStatus::Published,
    },
    BlogRecord {
        id: 2,
        title: "How to Care for Your Persian Carpet",
        category: "Care Tips",
        status: PublishStatus::Published,
    },
    BlogRecord {
        id: 3,
        title: "Understanding Carpet Restoration",
        category: "Restoration",
        status: PublishStatus::Draft,
    },
];

pub const SERVICES: &[ServiceRecord] = &[
    ServiceRecord { id: 1, title: "Professional Washing", kind: "Carpet" },
    ServiceRecord { id: 2, title: "Expert Repairing", kind: "Carpet" },
    ServiceRecord { id: 3, title: "Delicate Shawl Washing", kind: "Shawl" },
];
