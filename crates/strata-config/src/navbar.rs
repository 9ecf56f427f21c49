//! Navigation bar items.

use serde::{Deserialize, Serialize};

/// Side of the navigation bar an item is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// A single navigation bar entry.
///
/// The declared sequence of items defines the rendered order within each
/// side of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    /// Dropdown listing every declared documentation version.
    VersionDropdown {
        #[serde(default)]
        position: NavPosition,
    },

    /// Link to a document in the current version's tree.
    DocLink {
        /// Slug of the target document (e.g. `"overview"`).
        doc_id: String,
        label: String,
        #[serde(default)]
        position: NavPosition,
    },

    /// Link to an external site.
    ExternalLink {
        /// Absolute URL of the target.
        href: String,
        /// Visible label; icon-only links omit it.
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        position: NavPosition,
    },
}

impl NavItem {
    /// Side of the bar this item is rendered on.
    pub fn position(&self) -> NavPosition {
        match self {
            NavItem::VersionDropdown { position }
            | NavItem::DocLink { position, .. }
            | NavItem::ExternalLink { position, .. } => *position,
        }
    }
}
