//! Documentation version descriptors.

use serde::{Deserialize, Serialize};

/// Banner shown on pages of a documentation version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPolicy {
    /// No banner.
    #[default]
    None,
    /// Mark pages of this version as an unmaintained snapshot, with a link
    /// back to the current version.
    Unmaintained,
}

/// A labeled, independently-navigable snapshot of the documentation tree.
///
/// Exactly one version per site is the *current* one, identified by an
/// empty [`url_path`](VersionDescriptor::url_path); it is served from the
/// site root. Every other version is served from `/<url_path>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
    /// Unique key identifying the version (e.g. `"current"`, `"v1.0.0"`).
    pub key: String,

    /// Human-readable label shown in the version dropdown.
    pub label: String,

    /// URL path segment this version is served under. Empty for the
    /// current version.
    #[serde(default)]
    pub url_path: String,

    /// Banner policy for pages of this version.
    #[serde(default)]
    pub banner: BannerPolicy,
}

impl VersionDescriptor {
    /// Whether this is the current/latest version, served from the site root.
    pub fn is_current(&self) -> bool {
        self.url_path.is_empty()
    }

    /// Resolve the site-relative route for this version.
    ///
    /// The current version resolves to the empty string (the site root);
    /// every other version resolves to `/<url_path>` with exactly one
    /// leading slash and no trailing slash.
    pub fn route_path(&self) -> String {
        let trimmed = self.url_path.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}
