//! Assembled site configuration and its structural validation.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::navbar::NavItem;
use crate::version::VersionDescriptor;

/// Logical identity of the documentation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    /// Site title, shown in the navbar and page titles.
    pub title: String,

    /// One-line tagline, shown on the landing page.
    #[serde(default)]
    pub tagline: String,

    /// Absolute URL the site is deployed at.
    pub url: String,

    /// Path prefix the site is served under. Normalized during
    /// [`SiteConfig::build`] to begin and end with `/`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_base_path() -> String {
    "/".to_string()
}

/// Connection parameters for an externally hosted search provider.
///
/// The API key is a public, search-only key; no indexing logic lives in
/// this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProvider {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
}

/// Site logo reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

/// Site-wide announcement bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    /// Opaque markup fragment, carried through to the page unchanged.
    pub html: String,
    #[serde(default)]
    pub background: Option<String>,
}

/// Sitemap generation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapPolicy {
    #[serde(default = "default_changefreq")]
    pub changefreq: String,
    #[serde(default = "default_priority")]
    pub priority: f32,
    #[serde(default = "default_sitemap_filename")]
    pub filename: String,
}

fn default_changefreq() -> String {
    "weekly".to_string()
}
fn default_priority() -> f32 {
    0.5
}
fn default_sitemap_filename() -> String {
    "sitemap.xml".to_string()
}

impl Default for SitemapPolicy {
    fn default() -> Self {
        Self {
            changefreq: default_changefreq(),
            priority: default_priority(),
            filename: default_sitemap_filename(),
        }
    }
}

/// How the builder reacts to a navigation or footer link whose document
/// target resolves to no generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    Ignore,
    #[default]
    Warn,
    Error,
}

/// Target of a footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Slug of a document in the current version.
    Doc(String),
    /// Absolute external URL.
    External(String),
}

/// A single footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub target: LinkTarget,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// Optional site settings beyond the core identity/versions/navbar set.
///
/// Every field has a documented default; absence never fails validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteExtras {
    /// Base URL for "edit this page" links. A page's edit link is this
    /// value joined with the page's source-relative path. `None` disables
    /// edit links.
    #[serde(default)]
    pub edit_url: Option<String>,

    /// Navbar logo. `None` renders the title only.
    #[serde(default)]
    pub logo: Option<Logo>,

    /// Favicon path relative to the static assets dir.
    #[serde(default)]
    pub favicon: Option<String>,

    /// Site-wide announcement bar. `None` renders no bar.
    #[serde(default)]
    pub announcement: Option<Announcement>,

    /// Footer copyright line. `None` renders no line.
    #[serde(default)]
    pub copyright: Option<String>,

    /// Sitemap options. Defaults: weekly / 0.5 / `sitemap.xml`.
    #[serde(default)]
    pub sitemap: SitemapPolicy,

    /// Broken-link handling at build time. Default: warn.
    #[serde(default)]
    pub broken_links: BrokenLinkPolicy,
}

/// Errors detected while assembling a [`SiteConfig`].
///
/// All variants are structural: they are raised synchronously by
/// [`SiteConfig::build`] and never deferred to build or render time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("site title must not be empty")]
    EmptyTitle,

    #[error("site url is not a valid absolute URL: {0}")]
    InvalidSiteUrl(String),

    #[error("at least one documentation version must be declared")]
    NoVersions,

    #[error("duplicate version key: {0}")]
    DuplicateVersionKey(String),

    #[error("versions {first} and {second} resolve to the same path {path:?}")]
    DuplicateVersionPath {
        first: String,
        second: String,
        path: String,
    },

    #[error("more than one version is marked current (empty url_path): {first} and {second}")]
    MultipleCurrentVersions { first: String, second: String },

    #[error("navbar doc link {label:?} has an empty doc id")]
    EmptyDocId { label: String },

    #[error("navbar external link has no href")]
    EmptyHref,

    #[error("navbar external link href is not a valid absolute URL: {0}")]
    InvalidHref(String),

    #[error("footer link {label:?} in column {column:?} has an empty target")]
    EmptyFooterTarget { column: String, label: String },
}

/// Fully-resolved, immutable site configuration.
///
/// Constructed once via [`SiteConfig::build`] and passed by reference to
/// whatever consumes it; there is no ambient global configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub identity: SiteIdentity,
    /// Parsed form of `identity.url`, validated absolute.
    pub site_url: Url,
    /// Documentation root directory. Existence is the builder's concern.
    pub docs_root: PathBuf,
    pub versions: Vec<VersionDescriptor>,
    pub navbar: Vec<NavItem>,
    pub search: Option<SearchProvider>,
    pub footer: Vec<FooterColumn>,
    pub extras: SiteExtras,
}

impl SiteConfig {
    /// Validate and assemble a site configuration.
    ///
    /// This is a pure function over its inputs: no I/O, no side effects.
    /// It guarantees that version keys and resolved version routes are
    /// unique, that at most one version is current, and that every
    /// navigation and footer item is structurally complete. It does NOT
    /// verify that `docs_root` exists or that any referenced document id
    /// exists; both are deferred to the static builder.
    pub fn build(
        identity: SiteIdentity,
        docs_root: PathBuf,
        versions: Vec<VersionDescriptor>,
        navbar: Vec<NavItem>,
        search: Option<SearchProvider>,
        footer: Vec<FooterColumn>,
        extras: SiteExtras,
    ) -> Result<Self, ConfigurationError> {
        if identity.title.trim().is_empty() {
            return Err(ConfigurationError::EmptyTitle);
        }

        let site_url = Url::parse(&identity.url)
            .map_err(|_| ConfigurationError::InvalidSiteUrl(identity.url.clone()))?;
        if !site_url.has_host() {
            return Err(ConfigurationError::InvalidSiteUrl(identity.url.clone()));
        }

        if versions.is_empty() {
            return Err(ConfigurationError::NoVersions);
        }

        let mut keys: HashSet<&str> = HashSet::new();
        for v in &versions {
            if !keys.insert(v.key.as_str()) {
                return Err(ConfigurationError::DuplicateVersionKey(v.key.clone()));
            }
        }

        let mut routes: Vec<(&VersionDescriptor, String)> = Vec::with_capacity(versions.len());
        for v in &versions {
            let route = v.route_path();
            if let Some((prev, _)) = routes.iter().find(|(_, r)| *r == route) {
                if route.is_empty() {
                    return Err(ConfigurationError::MultipleCurrentVersions {
                        first: prev.key.clone(),
                        second: v.key.clone(),
                    });
                }
                return Err(ConfigurationError::DuplicateVersionPath {
                    first: prev.key.clone(),
                    second: v.key.clone(),
                    path: route,
                });
            }
            routes.push((v, route));
        }

        for item in &navbar {
            match item {
                NavItem::DocLink { doc_id, label, .. } if doc_id.trim().is_empty() => {
                    return Err(ConfigurationError::EmptyDocId {
                        label: label.clone(),
                    });
                }
                NavItem::ExternalLink { href, .. } => {
                    if href.trim().is_empty() {
                        return Err(ConfigurationError::EmptyHref);
                    }
                    let parsed = Url::parse(href)
                        .map_err(|_| ConfigurationError::InvalidHref(href.clone()))?;
                    if !parsed.has_host() {
                        return Err(ConfigurationError::InvalidHref(href.clone()));
                    }
                }
                _ => {}
            }
        }

        for column in &footer {
            for link in &column.links {
                let empty = match &link.target {
                    LinkTarget::Doc(id) => id.trim().is_empty(),
                    LinkTarget::External(href) => href.trim().is_empty(),
                };
                if empty {
                    return Err(ConfigurationError::EmptyFooterTarget {
                        column: column.title.clone(),
                        label: link.label.clone(),
                    });
                }
            }
        }

        let identity = SiteIdentity {
            base_path: normalize_base_path(&identity.base_path),
            ..identity
        };

        Ok(Self {
            identity,
            site_url,
            docs_root,
            versions,
            navbar,
            search,
            footer,
            extras,
        })
    }

    /// The current/latest version.
    ///
    /// A built config may have no current version (every version archived
    /// under an explicit path); callers fall back to the first declared
    /// version in that case.
    pub fn current_version(&self) -> &VersionDescriptor {
        self.versions
            .iter()
            .find(|v| v.is_current())
            .unwrap_or(&self.versions[0])
    }

    /// The version→route mapping consumed by the static builder.
    pub fn version_routes(&self) -> impl Iterator<Item = (&str, String)> {
        self.versions.iter().map(|v| (v.key.as_str(), v.route_path()))
    }

    /// Site-absolute URL path for a document of a given version.
    ///
    /// The current version's documents live under `<base>/docs/<slug>/`,
    /// archived versions under `<base>/<route>/docs/<slug>/`.
    pub fn page_url(&self, version: &VersionDescriptor, slug: &str) -> String {
        let base = self.identity.base_path.trim_end_matches('/');
        let route = version.route_path();
        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            let route = if route.is_empty() { "/" } else { route.as_str() };
            format!("{}{}/", base, route.trim_end_matches('/'))
        } else {
            format!("{}{}/docs/{}/", base, route, slug)
        }
    }

    /// "Edit this page" URL for a source file, if edit links are enabled.
    pub fn edit_link(&self, relative_source: &str) -> Option<String> {
        self.extras.edit_url.as_ref().map(|base| {
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                relative_source.trim_start_matches('/')
            )
        })
    }
}

/// Normalize a base path to begin and end with `/`.
fn normalize_base_path(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
