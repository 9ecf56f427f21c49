//! `site.toml` schema and translation into typed configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use strata_config::{
    Announcement, BrokenLinkPolicy, ConfigurationError, FooterColumn, Logo, NavItem,
    SearchProvider, SiteConfig, SiteExtras, SiteIdentity, SitemapPolicy, VersionDescriptor,
};
use strata_features::FeatureCard;
use strata_static::BuildOptions;

/// Root of the `site.toml` file. Every recognized option is enumerated
/// here; unknown keys are rejected by serde.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteFile {
    pub site: SiteSection,

    /// Declared documentation versions, in dropdown order.
    #[serde(default)]
    pub versions: Vec<VersionDescriptor>,

    /// Navigation bar items, in rendered order.
    #[serde(default)]
    pub navbar: Vec<NavItem>,

    /// Hosted search provider wiring.
    #[serde(default)]
    pub search: Option<SearchProvider>,

    /// Footer link columns.
    #[serde(default)]
    pub footer: Vec<FooterColumn>,

    /// Site-wide announcement bar.
    #[serde(default)]
    pub announcement: Option<Announcement>,

    /// Sitemap options.
    #[serde(default)]
    pub sitemap: Option<SitemapPolicy>,

    /// Landing-page feature cards, in render order.
    #[serde(default)]
    pub features: Vec<FeatureCard>,
}

/// The `[site]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub url: String,
    /// Path prefix the site is served under. Default `/`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Documentation source directory of the current version. Default `docs`.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    /// Root of archived version snapshots. Default: `versioned` next to
    /// the docs dir.
    #[serde(default)]
    pub versioned_dir: Option<String>,
    /// Static files copied verbatim into the output root.
    #[serde(default)]
    pub static_dir: Option<String>,
    /// Output directory. Default `dist`.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    /// Base URL for "edit this page" links. Absent disables them.
    #[serde(default)]
    pub edit_url: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub logo: Option<Logo>,
    #[serde(default)]
    pub copyright: Option<String>,
    /// Broken-link handling at build time. Default `warn`.
    #[serde(default)]
    pub broken_links: BrokenLinkPolicy,
    /// Minify the generated stylesheet. Default true.
    #[serde(default = "default_minify")]
    pub minify: bool,
}

fn default_base_path() -> String {
    "/".to_string()
}
fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_out_dir() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load and parse a `site.toml` file.
pub fn load(path: &Path) -> Result<SiteFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: SiteFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(file)
}

impl SiteFile {
    /// Resolve the file into a validated [`SiteConfig`].
    pub fn resolve(&self) -> Result<SiteConfig, ConfigurationError> {
        let identity = SiteIdentity {
            title: self.site.title.clone(),
            tagline: self.site.tagline.clone(),
            url: self.site.url.clone(),
            base_path: self.site.base_path.clone(),
        };

        let extras = SiteExtras {
            edit_url: self.site.edit_url.clone(),
            logo: self.site.logo.clone(),
            favicon: self.site.favicon.clone(),
            announcement: self.announcement.clone(),
            copyright: self.site.copyright.clone(),
            sitemap: self.sitemap.clone().unwrap_or_default(),
            broken_links: self.site.broken_links,
        };

        SiteConfig::build(
            identity,
            PathBuf::from(&self.site.docs_dir),
            self.versions.clone(),
            self.navbar.clone(),
            self.search.clone(),
            self.footer.clone(),
            extras,
        )
    }

    /// Builder options from the `[site]` section, with CLI overrides.
    pub fn build_options(
        &self,
        out_override: Option<PathBuf>,
        minify_override: Option<bool>,
    ) -> BuildOptions {
        BuildOptions {
            out_dir: out_override.unwrap_or_else(|| PathBuf::from(&self.site.out_dir)),
            versioned_root: self.site.versioned_dir.as_ref().map(PathBuf::from),
            static_dir: self.site.static_dir.as_ref().map(PathBuf::from),
            minify: minify_override.unwrap_or(self.site.minify),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MERIDIO_TOML: &str = r#"
[site]
title = "Meridio"
tagline = "Traffic attraction and distribution"
url = "https://meridio.nordix.org/"
edit_url = "https://github.com/nordix/meridio/tree/master/docs/"

[[versions]]
key = "current"
label = "latest"

[[versions]]
key = "v1.0.0"
label = "v1.0.0"
url_path = "v1.0.0"
banner = "unmaintained"

[[navbar]]
type = "version_dropdown"
position = "left"

[[navbar]]
type = "doc_link"
doc_id = "overview"
label = "Documentation"

[[navbar]]
type = "external_link"
href = "https://github.com/nordix/meridio"
label = "GitHub"
position = "right"

[search]
app_id = "E15FFWY7MY"
api_key = "public-key"
index_name = "meridio-nordix"

[[footer]]
title = "Docs"
links = [
    { label = "Overview", target = { doc = "overview" } },
    { label = "FAQ", target = { doc = "faq" } },
]

[[features]]
title = "Secondary Networking"
icon = "img/mountain.svg"
body = "<p>Isolation of the traffic and the network.</p>"
"#;

    #[test]
    fn parses_and_resolves_full_site_file() {
        let file: SiteFile = toml::from_str(MERIDIO_TOML).unwrap();
        let config = file.resolve().unwrap();

        assert_eq!(config.identity.title, "Meridio");
        assert_eq!(config.versions.len(), 2);
        assert_eq!(config.versions[1].route_path(), "/v1.0.0");
        assert_eq!(config.navbar.len(), 3);
        assert!(config.search.is_some());
        assert_eq!(file.features[0].title, "Secondary Networking");
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<SiteFile, _> =
            toml::from_str("[site]\ntitle = \"X\"\nurl = \"https://x.test/\"\nbogus = 1\n");

        assert!(result.is_err());
    }

    #[test]
    fn duplicate_version_keys_fail_resolution() {
        let toml_src = r#"
[site]
title = "X"
url = "https://x.test/"

[[versions]]
key = "v1"
label = "v1"

[[versions]]
key = "v1"
label = "v1 again"
url_path = "v1"
"#;

        let file: SiteFile = toml::from_str(toml_src).unwrap();

        assert!(matches!(
            file.resolve(),
            Err(ConfigurationError::DuplicateVersionKey(_))
        ));
    }
}
