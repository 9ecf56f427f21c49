//! Static site builder.
//!
//! Consumes a resolved [`SiteConfig`] plus the landing-page feature
//! layout and writes the generated site: one page subtree per declared
//! version, sidebar navigation, search manifests, sitemap and assets.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use strata_config::{
    BannerPolicy, BrokenLinkPolicy, LinkTarget, NavItem, NavPosition, SiteConfig,
    VersionDescriptor,
};
use strata_features::LayoutTree;

use crate::assets::Assets;
use crate::page::{parse_page, Heading, PageError};
use crate::sidebar::{build_sidebar, SidebarEntry, SidebarItem};
use crate::templates::{
    AnnouncementContext, FooterColumnContext, FooterContext, HomeContext, Link, LogoContext,
    NavbarContext, PageContext, SearchContext, TemplateEngine, VersionBanner, VersionOption,
};

/// Builder options not covered by the site configuration.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Output directory.
    pub out_dir: PathBuf,

    /// Root of archived version snapshots (`<root>/<key>` per version).
    /// Defaults to a `versioned` directory next to the docs root.
    pub versioned_root: Option<PathBuf>,

    /// Directory of static files (images, favicon) copied verbatim into
    /// the output root.
    pub static_dir: Option<PathBuf>,

    /// Minify the generated stylesheet.
    pub minify: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            versioned_root: None,
            static_dir: None,
            minify: true,
        }
    }
}

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of pages generated across all versions.
    pub pages: usize,

    /// Number of documentation versions built.
    pub versions: usize,

    /// Total build time in milliseconds.
    pub duration_ms: u64,

    /// Output directory.
    pub out_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to read docs tree: {0}")]
    Read(String),

    #[error("failed to parse page {path}: {source}")]
    Page {
        path: String,
        #[source]
        source: PageError,
    },

    #[error("failed to render template: {0}")]
    Template(String),

    #[error("failed to write output: {0}")]
    Write(String),

    #[error("navigation references documents that do not exist: {0:?}")]
    BrokenLinks(Vec<String>),
}

/// A discovered page of one version.
#[derive(Debug)]
struct DocPage {
    /// Source path relative to the version's docs root.
    source_rel: PathBuf,
    slug: String,
    title: String,
    sidebar_label: String,
    description: Option<String>,
    position: i32,
    hidden: bool,
    markdown: String,
    html: String,
    headings: Vec<Heading>,
}

/// Static site builder.
pub struct SiteBuilder {
    config: SiteConfig,
    features: LayoutTree,
    options: BuildOptions,
    templates: TemplateEngine,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig, features: LayoutTree, options: BuildOptions) -> Self {
        Self {
            config,
            features,
            options,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the whole site.
    pub async fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.options.out_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let mut total_pages = 0;
        let mut all_urls: Vec<String> = vec![self.config.identity.base_path.clone()];
        let mut current_slugs: HashSet<String> = HashSet::new();

        for version in &self.config.versions {
            let source = self.version_source_dir(version);
            let pages = self.discover_pages(&source)?;

            tracing::info!(
                "Building version {} ({} pages) from {}",
                version.key,
                pages.len(),
                source.display()
            );

            if version.is_current() {
                current_slugs = pages.iter().map(|p| p.slug.clone()).collect();
            }

            let sidebar = self.version_sidebar(version, &pages);
            let navbar = self.navbar_context(version);
            let footer = self.footer_context();

            let results: Vec<Result<(), BuildError>> = pages
                .par_iter()
                .map(|page| self.build_page(version, page, &sidebar, &navbar, &footer))
                .collect();
            for result in results {
                result?;
                total_pages += 1;
            }

            self.write_search_manifest(version, &pages)?;
            if !version.is_current() {
                self.write_version_index(version, &pages)?;
            }

            all_urls.extend(
                pages
                    .iter()
                    .filter(|p| !p.hidden)
                    .map(|p| self.config.page_url(version, &p.slug)),
            );
        }

        self.check_nav_targets(&current_slugs)?;
        self.write_home()?;
        self.write_assets()?;
        self.copy_static_files()?;
        self.write_sitemap(&all_urls)?;

        Ok(BuildReport {
            pages: total_pages,
            versions: self.config.versions.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            out_dir: self.options.out_dir.clone(),
        })
    }

    /// Source directory of a version's documentation tree.
    fn version_source_dir(&self, version: &VersionDescriptor) -> PathBuf {
        if version.is_current() {
            self.config.docs_root.clone()
        } else {
            let root = self.options.versioned_root.clone().unwrap_or_else(|| {
                self.config
                    .docs_root
                    .parent()
                    .unwrap_or(Path::new(""))
                    .join("versioned")
            });
            root.join(&version.key)
        }
    }

    /// Discover and parse all pages of one version, ordered by
    /// position then title.
    fn discover_pages(&self, source: &Path) -> Result<Vec<DocPage>, BuildError> {
        if !source.is_dir() {
            return Err(BuildError::Read(format!(
                "docs directory not found: {}",
                source.display()
            )));
        }

        let mut pages = Vec::new();

        for entry in WalkDir::new(source)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" && ext != "mdx" {
                continue;
            }

            let content = fs::read_to_string(path)
                .map_err(|e| BuildError::Read(format!("{}: {}", path.display(), e)))?;
            let parsed = parse_page(&content).map_err(|e| BuildError::Page {
                path: path.display().to_string(),
                source: e,
            })?;

            let source_rel = path.strip_prefix(source).unwrap_or(path).to_path_buf();
            let fm = parsed.frontmatter;

            let stem = source_rel
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("index")
                .to_string();
            let title = fm.as_ref().map(|f| f.title.clone()).unwrap_or_else(|| stem.clone());
            let slug = fm
                .as_ref()
                .and_then(|f| f.slug.clone())
                .unwrap_or_else(|| default_slug(&source_rel, &stem));

            pages.push(DocPage {
                slug,
                sidebar_label: fm
                    .as_ref()
                    .and_then(|f| f.sidebar_label.clone())
                    .unwrap_or_else(|| title.clone()),
                title,
                description: fm.as_ref().and_then(|f| f.description.clone()),
                position: fm.as_ref().and_then(|f| f.position).unwrap_or(i32::MAX),
                hidden: fm.as_ref().map(|f| f.hidden).unwrap_or(false),
                markdown: parsed.markdown,
                html: parsed.html,
                headings: parsed.headings,
                source_rel,
            });
        }

        pages.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.title.cmp(&b.title)));

        Ok(pages)
    }

    /// Sidebar tree for one version.
    fn version_sidebar(&self, version: &VersionDescriptor, pages: &[DocPage]) -> Vec<SidebarItem> {
        let entries: Vec<SidebarEntry> = pages
            .iter()
            .filter(|p| !p.hidden)
            .map(|p| SidebarEntry {
                label: p.sidebar_label.clone(),
                url: self.config.page_url(version, &p.slug),
                section: p
                    .source_rel
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .and_then(|parent| parent.components().next())
                    .map(|c| c.as_os_str().to_string_lossy().to_string()),
                position: p.position,
            })
            .collect();

        build_sidebar(&entries)
    }

    /// Navbar context for pages of a version.
    fn navbar_context(&self, active: &VersionDescriptor) -> NavbarContext {
        let current = self.config.current_version();
        let mut navbar = NavbarContext {
            title: self.config.identity.title.clone(),
            logo: self.config.extras.logo.as_ref().map(|l| LogoContext {
                alt: l.alt.clone(),
                src: l.src.clone(),
            }),
            ..Default::default()
        };

        for item in &self.config.navbar {
            match item {
                NavItem::VersionDropdown { position } => {
                    navbar.dropdown_position = match position {
                        NavPosition::Left => "left".to_string(),
                        NavPosition::Right => "right".to_string(),
                    };
                    navbar.versions = self
                        .config
                        .versions
                        .iter()
                        .map(|v| VersionOption {
                            label: v.label.clone(),
                            url: self.version_root_url(v),
                            active: v.key == active.key,
                        })
                        .collect();
                }
                NavItem::DocLink {
                    doc_id,
                    label,
                    position,
                } => {
                    let link = Link {
                        label: label.clone(),
                        url: self.config.page_url(current, doc_id),
                        external: false,
                    };
                    match position {
                        NavPosition::Left => navbar.left.push(link),
                        NavPosition::Right => navbar.right.push(link),
                    }
                }
                NavItem::ExternalLink {
                    href,
                    label,
                    position,
                } => {
                    let link = Link {
                        label: label.clone().unwrap_or_else(|| href.clone()),
                        url: href.clone(),
                        external: true,
                    };
                    match position {
                        NavPosition::Left => navbar.left.push(link),
                        NavPosition::Right => navbar.right.push(link),
                    }
                }
            }
        }

        navbar
    }

    fn footer_context(&self) -> FooterContext {
        let current = self.config.current_version();

        FooterContext {
            columns: self
                .config
                .footer
                .iter()
                .map(|column| FooterColumnContext {
                    title: column.title.clone(),
                    links: column
                        .links
                        .iter()
                        .map(|link| match &link.target {
                            LinkTarget::Doc(id) => Link {
                                label: link.label.clone(),
                                url: self.config.page_url(current, id),
                                external: false,
                            },
                            LinkTarget::External(href) => Link {
                                label: link.label.clone(),
                                url: href.clone(),
                                external: true,
                            },
                        })
                        .collect(),
                })
                .collect(),
            copyright: self.config.extras.copyright.clone(),
        }
    }

    /// Site-relative root URL of a version.
    fn version_root_url(&self, version: &VersionDescriptor) -> String {
        let base = self.config.identity.base_path.trim_end_matches('/');
        let route = version.route_path();
        if route.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}{}/", base, route)
        }
    }

    /// Render one page and write it under its version's subtree.
    fn build_page(
        &self,
        version: &VersionDescriptor,
        page: &DocPage,
        sidebar: &[SidebarItem],
        navbar: &NavbarContext,
        footer: &FooterContext,
    ) -> Result<(), BuildError> {
        let current = self.config.current_version();

        // Archived snapshots are never edited in place.
        let edit_url = if version.is_current() {
            self.config
                .edit_link(&page.source_rel.to_string_lossy())
        } else {
            None
        };

        let banner = match version.banner {
            BannerPolicy::Unmaintained => Some(VersionBanner {
                label: version.label.clone(),
                current_url: self.version_root_url(current),
            }),
            BannerPolicy::None => None,
        };

        let context = PageContext {
            page_title: format!("{} - {}", page.title, self.config.identity.title),
            site_title: self.config.identity.title.clone(),
            description: page.description.clone(),
            content: page.html.clone(),
            sidebar: sidebar.to_vec(),
            toc: page.headings.clone(),
            base_url: self.config.identity.base_path.clone(),
            favicon: self.config.extras.favicon.clone(),
            navbar: navbar.clone(),
            footer: footer.clone(),
            announcement: self.announcement_context(),
            search: self.search_context(),
            edit_url,
            banner,
        };

        let html = self
            .templates
            .render_doc(&context)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        let output = self.page_output_path(version, &page.slug);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }
        fs::write(&output, html).map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Output path of a page: `<out>/<route>/docs/<slug>/index.html`.
    fn page_output_path(&self, version: &VersionDescriptor, slug: &str) -> PathBuf {
        let mut path = self.options.out_dir.clone();
        let route = version.route_path();
        if !route.is_empty() {
            path = path.join(route.trim_start_matches('/'));
        }
        path = path.join("docs");
        for part in slug.split('/').filter(|p| !p.is_empty()) {
            path = path.join(part);
        }
        path.join("index.html")
    }

    fn announcement_context(&self) -> Option<AnnouncementContext> {
        self.config
            .extras
            .announcement
            .as_ref()
            .map(|a| AnnouncementContext {
                html: a.html.clone(),
                background: a.background.clone(),
            })
    }

    fn search_context(&self) -> Option<SearchContext> {
        self.config.search.as_ref().map(|s| SearchContext {
            app_id: s.app_id.clone(),
            api_key: s.api_key.clone(),
            index_name: s.index_name.clone(),
        })
    }

    /// Verify navbar and footer doc targets against the current version's
    /// pages, honoring the configured broken-link policy.
    fn check_nav_targets(&self, current_slugs: &HashSet<String>) -> Result<(), BuildError> {
        let mut targets: Vec<&str> = Vec::new();
        for item in &self.config.navbar {
            if let NavItem::DocLink { doc_id, .. } = item {
                targets.push(doc_id);
            }
        }
        for column in &self.config.footer {
            for link in &column.links {
                if let LinkTarget::Doc(id) = &link.target {
                    targets.push(id);
                }
            }
        }

        let broken: Vec<String> = targets
            .into_iter()
            .filter(|id| !current_slugs.contains(*id))
            .map(|id| id.to_string())
            .collect();

        if broken.is_empty() {
            return Ok(());
        }

        match self.config.extras.broken_links {
            BrokenLinkPolicy::Ignore => Ok(()),
            BrokenLinkPolicy::Warn => {
                for id in &broken {
                    tracing::warn!("navigation references unknown document: {}", id);
                }
                Ok(())
            }
            BrokenLinkPolicy::Error => Err(BuildError::BrokenLinks(broken)),
        }
    }

    /// Render the landing page at the site root.
    fn write_home(&self) -> Result<(), BuildError> {
        let current = self.config.current_version();

        let context = HomeContext {
            page_title: self.config.identity.title.clone(),
            site_title: self.config.identity.title.clone(),
            tagline: self.config.identity.tagline.clone(),
            base_url: self.config.identity.base_path.clone(),
            favicon: self.config.extras.favicon.clone(),
            navbar: self.navbar_context(current),
            footer: self.footer_context(),
            announcement: self.announcement_context(),
            search: self.search_context(),
            features: self.features.clone(),
        };

        let html = self
            .templates
            .render_home(&context)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        fs::write(self.options.out_dir.join("index.html"), html)
            .map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Redirect stub at an archived version's root, pointing at its first
    /// visible page.
    fn write_version_index(
        &self,
        version: &VersionDescriptor,
        pages: &[DocPage],
    ) -> Result<(), BuildError> {
        let Some(first) = pages.iter().find(|p| !p.hidden) else {
            return Ok(());
        };
        let target = self.config.page_url(version, &first.slug);

        let html = format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
             <meta http-equiv=\"refresh\" content=\"0; url={target}\">\
             </head><body><a href=\"{target}\">{target}</a></body></html>\n"
        );

        let dir = self
            .options
            .out_dir
            .join(version.route_path().trim_start_matches('/'));
        fs::create_dir_all(&dir).map_err(|e| BuildError::Write(e.to_string()))?;
        fs::write(dir.join("index.html"), html).map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Per-version search manifest consumed by the hosted search provider
    /// tooling. No indexing happens here.
    fn write_search_manifest(
        &self,
        version: &VersionDescriptor,
        pages: &[DocPage],
    ) -> Result<(), BuildError> {
        let entries: Vec<serde_json::Value> = pages
            .iter()
            .filter(|p| !p.hidden)
            .map(|page| {
                let excerpt = page
                    .markdown
                    .lines()
                    .filter(|l| !l.starts_with('#') && !l.starts_with("```"))
                    .filter(|l| !l.trim().is_empty())
                    .take(10)
                    .collect::<Vec<_>>()
                    .join(" ");

                serde_json::json!({
                    "title": page.title,
                    "description": page.description,
                    "url": self.config.page_url(version, &page.slug),
                    "excerpt": excerpt,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let dir = self
            .options
            .out_dir
            .join(version.route_path().trim_start_matches('/'));
        fs::create_dir_all(&dir).map_err(|e| BuildError::Write(e.to_string()))?;
        fs::write(dir.join("search-index.json"), json)
            .map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Write the generated stylesheet and script.
    fn write_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.options.out_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let css = Assets::stylesheet();
        let css = if self.options.minify {
            Assets::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("site.css"), css)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(assets_dir.join("site.js"), Assets::script())
            .map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Copy the static files directory into the output root.
    fn copy_static_files(&self) -> Result<(), BuildError> {
        let Some(static_dir) = &self.options.static_dir else {
            return Ok(());
        };
        if !static_dir.is_dir() {
            tracing::warn!("static dir not found: {}", static_dir.display());
            return Ok(());
        }

        for entry in WalkDir::new(static_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let rel = path.strip_prefix(static_dir).unwrap_or(path);
            let dest = self.options.out_dir.join(rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
            }
            fs::copy(path, &dest).map_err(|e| BuildError::Write(e.to_string()))?;
        }

        Ok(())
    }

    /// Write `sitemap.xml` (per the configured policy) and `robots.txt`.
    fn write_sitemap(&self, urls: &[String]) -> Result<(), BuildError> {
        let policy = &self.config.extras.sitemap;
        let origin = self.config.site_url.as_str().trim_end_matches('/');

        let entries: Vec<String> = urls
            .iter()
            .map(|url| {
                format!(
                    "  <url>\n    <loc>{origin}{url}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
                    policy.changefreq, policy.priority
                )
            })
            .collect();

        let sitemap = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>\n",
            entries.join("\n")
        );

        fs::write(self.options.out_dir.join(&policy.filename), sitemap)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {origin}{}{}\n",
            self.config.identity.base_path, policy.filename
        );
        fs::write(self.options.out_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::Write(e.to_string()))
    }
}

/// Default slug of a page: its relative path without extension, with
/// `index` files collapsing onto their directory.
fn default_slug(source_rel: &Path, stem: &str) -> String {
    let parent = source_rel
        .parent()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();

    match (parent.is_empty(), stem == "index") {
        (true, true) => "index".to_string(),
        (true, false) => stem.to_string(),
        (false, true) => parent,
        (false, false) => format!("{}/{}", parent, stem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_config::{
        FooterColumn, FooterLink, SearchProvider, SiteExtras, SiteIdentity,
    };
    use strata_features::{render_features, FeatureCard, IconRef, Markup};
    use tempfile::tempdir;

    fn version(key: &str, url_path: &str, banner: BannerPolicy) -> VersionDescriptor {
        VersionDescriptor {
            key: key.to_string(),
            label: key.to_string(),
            url_path: url_path.to_string(),
            banner,
        }
    }

    fn site_config(docs_root: PathBuf, versions: Vec<VersionDescriptor>) -> SiteConfig {
        SiteConfig::build(
            SiteIdentity {
                title: "Meridio".to_string(),
                tagline: "Traffic attraction and distribution".to_string(),
                url: "https://meridio.nordix.org/".to_string(),
                base_path: "/".to_string(),
            },
            docs_root,
            versions,
            vec![
                NavItem::VersionDropdown {
                    position: NavPosition::Left,
                },
                NavItem::DocLink {
                    doc_id: "overview".to_string(),
                    label: "Documentation".to_string(),
                    position: NavPosition::Left,
                },
            ],
            None,
            vec![],
            SiteExtras::default(),
        )
        .unwrap()
    }

    fn features() -> LayoutTree {
        render_features(&[FeatureCard {
            title: "Secondary Networking".to_string(),
            icon: IconRef::from("img/mountain.svg"),
            body: Markup::from("<p>Isolation of traffic.</p>"),
        }])
    }

    fn write_page(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn builds_versioned_site() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let versioned = temp.path().join("versioned");
        let out = temp.path().join("dist");

        write_page(&docs, "overview.md", "---\ntitle: Overview\nposition: 1\n---\n# Overview\n");
        write_page(
            &versioned.join("v1.0.0"),
            "overview.md",
            "---\ntitle: Overview\n---\n# Old Overview\n",
        );

        let config = site_config(
            docs,
            vec![
                version("current", "", BannerPolicy::None),
                version("v1.0.0", "v1.0.0", BannerPolicy::None),
            ],
        );

        let builder = SiteBuilder::new(
            config,
            features(),
            BuildOptions {
                out_dir: out.clone(),
                versioned_root: Some(versioned),
                ..Default::default()
            },
        );
        let report = builder.build().await.unwrap();

        assert_eq!(report.pages, 2);
        assert_eq!(report.versions, 2);
        assert!(out.join("index.html").exists());
        assert!(out.join("docs/overview/index.html").exists());
        assert!(out.join("v1.0.0/docs/overview/index.html").exists());
        assert!(out.join("v1.0.0/index.html").exists());
        assert!(out.join("sitemap.xml").exists());
        assert!(out.join("assets/site.css").exists());
    }

    #[tokio::test]
    async fn landing_page_carries_feature_grid() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        write_page(&docs, "overview.md", "---\ntitle: Overview\n---\n# Overview\n");

        let config = site_config(docs, vec![version("current", "", BannerPolicy::None)]);
        let builder = SiteBuilder::new(
            config,
            features(),
            BuildOptions {
                out_dir: out.clone(),
                ..Default::default()
            },
        );
        builder.build().await.unwrap();

        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("Secondary Networking"));
        assert!(home.contains("Traffic attraction and distribution"));
    }

    #[tokio::test]
    async fn banner_marks_only_unmaintained_versions() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let versioned = temp.path().join("versioned");
        let out = temp.path().join("dist");

        write_page(&docs, "overview.md", "---\ntitle: Overview\n---\n# Overview\n");
        write_page(
            &versioned.join("v1.0.0"),
            "overview.md",
            "---\ntitle: Overview\n---\n# Old\n",
        );

        let config = site_config(
            docs,
            vec![
                version("current", "", BannerPolicy::None),
                version("v1.0.0", "v1.0.0", BannerPolicy::Unmaintained),
            ],
        );
        let builder = SiteBuilder::new(
            config,
            features(),
            BuildOptions {
                out_dir: out.clone(),
                versioned_root: Some(versioned),
                ..Default::default()
            },
        );
        builder.build().await.unwrap();

        let current = fs::read_to_string(out.join("docs/overview/index.html")).unwrap();
        let archived = fs::read_to_string(out.join("v1.0.0/docs/overview/index.html")).unwrap();

        assert!(!current.contains("no longer actively maintained"));
        assert!(archived.contains("no longer actively maintained"));
    }

    #[tokio::test]
    async fn writes_search_manifest_per_version() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        write_page(
            &docs,
            "overview.md",
            "---\ntitle: Overview\ndescription: What Meridio does\n---\n# Overview\n\nSearchable body.\n",
        );

        let config = site_config(docs, vec![version("current", "", BannerPolicy::None)]);
        let builder = SiteBuilder::new(
            config,
            features(),
            BuildOptions {
                out_dir: out.clone(),
                ..Default::default()
            },
        );
        builder.build().await.unwrap();

        let manifest = fs::read_to_string(out.join("search-index.json")).unwrap();
        assert!(manifest.contains("Overview"));
        assert!(manifest.contains("Searchable body."));
        assert!(manifest.contains("/docs/overview/"));
    }

    #[tokio::test]
    async fn hidden_pages_stay_out_of_sidebar_and_search() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        write_page(&docs, "overview.md", "---\ntitle: Overview\n---\n# Overview\n");
        write_page(
            &docs,
            "draft.md",
            "---\ntitle: Draft Page\nhidden: true\n---\n# Draft\n",
        );

        let config = site_config(docs, vec![version("current", "", BannerPolicy::None)]);
        let builder = SiteBuilder::new(
            config,
            features(),
            BuildOptions {
                out_dir: out.clone(),
                ..Default::default()
            },
        );
        builder.build().await.unwrap();

        let page = fs::read_to_string(out.join("docs/overview/index.html")).unwrap();
        let manifest = fs::read_to_string(out.join("search-index.json")).unwrap();

        assert!(!page.contains("Draft Page"));
        assert!(!manifest.contains("Draft Page"));
        // Hidden pages are still rendered, just unlisted.
        assert!(out.join("docs/draft/index.html").exists());
    }

    #[tokio::test]
    async fn broken_doc_targets_fail_under_error_policy() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        write_page(&docs, "overview.md", "---\ntitle: Overview\n---\n# Overview\n");

        let mut extras = SiteExtras::default();
        extras.broken_links = BrokenLinkPolicy::Error;

        let config = SiteConfig::build(
            SiteIdentity {
                title: "Meridio".to_string(),
                tagline: String::new(),
                url: "https://meridio.nordix.org/".to_string(),
                base_path: "/".to_string(),
            },
            docs,
            vec![version("current", "", BannerPolicy::None)],
            vec![],
            None,
            vec![FooterColumn {
                title: "Docs".to_string(),
                links: vec![FooterLink {
                    label: "FAQ".to_string(),
                    target: LinkTarget::Doc("faq".to_string()),
                }],
            }],
            extras,
        )
        .unwrap();

        let builder = SiteBuilder::new(
            config,
            LayoutTree::default(),
            BuildOptions {
                out_dir: out,
                ..Default::default()
            },
        );
        let result = builder.build().await;

        assert!(matches!(result, Err(BuildError::BrokenLinks(ref ids)) if ids == &["faq"]));
    }

    #[tokio::test]
    async fn embeds_search_provider_config() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");

        write_page(&docs, "overview.md", "---\ntitle: Overview\n---\n# Overview\n");

        let config = SiteConfig::build(
            SiteIdentity {
                title: "Meridio".to_string(),
                tagline: String::new(),
                url: "https://meridio.nordix.org/".to_string(),
                base_path: "/".to_string(),
            },
            docs,
            vec![version("current", "", BannerPolicy::None)],
            vec![],
            Some(SearchProvider {
                app_id: "E15FFWY7MY".to_string(),
                api_key: "public-key".to_string(),
                index_name: "meridio-nordix".to_string(),
            }),
            vec![],
            SiteExtras::default(),
        )
        .unwrap();

        let builder = SiteBuilder::new(
            config,
            LayoutTree::default(),
            BuildOptions {
                out_dir: out.clone(),
                ..Default::default()
            },
        );
        builder.build().await.unwrap();

        let page = fs::read_to_string(out.join("docs/overview/index.html")).unwrap();
        assert!(page.contains("__SITE_SEARCH__"));
        assert!(page.contains("meridio-nordix"));
    }
}
