//! Template engine and typed render contexts.

use minijinja::Environment;
use serde::Serialize;

use strata_features::LayoutTree;

use crate::page::Heading;
use crate::sidebar::SidebarItem;

/// A plain navbar or footer link.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
    /// External links open in a new tab.
    pub external: bool,
}

/// One entry of the version dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct VersionOption {
    pub label: String,
    pub url: String,
    pub active: bool,
}

/// Navbar logo.
#[derive(Debug, Clone, Serialize)]
pub struct LogoContext {
    pub alt: String,
    pub src: String,
}

/// Rendered navigation bar.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavbarContext {
    pub title: String,
    pub logo: Option<LogoContext>,
    pub left: Vec<Link>,
    pub right: Vec<Link>,
    /// Version dropdown entries; empty hides the dropdown.
    pub versions: Vec<VersionOption>,
    /// Which side the dropdown sits on ("left"/"right").
    pub dropdown_position: String,
}

/// One footer column.
#[derive(Debug, Clone, Serialize)]
pub struct FooterColumnContext {
    pub title: String,
    pub links: Vec<Link>,
}

/// Rendered footer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FooterContext {
    pub columns: Vec<FooterColumnContext>,
    pub copyright: Option<String>,
}

/// Site-wide announcement bar.
#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementContext {
    pub html: String,
    pub background: Option<String>,
}

/// Hosted search provider wiring, emitted as a JSON config block.
#[derive(Debug, Clone, Serialize)]
pub struct SearchContext {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
}

/// Banner shown on pages of an unmaintained version.
#[derive(Debug, Clone, Serialize)]
pub struct VersionBanner {
    pub label: String,
    pub current_url: String,
}

/// Context for rendering a documentation page.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub page_title: String,
    pub site_title: String,
    pub description: Option<String>,
    pub content: String,
    pub sidebar: Vec<SidebarItem>,
    pub toc: Vec<Heading>,
    pub base_url: String,
    pub favicon: Option<String>,
    pub navbar: NavbarContext,
    pub footer: FooterContext,
    pub announcement: Option<AnnouncementContext>,
    pub search: Option<SearchContext>,
    pub edit_url: Option<String>,
    pub banner: Option<VersionBanner>,
}

/// Context for rendering the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct HomeContext {
    pub page_title: String,
    pub site_title: String,
    pub tagline: String,
    pub base_url: String,
    pub favicon: Option<String>,
    pub navbar: NavbarContext,
    pub footer: FooterContext,
    pub announcement: Option<AnnouncementContext>,
    pub search: Option<SearchContext>,
    pub features: LayoutTree,
}

/// Template engine holding the built-in site templates.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("doc.html", DOC_TEMPLATE),
            ("home.html", HOME_TEMPLATE),
            ("navbar.html", NAVBAR_TEMPLATE),
            ("sidebar.html", SIDEBAR_TEMPLATE),
            ("footer.html", FOOTER_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("built-in template must parse");
        }

        Self { env }
    }

    /// Render a documentation page.
    pub fn render_doc(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        self.env.get_template("doc.html")?.render(context)
    }

    /// Render the landing page.
    pub fn render_home(&self, context: &HomeContext) -> Result<String, minijinja::Error> {
        self.env.get_template("home.html")?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ page_title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}{% if favicon %}<link rel="icon" href="{{ base_url }}{{ favicon }}">
  {% endif %}<link rel="stylesheet" href="{{ base_url }}assets/site.css">
  {% if search %}<script>window.__SITE_SEARCH__ = {{ search | tojson }};</script>
  {% endif %}</head>
<body>
  {% if announcement %}
  <div class="announcement"{% if announcement.background %} style="background: {{ announcement.background }}"{% endif %}>{{ announcement.html | safe }}</div>
  {% endif %}
  {% include "navbar.html" %}
  {% block content %}{% endblock %}
  {% include "footer.html" %}
  <script src="{{ base_url }}assets/site.js"></script>
</body>
</html>"##;

const NAVBAR_TEMPLATE: &str = r##"<header class="navbar">
  <div class="navbar-left">
    <a class="navbar-brand" href="{{ base_url }}">
      {% if navbar.logo %}<img class="navbar-logo" src="{{ base_url }}{{ navbar.logo.src }}" alt="{{ navbar.logo.alt }}">{% endif %}
      <span>{{ navbar.title }}</span>
    </a>
    {% if navbar.versions and navbar.dropdown_position == "left" %}
    <div class="version-dropdown">
      <button class="version-toggle" type="button">{% for v in navbar.versions %}{% if v.active %}{{ v.label }}{% endif %}{% endfor %} ▾</button>
      <ul class="version-menu">
        {% for v in navbar.versions %}
        <li{% if v.active %} class="active"{% endif %}><a href="{{ v.url }}">{{ v.label }}</a></li>
        {% endfor %}
      </ul>
    </div>
    {% endif %}
    {% for link in navbar.left %}
    <a class="navbar-link" href="{{ link.url }}"{% if link.external %} target="_blank" rel="noopener noreferrer"{% endif %}>{{ link.label }}</a>
    {% endfor %}
  </div>
  <div class="navbar-right">
    {% for link in navbar.right %}
    <a class="navbar-link" href="{{ link.url }}"{% if link.external %} target="_blank" rel="noopener noreferrer"{% endif %}>{{ link.label }}</a>
    {% endfor %}
    {% if navbar.versions and navbar.dropdown_position == "right" %}
    <div class="version-dropdown">
      <button class="version-toggle" type="button">{% for v in navbar.versions %}{% if v.active %}{{ v.label }}{% endif %}{% endfor %} ▾</button>
      <ul class="version-menu">
        {% for v in navbar.versions %}
        <li{% if v.active %} class="active"{% endif %}><a href="{{ v.url }}">{{ v.label }}</a></li>
        {% endfor %}
      </ul>
    </div>
    {% endif %}
  </div>
</header>"##;

const SIDEBAR_TEMPLATE: &str = r##"<ul class="sidebar-list">
{% for item in sidebar %}
  <li class="sidebar-item">
    {% if item.url %}<a href="{{ item.url }}">{{ item.label }}</a>
    {% else %}<span class="sidebar-section">{{ item.label }}</span>{% endif %}
    {% if item.items %}
    <ul class="sidebar-children">
      {% for child in item.items %}
      <li class="sidebar-item"><a href="{{ child.url }}">{{ child.label }}</a></li>
      {% endfor %}
    </ul>
    {% endif %}
  </li>
{% endfor %}
</ul>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="footer">
  <div class="footer-columns">
    {% for column in footer.columns %}
    <div class="footer-column">
      <h4>{{ column.title }}</h4>
      <ul>
        {% for link in column.links %}
        <li><a href="{{ link.url }}"{% if link.external %} target="_blank" rel="noopener noreferrer"{% endif %}>{{ link.label }}</a></li>
        {% endfor %}
      </ul>
    </div>
    {% endfor %}
  </div>
  {% if footer.copyright %}<div class="footer-copyright">{{ footer.copyright }}</div>{% endif %}
</footer>"##;

const DOC_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% if banner %}
<div class="version-banner">
  This is documentation for {{ banner.label }}, which is no longer actively maintained.
  <a href="{{ banner.current_url }}">Switch to the latest version</a>.
</div>
{% endif %}
<div class="layout">
  <nav class="sidebar">
    {% include "sidebar.html" %}
  </nav>
  <main class="main">
    <article class="doc">
      <div class="content">
        {{ content | safe }}
      </div>
      {% if edit_url %}
      <a class="edit-link" href="{{ edit_url }}" target="_blank" rel="noopener noreferrer">Edit this page</a>
      {% endif %}
    </article>
    {% if toc %}
    <aside class="toc">
      <h2>On this page</h2>
      <ul>
      {% for entry in toc %}
        <li class="toc-level-{{ entry.level }}">
          <a href="#{{ entry.anchor }}">{{ entry.title }}</a>
        </li>
      {% endfor %}
      </ul>
    </aside>
    {% endif %}
  </main>
</div>
{% endblock %}"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<main class="home">
  <section class="hero">
    <h1>{{ site_title }}</h1>
    <p class="tagline">{{ tagline }}</p>
  </section>
  {% if features.cells %}
  <section class="features">
    <div class="container">
      <div class="row">
        {% for cell in features.cells %}
        <div class="col col-{{ cell.span }}">
          <div class="feature-icon"><img src="{{ base_url }}{{ cell.icon }}" alt="" role="img"></div>
          <h3>{{ cell.title }}</h3>
          <div class="feature-body">{{ cell.body | safe }}</div>
        </div>
        {% endfor %}
      </div>
    </div>
  </section>
  {% endif %}
</main>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use strata_features::{render_features, FeatureCard, IconRef, Markup};

    fn navbar() -> NavbarContext {
        NavbarContext {
            title: "Meridio".to_string(),
            dropdown_position: "left".to_string(),
            ..Default::default()
        }
    }

    fn page_context() -> PageContext {
        PageContext {
            page_title: "Overview - Meridio".to_string(),
            site_title: "Meridio".to_string(),
            description: None,
            content: "<p>Hello world</p>".to_string(),
            sidebar: vec![],
            toc: vec![],
            base_url: "/".to_string(),
            favicon: None,
            navbar: navbar(),
            footer: FooterContext::default(),
            announcement: None,
            search: None,
            edit_url: None,
            banner: None,
        }
    }

    #[test]
    fn renders_basic_doc_page() {
        let engine = TemplateEngine::new();

        let html = engine.render_doc(&page_context()).unwrap();

        assert!(html.contains("<title>Overview - Meridio</title>"));
        assert!(html.contains("<p>Hello world</p>"));
    }

    #[test]
    fn renders_sidebar_sections() {
        let engine = TemplateEngine::new();
        let mut ctx = page_context();
        ctx.sidebar = vec![
            SidebarItem {
                label: "Overview".to_string(),
                url: "/docs/overview/".to_string(),
                items: vec![],
            },
            SidebarItem {
                label: "Concepts".to_string(),
                url: String::new(),
                items: vec![SidebarItem {
                    label: "Trench".to_string(),
                    url: "/docs/concepts/trench/".to_string(),
                    items: vec![],
                }],
            },
        ];

        let html = engine.render_doc(&ctx).unwrap();

        assert!(html.contains("/docs/overview/"));
        assert!(html.contains("sidebar-section"));
        assert!(html.contains("Trench"));
    }

    #[test]
    fn renders_version_banner_and_edit_link() {
        let engine = TemplateEngine::new();
        let mut ctx = page_context();
        ctx.banner = Some(VersionBanner {
            label: "v1.0.0".to_string(),
            current_url: "/".to_string(),
        });
        ctx.edit_url =
            Some("https://github.com/nordix/meridio/tree/master/docs/overview.md".to_string());

        let html = engine.render_doc(&ctx).unwrap();

        assert!(html.contains("no longer actively maintained"));
        assert!(html.contains("Edit this page"));
    }

    #[test]
    fn embeds_search_config_as_json() {
        let engine = TemplateEngine::new();
        let mut ctx = page_context();
        ctx.search = Some(SearchContext {
            app_id: "E15FFWY7MY".to_string(),
            api_key: "public-key".to_string(),
            index_name: "meridio-nordix".to_string(),
        });

        let html = engine.render_doc(&ctx).unwrap();

        assert!(html.contains("__SITE_SEARCH__"));
        assert!(html.contains("E15FFWY7MY"));
    }

    #[test]
    fn renders_feature_grid_on_home() {
        let engine = TemplateEngine::new();

        let features = render_features(&[
            FeatureCard {
                title: "Secondary Networking".to_string(),
                icon: IconRef::from("img/mountain.svg"),
                body: Markup::from("<p>Isolation of traffic.</p>"),
            },
            FeatureCard {
                title: "Traffic Attraction".to_string(),
                icon: IconRef::from("img/tree.svg"),
                body: Markup::from("<p>VIP announcement.</p>"),
            },
        ]);

        let ctx = HomeContext {
            page_title: "Meridio".to_string(),
            site_title: "Meridio".to_string(),
            tagline: "Traffic attraction and distribution".to_string(),
            base_url: "/".to_string(),
            favicon: None,
            navbar: navbar(),
            footer: FooterContext::default(),
            announcement: None,
            search: None,
            features,
        };

        let html = engine.render_home(&ctx).unwrap();

        assert!(html.contains("Secondary Networking"));
        assert!(html.contains("col-6"));
        assert!(html.contains("<p>Isolation of traffic.</p>"));
    }
}
