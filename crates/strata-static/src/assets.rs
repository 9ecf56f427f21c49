//! Generated site assets: stylesheet and navigation script.

/// Asset generation utilities.
pub struct Assets;

impl Assets {
    /// The site stylesheet.
    pub fn stylesheet() -> String {
        SITE_CSS.to_string()
    }

    /// The site navigation script.
    pub fn script() -> String {
        SITE_JS.to_string()
    }

    /// Minify CSS with lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const SITE_CSS: &str = r#"/* strata default theme */

:root {
  --sidebar-width: 280px;
  --toc-width: 200px;
  --content-max-width: 800px;
  --ink: #1c1e21;
  --ink-muted: #606770;
  --surface: #ffffff;
  --surface-alt: #f5f6f7;
  --line: #dadde1;
  --brand: #2e6fd8;
  --brand-dark: #1f4f9e;
  --warn-bg: #fff8e6;
  --warn-edge: #e6a700;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--surface);
  color: var(--ink);
  line-height: 1.6;
}

/* Announcement bar */
.announcement {
  padding: 0.4rem 1rem;
  text-align: center;
  font-size: 0.875rem;
  background: #f2f7ff;
}

/* Navbar */
.navbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
  height: 3.75rem;
  border-bottom: 1px solid var(--line);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
}

.navbar-left,
.navbar-right {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--ink);
  text-decoration: none;
}

.navbar-logo {
  height: 2rem;
}

.navbar-link {
  color: var(--ink);
  text-decoration: none;
  font-size: 0.9375rem;
}

.navbar-link:hover {
  color: var(--brand);
}

/* Version dropdown */
.version-dropdown {
  position: relative;
}

.version-toggle {
  background: none;
  border: 1px solid var(--line);
  border-radius: 0.375rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  cursor: pointer;
}

.version-menu {
  display: none;
  position: absolute;
  top: 100%;
  left: 0;
  min-width: 8rem;
  background: var(--surface);
  border: 1px solid var(--line);
  border-radius: 0.375rem;
  list-style: none;
  padding: 0.25rem 0;
  z-index: 20;
}

.version-dropdown.open .version-menu {
  display: block;
}

.version-menu a {
  display: block;
  padding: 0.375rem 0.75rem;
  color: var(--ink);
  text-decoration: none;
  font-size: 0.875rem;
}

.version-menu a:hover,
.version-menu .active a {
  background: var(--surface-alt);
  color: var(--brand);
}

/* Version banner */
.version-banner {
  padding: 0.75rem 1.5rem;
  background: var(--warn-bg);
  border-bottom: 1px solid var(--warn-edge);
  font-size: 0.9375rem;
}

/* Docs layout */
.layout {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
  min-height: calc(100vh - 3.75rem);
}

.sidebar {
  background: var(--surface-alt);
  border-right: 1px solid var(--line);
  padding: 1.5rem 1rem;
  position: sticky;
  top: 0;
  overflow-y: auto;
}

.sidebar-list,
.sidebar-children {
  list-style: none;
}

.sidebar-children {
  margin-left: 0.75rem;
}

.sidebar-item a {
  display: block;
  padding: 0.375rem 0.75rem;
  color: var(--ink-muted);
  text-decoration: none;
  border-radius: 0.375rem;
  font-size: 0.9375rem;
}

.sidebar-item a:hover,
.sidebar-item a.active {
  background: var(--line);
  color: var(--ink);
}

.sidebar-section {
  display: block;
  padding: 0.75rem 0.75rem 0.25rem;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--ink-muted);
}

.main {
  display: grid;
  grid-template-columns: 1fr var(--toc-width);
  gap: 2rem;
  padding: 2rem;
  max-width: calc(var(--content-max-width) + var(--toc-width) + 4rem);
}

.doc {
  max-width: var(--content-max-width);
}

.content h1 {
  font-size: 2.25rem;
  margin-bottom: 1.5rem;
}

.content h2 {
  font-size: 1.5rem;
  margin: 2rem 0 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--line);
}

.content h3 {
  font-size: 1.25rem;
  margin: 1.5rem 0 0.75rem;
}

.content p,
.content ul,
.content ol {
  margin-bottom: 1rem;
}

.content ul,
.content ol {
  padding-left: 1.5rem;
}

.content a {
  color: var(--brand);
}

.content a:hover {
  color: var(--brand-dark);
}

.content pre {
  background: var(--surface-alt);
  border: 1px solid var(--line);
  border-radius: 0.5rem;
  padding: 1rem;
  overflow-x: auto;
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

.content code {
  font-family: ui-monospace, monospace;
  font-size: 0.875em;
  background: var(--surface-alt);
  padding: 0.125rem 0.375rem;
  border-radius: 0.25rem;
}

.content pre code {
  background: none;
  padding: 0;
}

.edit-link {
  display: inline-block;
  margin-top: 2rem;
  color: var(--brand);
  font-size: 0.875rem;
}

/* Table of contents */
.toc {
  position: sticky;
  top: 2rem;
  align-self: start;
}

.toc h2 {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--ink-muted);
  margin-bottom: 0.75rem;
}

.toc ul {
  list-style: none;
}

.toc a {
  font-size: 0.875rem;
  color: var(--ink-muted);
  text-decoration: none;
}

.toc a:hover {
  color: var(--ink);
}

.toc-level-3 {
  padding-left: 1rem;
}

/* Landing page */
.hero {
  padding: 4rem 2rem;
  text-align: center;
  background: var(--brand-dark);
  color: #fff;
}

.hero h1 {
  font-size: 3rem;
}

.tagline {
  font-size: 1.25rem;
  margin-top: 0.5rem;
}

.features {
  padding: 3rem 0;
}

.container {
  max-width: 1140px;
  margin: 0 auto;
  padding: 0 1rem;
}

.row {
  display: flex;
  flex-wrap: wrap;
  gap: 2rem 0;
}

.col {
  padding: 0 1rem;
  text-align: center;
}

.col-3 {
  width: 25%;
}

.col-4 {
  width: 33.333%;
}

.col-6 {
  width: 50%;
}

.col-12 {
  width: 100%;
}

.feature-icon img {
  height: 10rem;
}

.feature-body {
  text-align: left;
  color: var(--ink-muted);
}

/* Footer */
.footer {
  background: #242526;
  color: #ebedf0;
  padding: 2rem 1.5rem;
}

.footer-columns {
  display: flex;
  flex-wrap: wrap;
  gap: 3rem;
  max-width: 1140px;
  margin: 0 auto;
}

.footer-column h4 {
  margin-bottom: 0.75rem;
}

.footer-column ul {
  list-style: none;
}

.footer-column a {
  color: #dadde1;
  text-decoration: none;
  font-size: 0.9375rem;
}

.footer-column a:hover {
  color: #fff;
}

.footer-copyright {
  text-align: center;
  margin-top: 2rem;
  font-size: 0.875rem;
  color: #dadde1;
}

/* Responsive */
@media (max-width: 996px) {
  .layout {
    grid-template-columns: 1fr;
  }

  .sidebar {
    position: static;
    border-right: none;
    border-bottom: 1px solid var(--line);
  }

  .main {
    grid-template-columns: 1fr;
  }

  .toc {
    display: none;
  }

  .col-3,
  .col-4,
  .col-6 {
    width: 100%;
  }
}
"#;

const SITE_JS: &str = r#"// strata site runtime
(function () {
  'use strict';

  // Version dropdown toggle
  document.querySelectorAll('.version-dropdown').forEach(function (dropdown) {
    var toggle = dropdown.querySelector('.version-toggle');
    if (!toggle) return;

    toggle.addEventListener('click', function (event) {
      event.stopPropagation();
      dropdown.classList.toggle('open');
    });
  });

  document.addEventListener('click', function () {
    document.querySelectorAll('.version-dropdown.open').forEach(function (dropdown) {
      dropdown.classList.remove('open');
    });
  });

  // Highlight the active sidebar link
  var currentPath = window.location.pathname;
  document.querySelectorAll('.sidebar-item a').forEach(function (link) {
    if (link.getAttribute('href') === currentPath) {
      link.classList.add('active');
    }
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_defines_grid_columns() {
        let css = Assets::stylesheet();
        assert!(css.contains(".col-3"));
        assert!(css.contains(".col-12"));
        assert!(css.contains(".version-banner"));
    }

    #[test]
    fn script_wires_version_dropdown() {
        let js = Assets::script();
        assert!(js.contains("version-dropdown"));
        assert!(js.contains("addEventListener"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.feature-icon {
    height: 10rem;
    padding: 10px;
}
        "#;

        let minified = Assets::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".feature-icon"));
    }
}
