//! Documentation page parsing: frontmatter, markdown rendering, headings.

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Deserialize;

/// YAML frontmatter of a documentation page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Page title.
    pub title: String,

    /// Label shown in the sidebar instead of the title.
    #[serde(default)]
    pub sidebar_label: Option<String>,

    /// URL slug override; defaults to the source path.
    #[serde(default)]
    pub slug: Option<String>,

    /// Sidebar ordering (lower = first).
    #[serde(default)]
    pub position: Option<i32>,

    /// Description used for search and meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Exclude the page from sidebar and search.
    #[serde(default)]
    pub hidden: bool,
}

/// A parsed documentation page.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Frontmatter, if the page declares one.
    pub frontmatter: Option<Frontmatter>,

    /// Markdown body, frontmatter stripped.
    pub markdown: String,

    /// Rendered HTML with heading anchors.
    pub html: String,

    /// In-page headings (levels 2-3) for the table of contents.
    pub headings: Vec<Heading>,
}

/// An in-page heading.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Heading {
    pub title: String,
    pub anchor: String,
    pub level: u8,
}

/// Errors raised while parsing a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("unclosed frontmatter block, missing closing ---")]
    UnclosedFrontmatter,

    #[error("invalid YAML in frontmatter: {0}")]
    InvalidFrontmatter(String),
}

/// Parse a markdown page: strip frontmatter, render HTML, collect headings.
pub fn parse_page(source: &str) -> Result<ParsedPage, PageError> {
    let (frontmatter, body) = extract_frontmatter(source)?;
    let (html, headings) = render_markdown(body);

    Ok(ParsedPage {
        frontmatter,
        markdown: body.to_string(),
        html,
        headings,
    })
}

/// Split a page into its frontmatter and body.
fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), PageError> {
    let trimmed = source.trim_start();
    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    let after_open = &trimmed[3..];
    let Some(close) = after_open.find("\n---") else {
        return Err(PageError::UnclosedFrontmatter);
    };

    let yaml = after_open[..close].trim();
    let body = after_open[close + 4..].trim_start();

    let frontmatter: Frontmatter =
        serde_yaml::from_str(yaml).map_err(|e| PageError::InvalidFrontmatter(e.to_string()))?;

    Ok((Some(frontmatter), body))
}

/// Render markdown to HTML, injecting anchor ids on headings and
/// collecting level 2-3 headings for the table of contents.
fn render_markdown(content: &str) -> (String, Vec<Heading>) {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    let mut events: Vec<Event> = Vec::new();
    let mut headings = Vec::new();
    // (level, text, index of the Start event in `events`)
    let mut open_heading: Option<(u8, String, usize)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                open_heading = Some((heading_level(level), String::new(), events.len()));
                // Placeholder, rewritten once the heading text is known.
                events.push(Event::Html("".into()));
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some((lvl, text, start)) = open_heading.take() {
                    let anchor = slugify(&text);
                    events[start] =
                        Event::Html(format!("<h{} id=\"{}\">", lvl, anchor).into());
                    events.push(Event::Html(format!("</h{}>", heading_level(level)).into()));

                    if (2..=3).contains(&lvl) {
                        headings.push(Heading {
                            title: text,
                            anchor,
                            level: lvl,
                        });
                    }
                }
            }
            Event::Text(ref text) | Event::Code(ref text) => {
                if let Some((_, buf, _)) = open_heading.as_mut() {
                    buf.push_str(text);
                }
                events.push(event);
            }
            _ => events.push(event),
        }
    }

    let mut html_out = String::new();
    html::push_html(&mut html_out, events.into_iter());

    (html_out, headings)
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Turn heading text into a URL-safe anchor id.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;

    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_frontmatter_and_body() {
        let source = r#"---
title: Overview
position: 1
description: What the system does
---

# Overview

Body text.
"#;

        let page = parse_page(source).unwrap();
        let fm = page.frontmatter.unwrap();

        assert_eq!(fm.title, "Overview");
        assert_eq!(fm.position, Some(1));
        assert_eq!(fm.description.as_deref(), Some("What the system does"));
        assert!(page.html.contains("Body text."));
    }

    #[test]
    fn page_without_frontmatter_is_valid() {
        let page = parse_page("# Just Markdown\n\nNo frontmatter.").unwrap();

        assert!(page.frontmatter.is_none());
        assert!(page.html.contains("Just Markdown"));
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let result = parse_page("---\ntitle: Broken\n# no closing fence");

        assert!(matches!(result, Err(PageError::UnclosedFrontmatter)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let result = parse_page("---\ntitle: [oops\n---\n");

        assert!(matches!(result, Err(PageError::InvalidFrontmatter(_))));
    }

    #[test]
    fn collects_heading_anchors() {
        let page = parse_page("# Title\n\n## Getting Started\n\n### First Steps\n").unwrap();

        assert_eq!(
            page.headings,
            vec![
                Heading {
                    title: "Getting Started".to_string(),
                    anchor: "getting-started".to_string(),
                    level: 2,
                },
                Heading {
                    title: "First Steps".to_string(),
                    anchor: "first-steps".to_string(),
                    level: 3,
                },
            ]
        );
        assert!(page.html.contains("<h2 id=\"getting-started\">"));
    }

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("What's New in v1.0?"), "what-s-new-in-v1-0");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }
}
