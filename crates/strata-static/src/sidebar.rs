//! Per-version sidebar construction.

use std::collections::BTreeMap;

use serde::Serialize;

/// Input to sidebar construction: one entry per visible page.
#[derive(Debug, Clone)]
pub struct SidebarEntry {
    /// Label shown in the sidebar.
    pub label: String,
    /// Site-absolute URL of the page.
    pub url: String,
    /// Top-level directory the page lives in, `None` for root pages.
    pub section: Option<String>,
    /// Ordering within its section (lower = first).
    pub position: i32,
}

/// A rendered sidebar node: either a page link or a titled section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarItem {
    pub label: String,
    /// Empty for section headers.
    pub url: String,
    pub items: Vec<SidebarItem>,
}

/// Build the sidebar tree for one documentation version.
///
/// Root pages come first, ordered by position then label; each top-level
/// directory becomes a section holding its pages in the same order.
/// Sections follow the root pages, ordered by the lowest position among
/// their children, then by name.
pub fn build_sidebar(entries: &[SidebarEntry]) -> Vec<SidebarItem> {
    let mut root: Vec<&SidebarEntry> = Vec::new();
    let mut sections: BTreeMap<&str, Vec<&SidebarEntry>> = BTreeMap::new();

    for entry in entries {
        match &entry.section {
            None => root.push(entry),
            Some(section) => sections.entry(section).or_default().push(entry),
        }
    }

    let mut sidebar: Vec<SidebarItem> = ordered(root)
        .into_iter()
        .map(|e| SidebarItem {
            label: e.label.clone(),
            url: e.url.clone(),
            items: Vec::new(),
        })
        .collect();

    let mut section_items: Vec<(i32, SidebarItem)> = sections
        .into_iter()
        .map(|(name, children)| {
            let children = ordered(children);
            let min_position = children.first().map(|e| e.position).unwrap_or(i32::MAX);
            let item = SidebarItem {
                label: capitalize(name),
                url: String::new(),
                items: children
                    .into_iter()
                    .map(|e| SidebarItem {
                        label: e.label.clone(),
                        url: e.url.clone(),
                        items: Vec::new(),
                    })
                    .collect(),
            };
            (min_position, item)
        })
        .collect();

    section_items.sort_by(|(a, ia), (b, ib)| a.cmp(b).then_with(|| ia.label.cmp(&ib.label)));
    sidebar.extend(section_items.into_iter().map(|(_, item)| item));

    sidebar
}

fn ordered(mut entries: Vec<&SidebarEntry>) -> Vec<&SidebarEntry> {
    entries.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.label.cmp(&b.label)));
    entries
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(label: &str, section: Option<&str>, position: i32) -> SidebarEntry {
        SidebarEntry {
            label: label.to_string(),
            url: format!("/docs/{}/", label.to_lowercase()),
            section: section.map(|s| s.to_string()),
            position,
        }
    }

    #[test]
    fn orders_root_pages_by_position_then_label() {
        let sidebar = build_sidebar(&[
            entry("Faq", None, 2),
            entry("Overview", None, 1),
            entry("Concepts", None, 2),
        ]);

        let labels: Vec<&str> = sidebar.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Overview", "Concepts", "Faq"]);
    }

    #[test]
    fn directories_become_sections_after_root_pages() {
        let sidebar = build_sidebar(&[
            entry("Deployment", Some("guides"), 1),
            entry("Overview", None, 1),
            entry("Trench", Some("concepts"), 1),
        ]);

        assert_eq!(sidebar[0].label, "Overview");
        assert_eq!(sidebar[1].label, "Concepts");
        assert_eq!(sidebar[1].items[0].label, "Trench");
        assert_eq!(sidebar[2].label, "Guides");
        assert!(sidebar[1].url.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_sidebar() {
        assert_eq!(build_sidebar(&[]), Vec::new());
    }
}
