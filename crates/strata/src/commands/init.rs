//! Initialize a documentation site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing strata site...");

    let docs_dir = Path::new("docs");

    if docs_dir.exists() {
        if !yes {
            tracing::warn!("docs/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(docs_dir).context("failed to create docs directory")?;
    }

    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    let overview_path = docs_dir.join("overview.md");
    if !overview_path.exists() || yes {
        fs::write(&overview_path, DEFAULT_OVERVIEW).context("failed to write overview.md")?;
        tracing::info!("Created docs/overview.md");
    }

    let faq_path = docs_dir.join("faq.md");
    if !faq_path.exists() || yes {
        fs::write(&faq_path, DEFAULT_FAQ).context("failed to write faq.md")?;
        tracing::info!("Created docs/faq.md");
    }

    // Empty snapshot root so `strata build` works once a version is cut.
    let versioned_dir = Path::new("versioned");
    if !versioned_dir.exists() {
        fs::create_dir_all(versioned_dir).context("failed to create versioned directory")?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'strata check' to validate, then 'strata build'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# strata site configuration

[site]
title = "My Documentation"
tagline = "Documentation for my project"
url = "https://example.com/"
# base_path = "/"
# docs_dir = "docs"
# versioned_dir = "versioned"
# out_dir = "dist"
# edit_url = "https://github.com/you/project/tree/main/docs/"
# favicon = "img/favicon.ico"
# copyright = "Copyright © My Project"
# broken_links = "warn"

[[versions]]
key = "current"
label = "latest"

# Archived snapshots live under versioned/<key>/:
# [[versions]]
# key = "v1.0.0"
# label = "v1.0.0"
# url_path = "v1.0.0"
# banner = "unmaintained"

[[navbar]]
type = "version_dropdown"
position = "left"

[[navbar]]
type = "doc_link"
doc_id = "overview"
label = "Documentation"

[[footer]]
title = "Docs"
links = [
    { label = "Overview", target = { doc = "overview" } },
    { label = "FAQ", target = { doc = "faq" } },
]

[[features]]
title = "First Feature"
icon = "img/feature.svg"
body = "<p>Describe one capability of your project.</p>"
"#;

const DEFAULT_OVERVIEW: &str = r#"---
title: Overview
position: 1
description: What this project does
---

# Overview

Welcome to your documentation site, powered by **strata**.

## Structure

```
your-project/
├── docs/              # Current version sources
├── versioned/         # Archived version snapshots
│   └── v1.0.0/
└── site.toml          # Site configuration
```

## Versioning

Cut a version by copying `docs/` into `versioned/<key>/` and declaring
the version in `site.toml`.
"#;

const DEFAULT_FAQ: &str = r#"---
title: Frequently Asked Questions
sidebar_label: FAQ
position: 2
---

# Frequently Asked Questions

## How do I add a page?

Create a markdown file under `docs/` with a `title` in its frontmatter.

## How do I order the sidebar?

Set `position` in the frontmatter; lower values come first.
"#;
