//! Configuration validation command.

use std::path::Path;

use anyhow::Result;

use crate::site_file;

/// Run the check command: load `site.toml`, resolve it into a
/// [`strata_config::SiteConfig`] and report the outcome. Nothing is
/// written; a validation failure exits non-zero.
pub fn run(config_path: &Path) -> Result<()> {
    let file = site_file::load(config_path)?;
    let config = file.resolve()?;

    tracing::info!(
        "{}: ok ({} versions, {} navbar items, {} feature cards)",
        config_path.display(),
        config.versions.len(),
        config.navbar.len(),
        file.features.len()
    );

    for (key, route) in config.version_routes() {
        let route = if route.is_empty() { "/" } else { route.as_str() };
        tracing::debug!("version {} -> {}", key, route);
    }

    Ok(())
}
