//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use strata_features::render_features;
use strata_static::SiteBuilder;

use crate::site_file;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    out: Option<PathBuf>,
    minify: Option<bool>,
) -> Result<()> {
    let file = site_file::load(config_path)?;
    let config = file.resolve()?;
    let options = file.build_options(out, minify);

    tracing::info!("Building {}...", config.identity.title);

    let features = render_features(&file.features);
    let report = SiteBuilder::new(config, features, options).build().await?;

    tracing::info!(
        "Built {} pages across {} versions in {}ms",
        report.pages,
        report.versions,
        report.duration_ms
    );
    tracing::info!("Output: {}", report.out_dir.display());

    Ok(())
}
