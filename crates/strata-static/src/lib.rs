//! Static site builder for strata documentation sites.
//!
//! Turns a resolved site configuration and a landing-page feature layout
//! into a complete static site: one subtree per documentation version,
//! sidebar navigation, search manifests, sitemap and generated assets.

pub mod assets;
pub mod builder;
pub mod page;
pub mod sidebar;
pub mod templates;

pub use builder::{BuildError, BuildOptions, BuildReport, SiteBuilder};
