//! Site configuration resolver for strata documentation sites.
//!
//! This crate turns the raw pieces of a site definition (identity, version
//! list, navbar, search provider, footer) into a single validated
//! [`SiteConfig`] value. It performs structural validation only: it never
//! touches the filesystem and never checks that a referenced document
//! actually exists. Those are the builder's concerns.

pub mod navbar;
pub mod site;
pub mod version;

pub use navbar::{NavItem, NavPosition};
pub use site::{
    Announcement, BrokenLinkPolicy, ConfigurationError, FooterColumn, FooterLink, LinkTarget,
    Logo, SearchProvider, SiteConfig, SiteExtras, SiteIdentity, SitemapPolicy,
};
pub use version::{BannerPolicy, VersionDescriptor};
