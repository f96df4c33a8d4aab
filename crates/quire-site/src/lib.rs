//! Static site building for Quire.
//!
//! Glues the renderer to a page sink: validate the document set, render
//! every page, then write each page once and report per-slug outcomes.

mod builder;

pub use builder::{BuildConfig, BuildReport, IndexConfig, SiteBuilder};
