//! Site-bundle generation for gitfolio
//!
//! This crate repackages the portfolio site's own static assets into a
//! downloadable ZIP pre-filled with a visitor's GitHub username and social
//! links. It handles:
//!
//! - A pre-flight connectivity probe with a fixed deadline
//! - Rendering the two identity-bound configuration assets
//! - Fetching the fixed asset manifest in parallel (settle-all, never cancel
//!   on first failure)
//! - Placeholder-or-drop recovery for per-asset fetch failures
//! - In-memory ZIP assembly at a moderate compression level
//!
//! # Pipeline
//!
//! ```text
//! generate_bundle()
//!     ↓
//! 1. Probe the asset host (10s deadline) — failure aborts everything
//!     ↓
//! 2. Render js/github-config.js and js/social-links.js from the identity
//!     ↓
//! 3. Fetch every remaining manifest entry in parallel; record each
//!    outcome independently
//!     ↓
//! 4. Assemble: fetched content, placeholders for failed text assets,
//!    generated overrides at the reserved paths, synthesized README.md
//!    (failed binary assets are dropped, never stubbed)
//!     ↓
//! 5. Compress and hand back the archive plus a suggested file name
//! ```
//!
//! Per-asset failures are recovered locally and never abort the pipeline;
//! every other failure discards all partial progress and leaves the
//! operation restartable.

pub mod archive;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod pipeline;
pub mod templates;

pub use error::BundleError;
pub use manifest::{AssetKind, ManifestEntry, SITE_MANIFEST};
pub use pipeline::{generate_bundle, BundleOptions, BundleResult};
pub use templates::SocialLinks;
