//! Bundle pipeline error types

use thiserror::Error;

/// Errors that abort the bundle pipeline
///
/// Per-asset fetch failures are not represented here: they are recovered
/// locally inside the fetch stage (placeholder for text assets, drop for
/// binary assets) and never abort the pipeline.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Pre-flight probe failed or timed out; no further steps run
    #[error("CONNECTIVITY_ERROR: {reason}")]
    Connectivity {
        /// Human-readable probe failure description
        reason: String,
    },

    /// Archive packing failure
    #[error("BUNDLE_ASSEMBLY_ERROR: {0}")]
    Assembly(#[from] zip::result::ZipError),

    /// HTTP client construction or transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL construction error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error while writing archive bytes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
