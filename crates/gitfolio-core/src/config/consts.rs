//! Tunable constants shared across the workspace

/// GitHub API request limits
pub mod github {
    /// Maximum repositories fetched in the single page request
    pub const MAX_PER_PAGE: u32 = 100;

    /// Sort key applied to the repository listing
    pub const DEFAULT_SORT: &str = "updated";

    /// Fixed API host for live requests
    pub const API_BASE_URL: &str = "https://api.github.com";
}

/// Stat display thresholds
pub mod display {
    /// Languages below this share of the repository list are folded into "Other"
    pub const LANGUAGE_THRESHOLD_PERCENT: f64 = 2.0;
}

/// Bundle generation limits
pub mod bundle {
    /// Deadline for the pre-flight connectivity probe
    pub const PROBE_TIMEOUT_SECS: u64 = 10;

    /// Per-asset fetch timeout
    pub const FETCH_TIMEOUT_SECS: u64 = 30;

    /// Deflate level for the produced archive, balancing speed and ratio
    pub const COMPRESSION_LEVEL: i64 = 6;

    /// Raw file host the site assets are fetched from
    pub const ASSET_BASE_URL: &str =
        "https://raw.githubusercontent.com/gitfolio/portfolio-template/main";
}
