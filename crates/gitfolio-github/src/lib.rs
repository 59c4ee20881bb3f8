//! GitHub REST API client for gitfolio
//!
//! This crate issues the two read-only API calls the portfolio needs and
//! shapes their payloads into view data:
//!
//! - [`api::fetch_user`]: the profile behind the portfolio header
//! - [`api::fetch_repositories`]: a single capped page of repositories,
//!   folded into star/fork totals and language shares
//!
//! # Request Flow
//!
//! ```text
//! fetch_repositories()
//!     ↓
//! 1. Build URL from the fixed API host (+ per_page / sort params)
//!     ↓
//! 2. Attach provider headers (Accept always, Authorization only
//!    when a non-blank token is configured)
//!     ↓
//! 3. GET, then interpret the response:
//!    - 403 with x-ratelimit-remaining: 0  → RateLimited
//!    - any other non-success status       → FetchFailed { status }
//!    - success                            → raw vendor JSON shape
//! ```
//!
//! No retries, no pagination beyond the single page, no normalization layer:
//! callers read vendor field names directly.

pub mod api;
pub mod client;
pub mod models;

pub use api::{aggregate_stats, fetch_repositories, fetch_user, language_shares, GithubError};
pub use client::{build_client, build_default_client, DEFAULT_TIMEOUT, USER_AGENT};
pub use models::{LanguageShare, RepoTotals, Repository, User};
