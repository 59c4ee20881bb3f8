//! Raw vendor payload shapes from the GitHub API
//!
//! These structs mirror the API field names directly; there is no
//! normalization layer. Numeric fields the API may omit default to zero so
//! that aggregation treats them as contributing nothing.

use serde::{Deserialize, Serialize};

/// GitHub user profile from `GET /users/{username}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    /// Account login name
    pub login: String,
    /// Display name, if set
    #[serde(default)]
    pub name: Option<String>,
    /// Profile bio, if set
    #[serde(default)]
    pub bio: Option<String>,
    /// Profile page URL
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// Repository record from `GET /users/{username}/repos`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// Star/fork totals aggregated over the fetched repository page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepoTotals {
    pub stars: u64,
    pub forks: u64,
}

/// Share of the repository list written in one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub percent: f64,
}
