//! User and repository fetches plus pure view-data aggregation

use reqwest::blocking::{Client, Response};
use thiserror::Error;

use gitfolio_core::config::consts;
use gitfolio_core::identity::{build_api_url, Identity};

use crate::models::{LanguageShare, RepoTotals, Repository, User};

/// Rate-limit budget header inspected on HTTP failures
const RATELIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// GitHub API errors
#[derive(Debug, Error)]
pub enum GithubError {
    /// API quota exhausted (403 with a zero rate-limit budget)
    #[error("RATE_LIMITED: GitHub API rate limit exhausted; configure a token or wait for the quota to reset")]
    RateLimited,

    /// Generic non-OK HTTP response
    #[error("FETCH_FAILED: GitHub API returned HTTP {status}")]
    FetchFailed {
        /// HTTP status code of the failed response
        status: u16,
    },

    /// Transport-level error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL construction error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Fetches the user profile behind the portfolio
///
/// # Errors
///
/// Returns `RateLimited` when the quota is exhausted, `FetchFailed` on any
/// other non-OK status, or a transport error.
pub fn fetch_user(
    client: &Client,
    identity: &Identity,
    username: &str,
) -> Result<User, GithubError> {
    let url = build_api_url(&format!("/users/{username}"), &[])?;
    let response = send_get(client, identity, url.as_str())?;
    Ok(response.json()?)
}

/// Fetches a single capped page of the user's repositories
///
/// `per_page` is clamped to the API maximum; there is no pagination beyond
/// this one page.
///
/// # Errors
///
/// Same error surface as [`fetch_user`].
pub fn fetch_repositories(
    client: &Client,
    identity: &Identity,
    username: &str,
    per_page: u32,
    sort: &str,
) -> Result<Vec<Repository>, GithubError> {
    let per_page = per_page.min(consts::github::MAX_PER_PAGE);
    let url = build_api_url(
        &format!("/users/{username}/repos"),
        &[
            ("per_page", per_page.to_string()),
            ("sort", sort.to_string()),
        ],
    )?;
    let response = send_get(client, identity, url.as_str())?;
    Ok(response.json()?)
}

/// Issues a GET with the provider's headers and interprets the response status
fn send_get(client: &Client, identity: &Identity, url: &str) -> Result<Response, GithubError> {
    let mut request = client.get(url);
    for (name, value) in identity.auth_headers() {
        request = request.header(name, value);
    }

    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
        if status.as_u16() == 403 && rate_limit_exhausted(&response) {
            return Err(GithubError::RateLimited);
        }
        return Err(GithubError::FetchFailed {
            status: status.as_u16(),
        });
    }

    Ok(response)
}

/// Whether the response advertises an exhausted rate-limit budget
fn rate_limit_exhausted(response: &Response) -> bool {
    response
        .headers()
        .get(RATELIMIT_REMAINING_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|remaining| remaining == "0")
        .unwrap_or(false)
}

/// Pure fold over the fetched page producing star/fork totals
///
/// Repositories lacking the numeric fields were already defaulted to zero at
/// deserialization, so they contribute nothing.
pub fn aggregate_stats(repos: &[Repository]) -> RepoTotals {
    repos.iter().fold(RepoTotals::default(), |acc, repo| {
        RepoTotals {
            stars: acc.stars + repo.stargazers_count,
            forks: acc.forks + repo.forks_count,
        }
    })
}

/// Language shares over the fetched page, folding entries below the display
/// threshold into "Other"
///
/// Percentages are relative to the repositories that report a language.
/// Shares are returned in descending order with "Other" last.
pub fn language_shares(repos: &[Repository], threshold_percent: f64) -> Vec<LanguageShare> {
    use std::collections::HashMap;

    let mut counts: HashMap<&str, u64> = HashMap::new();
    for repo in repos {
        if let Some(language) = repo.language.as_deref() {
            *counts.entry(language).or_insert(0) += 1;
        }
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares = Vec::new();
    let mut other = 0.0;
    for (language, count) in counts {
        let percent = count as f64 / total as f64 * 100.0;
        if percent < threshold_percent {
            other += percent;
        } else {
            shares.push(LanguageShare {
                language: language.to_string(),
                percent,
            });
        }
    }

    shares.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.language.cmp(&b.language))
    });

    if other > 0.0 {
        shares.push(LanguageShare {
            language: "Other".to_string(),
            percent: other,
        });
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, forks: u64, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: None,
            description: None,
            stargazers_count: stars,
            forks_count: forks,
            language: language.map(|l| l.to_string()),
            fork: false,
        }
    }

    #[test]
    fn test_aggregate_stats_empty() {
        assert_eq!(aggregate_stats(&[]), RepoTotals::default());
    }

    #[test]
    fn test_aggregate_stats_sums_exactly() {
        let repos = vec![
            repo("a", 10, 3, None),
            repo("b", 0, 0, None),
            repo("c", 5, 2, None),
        ];
        let totals = aggregate_stats(&repos);
        assert_eq!(totals.stars, 15);
        assert_eq!(totals.forks, 5);
    }

    #[test]
    fn test_aggregate_stats_missing_fields_contribute_zero() {
        // A payload with no counters deserializes to zeros
        let bare: Repository = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();
        let totals = aggregate_stats(&[bare, repo("a", 7, 1, None)]);
        assert_eq!(totals.stars, 7);
        assert_eq!(totals.forks, 1);
    }

    #[test]
    fn test_language_shares_no_languages() {
        let repos = vec![repo("a", 0, 0, None)];
        assert!(language_shares(&repos, 2.0).is_empty());
    }

    #[test]
    fn test_language_shares_descending_with_other() {
        let mut repos = Vec::new();
        for _ in 0..60 {
            repos.push(repo("r", 0, 0, Some("Rust")));
        }
        for _ in 0..39 {
            repos.push(repo("j", 0, 0, Some("JavaScript")));
        }
        repos.push(repo("v", 0, 0, Some("Vala")));

        let shares = language_shares(&repos, 2.0);
        assert_eq!(shares[0].language, "Rust");
        assert_eq!(shares[1].language, "JavaScript");
        // Vala is 1% of the list, under the threshold
        assert_eq!(shares.last().unwrap().language, "Other");
        assert!((shares.last().unwrap().percent - 1.0).abs() < 1e-9);
    }
}
