//! GitHub identity, token shape validation, and API URL construction
//!
//! The identity drives both live API calls and generated-bundle content. Token
//! validation here is a best-effort shape check only, never a live credential
//! verification: an invalid shape downgrades messaging to unauthenticated mode
//! but does not block requests.

use url::Url;

use crate::config::consts;

/// Accept header sent with every API request
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Prefix of fine-grained personal access tokens
pub const FINE_GRAINED_PREFIX: &str = "github_pat_";

/// Segment lengths of the fine-grained token format: prefix + 22 chars + '_' + 59 chars
const FINE_GRAINED_ID_LEN: usize = 22;
const FINE_GRAINED_SECRET_LEN: usize = 59;

/// Minimum length accepted for classic (non-prefixed) tokens
const CLASSIC_MIN_LEN: usize = 30;

/// Environment override for the API host, used by tests against a mock server
pub const API_BASE_URL_ENV: &str = "GITHUB_API_BASE_URL";

/// The GitHub identity passed by reference into whichever components need it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub token: Option<String>,
}

impl Identity {
    pub fn new(username: impl Into<String>, token: Option<String>) -> Self {
        Self {
            username: username.into(),
            token,
        }
    }

    /// Whether a usable (non-blank) token is configured
    pub fn has_token(&self) -> bool {
        self.token
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }

    /// Headers for API requests: `Accept` always, bearer `Authorization` only
    /// when a non-blank token is configured. The Authorization entry is
    /// omitted entirely, never sent empty.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", ACCEPT_HEADER.to_string())];
        if let Some(token) = self.token.as_deref() {
            if !token.trim().is_empty() {
                headers.push(("Authorization", format!("Bearer {token}")));
            }
        }
        headers
    }
}

/// Recognized token shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `github_pat_` prefixed fine-grained token
    FineGrained,
    /// Length-based classic token
    Classic,
}

/// Result of the pure token shape check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenValidation {
    pub valid: bool,
    pub kind: Option<TokenKind>,
}

impl TokenValidation {
    fn invalid() -> Self {
        Self {
            valid: false,
            kind: None,
        }
    }
}

/// Pure, side-effect-free token shape check.
///
/// - blank → invalid
/// - `github_pat_` prefix with exact 22/59 alphanumeric segments → valid;
///   any segment-length deviation → invalid
/// - any other non-blank token shorter than 30 characters → invalid
/// - otherwise → valid (classic format)
pub fn validate_token(token: &str) -> TokenValidation {
    let token = token.trim();
    if token.is_empty() {
        return TokenValidation::invalid();
    }

    if let Some(rest) = token.strip_prefix(FINE_GRAINED_PREFIX) {
        let valid = match rest.split_once('_') {
            Some((id, secret)) => {
                id.len() == FINE_GRAINED_ID_LEN
                    && secret.len() == FINE_GRAINED_SECRET_LEN
                    && id.chars().all(|c| c.is_ascii_alphanumeric())
                    && secret.chars().all(|c| c.is_ascii_alphanumeric())
            }
            None => false,
        };
        return TokenValidation {
            valid,
            kind: valid.then_some(TokenKind::FineGrained),
        };
    }

    if token.len() < CLASSIC_MIN_LEN {
        return TokenValidation::invalid();
    }

    TokenValidation {
        valid: true,
        kind: Some(TokenKind::Classic),
    }
}

/// API host, honoring the test override environment variable
pub fn api_base_url() -> Result<Url, url::ParseError> {
    match std::env::var(API_BASE_URL_ENV) {
        Ok(base) => Url::parse(&base),
        Err(_) => Url::parse(consts::github::API_BASE_URL),
    }
}

/// Joins the fixed API host with an endpoint and URL-encodes the parameter
/// mapping. Returns the bare URL (no `?`) when no parameters are given.
pub fn build_api_url(endpoint: &str, params: &[(&str, String)]) -> Result<Url, url::ParseError> {
    let base = api_base_url()?;
    let mut url = base.join(endpoint.trim_start_matches('/'))?;
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}
