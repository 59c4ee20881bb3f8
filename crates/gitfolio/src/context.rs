//! Config discovery and identity resolution shared by the commands

use std::path::Path;

use gitfolio_core::{Config, GitfolioError, Identity, Result};

/// Config file looked up in the current directory when no --config is given
pub const CONFIG_FILE: &str = "gitfolio.toml";

/// Loads the config from an explicit path, or from ./gitfolio.toml when it
/// exists. An explicit path that fails to load is an error; a missing default
/// file is not.
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    match path {
        Some(explicit) => Config::from_file(explicit).map(Some),
        None => {
            let default = Path::new(CONFIG_FILE);
            if default.exists() {
                Config::from_file(default).map(Some)
            } else {
                Ok(None)
            }
        }
    }
}

/// Resolves the identity from the --username flag (which wins) or the config.
///
/// A blank username is rejected here, before any client is built or any
/// request leaves the process.
pub fn resolve_identity(flag_username: Option<String>, config: Option<&Config>) -> Result<Identity> {
    let username = flag_username
        .or_else(|| config.map(|c| c.identity.username.clone()))
        .unwrap_or_default();

    if username.trim().is_empty() {
        return Err(GitfolioError::ValidationError(
            "a GitHub username is required (pass --username or set [identity] in gitfolio.toml)"
                .to_string(),
        ));
    }

    let token = config.and_then(|c| c.identity.token.clone());
    Ok(Identity::new(username.trim(), token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_identity_requires_username() {
        let result = resolve_identity(None, None);
        assert!(matches!(result, Err(GitfolioError::ValidationError(_))));
    }

    #[test]
    fn test_resolve_identity_rejects_blank_flag() {
        let result = resolve_identity(Some("   ".to_string()), None);
        assert!(matches!(result, Err(GitfolioError::ValidationError(_))));
    }

    #[test]
    fn test_resolve_identity_flag_wins_over_config() {
        let config: Config =
            toml::from_str("[identity]\nusername = \"configured\"\n").unwrap();
        let identity = resolve_identity(Some("flagged".to_string()), Some(&config)).unwrap();
        assert_eq!(identity.username, "flagged");
    }

    #[test]
    fn test_resolve_identity_takes_config_token() {
        let config: Config = toml::from_str(
            "[identity]\nusername = \"octocat\"\ntoken = \"sometoken\"\n",
        )
        .unwrap();
        let identity = resolve_identity(None, Some(&config)).unwrap();
        assert_eq!(identity.username, "octocat");
        assert_eq!(identity.token.as_deref(), Some("sometoken"));
    }
}
