//! Generated identity-bound assets
//!
//! The two reserved configuration files and the README are produced by
//! interpolating identity and social values into fixed templates; they are
//! never fetched from the asset host.

use url::Url;

/// Fallback profile link prefix when no social URL is supplied
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Default LinkedIn URL used when no value is supplied
pub const DEFAULT_LINKEDIN_URL: &str = "https://www.linkedin.com/";

/// Default Twitter URL used when no value is supplied
pub const DEFAULT_TWITTER_URL: &str = "https://twitter.com/";

/// Default Instagram URL used when no value is supplied
pub const DEFAULT_INSTAGRAM_URL: &str = "https://www.instagram.com/";

/// Optional social URLs supplied by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

impl SocialLinks {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Validates a user-supplied URL by generic URL parse
///
/// An invalid URL resolves to an empty string, never an error.
pub fn sanitize_url(raw: &str) -> String {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(_) => raw.to_string(),
        Err(_) => String::new(),
    }
}

/// Escapes a value for embedding inside a single-quoted JS string literal
fn js_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Renders the generated `js/github-config.js`
///
/// The token literal is always emitted empty: a visitor's real token is
/// used for live API calls only and is never echoed into the bundle.
pub fn render_github_config(username: &str) -> String {
    let username = js_escape(username);
    format!(
        "// Generated by the gitfolio website generator.\n\
         window.GitHubConfig = (function () {{\n\
         \x20   const _username = '{username}';\n\
         \x20   // Add a personal access token here to raise API rate limits.\n\
         \x20   const _token = '';\n\
         \n\
         \x20   return {{\n\
         \x20       getUsername: function () {{ return _username; }},\n\
         \x20       getToken: function () {{ return _token; }},\n\
         \x20   }};\n\
         }})();\n"
    )
}

/// Renders the generated `js/social-links.js`
///
/// Missing social values fall back to the defaults; supplied values that
/// fail URL parsing resolve to empty strings.
pub fn render_social_links(username: &str, socials: &SocialLinks) -> String {
    let github = format!("{}{}", GITHUB_URL_PREFIX, username);
    let linkedin = resolve(socials.linkedin.as_deref(), DEFAULT_LINKEDIN_URL);
    let twitter = resolve(socials.twitter.as_deref(), DEFAULT_TWITTER_URL);
    let instagram = resolve(socials.instagram.as_deref(), DEFAULT_INSTAGRAM_URL);

    format!(
        "// Generated by the gitfolio website generator.\n\
         window.SocialLinks = {{\n\
         \x20   github: '{}',\n\
         \x20   linkedin: '{}',\n\
         \x20   twitter: '{}',\n\
         \x20   instagram: '{}',\n\
         }};\n",
        js_escape(&github),
        js_escape(&linkedin),
        js_escape(&twitter),
        js_escape(&instagram),
    )
}

fn resolve(supplied: Option<&str>, fallback: &str) -> String {
    match supplied {
        Some(raw) => sanitize_url(raw),
        None => fallback.to_string(),
    }
}

/// Renders the synthesized `README.md` for the bundle
pub fn render_readme(username: &str) -> String {
    format!(
        "# {username}'s Portfolio\n\
         \n\
         A personal portfolio site generated with gitfolio.\n\
         \n\
         ## Getting started\n\
         \n\
         Serve the directory with any static file server, for example:\n\
         \n\
         ```sh\n\
         python3 -m http.server\n\
         ```\n\
         \n\
         The site reads its GitHub identity from `js/github-config.js` and\n\
         the profile links from `js/social-links.js`. Edit those two files\n\
         to change the displayed account or social URLs.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_config_embeds_username_and_empty_token() {
        let content = render_github_config("octocat");
        assert!(content.contains("_username = 'octocat'"));
        assert!(content.contains("_token = ''"));
    }

    #[test]
    fn test_github_config_never_echoes_a_token() {
        // Rendering takes no token input at all; the literal stays empty
        let content = render_github_config("octocat");
        assert!(!content.contains("ghp_"));
        assert!(content.contains("_token = ''"));
    }

    #[test]
    fn test_github_config_escapes_quotes() {
        let content = render_github_config("o'cat");
        assert!(content.contains("_username = 'o\\'cat'"));
    }

    #[test]
    fn test_social_links_fallbacks() {
        let content = render_social_links("octocat", &SocialLinks::none());
        assert!(content.contains("https://github.com/octocat"));
        assert!(content.contains(DEFAULT_LINKEDIN_URL));
        assert!(content.contains(DEFAULT_TWITTER_URL));
        assert!(content.contains(DEFAULT_INSTAGRAM_URL));
    }

    #[test]
    fn test_social_links_uses_supplied_urls() {
        let socials = SocialLinks {
            linkedin: Some("https://www.linkedin.com/in/octocat".to_string()),
            twitter: None,
            instagram: None,
        };
        let content = render_social_links("octocat", &socials);
        assert!(content.contains("https://www.linkedin.com/in/octocat"));
        assert!(content.contains(DEFAULT_TWITTER_URL));
    }

    #[test]
    fn test_invalid_social_url_resolves_to_empty() {
        let socials = SocialLinks {
            linkedin: Some("not a url".to_string()),
            twitter: None,
            instagram: None,
        };
        let content = render_social_links("octocat", &socials);
        assert!(content.contains("linkedin: '',"));
    }

    #[test]
    fn test_sanitize_url() {
        assert_eq!(
            sanitize_url("https://example.com/me"),
            "https://example.com/me"
        );
        assert_eq!(sanitize_url("not a url"), "");
        assert_eq!(sanitize_url(""), "");
    }

    #[test]
    fn test_readme_names_the_user() {
        let content = render_readme("octocat");
        assert!(content.starts_with("# octocat's Portfolio"));
        assert!(content.contains("js/github-config.js"));
    }
}
