//! The fixed asset manifest and the placeholder policy
//!
//! The manifest mirrors the site's own directory structure. Two reserved
//! paths are generated from the visitor's identity rather than fetched
//! verbatim, and `README.md` is synthesized inline.

/// Asset content classification, driving the failure policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Fetch failure yields a placeholder preserving the archive path
    Text,
    /// Fetch failure drops the entry from the archive entirely
    Binary,
}

/// One entry of the fixed manifest
#[derive(Debug, Clone, Copy)]
pub struct ManifestEntry {
    /// Archive-relative destination path
    pub path: &'static str,
    /// Host-relative source path
    pub source: &'static str,
    pub kind: AssetKind,
    /// Generated from identity values instead of fetched verbatim
    pub generated: bool,
}

/// Reserved path for the generated GitHub configuration
pub const GITHUB_CONFIG_PATH: &str = "js/github-config.js";

/// Reserved path for the generated social links
pub const SOCIAL_LINKS_PATH: &str = "js/social-links.js";

/// Synthesized inline, never fetched
pub const README_PATH: &str = "README.md";

/// Known-good resource used by the pre-flight connectivity probe
pub const PROBE_SOURCE: &str = "index.html";

const fn fetched(path: &'static str, kind: AssetKind) -> ManifestEntry {
    ManifestEntry {
        path,
        source: path,
        kind,
        generated: false,
    }
}

const fn generated(path: &'static str) -> ManifestEntry {
    ManifestEntry {
        path,
        source: path,
        kind: AssetKind::Text,
        generated: true,
    }
}

/// The fixed, hardcoded asset list the pipeline repackages
pub const SITE_MANIFEST: &[ManifestEntry] = &[
    fetched("index.html", AssetKind::Text),
    fetched("css/style.css", AssetKind::Text),
    fetched("css/animations.css", AssetKind::Text),
    fetched("js/main.js", AssetKind::Text),
    fetched("js/theme.js", AssetKind::Text),
    fetched("js/effects.js", AssetKind::Text),
    fetched("js/portfolio.js", AssetKind::Text),
    generated(GITHUB_CONFIG_PATH),
    generated(SOCIAL_LINKS_PATH),
    fetched("assets/favicon.ico", AssetKind::Binary),
    fetched("assets/profile.png", AssetKind::Binary),
    fetched("assets/background.jpg", AssetKind::Binary),
];

/// Placeholder content for a text asset whose remote fetch failed
///
/// The content names the missing path; the comment syntax follows the file
/// kind so the placeholder stays inert inside the bundled site.
pub fn placeholder_for(path: &str) -> String {
    if path.ends_with(".js") {
        format!("// Placeholder: script '{path}' could not be fetched.\n")
    } else if path.ends_with(".css") {
        format!("/* Placeholder: stylesheet '{path}' could not be fetched. */\n")
    } else {
        format!("<!-- Placeholder: file '{path}' could not be fetched. -->\n")
    }
}
