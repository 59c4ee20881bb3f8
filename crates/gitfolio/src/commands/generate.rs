//! `gitfolio generate`: produce the downloadable portfolio site bundle

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use url::Url;

use gitfolio_bundle::pipeline::{generate_bundle, BundleOptions};
use gitfolio_bundle::SocialLinks;

use crate::context;

#[allow(clippy::too_many_arguments)]
pub fn run(
    username: Option<String>,
    linkedin: Option<String>,
    twitter: Option<String>,
    instagram: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let config = context::load_config(config_path.as_deref())?;
    // Identity is validated before any client is built or request sent
    let identity = context::resolve_identity(username, config.as_ref())?;

    let bundle_cfg = config.map(|c| c.bundle).unwrap_or_default();
    let base = Url::parse(&bundle_cfg.asset_base_url)
        .with_context(|| format!("invalid asset base URL: {}", bundle_cfg.asset_base_url))?;

    let mut options = BundleOptions::new(base);
    options.probe_timeout = Duration::from_secs(bundle_cfg.probe_timeout_secs);
    options.progress = Some(progress_callback);

    if verbose {
        println!("Asset host: {}", options.asset_base_url);
    }
    println!("Generating portfolio bundle for {}...", identity.username);

    let socials = SocialLinks {
        linkedin,
        twitter,
        instagram,
    };
    let result = generate_bundle(&identity.username, &socials, &options)?;

    let out_path = output.unwrap_or_else(|| PathBuf::from(&result.file_name));
    std::fs::write(&out_path, &result.archive)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!(
        "{} Bundle written to {} ({} bytes)",
        "✓".green(),
        out_path.display(),
        result.archive.len()
    );

    Ok(())
}

/// Single-line progress display, rewritten in place
fn progress_callback(percent: u8, status: &str) {
    print!("\r  {percent:>3}% {status}");
    let _ = std::io::stdout().flush();
    if percent == 100 {
        println!();
    }
}
