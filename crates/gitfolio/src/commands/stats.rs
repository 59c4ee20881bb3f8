//! `gitfolio stats`: fetch and render profile and repository statistics

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use gitfolio_core::identity::validate_token;
use gitfolio_github::{
    aggregate_stats, build_default_client, fetch_repositories, fetch_user, language_shares,
};

use crate::context;
use crate::output;

pub fn run(
    username: Option<String>,
    json: bool,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let config = context::load_config(config_path.as_deref())?;
    let identity = context::resolve_identity(username, config.as_ref())?;

    // Shape check downgrades messaging only; requests are never blocked on it
    if let Some(token) = identity.token.as_deref() {
        if !validate_token(token).valid && verbose {
            eprintln!("⚠ Token does not match a known shape; requests run as unauthenticated");
        }
    }

    let (github_cfg, display_cfg) = config
        .map(|c| (c.github, c.display))
        .unwrap_or_default();

    if verbose {
        println!("Fetching profile for {}...", identity.username);
    }

    let client = build_default_client()?;
    let user = fetch_user(&client, &identity, &identity.username)?;
    let repos = fetch_repositories(
        &client,
        &identity,
        &identity.username,
        github_cfg.per_page,
        &github_cfg.sort,
    )?;

    let totals = aggregate_stats(&repos);
    let shares = language_shares(&repos, display_cfg.language_threshold_percent);

    if json {
        let payload = serde_json::json!({
            "user": user,
            "totals": totals,
            "languages": shares,
        });
        output::print_json(&serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    let display_name = user.name.as_deref().unwrap_or(&user.login);
    println!("{} {}", "✓".green(), display_name.bold());
    if let Some(bio) = user.bio.as_deref() {
        println!("  {bio}");
    }
    if let Some(html_url) = user.html_url.as_deref() {
        println!("  {}", html_url.dimmed());
    }
    println!(
        "  Repos: {}  Followers: {}  Following: {}",
        user.public_repos, user.followers, user.following
    );
    println!("  Stars: {}  Forks: {}", totals.stars, totals.forks);

    if !shares.is_empty() {
        println!("  Languages:");
        for share in &shares {
            println!("    {:<12} {:>5.1}%", share.language, share.percent);
        }
    }

    Ok(())
}
