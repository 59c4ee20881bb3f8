//! The bundle generation pipeline

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rayon::prelude::*;
use url::Url;

use gitfolio_core::config::consts;

use crate::archive::assemble_archive;
use crate::error::BundleError;
use crate::fetch::{build_asset_client, download_to_memory, DownloadError};
use crate::manifest::{
    placeholder_for, AssetKind, ManifestEntry, GITHUB_CONFIG_PATH, PROBE_SOURCE, README_PATH,
    SITE_MANIFEST, SOCIAL_LINKS_PATH,
};
use crate::templates::{render_github_config, render_readme, render_social_links, SocialLinks};

/// Progress callback: monotonically increasing percentage plus a status string
pub type ProgressFn = fn(u8, &str);

/// Bundle generation configuration
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Base URL of the remote asset host
    pub asset_base_url: Url,

    /// Deadline for the pre-flight connectivity probe
    pub probe_timeout: Duration,

    /// Per-asset fetch timeout
    pub fetch_timeout: Duration,

    /// Optional progress callback
    pub progress: Option<ProgressFn>,
}

impl BundleOptions {
    pub fn new(asset_base_url: Url) -> Self {
        Self {
            asset_base_url,
            probe_timeout: Duration::from_secs(consts::bundle::PROBE_TIMEOUT_SECS),
            fetch_timeout: Duration::from_secs(consts::bundle::FETCH_TIMEOUT_SECS),
            progress: None,
        }
    }
}

/// The produced archive plus a suggested download file name
///
/// Held in memory only; the caller decides where (and whether) to write it.
#[derive(Debug)]
pub struct BundleResult {
    pub archive: Vec<u8>,
    pub file_name: String,
}

/// Monotonic progress reporting: a late-arriving lower percentage from a
/// parallel fetch is dropped rather than reported out of order.
struct Progress {
    callback: Option<ProgressFn>,
    last: Mutex<u8>,
}

impl Progress {
    fn new(callback: Option<ProgressFn>) -> Self {
        Self {
            callback,
            last: Mutex::new(0),
        }
    }

    fn report(&self, percent: u8, status: &str) {
        let Some(callback) = self.callback else {
            return;
        };
        let mut last = self.last.lock().unwrap_or_else(|p| p.into_inner());
        if percent >= *last {
            *last = percent;
            callback(percent, status);
        }
    }
}

/// Generates the downloadable site bundle for the given identity
///
/// Steps run strictly in sequence: connectivity probe, template rendering,
/// parallel manifest fetch (settle-all), archive assembly, compression.
/// Per-asset fetch failures are recovered locally (placeholder for text
/// assets, drop for binary assets); any other failure aborts the pipeline
/// and discards partial progress, leaving the operation restartable.
///
/// # Errors
///
/// - `BundleError::Connectivity` if the probe times out or returns non-OK
/// - `BundleError::Assembly` on archive packing failure
/// - transport/URL/I/O errors from client construction
pub fn generate_bundle(
    username: &str,
    socials: &SocialLinks,
    options: &BundleOptions,
) -> Result<BundleResult, BundleError> {
    let progress = Progress::new(options.progress);
    let base = with_trailing_slash(options.asset_base_url.clone());

    // 1. Connectivity probe; failure here stops everything
    progress.report(0, "Checking connectivity with the asset host");
    probe_asset_host(&base, options.probe_timeout)?;

    // 2. Render the identity-bound assets
    progress.report(8, "Rendering site configuration");
    let github_config = render_github_config(username);
    let social_links = render_social_links(username, socials);

    // 3. Fetch every remaining manifest entry; settle all, cancel none
    progress.report(10, "Fetching site assets");
    let fetched = fetch_manifest(&base, options.fetch_timeout, &progress)?;

    // 4. Resolve entries in manifest order; generated assets take their
    //    reserved paths regardless of what the host serves there
    progress.report(88, "Assembling archive");
    let mut entries: Vec<(String, Vec<u8>)> = Vec::with_capacity(SITE_MANIFEST.len() + 1);
    for entry in SITE_MANIFEST {
        if entry.generated {
            let content = match entry.path {
                GITHUB_CONFIG_PATH => github_config.clone(),
                SOCIAL_LINKS_PATH => social_links.clone(),
                other => placeholder_for(other),
            };
            entries.push((entry.path.to_string(), content.into_bytes()));
            continue;
        }

        match fetched.get(entry.path) {
            Some(Ok(bytes)) => entries.push((entry.path.to_string(), bytes.clone())),
            Some(Err(_)) | None => match entry.kind {
                AssetKind::Text => {
                    entries.push((entry.path.to_string(), placeholder_for(entry.path).into_bytes()))
                }
                // Failed binary assets are dropped, never stubbed
                AssetKind::Binary => {}
            },
        }
    }
    entries.push((README_PATH.to_string(), render_readme(username).into_bytes()));

    // 5. Compress
    progress.report(92, "Compressing archive");
    let archive = assemble_archive(&entries)?;

    progress.report(100, "Bundle ready");
    Ok(BundleResult {
        archive,
        file_name: format!("{username}-portfolio.zip"),
    })
}

/// Fetches a known-good resource with the fixed probe deadline
fn probe_asset_host(base: &Url, timeout: Duration) -> Result<(), BundleError> {
    let client = build_asset_client(timeout)?;
    let url = base.join(PROBE_SOURCE)?;

    match client.get(url.as_str()).send() {
        Ok(response) if response.status().is_success() => Ok(()),
        Ok(response) => Err(BundleError::Connectivity {
            reason: format!("asset host returned HTTP {}", response.status().as_u16()),
        }),
        Err(err) if err.is_timeout() => Err(BundleError::Connectivity {
            reason: "connectivity probe timed out".to_string(),
        }),
        Err(err) => Err(BundleError::Connectivity {
            reason: format!("asset host unreachable: {err}"),
        }),
    }
}

/// Issues all fetches in parallel and records every outcome independently
fn fetch_manifest(
    base: &Url,
    timeout: Duration,
    progress: &Progress,
) -> Result<HashMap<&'static str, Result<Vec<u8>, DownloadError>>, BundleError> {
    let client = build_asset_client(timeout)?;
    let to_fetch: Vec<&ManifestEntry> = SITE_MANIFEST.iter().filter(|e| !e.generated).collect();
    let total = to_fetch.len();
    let completed = AtomicUsize::new(0);

    let results: HashMap<&'static str, Result<Vec<u8>, DownloadError>> = to_fetch
        .par_iter()
        .map(|entry| {
            let outcome = fetch_entry(&client, base, entry);
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            let percent = 10 + (75 * done / total.max(1)) as u8;
            progress.report(percent, "Fetching site assets");
            (entry.path, outcome)
        })
        .collect();

    Ok(results)
}

fn fetch_entry(
    client: &reqwest::blocking::Client,
    base: &Url,
    entry: &ManifestEntry,
) -> Result<Vec<u8>, DownloadError> {
    let url = base.join(entry.source)?;
    download_to_memory(client, &url)
}

/// `Url::join` replaces the last path segment unless the base ends in `/`
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_trailing_slash_appends() {
        let url = Url::parse("https://example.com/site").unwrap();
        assert_eq!(with_trailing_slash(url).path(), "/site/");
    }

    #[test]
    fn test_with_trailing_slash_keeps_existing() {
        let url = Url::parse("https://example.com/site/").unwrap();
        assert_eq!(with_trailing_slash(url).path(), "/site/");
    }

    #[test]
    fn test_bundle_options_defaults() {
        let options = BundleOptions::new(Url::parse("https://example.com/").unwrap());
        assert_eq!(options.probe_timeout, Duration::from_secs(10));
        assert!(options.progress.is_none());
    }

    #[test]
    fn test_progress_is_monotonic() {
        use std::sync::{Mutex as StdMutex, OnceLock};

        static CALLS: OnceLock<StdMutex<Vec<u8>>> = OnceLock::new();

        fn record(percent: u8, _status: &str) {
            CALLS
                .get_or_init(|| StdMutex::new(Vec::new()))
                .lock()
                .unwrap()
                .push(percent);
        }

        let progress = Progress::new(Some(record));
        progress.report(10, "a");
        progress.report(50, "b");
        progress.report(30, "late");
        progress.report(90, "c");

        let calls = CALLS.get().unwrap().lock().unwrap();
        assert_eq!(*calls, vec![10, 50, 90]);
    }
}
