//! Mock server infrastructure for testing
//!
//! This module provides a shared mockito server for parallel test execution.
//! Using a single shared server eliminates environment variable conflicts
//! and enables true parallel testing.

use lazy_static::lazy_static;
use mockito::{Server, ServerGuard};
use std::sync::Mutex;

lazy_static! {
    /// Global shared mockito server for all tests
    ///
    /// Initialized once and shared across all test threads so that every
    /// test sees the same base URL through the environment override.
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Get reference to shared mock server
///
/// # Thread Safety
///
/// The server is protected by a Mutex to ensure thread-safe access when
/// creating/removing mocks. Acquire the lock only during mock setup and
/// teardown, not during the entire test, and give every test a unique mock
/// path (e.g. a unique username) to avoid collisions.
pub fn get_shared_mock_server() -> std::sync::MutexGuard<'static, ServerGuard> {
    SHARED_MOCK_SERVER.lock().unwrap_or_else(|poisoned| {
        // The server itself survives a panicking test; the lock only
        // serializes access
        poisoned.into_inner()
    })
}

/// Point the GitHub API base URL override at the shared mock server
///
/// Sets `GITHUB_API_BASE_URL` to the shared server's URL. Idempotent: calling
/// it from every test is safe (no-op once set). The variable stays set for
/// the process lifetime, since all tests share the same server.
pub fn init_shared_mock_api_url() {
    if std::env::var("GITHUB_API_BASE_URL").is_ok() {
        return;
    }

    let server = get_shared_mock_server();
    let url = server.url();
    std::env::set_var("GITHUB_API_BASE_URL", url);
}
