//! Test utilities for gitfolio
//!
//! This crate provides the shared mockito server used for parallel HTTP
//! tests across the gitfolio workspace.

pub mod mock;

pub use mock::{get_shared_mock_server, init_shared_mock_api_url};
