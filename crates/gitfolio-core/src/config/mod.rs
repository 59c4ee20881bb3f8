pub mod consts;
pub mod model;

pub use model::{BundleConfig, Config, DisplayConfig, GithubConfig, IdentityConfig};
