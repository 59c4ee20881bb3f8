// Core modules
pub mod config;
pub mod error;
pub mod identity;

// Re-export commonly used types
pub use config::{Config, consts};
pub use error::{GitfolioError, Result};
pub use identity::{Identity, TokenKind, TokenValidation};
