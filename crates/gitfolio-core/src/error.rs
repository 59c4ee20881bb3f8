use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitfolioError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse gitfolio.toml: {0}")]
    ConfigParseError(String),

    // Form/input errors
    #[error("VALIDATION_ERROR: {0}")]
    ValidationError(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitfolioError>;
