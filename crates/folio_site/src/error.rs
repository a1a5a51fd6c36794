//! Site error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or driving the site
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: &'static str,
    },

    #[error("invalid content asset: {0}")]
    Content(#[from] serde_json::Error),

    #[error("no project with slug `{0}`")]
    UnknownProject(String),
}

/// Result type for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors from the contact form
#[derive(Error, Debug)]
pub enum ContactError {
    /// A required field is empty or malformed
    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("no contact endpoint configured")]
    NoEndpoint,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint answered {0}")]
    Status(reqwest::StatusCode),
}
