// Portfolio Site - Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or resolving a page.
///
/// Rendering itself never fails: once a profile is loaded every view is a
/// pure function of the navigation state.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("failed to read profile {path}: {source}")]
    ProfileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {path}: {source}")]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, SiteError>;
