use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ErrorMap;

#[derive(Error, Debug)]
pub enum UserDirError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {status}")]
    ApiError { status: u16 },

    #[error("Failed to fetch users")]
    FetchFailed,

    #[error("Invalid user list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API URL {url}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Form has {} invalid field(s)", errors.len())]
    Validation { errors: ErrorMap },
}

pub type Result<T> = std::result::Result<T, UserDirError>;
