use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeesError {
    #[error("Config directory not found at {0}. Run 'schoolfees init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("API request failed: {0}")]
    Api(#[from] ureq::Error),

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid --status value: '{0}'. Use 'paid', 'pending', or 'overdue'.")]
    InvalidStatusFilter(String),

    #[error("Invalid --payment-status value: '{0}'. Use 'pending', 'approved', or 'failed'.")]
    InvalidPaymentStatusFilter(String),

    #[error("No children cached yet. Run 'schoolfees fees' once to populate the cache.")]
    NoChildrenCache,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeesError>;
