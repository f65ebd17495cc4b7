//! Error types for the beacon service

use beacon_core::CatalogError;

/// Errors that can occur in the beacon service
#[derive(Debug, thiserror::Error)]
pub enum BeaconError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for beacon operations
pub type Result<T> = std::result::Result<T, BeaconError>;
