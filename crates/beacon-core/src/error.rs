//! Error types for catalog loading

/// Errors raised while loading or validating a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate service name '{name}' at index {index}")]
    DuplicateName { name: String, index: usize },

    #[error("Empty service name at index {index}")]
    EmptyName { index: usize },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
