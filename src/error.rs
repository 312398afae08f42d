//! Error type shared by the storage and configuration boundaries.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in the header glue is fatal. Backends report failures through
//! `HeaderError`; the session accessor and the page bootstrap degrade them to
//! empty/default values so a broken store never blocks page rendering.

#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("storage {op} failed for key `{key}`")]
    Storage { op: &'static str, key: String },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeaderError>;
