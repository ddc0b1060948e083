use thiserror::Error;

/// Errors from insight provider requests.
///
/// The offline provider only ever produces `Unavailable` (via failure
/// injection); the other variants exist so a real network-backed provider
/// can slot in without changing the conversation manager.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Errors related to product catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("invalid product: {0}")]
    InvalidProduct(String),
}

/// Errors related to store registry operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store not found")]
    NotFound,

    #[error("invalid store: {0}")]
    InvalidStore(String),
}
