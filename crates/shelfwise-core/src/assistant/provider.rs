//! InsightProvider trait definition.
//!
//! The seam between the conversation manager and whatever produces
//! responses. The offline deterministic implementation lives in
//! [`super::offline`]; a real network-backed provider implements the same
//! trait and slots in without touching the conversation manager.

use shelfwise_types::error::ProviderError;

/// Trait for assistant response backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The
/// conversation manager is generic over the provider, so the trait does
/// not need to be object-safe.
pub trait InsightProvider: Send + Sync {
    /// Human-readable provider name (e.g., "offline").
    fn name(&self) -> &str;

    /// Submit a prompt and eventually receive the full response text,
    /// or a [`ProviderError`] on transport/provider failure.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send;
}
