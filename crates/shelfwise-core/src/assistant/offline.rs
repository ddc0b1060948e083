//! Deterministic offline provider.
//!
//! Models the envelope of an external call: a fixed artificial delay on
//! the tokio timer (where a real network round-trip would be), then
//! classify + synthesize. Failure injection is deterministic (every nth
//! request) rather than a random rate, so the rejection path stays
//! reproducible under test.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tracing::debug;

use shelfwise_types::chat::IntentCategory;
use shelfwise_types::config::GlobalConfig;
use shelfwise_types::error::ProviderError;

use super::intent;
use super::provider::InsightProvider;
use super::templates;

/// Reference artificial latency of the offline provider.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// When the offline provider should reject a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureInjection {
    /// Never reject (the reference behavior).
    Never,
    /// Reject every nth request, counting from 1.
    EveryNth(u32),
}

impl FailureInjection {
    /// Build from the optional `failure_every` config knob. Absent or
    /// zero means never fail.
    pub fn from_config(failure_every: Option<u32>) -> Self {
        match failure_every {
            Some(n) if n > 0 => FailureInjection::EveryNth(n),
            _ => FailureInjection::Never,
        }
    }

    fn should_fail(self, request_number: u32) -> bool {
        match self {
            FailureInjection::Never => false,
            FailureInjection::EveryNth(n) => request_number % n == 0,
        }
    }
}

/// Offline deterministic insight provider: delay, classify, synthesize.
pub struct OfflineProvider {
    latency: Duration,
    failure: FailureInjection,
    /// Requests served so far, for failure injection.
    requests: AtomicU32,
}

impl OfflineProvider {
    pub fn new(latency: Duration, failure: FailureInjection) -> Self {
        Self {
            latency,
            failure,
            requests: AtomicU32::new(0),
        }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(
            Duration::from_millis(config.response_latency_ms),
            FailureInjection::from_config(config.failure_every),
        )
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY, FailureInjection::Never)
    }
}

impl InsightProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        tokio::time::sleep(self.latency).await;

        let request_number = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        if self.failure.should_fail(request_number) {
            return Err(ProviderError::Unavailable(format!(
                "injected failure on request {request_number}"
            )));
        }

        let category: IntentCategory = intent::classify(prompt);
        debug!(%category, "classified prompt");
        Ok(templates::synthesize(category, prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfwise_types::chat::IntentCategory;

    #[test]
    fn test_failure_injection_from_config() {
        assert_eq!(FailureInjection::from_config(None), FailureInjection::Never);
        assert_eq!(
            FailureInjection::from_config(Some(0)),
            FailureInjection::Never
        );
        assert_eq!(
            FailureInjection::from_config(Some(3)),
            FailureInjection::EveryNth(3)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_returns_classified_template() {
        let provider = OfflineProvider::default();
        let response = provider
            .complete("Analyze my current sales trends")
            .await
            .unwrap();
        assert_eq!(
            response,
            templates::template(IntentCategory::SalesTrend)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_unmatched_prompt_returns_catch_all() {
        let provider = OfflineProvider::default();
        let response = provider.complete("tell me a joke").await.unwrap();
        assert_eq!(response, templates::template(IntentCategory::General));
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_waits_for_the_configured_latency() {
        let provider = OfflineProvider::default();
        let started = tokio::time::Instant::now();
        provider.complete("hello").await.unwrap();
        assert!(started.elapsed() >= DEFAULT_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_nth_request_fails() {
        let provider = OfflineProvider::new(
            Duration::from_millis(10),
            FailureInjection::EveryNth(2),
        );

        assert!(provider.complete("one").await.is_ok());
        let err = provider.complete("two").await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(_)));
        assert!(provider.complete("three").await.is_ok());
        assert!(provider.complete("four").await.is_err());
    }
}
