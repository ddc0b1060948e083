//! Conversation manager: transcript ownership and the send state machine.
//!
//! Owns the ordered, append-only transcript and the in-flight flag,
//! and orchestrates one exchange: append user message, invoke the
//! provider, append the assistant message or propagate the failure.
//!
//! Single-flight discipline: at most one request may be outstanding per
//! session, enforced at `send` with a check-and-set under the session
//! lock. Because of it, exchanges resolve and append in exactly the
//! order they were sent; no sequence numbers are needed.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use shelfwise_types::chat::ChatMessage;
use shelfwise_types::error::ProviderError;

use super::provider::InsightProvider;
use super::templates::GREETING;

/// Read model of a conversation: the transcript and the in-flight flag.
///
/// `pending` is true exactly while a request is in flight. The transcript
/// is append-only; a user message always precedes its assistant reply.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    transcript: Vec<ChatMessage>,
    pending: bool,
}

impl ConversationSession {
    fn seeded() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(GREETING, None)],
            pending: false,
        }
    }

    /// Messages in creation order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Whether a request is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Result of a `send` call.
#[derive(Debug)]
pub enum SendOutcome {
    /// The exchange completed; the assistant message was appended.
    Replied(ChatMessage),
    /// Blank input; transcript and pending flag untouched.
    IgnoredEmpty,
    /// A request was already in flight; transcript and pending flag
    /// untouched. Retry once the in-flight request settles.
    IgnoredBusy,
}

/// Orchestrates a single long-lived conversation session.
///
/// Generic over the provider so the offline deterministic backend and a
/// future real one are interchangeable. The session state sits behind a
/// shared handle so callers can render the transcript while a request is
/// in flight.
pub struct ConversationManager<P: InsightProvider> {
    provider: P,
    session: Arc<Mutex<ConversationSession>>,
}

impl<P: InsightProvider> ConversationManager<P> {
    /// Create a session seeded with the assistant greeting.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            session: Arc::new(Mutex::new(ConversationSession::seeded())),
        }
    }

    /// Clone of the current session state, for rendering.
    pub async fn snapshot(&self) -> ConversationSession {
        self.session.lock().await.clone()
    }

    /// Send a prompt through the full pipeline.
    ///
    /// Blank input and send-while-pending are local no-ops, never errors.
    /// On provider rejection no assistant message is appended, the session
    /// returns to idle, and the error is propagated for the caller to
    /// surface non-fatally; retrying is simply calling `send` again.
    pub async fn send(&self, text: &str) -> Result<SendOutcome, ProviderError> {
        if text.trim().is_empty() {
            debug!("ignoring blank prompt");
            return Ok(SendOutcome::IgnoredEmpty);
        }

        {
            let mut session = self.session.lock().await;
            if session.pending {
                warn!("ignoring prompt: a request is already in flight");
                return Ok(SendOutcome::IgnoredBusy);
            }
            // Append and mark in one critical section so no interleaving
            // can observe a user message without the pending flag.
            session.transcript.push(ChatMessage::user(text));
            session.pending = true;
        }

        let started = Instant::now();
        let result = self.provider.complete(text).await;
        let response_ms = started.elapsed().as_millis() as u64;

        let mut session = self.session.lock().await;
        session.pending = false;
        match result {
            Ok(content) => {
                let message = ChatMessage::assistant(content, Some(response_ms));
                session.transcript.push(message.clone());
                info!(
                    provider = self.provider.name(),
                    response_ms, "exchange completed"
                );
                Ok(SendOutcome::Replied(message))
            }
            Err(err) => {
                warn!(provider = self.provider.name(), error = %err, "request rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::offline::{FailureInjection, OfflineProvider};
    use crate::assistant::quick_actions::QUICK_ACTIONS;
    use crate::assistant::templates::{self, template};
    use shelfwise_types::chat::{IntentCategory, MessageRole};
    use std::time::Duration;

    fn manager() -> ConversationManager<OfflineProvider> {
        ConversationManager::new(OfflineProvider::default())
    }

    #[tokio::test]
    async fn test_new_session_is_seeded_with_greeting() {
        let manager = manager();
        let session = manager.snapshot().await;
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, MessageRole::Assistant);
        assert_eq!(session.transcript()[0].content, templates::GREETING);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_blank_input_is_a_no_op() {
        let manager = manager();
        for input in ["", "   ", "\t\n"] {
            let outcome = manager.send(input).await.unwrap();
            assert!(matches!(outcome, SendOutcome::IgnoredEmpty));
        }
        let session = manager.snapshot().await;
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_to_end_sales_exchange() {
        let manager = manager();
        let outcome = manager
            .send("Analyze my current sales trends")
            .await
            .unwrap();

        let SendOutcome::Replied(reply) = outcome else {
            panic!("expected a reply");
        };
        assert_eq!(reply.content, template(IntentCategory::SalesTrend));

        let session = manager.snapshot().await;
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].role, MessageRole::Assistant); // greeting
        assert_eq!(transcript[1].role, MessageRole::User);
        assert_eq!(transcript[1].content, "Analyze my current sales trends");
        assert_eq!(transcript[2].role, MessageRole::Assistant);
        assert_eq!(transcript[2].content, template(IntentCategory::SalesTrend));
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stock_prompt_routes_to_inventory() {
        let manager = manager();
        let SendOutcome::Replied(reply) =
            manager.send("What should I stock more of?").await.unwrap()
        else {
            panic!("expected a reply");
        };
        assert_eq!(reply.content, template(IntentCategory::InventoryStock));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmatched_prompt_gets_catch_all_reply() {
        let manager = manager();
        let SendOutcome::Replied(reply) = manager.send("tell me a joke").await.unwrap() else {
            panic!("expected a reply");
        };
        assert_eq!(reply.content, template(IntentCategory::General));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transcript_is_append_only_and_ordered() {
        let manager = manager();
        manager.send("sales").await.unwrap();
        manager.send("inventory").await.unwrap();
        manager.send("something else entirely").await.unwrap();

        let session = manager.snapshot().await;
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 7);
        for pair in transcript.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
        // Each user message precedes its assistant reply.
        for exchange in transcript[1..].chunks(2) {
            assert_eq!(exchange[0].role, MessageRole::User);
            assert_eq!(exchange[1].role, MessageRole::Assistant);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_pending_is_a_no_op() {
        let manager = Arc::new(manager());

        let first = {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.send("analyze my sales").await })
        };
        // Let the first send reach the provider's artificial delay.
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        assert!(manager.snapshot().await.is_pending());

        let outcome = manager.send("inventory check").await.unwrap();
        assert!(matches!(outcome, SendOutcome::IgnoredBusy));

        let first = first.await.unwrap().unwrap();
        assert!(matches!(first, SendOutcome::Replied(_)));

        // Only the first exchange landed: greeting + user + assistant.
        let session = manager.snapshot().await;
        assert_eq!(session.transcript().len(), 3);
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_leaves_transcript_clean_and_session_idle() {
        let provider = OfflineProvider::new(
            Duration::from_millis(10),
            FailureInjection::EveryNth(1),
        );
        let manager = ConversationManager::new(provider);

        let err = manager.send("analyze my sales").await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(_)));

        // No assistant message was appended; the user message stays.
        let session = manager.snapshot().await;
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role, MessageRole::User);
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_rejection_succeeds() {
        let provider = OfflineProvider::new(
            Duration::from_millis(10),
            FailureInjection::EveryNth(2),
        );
        let manager = ConversationManager::new(provider);

        manager.send("sales please").await.unwrap();
        assert!(manager.send("sales again").await.is_err());

        // Session is idle again; retrying is just another send.
        let SendOutcome::Replied(reply) = manager.send("sales again").await.unwrap() else {
            panic!("expected a reply");
        };
        assert_eq!(reply.content, template(IntentCategory::SalesTrend));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_action_matches_typed_prompt() {
        let action = QUICK_ACTIONS
            .iter()
            .find(|a| a.command == "pricing")
            .unwrap();
        assert_eq!(
            action.prompt,
            "Analyze my pricing strategy and suggest improvements for better profitability"
        );

        let via_action = manager();
        let SendOutcome::Replied(from_action) = via_action.send(action.prompt).await.unwrap()
        else {
            panic!("expected a reply");
        };

        let via_typing = manager();
        let SendOutcome::Replied(from_typing) = via_typing
            .send("Analyze my pricing strategy and suggest improvements for better profitability")
            .await
            .unwrap()
        else {
            panic!("expected a reply");
        };

        assert_eq!(from_action.content, from_typing.content);
        assert_eq!(from_action.content, template(IntentCategory::PricingStrategy));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_records_response_latency() {
        let manager = manager();
        let SendOutcome::Replied(reply) = manager.send("hello there").await.unwrap() else {
            panic!("expected a reply");
        };
        // Paused clock: elapsed time is exactly the provider latency.
        assert!(reply.response_ms.unwrap() >= 2000);
    }
}
