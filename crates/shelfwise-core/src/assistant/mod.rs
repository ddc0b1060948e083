//! Intent-routed response engine with conversation state management.
//!
//! Pipeline, leaves first:
//! - [`templates`] — immutable intent category → response template catalog
//! - [`intent`] — ordered keyword routing, first match wins
//! - [`provider`] — the injectable async [`provider::InsightProvider`] seam
//! - [`offline`] — deterministic offline provider (latency + template lookup)
//! - [`conversation`] — transcript ownership, pending flag, single-flight send
//! - [`quick_actions`] — canned prompts that ride the identical send path

pub mod conversation;
pub mod intent;
pub mod offline;
pub mod provider;
pub mod quick_actions;
pub mod templates;

pub use conversation::{ConversationManager, ConversationSession, SendOutcome};
pub use intent::classify;
pub use offline::{FailureInjection, OfflineProvider};
pub use provider::InsightProvider;
pub use quick_actions::{QuickAction, QUICK_ACTIONS};
pub use templates::synthesize;
