//! Chat message and intent types for the Shelfwise assistant.
//!
//! These types model a single conversation: transcript entries, the roles
//! that produce them, and the closed set of intent categories a prompt can
//! be routed to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Role of a message in an assistant conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single transcript entry.
///
/// Messages are immutable after creation and ordered by `created_at`
/// within a session. UUID v7 ids carry a timestamp prefix, so ids from
/// different instants sort in creation order too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Response latency in milliseconds (assistant messages only).
    pub response_ms: Option<u64>,
}

impl ChatMessage {
    /// Build a user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
            response_ms: None,
        }
    }

    /// Build an assistant message stamped with the current time.
    pub fn assistant(content: impl Into<String>, response_ms: Option<u64>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            response_ms,
        }
    }
}

/// Intent category a prompt is routed to.
///
/// A closed enumeration: every prompt classifies to exactly one category,
/// with `General` as the catch-all. An unmatched prompt is a valid
/// classification, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    SalesTrend,
    InventoryStock,
    ProductRecommendation,
    PricingStrategy,
    General,
}

impl Default for IntentCategory {
    fn default() -> Self {
        IntentCategory::General
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentCategory::SalesTrend => write!(f, "sales_trend"),
            IntentCategory::InventoryStock => write!(f, "inventory_stock"),
            IntentCategory::ProductRecommendation => write!(f, "product_recommendation"),
            IntentCategory::PricingStrategy => write!(f, "pricing_strategy"),
            IntentCategory::General => write!(f, "general"),
        }
    }
}

impl FromStr for IntentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales_trend" => Ok(IntentCategory::SalesTrend),
            "inventory_stock" => Ok(IntentCategory::InventoryStock),
            "product_recommendation" => Ok(IntentCategory::ProductRecommendation),
            "pricing_strategy" => Ok(IntentCategory::PricingStrategy),
            "general" => Ok(IntentCategory::General),
            other => Err(format!("invalid intent category: '{other}'")),
        }
    }
}
