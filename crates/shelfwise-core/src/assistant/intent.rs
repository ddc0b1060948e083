//! Keyword-based intent classification.
//!
//! The priority chain is an explicit ordered route table rather than a
//! sequence of conditionals: routes are tried top to bottom and the first
//! keyword hit wins, so categories are mutually exclusive by ordering even
//! when a prompt contains trigger words from several of them. The route
//! order is an observable compatibility contract, not an accident.

use shelfwise_types::chat::IntentCategory;

/// One entry in the priority chain: a keyword set and the category it
/// routes to.
pub struct IntentRoute {
    pub category: IntentCategory,
    pub keywords: &'static [&'static str],
}

/// The priority chain, highest priority first.
///
/// A prompt containing both "sales" and "price" classifies as
/// `SalesTrend` because its route comes first.
pub const INTENT_ROUTES: &[IntentRoute] = &[
    IntentRoute {
        category: IntentCategory::SalesTrend,
        keywords: &["sales", "trend"],
    },
    IntentRoute {
        category: IntentCategory::InventoryStock,
        keywords: &["inventory", "stock"],
    },
    IntentRoute {
        category: IntentCategory::ProductRecommendation,
        keywords: &["product", "recommend"],
    },
    IntentRoute {
        category: IntentCategory::PricingStrategy,
        keywords: &["pricing", "price"],
    },
];

/// Classify a prompt into an intent category.
///
/// Total function: matching is case-insensitive substring containment,
/// and a prompt that hits no route classifies as `General`. An unmatched
/// prompt is a valid classification, never an error.
pub fn classify(text: &str) -> IntentCategory {
    let lowered = text.to_lowercase();
    INTENT_ROUTES
        .iter()
        .find(|route| route.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|route| route.category)
        .unwrap_or_default()
}
