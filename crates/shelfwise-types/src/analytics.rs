//! Analytics report row types.
//!
//! These are the shapes of the static report datasets served by
//! `shelfwise-core::analytics`. Pure data, no behavior.

use serde::{Deserialize, Serialize};

/// One month of sales figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    /// Sales revenue in whole pounds.
    pub sales: u64,
    pub orders: u64,
    pub customers: u64,
}

/// Share of revenue attributed to a product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    /// Share of total revenue, as a percentage.
    pub percentage: u8,
    /// Revenue in whole pounds.
    pub sales: u64,
}

/// A best-selling product and its movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub units_sold: u64,
    /// Revenue in whole pounds.
    pub revenue: u64,
    /// Growth versus the previous period, as a percentage (may be negative).
    pub growth_pct: i32,
}

/// Direction of change for a performance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A headline performance metric with its period-over-period change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// A customer segment and its share of the customer base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSegment {
    pub segment: String,
    pub count: u64,
    pub percentage: u8,
    pub growth_pct: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_serde() {
        let json = serde_json::to_string(&Trend::Down).unwrap();
        assert_eq!(json, "\"down\"");
        let parsed: Trend = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Trend::Down);
    }

    #[test]
    fn test_top_product_allows_negative_growth() {
        let product = TopProduct {
            name: "Security Camera".to_string(),
            units_sold: 156,
            revenue: 18715,
            growth_pct: -5,
        };
        let json = serde_json::to_string(&product).unwrap();
        let parsed: TopProduct = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
