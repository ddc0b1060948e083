//! Static response template catalog.
//!
//! One pre-authored multi-section report per intent category, ported
//! verbatim from the legacy dashboard as configuration data. The prompt
//! drives classification only; it does not parameterize the template.
//! That is a preserved simplification of the offline demo mode, not a
//! gap to fix.

use shelfwise_types::chat::IntentCategory;

/// Greeting seeded into every new conversation transcript.
pub const GREETING: &str = "Hello! I'm your retail insight assistant. I can help you with inventory management, sales analysis, product recommendations, and market insights. What would you like to know?";

const SALES_TREND: &str = r#"Based on your sales data analysis, here are key insights:

📈 **Sales Performance:**
- Your electronics category shows a 23% increase over the last quarter
- Peak sales occur on weekends and during promotional periods
- Average order value has increased by 15%

🎯 **Recommendations:**
1. Expand your electronics inventory, particularly wireless accessories
2. Consider implementing time-based promotions during weekdays
3. Bundle complementary products to increase AOV further

📊 **Market Trends:**
- Smart home devices are trending with 45% search increase
- Sustainable products show growing consumer interest
- Mobile shopping accounts for 68% of your traffic

Would you like me to dive deeper into any specific area?"#;

const INVENTORY_STOCK: &str = r#"Here's your inventory optimization analysis:

📦 **Current Status:**
- 15 products are below optimal stock levels
- Electronics and Clothing categories need immediate attention
- Total inventory value: $125,450

⚡ **Immediate Actions:**
1. Reorder wireless headphones (only 8 units left)
2. Increase organic cotton t-shirt stock (currently out of stock)
3. Consider seasonal inventory adjustments

🔄 **Optimization Strategy:**
- Implement ABC analysis for better categorization
- Set up automated reorder points
- Consider drop-shipping for slow-moving items

💡 **AI Recommendations:**
- Forecast suggests 30% increase in demand for fitness trackers
- Consider bundling slow-moving items with popular products
- Implement just-in-time ordering for fast-moving categories"#;

const PRODUCT_RECOMMENDATION: &str = r#"Based on market analysis and your store performance, here are my product recommendations:

🚀 **High-Potential Products:**
1. **Smart Home Security Systems** - 67% market growth
2. **Sustainable Fashion Items** - Growing consumer consciousness
3. **Wireless Charging Accessories** - Universal compatibility trend
4. **Fitness & Wellness Products** - Post-pandemic health focus

📊 **Data-Driven Insights:**
- Customers who buy smartphones have 78% likelihood of purchasing accessories
- Eco-friendly products have 34% higher profit margins
- Tech gadgets under $100 have the highest conversion rates

🎪 **Seasonal Opportunities:**
- Back-to-school electronics (July-August)
- Fitness equipment (January-March)
- Smart home devices (November-December)

Would you like detailed analysis on any specific product category?"#;

const PRICING_STRATEGY: &str = r#"Here's your pricing strategy analysis:

💰 **Current Pricing Performance:**
- Average margin: 42% (industry average: 38%)
- Price sensitivity varies by category
- Dynamic pricing opportunities identified

📈 **Optimization Recommendations:**
1. **Electronics**: Consider competitive pricing (market is price-sensitive)
2. **Clothing**: Premium positioning working well (+15% margin)
3. **Accessories**: Opportunity for slight price increase

🔍 **Market Analysis:**
- Your prices are competitive in 73% of categories
- Customers show low price sensitivity for quality items
- Bundle pricing could increase average order value by 22%

⚖️ **Strategic Approach:**
- Implement psychological pricing ($29.99 vs $30.00)
- Test dynamic pricing during peak hours
- Consider loyalty program discounts

Need help implementing any of these strategies?"#;

const GENERAL: &str = r#"I understand you're looking for retail insights. I can help you with:

🔍 **Analysis & Insights:**
- Sales performance analysis
- Inventory optimization
- Customer behavior patterns
- Market trend identification

📈 **Business Growth:**
- Product recommendations
- Pricing strategies
- Marketing optimization
- Competitive analysis

💡 **Operational Efficiency:**
- Stock level optimization
- Demand forecasting
- Supplier recommendations
- Process automation

Please let me know which area you'd like to explore, and I'll provide detailed insights and actionable recommendations!"#;

/// Look up the static template body for a category.
pub fn template(category: IntentCategory) -> &'static str {
    match category {
        IntentCategory::SalesTrend => SALES_TREND,
        IntentCategory::InventoryStock => INVENTORY_STOCK,
        IntentCategory::ProductRecommendation => PRODUCT_RECOMMENDATION,
        IntentCategory::PricingStrategy => PRICING_STRATEGY,
        IntentCategory::General => GENERAL,
    }
}

/// Produce the response body for a classified prompt.
///
/// Total function: returns the category's template verbatim. The raw
/// prompt is accepted for interface stability with future providers that
/// do parameterize on it.
pub fn synthesize(category: IntentCategory, _raw_prompt: &str) -> String {
    template(category).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [IntentCategory; 5] = [
        IntentCategory::SalesTrend,
        IntentCategory::InventoryStock,
        IntentCategory::ProductRecommendation,
        IntentCategory::PricingStrategy,
        IntentCategory::General,
    ];

    #[test]
    fn test_every_category_has_a_template() {
        for category in ALL_CATEGORIES {
            assert!(!template(category).is_empty(), "{category} template empty");
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        for (i, a) in ALL_CATEGORIES.iter().enumerate() {
            for b in &ALL_CATEGORIES[i + 1..] {
                assert_ne!(template(*a), template(*b), "{a} and {b} share a template");
            }
        }
    }

    #[test]
    fn test_templates_are_multi_section() {
        // Each report carries labeled section headers.
        for category in ALL_CATEGORIES {
            let sections = template(category).matches("**").count() / 2;
            assert!(sections >= 3, "{category} has fewer than 3 sections");
        }
    }

    #[test]
    fn test_synthesize_ignores_prompt() {
        let a = synthesize(IntentCategory::SalesTrend, "short");
        let b = synthesize(
            IntentCategory::SalesTrend,
            "a very different and much longer prompt about sales",
        );
        assert_eq!(a, b);
        assert_eq!(a, template(IntentCategory::SalesTrend));
    }
}
