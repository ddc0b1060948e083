//! Static analytics datasets.
//!
//! The reporting screens render fixed sample data; these accessors are
//! the interface boundary. No algorithmic content beyond the data itself.

use shelfwise_types::analytics::{
    CategoryShare, CustomerSegment, MonthlySales, PerformanceMetric, TopProduct, Trend,
};

/// Monthly sales series for the trailing half year.
pub fn monthly_sales() -> Vec<MonthlySales> {
    [
        ("Jan", 9_600, 145, 89),
        ("Feb", 15_200, 230, 134),
        ("Mar", 12_000, 180, 112),
        ("Apr", 17_600, 267, 156),
        ("May", 20_000, 298, 178),
        ("Jun", 22_400, 334, 201),
    ]
    .into_iter()
    .map(|(month, sales, orders, customers)| MonthlySales {
        month: month.to_string(),
        sales,
        orders,
        customers,
    })
    .collect()
}

/// Revenue share by product category.
pub fn category_breakdown() -> Vec<CategoryShare> {
    [
        ("Electronics", 45, 36_000),
        ("Clothing", 25, 20_000),
        ("Home & Garden", 20, 16_000),
        ("Sports", 10, 8_000),
    ]
    .into_iter()
    .map(|(category, percentage, sales)| CategoryShare {
        category: category.to_string(),
        percentage,
        sales,
    })
    .collect()
}

/// Best-selling products with period-over-period growth.
pub fn top_products() -> Vec<TopProduct> {
    [
        ("Wireless Headphones", 234, 56_016, 23),
        ("Smart Fitness Tracker", 189, 30_233, 15),
        ("Security Camera", 156, 18_715, -5),
        ("Cotton T-Shirt", 145, 4_636, 8),
        ("Bluetooth Speaker", 123, 9_840, 12),
    ]
    .into_iter()
    .map(|(name, units_sold, revenue, growth_pct)| TopProduct {
        name: name.to_string(),
        units_sold,
        revenue,
        growth_pct,
    })
    .collect()
}

/// Headline performance metrics.
pub fn performance_metrics() -> Vec<PerformanceMetric> {
    [
        ("Conversion Rate", "3.2%", "+0.5%", Trend::Up),
        ("Average Order Value", "£67.60", "+£9.84", Trend::Up),
        ("Customer Lifetime Value", "£196", "+£22.40", Trend::Up),
        ("Return Rate", "2.1%", "-0.3%", Trend::Down),
    ]
    .into_iter()
    .map(|(title, value, change, trend)| PerformanceMetric {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    })
    .collect()
}

/// Customer base segmented by loyalty.
pub fn customer_segments() -> Vec<CustomerSegment> {
    [
        ("New Customers", 156, 35, 23),
        ("Returning Customers", 234, 52, 12),
        ("VIP Customers", 58, 13, 8),
    ]
    .into_iter()
    .map(|(segment, count, percentage, growth_pct)| CustomerSegment {
        segment: segment.to_string(),
        count,
        percentage,
        growth_pct,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_sales_series() {
        let series = monthly_sales();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[5].sales, 22_400);
    }

    #[test]
    fn test_category_breakdown_sums_to_whole() {
        let breakdown = category_breakdown();
        let total: u32 = breakdown.iter().map(|c| u32::from(c.percentage)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_customer_segments_sum_to_whole() {
        let segments = customer_segments();
        let total: u32 = segments.iter().map(|s| u32::from(s.percentage)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_top_products_ordered_by_units_sold() {
        let products = top_products();
        assert_eq!(products.len(), 5);
        for pair in products.windows(2) {
            assert!(pair[0].units_sold >= pair[1].units_sold);
        }
    }
}
