//! Analytics report CLI commands.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use shelfwise_core::analytics;
use shelfwise_types::analytics::Trend;

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::White))
            .collect::<Vec<_>>(),
    );
    table
}

fn format_trend(trend: Trend) -> String {
    match trend {
        Trend::Up => style("▲").green().to_string(),
        Trend::Down => style("▼").red().to_string(),
    }
}

/// Monthly sales series plus headline metrics.
pub fn show_overview(json: bool) -> Result<()> {
    let sales = analytics::monthly_sales();
    let metrics = analytics::performance_metrics();
    let categories = analytics::category_breakdown();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "monthly_sales": sales,
                "performance_metrics": metrics,
                "category_breakdown": categories,
            }))?
        );
        return Ok(());
    }

    let mut table = new_table(&["Month", "Sales", "Orders", "Customers"]);
    for month in &sales {
        table.add_row(vec![
            month.month.clone(),
            format!("£{}", month.sales),
            month.orders.to_string(),
            month.customers.to_string(),
        ]);
    }
    println!("{table}");

    println!();
    for metric in &metrics {
        println!(
            "  {} {}  {} ({})",
            format_trend(metric.trend),
            style(&metric.title).bold(),
            metric.value,
            style(&metric.change).dim()
        );
    }

    println!();
    for category in &categories {
        println!(
            "  {:>3}%  {} (£{})",
            category.percentage,
            style(&category.category).bold(),
            category.sales
        );
    }
    println!();
    Ok(())
}

/// Best-selling products.
pub fn show_top_products(json: bool) -> Result<()> {
    let products = analytics::top_products();

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    let mut table = new_table(&["Product", "Units Sold", "Revenue", "Growth"]);
    for product in &products {
        let growth = if product.growth_pct >= 0 {
            style(format!("+{}%", product.growth_pct)).green()
        } else {
            style(format!("{}%", product.growth_pct)).red()
        };
        table.add_row(vec![
            product.name.clone(),
            product.units_sold.to_string(),
            format!("£{}", product.revenue),
            growth.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Customer segments.
pub fn show_customers(json: bool) -> Result<()> {
    let segments = analytics::customer_segments();

    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    let mut table = new_table(&["Segment", "Customers", "Share", "Growth"]);
    for segment in &segments {
        table.add_row(vec![
            segment.segment.clone(),
            segment.count.to_string(),
            format!("{}%", segment.percentage),
            format!("+{}%", segment.growth_pct),
        ]);
    }
    println!("{table}");
    Ok(())
}
