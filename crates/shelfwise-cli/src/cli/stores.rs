//! Store registry CLI commands: list, KPIs.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// List registered store locations.
pub fn list_stores(state: &AppState, json: bool) -> Result<()> {
    let stores = state.stores.stores();

    if json {
        println!("{}", serde_json::to_string_pretty(&stores)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Location").fg(Color::White),
        Cell::new("Manager").fg(Color::White),
        Cell::new("Type").fg(Color::White),
        Cell::new("Revenue").fg(Color::White),
        Cell::new("Customers").fg(Color::White),
        Cell::new("Performance").fg(Color::White),
    ]);

    for store in stores {
        table.add_row(vec![
            store.id.clone(),
            store.name.clone(),
            store.location.clone(),
            store.manager.clone(),
            store.store_type.to_string(),
            format!("£{}", store.revenue),
            store.customers.to_string(),
            format!("{}%", store.performance),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Show aggregate KPIs over all stores or a single one.
pub fn show_kpis(state: &AppState, store_id: Option<&str>, json: bool) -> Result<()> {
    let Some(kpis) = state.stores.kpis(store_id) else {
        println!();
        println!("  {} No stores match that selection.", style("i").blue().bold());
        println!();
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&kpis)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}  £{}",
        style("Total revenue:").bold(),
        kpis.total_revenue
    );
    println!(
        "  {}  {}",
        style("Total customers:").bold(),
        kpis.total_customers
    );
    println!(
        "  {}  {:.1}%",
        style("Avg performance:").bold(),
        kpis.average_performance
    );
    println!(
        "  {}  {}",
        style("Stores counted:").bold(),
        kpis.store_count
    );
    println!();
    Ok(())
}
