//! Product catalog CLI commands: list, search, add, delete, describe.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use uuid::Uuid;

use shelfwise_core::catalog;
use shelfwise_types::catalog::{NewProduct, Product, ProductStatus};

use crate::state::AppState;

fn format_status(status: ProductStatus) -> String {
    let styled = match status {
        ProductStatus::InStock => style("In Stock").green(),
        ProductStatus::LowStock => style("Low Stock").yellow(),
        ProductStatus::OutOfStock => style("Out of Stock").red(),
    };
    styled.to_string()
}

fn print_product_table(products: &[&Product]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Category").fg(Color::White),
        Cell::new("Price").fg(Color::White),
        Cell::new("Stock").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("Id").fg(Color::White),
    ]);

    for product in products {
        table.add_row(vec![
            product.name.clone(),
            product.category.clone(),
            format!("£{:.2}", product.price),
            product.stock.to_string(),
            format_status(product.status),
            product.id.to_string(),
        ]);
    }

    println!("{table}");
}

/// List products, optionally restricted to a category.
pub fn list_products(state: &AppState, category: Option<&str>, json: bool) -> Result<()> {
    let products: Vec<&Product> = state
        .catalog
        .products()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!();
        println!("  {} No products found.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    print_product_table(&products);
    Ok(())
}

/// Search products by name or category substring.
pub fn search_products(
    state: &AppState,
    term: &str,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let hits = state.catalog.search(term, category);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!();
        println!(
            "  {} No products match {}.",
            style("i").blue().bold(),
            style(term).yellow()
        );
        println!();
        return Ok(());
    }

    print_product_table(&hits);
    Ok(())
}

/// Add a product to the catalog.
#[allow(clippy::too_many_arguments)]
pub fn add_product(
    state: &mut AppState,
    name: String,
    category: String,
    price: f64,
    stock: u32,
    description: Option<String>,
    generate_description: bool,
    json: bool,
) -> Result<()> {
    let description = if generate_description {
        catalog::generate_description(&name, &category)
    } else {
        description.unwrap_or_default()
    };

    let product = state
        .catalog
        .add(NewProduct {
            name,
            category,
            price,
            stock,
            description,
        })
        .map_err(|e| anyhow::anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(product)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} added to inventory ({}).",
        style("✓").green().bold(),
        style(&product.name).cyan(),
        format_status(product.status)
    );
    println!();
    Ok(())
}

/// Delete a product by id.
pub fn delete_product(state: &mut AppState, id: &str, json: bool) -> Result<()> {
    let id: Uuid = id.parse()?;
    let product = state.catalog.delete(&id).map_err(|e| anyhow::anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} removed from inventory.",
        style("✓").green().bold(),
        style(&product.name).cyan()
    );
    println!();
    Ok(())
}

/// Preview a generated description without adding a product.
pub fn describe_product(name: &str, category: &str, json: bool) -> Result<()> {
    let description = catalog::generate_description(name, category);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "description": description }))?
        );
        return Ok(());
    }

    println!();
    println!("  {description}");
    println!();
    Ok(())
}
