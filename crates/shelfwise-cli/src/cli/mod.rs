//! CLI command definitions and dispatch for the `shelf` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a
//! noun-verb pattern (e.g., `shelf products list`, `shelf stores kpis`).

pub mod analytics;
pub mod chat;
pub mod products;
pub mod stores;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Retail insights from your terminal.
#[derive(Parser)]
#[command(name = "shelf", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat with the retail insight assistant.
    Chat,

    /// Browse and manage the product catalog.
    Products {
        #[command(subcommand)]
        action: ProductCommand,
    },

    /// Browse store locations and their KPIs.
    Stores {
        #[command(subcommand)]
        action: StoreCommand,
    },

    /// View analytics reports.
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List products, optionally restricted to a category.
    #[command(alias = "ls")]
    List {
        /// Only show products in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Search products by name or category substring.
    Search {
        /// Search term (case-insensitive).
        term: String,

        /// Only search within this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Add a product to the catalog.
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        price: f64,

        #[arg(long, default_value_t = 0)]
        stock: u32,

        /// Product description (mutually exclusive with --generate-description).
        #[arg(long, conflicts_with = "generate_description")]
        description: Option<String>,

        /// Generate the description from the name and category.
        #[arg(long)]
        generate_description: bool,
    },

    /// Delete a product by id.
    #[command(alias = "rm")]
    Delete {
        /// Product id.
        id: String,
    },

    /// Preview a generated description without adding a product.
    Describe {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: String,
    },
}

#[derive(Subcommand)]
pub enum StoreCommand {
    /// List registered store locations.
    #[command(alias = "ls")]
    List,

    /// Show aggregate KPIs, for all stores or a single one.
    Kpis {
        /// Restrict KPIs to one store id.
        #[arg(long)]
        store_id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AnalyticsCommand {
    /// Monthly sales series and headline metrics.
    Overview,

    /// Best-selling products.
    #[command(name = "top-products")]
    TopProducts,

    /// Customer segments.
    Customers,
}
