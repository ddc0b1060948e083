//! Shelfwise CLI entry point.
//!
//! Binary name: `shelf`
//!
//! Parses CLI arguments, loads configuration and the in-memory services,
//! then dispatches to the appropriate command handler.

mod cli;
mod config;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{AnalyticsCommand, Cli, Commands, ProductCommand, StoreCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,shelfwise=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "shelf", &mut std::io::stdout());
        return Ok(());
    }

    let mut state = AppState::init().await;

    match cli.command {
        Commands::Chat => {
            cli::chat::run_chat(&state).await?;
        }

        Commands::Products { action } => match action {
            ProductCommand::List { category } => {
                cli::products::list_products(&state, category.as_deref(), cli.json)?;
            }
            ProductCommand::Search { term, category } => {
                cli::products::search_products(&state, &term, category.as_deref(), cli.json)?;
            }
            ProductCommand::Add {
                name,
                category,
                price,
                stock,
                description,
                generate_description,
            } => {
                cli::products::add_product(
                    &mut state,
                    name,
                    category,
                    price,
                    stock,
                    description,
                    generate_description,
                    cli.json,
                )?;
            }
            ProductCommand::Delete { id } => {
                cli::products::delete_product(&mut state, &id, cli.json)?;
            }
            ProductCommand::Describe { name, category } => {
                cli::products::describe_product(&name, &category, cli.json)?;
            }
        },

        Commands::Stores { action } => match action {
            StoreCommand::List => {
                cli::stores::list_stores(&state, cli.json)?;
            }
            StoreCommand::Kpis { store_id } => {
                cli::stores::show_kpis(&state, store_id.as_deref(), cli.json)?;
            }
        },

        Commands::Analytics { action } => match action {
            AnalyticsCommand::Overview => {
                cli::analytics::show_overview(cli.json)?;
            }
            AnalyticsCommand::TopProducts => {
                cli::analytics::show_top_products(cli.json)?;
            }
            AnalyticsCommand::Customers => {
                cli::analytics::show_customers(cli.json)?;
            }
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
