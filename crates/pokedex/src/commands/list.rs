use super::OutputFormat;
use crate::palette;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use indicatif::ProgressBar;
use pokedex_api::{filter, CatalogLoader, ClientConfig, PokeClient, Record};
use std::time::Duration;

#[derive(Args, Debug)]
#[command(about = "Load the catalog and print it, optionally filtered by name")]
pub struct ListArgs {
    /// Only show Pokémon whose name contains this text (case-insensitive)
    pub query: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(args: ListArgs, config: &ClientConfig) -> Result<()> {
    let client = PokeClient::from_config(config).context("Failed to create HTTP client")?;
    let loader = CatalogLoader::new(&client, config.concurrency)?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Fetching Pokédex index...");

    let catalog = loader.load_with_progress(config.page_limit, |p| {
        spinner.set_message(format!("Loading Pokémon... {}/{}", p.completed, p.total));
    });
    spinner.finish_and_clear();
    let catalog =
        catalog.with_context(|| format!("Failed to load catalog from {}", config.base_url))?;

    let query = args.query.as_deref().unwrap_or("");
    let visible = filter(&catalog, query);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&visible)?);
        }
        OutputFormat::Human => {
            if visible.is_empty() {
                println!("{}", "No Pokémon found!".yellow());
                return Ok(());
            }
            for record in &visible {
                println!("{}", format_row(record));
            }
            println!(
                "{}",
                format!("{} of {} Pokémon", visible.len(), catalog.len()).dimmed()
            );
        }
    }

    Ok(())
}

fn format_row(record: &Record) -> String {
    let types = record
        .types
        .iter()
        .map(|t| palette::paint(t).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {:<24} {}",
        format!("#{:>4}", record.id).dimmed(),
        record.name,
        types
    )
}
