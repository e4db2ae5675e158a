use super::OutputFormat;
use crate::palette;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pokedex_api::{ClientConfig, ErrorKind, NameSearcher, PokeClient, Record};

#[derive(Args, Debug)]
#[command(about = "Look up a single Pokémon by name")]
pub struct ShowArgs {
    /// Pokémon name (case-insensitive)
    pub name: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(args: ShowArgs, config: &ClientConfig) -> Result<()> {
    let client = PokeClient::from_config(config).context("Failed to create HTTP client")?;

    let record = match NameSearcher::new(&client).search(&args.name) {
        Ok(record) => record,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            anyhow::bail!("Pokémon `{}` not found", args.name.trim());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to look up `{}`", args.name.trim()));
        }
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Human => {
            for line in detail_lines(&record) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn detail_lines(record: &Record) -> Vec<String> {
    let mut lines = vec![
        record.name.to_uppercase().bold().to_string(),
        format!("ID: {}", record.id),
        format!("Height: {} dm", record.height),
        format!("Weight: {} hg", record.weight),
    ];

    let types = record
        .types
        .iter()
        .map(|t| palette::paint(t).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("Types: {}", types));

    lines.push("Abilities:".to_string());
    lines.extend(record.abilities.iter().map(|a| format!("  - {}", a)));

    if let Some(front) = &record.sprites.front {
        lines.push(format!("Front sprite: {}", front.dimmed()));
    }
    if let Some(back) = &record.sprites.back {
        lines.push(format!("Back sprite: {}", back.dimmed()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_api::Sprites;

    #[test]
    fn test_detail_lines() {
        colored::control::set_override(false);
        let record = Record {
            id: 25,
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            sprites: Sprites {
                front: Some("https://img.test/25.png".to_string()),
                back: None,
            },
            types: vec!["electric".to_string()],
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
        };
        assert_eq!(
            detail_lines(&record),
            vec![
                "PIKACHU",
                "ID: 25",
                "Height: 4 dm",
                "Weight: 60 hg",
                "Types: electric",
                "Abilities:",
                "  - static",
                "  - lightning-rod",
                "Front sprite: https://img.test/25.png",
            ]
        );
    }
}
