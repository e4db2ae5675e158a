use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use pokedex_api::ClientConfig;
use std::time::Duration;

mod commands;
mod palette;
mod tui;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse, filter and look up Pokémon from PokéAPI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    /// API base URL (defaults to $POKEDEX_API_URL, then https://pokeapi.co/api/v2)
    #[arg(long = "api-url", global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Number of index entries to load
    #[arg(long, global = true, value_name = "N")]
    limit: Option<usize>,

    /// Maximum detail requests in flight
    #[arg(long, global = true, value_name = "N")]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds (0 disables)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive grid and detail view (default)
    #[command(alias = "b")]
    Browse,

    /// Load the catalog and print it, optionally filtered by name
    #[command(alias = "ls")]
    List(commands::list::ListArgs),

    /// Look up a single Pokémon by name
    Show(commands::show::ShowArgs),
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(limit) = self.limit {
            config = config.with_page_limit(limit);
        }
        if let Some(concurrency) = self.concurrency {
            config = config.with_concurrency(concurrency);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }
        config
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let config = cli.client_config();
    log::debug!("Using {:?}", config);

    match cli.command {
        None | Some(Commands::Browse) => tui::run(config),
        Some(Commands::List(args)) => commands::list::execute(args, &config),
        Some(Commands::Show(args)) => commands::show::execute(args, &config),
    }
}
