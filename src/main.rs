use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use country_search::config::AppConfig;
use country_search::core::{CountryLookup, Result, SuggestionSource};
use country_search::{logging, tui};

#[derive(Parser, Debug)]
#[command(name = "country-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lookup endpoint; suggestions come from GET {base_url}/{query}
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Quiet period after the last keystroke before searching
    #[arg(long, global = true, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Also search on the first keystroke of a burst
    #[arg(long, global = true)]
    leading_edge: bool,

    /// Write debug logs to country-search-debug.log
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print suggestions for a query, one per line
    Lookup { query: String },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    Init,
    Where,
}

fn apply_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(ms) = cli.debounce_ms {
        config.debounce_ms = ms;
    }
    if cli.leading_edge {
        config.leading_edge = true;
    }
}

async fn lookup(config: &AppConfig, query: &str) -> Result<ExitCode> {
    if query.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let lookup = CountryLookup::new(&config.lookup_config())?;
    match lookup.fetch_suggestions(query).await {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(error = %e, query, "lookup failed");
            eprintln!("No suggestions found");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    apply_overrides(&cli, &mut config);

    let log_path = if cli.verbose {
        Some(PathBuf::from(logging::DEFAULT_LOG_FILE))
    } else {
        config.log_file.clone()
    };
    let _log_guard = log_path.as_deref().and_then(logging::init);

    match &cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigSubcommands::Init => match AppConfig::init_default() {
                Ok(path) => {
                    println!("✓ Created config file at {}", path.display());
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("✗ Failed to create config: {e}");
                    Ok(ExitCode::FAILURE)
                }
            },
            ConfigSubcommands::Where => match AppConfig::get_config_path() {
                Some(path) => {
                    println!("{}", path.display());
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("✗ Could not determine config path");
                    Ok(ExitCode::FAILURE)
                }
            },
        },
        Some(Commands::Lookup { query }) => lookup(&config, query).await,
        None => {
            tui::run_tui(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
