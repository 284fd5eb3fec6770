use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use squad_split::config::{self, Config};
use squad_split::history::{self, JsonFileStore, MatchupHistory};
use squad_split::{output, roster, SearchError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_HISTORY: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_INTERNAL: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split players into two teams (default if no subcommand)
    Split {
        /// Ids of the players taking part (defaults to the whole roster)
        ids: Vec<u32>,

        /// Seed for breaking ties between equally fair splits
        #[arg(long)]
        seed: Option<u64>,

        /// Do not record the result in the matchup history
        #[arg(long)]
        no_record: bool,
    },
    /// Show the roster grouped by position
    Roster,
    /// Show or clear recorded matchups
    History {
        /// Forget every recorded matchup
        #[arg(long)]
        clear: bool,
    },
    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "squad-split")]
#[command(about = "Split a roster into two evenly matched teams", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/squad-split/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to history file (defaults to ~/.config/squad-split/history.json)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("squad_split=debug")
    } else {
        EnvFilter::new("squad_split=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let command = cli.command.unwrap_or(Commands::Split {
        ids: Vec::new(),
        seed: None,
        no_record: false,
    });

    match command {
        Commands::Init { force } => match config::init::run_init(cli.config, force) {
            Ok(path) => println!("Wrote starter config to {}", path.display()),
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        Commands::Roster => {
            let config = load_valid_config(cli.config);
            let groups = roster::group_by_position(&config.roster);
            match cli.format {
                OutputFormat::Json => print_json(&config.roster),
                OutputFormat::Tsv => {
                    for p in &config.roster {
                        println!(
                            "{}\t{}\t{}\t{}",
                            p.id,
                            p.name.as_deref().unwrap_or(""),
                            p.position.as_deref().unwrap_or(""),
                            output::format_skill(p.skill)
                        );
                    }
                }
                OutputFormat::Text => {
                    println!(
                        "{}",
                        output::format_roster(&groups, output::should_use_colors())
                    );
                }
            }
        }
        Commands::History { clear } => {
            // History does not need a roster; only a missing config falls back to the default cap
            let config_path = match cli.config {
                Some(p) => Some(p),
                None => config::get_config_path().ok(),
            };
            let cap = match config_path {
                Some(path) if path.exists() => load_valid_config(Some(path)).max_history(),
                _ => {
                    tracing::debug!("No config file, using default history cap");
                    history::MAX_HISTORY
                }
            };
            let matchups = open_history(cli.history, cap);

            if clear {
                if let Err(e) = matchups.clear() {
                    eprintln!("History error: {:#}", e);
                    std::process::exit(EXIT_HISTORY);
                }
                println!("Cleared matchup history.");
            } else {
                let entries = matchups.entries();
                match cli.format {
                    OutputFormat::Json => print_json(&entries),
                    OutputFormat::Tsv => {
                        for sig in &entries {
                            println!("{}", sig);
                        }
                    }
                    OutputFormat::Text => {
                        println!("{}", output::format_history(&entries, matchups.cap()))
                    }
                }
            }
        }
        Commands::Split {
            ids,
            seed,
            no_record,
        } => {
            let config = load_valid_config(cli.config);

            let mut players = match roster::select_participants(&config.roster, &ids) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let min_players = config.min_players();
            if players.len() < min_players {
                eprintln!(
                    "Select at least {} players to make teams ({} selected).",
                    min_players,
                    players.len()
                );
                std::process::exit(EXIT_INPUT);
            }

            // Matches the order players are shown in: strongest first
            roster::sort_by_skill_desc(&mut players);

            let matchups = open_history(cli.history, config.max_history());
            let forbidden = matchups.recent(config.no_repeat_last_n());
            let weights = config.scoring.clone().unwrap_or_default().weights();

            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };

            let split =
                match squad_split::search_with_weights(&players, &forbidden, &weights, &mut rng) {
                    Ok(s) => s,
                    Err(e @ SearchError::InvalidInput(_)) => {
                        eprintln!("{}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                    Err(e @ SearchError::NoSolution(_)) => {
                        eprintln!("Internal error: {}", e);
                        std::process::exit(EXIT_INTERNAL);
                    }
                };

            match cli.format {
                OutputFormat::Json => match output::format_json(&split) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_INTERNAL);
                    }
                },
                OutputFormat::Tsv => println!("{}", output::format_tsv(&split)),
                OutputFormat::Text => {
                    println!("{}", output::format_split(&split, output::should_use_colors()));
                    if cli.verbose {
                        println!();
                        println!("{}", output::format_breakdown(&split.rescore(&weights)));
                        println!("Signature: {}", split.signature);
                    }
                }
            }

            if !no_record {
                if let Err(e) = matchups.record(split.signature.clone()) {
                    eprintln!("History error: {:#}", e);
                    std::process::exit(EXIT_HISTORY);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_valid_config(path: Option<PathBuf>) -> Config {
    let config = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    config
}

fn open_history(path: Option<PathBuf>, cap: usize) -> MatchupHistory<JsonFileStore> {
    let path = match path {
        Some(p) => p,
        None => match history::get_history_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("History error: {:#}", e);
                std::process::exit(EXIT_HISTORY);
            }
        },
    };

    match MatchupHistory::open(JsonFileStore::new(path), cap) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("History error: {:#}", e);
            std::process::exit(EXIT_HISTORY);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_INTERNAL);
        }
    }
}
