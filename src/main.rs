//! Command line entry point for the Elo calculator
//!
//! Computes a rating update after one game, a fixed-K quick Elo update, or a
//! performance rating over a set of games. Results go to stdout; logs go to
//! stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use elo_calculator::config::{AppConfig, OutputFormat};
use elo_calculator::types::{Game, PerformanceInput, RatingUpdateInput, Score, TimeClass};
use elo_calculator::{evaluate_performance, evaluate_rating, quick_elo};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Elo Calculator - chess rating updates and tournament performance
#[derive(Parser)]
#[command(
    name = "elo-calc",
    version,
    about = "Calculate chess Elo rating updates and tournament performance ratings",
    long_about = "elo-calc computes the new Elo rating of a player after a single game, using \
                 federation-style development coefficients (K-factors), and the performance \
                 rating achieved over a set of games."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Output format override
    #[arg(long, global = true, value_name = "FORMAT", help = "Output format (text or json)")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rating after one game, with the K-factor chosen from player category
    Rate {
        /// Player's current rating
        #[arg(short, long)]
        player: f64,
        /// Opponent's rating
        #[arg(short, long)]
        opponent: f64,
        /// Game result (1/win, 0.5/draw, 0/loss)
        #[arg(short, long)]
        score: Score,
        /// Time control (classical, rapid, blitz)
        #[arg(short, long)]
        time_class: Option<TimeClass>,
        /// Player has fewer than 30 rated games
        #[arg(long)]
        less_than_30_games: bool,
        /// Player has reached a rating of 2400
        #[arg(long)]
        over_rating_2400: bool,
        /// Player is younger than 18
        #[arg(long)]
        under_18: bool,
    },
    /// Rating after one game with a fixed K-factor
    Elo {
        /// Player's current rating
        #[arg(short, long)]
        player: f64,
        /// Opponent's rating
        #[arg(short, long)]
        opponent: f64,
        /// Game result (1/win, 0.5/draw, 0/loss)
        #[arg(short, long)]
        score: Score,
        /// K-factor (defaults to the configured value)
        #[arg(short, long)]
        k_factor: Option<f64>,
    },
    /// Performance rating over a set of games
    Performance {
        /// Game as <OPPONENT_RATING>:<SCORE>, e.g. 1800:1 or 1650:draw
        #[arg(short, long = "game", value_name = "RATING:SCORE")]
        games: Vec<Game>,
        /// JSON file with {"games": [{"rating_opponent": ..., "score": ...}]}
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Initialize structured logging on stderr with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }

    Ok(config)
}

fn load_games_file(path: &Path) -> Result<Vec<Game>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read games file {}", path.display()))?;
    let input: PerformanceInput = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse games file {}", path.display()))?;
    Ok(input.games)
}

fn run(command: Command, config: &AppConfig) -> Result<()> {
    let format = config.output.format;

    match command {
        Command::Rate {
            player,
            opponent,
            score,
            time_class,
            less_than_30_games,
            over_rating_2400,
            under_18,
        } => {
            let input = RatingUpdateInput::new(player, opponent, score)
                .with_time_class(time_class.unwrap_or(config.rating.default_time_class))
                .with_less_than_30_games(less_than_30_games)
                .with_over_rating_2400(over_rating_2400)
                .with_over_age_18(!under_18);
            debug!("Rating input: {:?}", input);

            let breakdown = evaluate_rating(&input);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
                OutputFormat::Text => {
                    println!("New rating: {}", breakdown.new_rating);
                    println!("  Change:          {:+.2}", breakdown.change);
                    println!("  K-factor:        {}", breakdown.k_factor);
                    println!("  Expected score:  {:.3}", breakdown.expected_score);
                }
            }
        }

        Command::Elo {
            player,
            opponent,
            score,
            k_factor,
        } => {
            let k_factor = k_factor.unwrap_or(config.rating.default_k_factor);
            let new_rating = quick_elo(player, opponent, score, k_factor)?;
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "old_rating": player,
                        "new_rating": new_rating,
                        "k_factor": k_factor,
                    }))?
                ),
                OutputFormat::Text => println!("Your new rating: {}", new_rating),
            }
        }

        Command::Performance { games, file } => {
            let mut all_games = match &file {
                Some(path) => load_games_file(path)?,
                None => Vec::new(),
            };
            all_games.extend(games);
            info!("Calculating performance over {} games", all_games.len());

            let summary = evaluate_performance(&PerformanceInput::new(all_games));
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Text => {
                    println!("Performance rating: {}", summary.performance);
                    println!("  Games:            {}", summary.games);
                    println!("  Score:            {}/{}", summary.total_score, summary.games);
                    println!("  Average opponent: {:.1}", summary.average_opponent);
                    println!("  Differential:     {:+.1}", summary.differential);
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!(
        "{} v{} started (output: {})",
        config.service.name,
        elo_calculator::VERSION,
        config.output.format
    );

    run(args.command, &config)
}
