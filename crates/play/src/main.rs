//! Terminal front end for the noughts engine.
//!
//! `play` runs an interactive game against the heuristic opponent on
//! stdin/stdout. `simulate` pits the heuristic against a random player
//! across parallel sessions and reports the merged tally.

mod simulate;
mod terminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use noughts_engine::{Engine, EngineConfig, HeuristicOpponent};
use std::io;
use std::time::{Duration, Instant};
use terminal::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe against a heuristic computer opponent.
#[derive(Parser)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer or simulate many rounds")]
struct Cli {
    /// Log engine events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively.
    Play {
        /// Pause before the computer replies, in milliseconds (0 = reply immediately).
        #[arg(short, long, default_value = "500")]
        delay_ms: u64,

        /// Seed for the computer's random fallback moves.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate rounds of the computer against a random player.
    Simulate {
        /// Number of independent sessions (run in parallel).
        #[arg(short, long, default_value = "4")]
        sessions: usize,

        /// Rounds per session.
        #[arg(short, long, default_value = "100")]
        rounds: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the play command.
fn cmd_play(delay_ms: u64, seed: Option<u64>) -> Result<()> {
    let config = EngineConfig::with_reply_delay(Duration::from_millis(delay_ms));
    let opponent = match seed {
        Some(seed) => HeuristicOpponent::seeded(seed),
        None => HeuristicOpponent::from_entropy(),
    };
    let mut engine = Engine::new(config, opponent);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut engine)
        .run(stdin.lock(), stdout.lock())
        .context("Terminal session failed")
}

/// Run the simulate command.
fn cmd_simulate(sessions: usize, rounds: usize, seed: u64, json: bool) -> Result<()> {
    info!(sessions, rounds, seed, "simulation started");
    let start = Instant::now();
    let summary = simulate::run(sessions, rounds, seed)?;

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", text);
        return Ok(());
    }

    let total = summary.total_rounds().max(1) as f32;
    println!(
        "Simulated {} sessions x {} rounds in {:.2}s (seed {})",
        summary.sessions,
        summary.rounds_per_session,
        start.elapsed().as_secs_f64(),
        summary.seed
    );
    println!("================================================");
    let human_wins = summary.tally.human_wins;
    let opponent_wins = summary.tally.opponent_wins;
    println!(
        "Random player wins: {} ({:.1}%)",
        human_wins,
        human_wins as f32 / total * 100.0
    );
    println!(
        "Computer wins:      {} ({:.1}%)",
        opponent_wins,
        opponent_wins as f32 / total * 100.0
    );
    println!(
        "Draws:              {} ({:.1}%)",
        summary.draws,
        summary.draws as f32 / total * 100.0
    );
    println!("------------------------------------------------");
    println!("Computer unbeaten: {:.1}%", summary.unbeaten_rate() * 100.0);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play { delay_ms, seed } => cmd_play(delay_ms, seed),
        Commands::Simulate {
            sessions,
            rounds,
            seed,
            json,
        } => cmd_simulate(sessions, rounds, seed, json),
    }
}
