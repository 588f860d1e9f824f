//! tictactoe_minimax - terminal tic-tac-toe with an unbeatable opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Mutex;
use tictactoe_minimax::{BestMove, Board, GameConfig};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = GameConfig::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Play { ai_first } => {
            let config = if ai_first {
                config.with_ai_first(true)
            } else {
                config
            };
            run_play(config)
        }
        Command::Best { board, json } => run_best(&config, &board, json),
    }
}

/// Builds the tracing filter: `RUST_LOG`, then the config file, then "info".
fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter().as_deref().unwrap_or("info"))
    })
}

/// Run the terminal game. Logs go to a file so they don't draw over the board.
fn run_play(config: GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(ai_first = *config.ai_first(), "Starting terminal game");
    tictactoe_minimax::tui::run(&config)
}

/// Print the computer's choice for a board given on the command line.
#[instrument(skip(config))]
fn run_best(config: &GameConfig, board: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    let board: Board = board.parse().context("Failed to parse board")?;
    debug!(%board, "Parsed board");

    let answer = BestMove::for_board(&board);
    if json {
        println!("{}", serde_json::to_string(&answer.to_json())?);
    } else {
        println!("{}", answer.describe(&board));
    }

    Ok(())
}
