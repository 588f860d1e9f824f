//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Tic-tac-toe against an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (you are X, the computer is O)
    Play {
        /// Let the computer open every new game
        #[arg(long)]
        ai_first: bool,
    },

    /// Print the square the computer (O) would choose on a board
    Best {
        /// Nine squares in row-major order, e.g. "XX./.O./..." (X, O, '.' for empty)
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
