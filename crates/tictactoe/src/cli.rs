//! Command-line interface for tictactoe.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mode;

/// Terminal tic-tac-toe against the computer or a friend
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe against the computer or a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the mode menu and start in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for the AI's random tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// How long the AI "thinks" before moving, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Game mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Play X against the AI
    SinglePlayer,
    /// Two players on one keyboard
    TwoPlayer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SinglePlayer => Mode::SinglePlayer,
            ModeArg::TwoPlayer => Mode::TwoPlayer,
        }
    }
}
