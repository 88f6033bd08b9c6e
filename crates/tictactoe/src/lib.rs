//! Terminal tic-tac-toe.
//!
//! Wraps [`tictactoe_core`] in a ratatui front end: a mode menu, name entry
//! for two player games, and an in-game screen with a scoreboard and a
//! game-over popup. Settings come from a TOML file and the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod session;
pub mod tui;

pub use cli::{Cli, ModeArg};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use session::{MAX_NAME_LEN, Scoreboard, Session};
pub use tui::{Controller, ScreenKind, ScreenTransition, run_tui};
