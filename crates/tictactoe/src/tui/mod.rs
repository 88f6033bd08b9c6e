//! Terminal front end: screens, board rendering and the event loop.

mod board;
mod controller;
mod input;
mod screen;
pub mod screens;

pub use board::{BOARD_SIZE, center_rect, draw_board};
pub use controller::{Controller, ScreenKind};
pub use input::{digit_position, move_cursor};
pub use screen::{Screen, ScreenTransition};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::AppConfig;

/// Takes over the terminal and runs the game until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting tictactoe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::new(config);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "TUI exited with error");
    }
    res
}
