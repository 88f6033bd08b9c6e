//! Screen trait and transition type for the front-end state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::Instant;

use crate::Session;

/// The result of handling an input event or clock tick on a screen.
///
/// Screens return this to drive the [`Controller`](crate::Controller)
/// state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Back to mode selection. The current session is discarded.
    GoToMainMenu,
    /// Ask for the two players' names.
    GoToNameEntry,
    /// Start playing with a fresh session.
    StartGame(Session),
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key press received at `now`.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> ScreenTransition;

    /// Advances timers. Called once per loop iteration.
    fn tick(&mut self, _now: Instant) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
