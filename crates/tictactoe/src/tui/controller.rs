//! Controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tictactoe_core::Mode;
use tracing::{debug, info, instrument};

use crate::AppConfig;
use crate::Session;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{InGameScreen, MainMenuScreen, NameEntryScreen};

/// How long the loop waits for a key before ticking timers.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Mode selection.
    MainMenu,
    /// Two player name entry.
    NameEntry,
    /// A running game.
    InGame,
}

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    NameEntry(NameEntryScreen),
    InGame(Box<InGameScreen>),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::MainMenu(s) => s,
            Self::NameEntry(s) => s,
            Self::InGame(s) => &**s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::MainMenu(s) => s,
            Self::NameEntry(s) => s,
            Self::InGame(s) => &mut **s,
        }
    }

    fn kind(&self) -> ScreenKind {
        match self {
            Self::MainMenu(_) => ScreenKind::MainMenu,
            Self::NameEntry(_) => ScreenKind::NameEntry,
            Self::InGame(_) => ScreenKind::InGame,
        }
    }
}

/// Controller that owns the active screen and applies transitions.
///
/// Call [`Controller::run`] to start the event loop. Tests drive it through
/// [`Controller::handle_key`] and [`Controller::tick`] with synthetic
/// events and instants.
#[derive(Debug, Getters)]
pub struct Controller {
    config: AppConfig,
    #[getter(skip)]
    screen: ActiveScreen,
    #[getter(skip)]
    running: bool,
}

impl Controller {
    /// Creates a controller on the screen implied by `default_mode`.
    #[instrument(skip(config), fields(default_mode = ?config.default_mode()))]
    pub fn new(config: AppConfig) -> Self {
        let screen = match config.default_mode() {
            None => ActiveScreen::MainMenu(MainMenuScreen::new(*config.show_scoreboard())),
            Some(Mode::TwoPlayer) => {
                ActiveScreen::NameEntry(NameEntryScreen::new(*config.show_scoreboard()))
            }
            Some(Mode::SinglePlayer) => ActiveScreen::InGame(Box::new(InGameScreen::new(
                Session::single_player(*config.show_scoreboard()),
                config.ai_delay(),
                *config.seed(),
            ))),
        };
        info!(screen = ?screen.kind(), "Creating Controller");
        Self {
            config,
            screen,
            running: true,
        }
    }

    /// Which screen is showing.
    pub fn active(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// The running game, when the in-game screen is showing.
    pub fn in_game(&self) -> Option<&InGameScreen> {
        match &self.screen {
            ActiveScreen::InGame(s) => Some(&**s),
            _ => None,
        }
    }

    /// False once a screen asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame);
    }

    /// Routes a key to the active screen and applies the resulting transition.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let transition = self.screen.as_screen_mut().handle_key(key, now);
        self.apply_transition(transition);
    }

    /// Advances the active screen's timers.
    pub fn tick(&mut self, now: Instant) {
        let transition = self.screen.as_screen_mut().tick(now);
        self.apply_transition(transition);
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key, Instant::now());
            }

            self.tick(Instant::now());
        }

        info!("Event loop finished");
        Ok(())
    }

    fn apply_transition(&mut self, transition: ScreenTransition) {
        if transition == ScreenTransition::Stay {
            return;
        }
        debug!(?transition, from = ?self.screen.kind(), "Applying screen transition");
        let show_scoreboard = *self.config.show_scoreboard();
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToMainMenu => {
                self.screen = ActiveScreen::MainMenu(MainMenuScreen::new(show_scoreboard));
            }
            ScreenTransition::GoToNameEntry => {
                self.screen = ActiveScreen::NameEntry(NameEntryScreen::new(show_scoreboard));
            }
            ScreenTransition::StartGame(session) => {
                self.screen = ActiveScreen::InGame(Box::new(InGameScreen::new(
                    session,
                    self.config.ai_delay(),
                    *self.config.seed(),
                )));
            }
            ScreenTransition::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
    }
}
