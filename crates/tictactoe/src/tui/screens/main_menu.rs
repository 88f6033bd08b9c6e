//! Mode selection screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::time::Instant;
use strum::IntoEnumIterator;
use tictactoe_core::Mode;
use tracing::{info, instrument};

use crate::Session;
use crate::tui::screen::{Screen, ScreenTransition};

/// Entries on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Start a game in this mode.
    Play(Mode),
    /// Leave the application.
    Quit,
}

impl MenuOption {
    /// Menu entries in display order: every mode, then quit.
    pub fn all() -> Vec<MenuOption> {
        Mode::iter()
            .map(MenuOption::Play)
            .chain(std::iter::once(MenuOption::Quit))
            .collect()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Play(mode) => mode.label(),
            Self::Quit => "Quit",
        }
    }
}

/// State for the main menu.
#[derive(Debug)]
pub struct MainMenuScreen {
    options: Vec<MenuOption>,
    list_state: ListState,
    show_scoreboard: bool,
}

impl MainMenuScreen {
    /// Creates the menu with the first entry selected.
    #[instrument]
    pub fn new(show_scoreboard: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            options: MenuOption::all(),
            list_state,
            show_scoreboard,
        }
    }

    /// Currently highlighted entry.
    pub fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        self.options[idx.min(self.options.len() - 1)]
    }

    fn select_previous(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

impl Screen for MainMenuScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic-Tac-Toe: Select Game Mode")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, _now))]
    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(?option, "Menu option selected");
                match option {
                    MenuOption::Play(Mode::SinglePlayer) => {
                        ScreenTransition::StartGame(Session::single_player(self.show_scoreboard))
                    }
                    MenuOption::Play(Mode::TwoPlayer) => ScreenTransition::GoToNameEntry,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
