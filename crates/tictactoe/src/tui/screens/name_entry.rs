//! Name entry screen for two player games.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::Session;
use crate::session::MAX_NAME_LEN;
use crate::tui::screen::{Screen, ScreenTransition};

/// Which name field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    /// Player X's name.
    #[default]
    X,
    /// Player O's name.
    O,
}

impl NameField {
    fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

/// Collects both player names before a two player session.
#[derive(Debug, Default, Getters)]
pub struct NameEntryScreen {
    x_name: String,
    o_name: String,
    focus: NameField,
    show_scoreboard: bool,
}

impl NameEntryScreen {
    /// Creates the screen with empty fields and X focused.
    #[instrument]
    pub fn new(show_scoreboard: bool) -> Self {
        Self {
            show_scoreboard,
            ..Self::default()
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::X => &mut self.x_name,
            NameField::O => &mut self.o_name,
        }
    }

    fn field_style(&self, field: NameField) -> Style {
        if self.focus == field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl Screen for NameEntryScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Enter Player Names")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let x_input = Paragraph::new(self.x_name.as_str())
            .style(self.field_style(NameField::X))
            .block(Block::default().borders(Borders::ALL).title("Player X"));
        frame.render_widget(x_input, chunks[1]);

        let o_input = Paragraph::new(self.o_name.as_str())
            .style(self.field_style(NameField::O))
            .block(Block::default().borders(Borders::ALL).title("Player O"));
        frame.render_widget(o_input, chunks[2]);

        let help = Paragraph::new("Type name | Tab: Switch | Enter: Next/Start | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, _now), fields(focus = ?self.focus))]
    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                let field = self.focused_mut();
                if field.chars().count() < MAX_NAME_LEN {
                    field.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
                debug!(focus = ?self.focus, "Switched name field");
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.focus {
                NameField::X => {
                    self.focus = NameField::O;
                    ScreenTransition::Stay
                }
                NameField::O => {
                    info!("Names entered");
                    ScreenTransition::StartGame(Session::two_player(
                        &self.x_name,
                        &self.o_name,
                        self.show_scoreboard,
                    ))
                }
            },
            KeyCode::Esc => ScreenTransition::GoToMainMenu,
            _ => ScreenTransition::Stay,
        }
    }
}
