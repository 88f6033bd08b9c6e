//! In-game screen: board, status line, scoreboard and the game-over popup.
//!
//! The screen owns the [`GameCore`] for the running game and the
//! [`Session`] it belongs to. The AI's reply is scheduled on a deadline and
//! played from [`Screen::tick`], so the board is drawn with the human's mark
//! before the AI answers.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::{Duration, Instant};
use tictactoe_core::{GameCore, GameOutcome, GameRng, Position};
use tracing::{debug, info, instrument, warn};

use crate::Session;
use crate::tui::board::{BOARD_SIZE, center_rect, draw_board};
use crate::tui::input::{digit_position, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};

/// Status text while the AI's move is pending.
pub const AI_THINKING: &str = "AI is thinking...";

/// Buttons on the game-over popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupChoice {
    /// Reset the board and keep the scores.
    PlayAgain,
    /// Drop the session and go back to the menu.
    MainMenu,
}

impl PopupChoice {
    fn other(self) -> Self {
        match self {
            Self::PlayAgain => Self::MainMenu,
            Self::MainMenu => Self::PlayAgain,
        }
    }
}

#[derive(Debug)]
struct GameOverPopup {
    message: String,
    selected: PopupChoice,
}

/// A running game.
#[derive(Debug)]
pub struct InGameScreen {
    core: GameCore,
    session: Session,
    cursor: Position,
    rng: GameRng,
    ai_delay: Duration,
    ai_due: Option<Instant>,
    status: String,
    popup: Option<GameOverPopup>,
}

impl InGameScreen {
    /// Starts a fresh game for `session`.
    ///
    /// `seed` fixes the AI's random tie-breaks; without one the generator
    /// is seeded from entropy.
    #[instrument(skip(session), fields(mode = ?session.mode()))]
    pub fn new(session: Session, ai_delay: Duration, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), "Starting game");
        let core = GameCore::new(*session.mode());
        let status = session.turn_text(core.current_turn());
        Self {
            core,
            session,
            cursor: Position::Center,
            rng,
            ai_delay,
            ai_due: None,
            status,
            popup: None,
        }
    }

    /// The game being played.
    pub fn core(&self) -> &GameCore {
        &self.core
    }

    /// Names, scores and display preferences.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Text on the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while an AI move is scheduled.
    pub fn ai_pending(&self) -> bool {
        self.ai_due.is_some()
    }

    /// Message on the game-over popup, if it is open.
    pub fn popup_message(&self) -> Option<&str> {
        self.popup.as_ref().map(|p| p.message.as_str())
    }

    /// Highlighted popup button, if the popup is open.
    pub fn popup_choice(&self) -> Option<PopupChoice> {
        self.popup.as_ref().map(|p| p.selected)
    }

    fn try_place(&mut self, position: Position, now: Instant) {
        match self.core.play(position) {
            Ok(outcome) => self.after_move(outcome, now),
            Err(e) => debug!(error = %e, "Ignoring move"),
        }
    }

    fn after_move(&mut self, outcome: GameOutcome, now: Instant) {
        if outcome.is_terminal() {
            self.session.record(outcome);
            let message = self.session.result_message(outcome);
            info!(%outcome, score = %self.session.score_text(), "Game over");
            self.status = message.clone();
            self.ai_due = None;
            self.popup = Some(GameOverPopup {
                message,
                selected: PopupChoice::PlayAgain,
            });
        } else {
            self.start_turn(now);
        }
    }

    fn start_turn(&mut self, now: Instant) {
        if self.core.is_ai_turn() {
            self.ai_due = Some(now + self.ai_delay);
            self.status = AI_THINKING.to_string();
        } else {
            self.status = self.session.turn_text(self.core.current_turn());
        }
    }

    fn play_ai_move(&mut self, now: Instant) {
        let Some(position) = self.core.select_ai_move(&mut self.rng) else {
            warn!("AI had no move to play");
            return;
        };
        match self.core.play(position) {
            Ok(outcome) => self.after_move(outcome, now),
            Err(e) => warn!(error = %e, "AI move rejected"),
        }
    }

    #[instrument(skip(self, now))]
    fn play_again(&mut self, now: Instant) {
        self.core.reset(*self.session.mode());
        self.cursor = Position::Center;
        self.popup = None;
        self.start_turn(now);
    }

    fn popup_action(&mut self, choice: PopupChoice, now: Instant) -> ScreenTransition {
        match choice {
            PopupChoice::PlayAgain => {
                self.play_again(now);
                ScreenTransition::Stay
            }
            PopupChoice::MainMenu => ScreenTransition::GoToMainMenu,
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent, now: Instant) -> ScreenTransition {
        let Some(popup) = self.popup.as_mut() else {
            return ScreenTransition::Stay;
        };
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                popup.selected = popup.selected.other();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let choice = popup.selected;
                self.popup_action(choice, now)
            }
            KeyCode::Char('p') | KeyCode::Char('P') => self.popup_action(PopupChoice::PlayAgain, now),
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                self.popup_action(PopupChoice::MainMenu, now)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn render_popup(&self, frame: &mut Frame, popup: &GameOverPopup) {
        let area = center_rect(frame.area(), 36, 7);
        frame.render_widget(Clear, area);

        let button = |label: &'static str, choice: PopupChoice| {
            let style = if popup.selected == choice {
                Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(label, style)
        };

        let lines = vec![
            Line::from(Span::styled(
                popup.message.as_str(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                button(" Play Again ", PopupChoice::PlayAgain),
                Span::raw("   "),
                button(" Main Menu ", PopupChoice::MainMenu),
            ]),
        ];
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Game Over"));
        frame.render_widget(body, area);
    }
}

impl Screen for InGameScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let score_height = if *self.session.scoreboard_visible() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(score_height),
                Constraint::Min(BOARD_SIZE.1),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!("Tic-Tac-Toe: {}", self.core.mode().label()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        if *self.session.scoreboard_visible() {
            let score = Paragraph::new(self.session.score_text())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
            frame.render_widget(score, chunks[1]);
        }

        let cursor = (self.popup.is_none() && !self.core.is_ai_turn()).then_some(self.cursor);
        draw_board(frame, chunks[2], self.core.board(), cursor);

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[3]);

        let help_text = if self.popup.is_some() {
            "←→: Choose | Enter: Confirm | p: Play Again | m: Main Menu | q: Quit"
        } else {
            "Arrows: Move | Enter/Space: Place | 1-9: Place | s: Scores | Esc: Menu | q: Quit"
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);

        if let Some(popup) = &self.popup {
            self.render_popup(frame, popup);
        }
    }

    #[instrument(skip(self, now), fields(turn = %self.core.current_turn()))]
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> ScreenTransition {
        if self.popup.is_some() {
            return self.handle_popup_key(key, now);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return ScreenTransition::Quit,
            KeyCode::Esc => return ScreenTransition::GoToMainMenu,
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.session.toggle_scoreboard();
                return ScreenTransition::Stay;
            }
            _ => {}
        }

        if self.core.is_ai_turn() {
            debug!("Ignoring board input on AI turn");
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.try_place(self.cursor, now),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.try_place(position, now);
                }
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, now: Instant) -> ScreenTransition {
        if let Some(due) = self.ai_due
            && now >= due
        {
            self.ai_due = None;
            self.play_ai_move(now);
        }
        ScreenTransition::Stay
    }
}
