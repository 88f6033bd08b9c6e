//! Per-session state owned by the front end: names, scores, preferences.

use derive_getters::Getters;
use tictactoe_core::{GameOutcome, Mode, Player};
use tracing::{debug, info, instrument};

/// Longest name accepted on the name entry screen.
pub const MAX_NAME_LEN: usize = 15;

/// Win counters for the two marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
}

impl Scoreboard {
    /// Credits the winner of `outcome`; draws and unfinished games count for nobody.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => {}
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, "Scoreboard updated");
    }

    /// Wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

/// A run of games from leaving the main menu until returning to it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    mode: Mode,
    player_x_name: String,
    player_o_name: String,
    scoreboard: Scoreboard,
    scoreboard_visible: bool,
}

impl Session {
    /// Human as X against the AI as O.
    #[instrument]
    pub fn single_player(scoreboard_visible: bool) -> Self {
        info!("Starting single player session");
        Self {
            mode: Mode::SinglePlayer,
            player_x_name: "You (X)".to_string(),
            player_o_name: "AI (O)".to_string(),
            scoreboard: Scoreboard::default(),
            scoreboard_visible,
        }
    }

    /// Two humans. Blank names fall back to the mark.
    #[instrument]
    pub fn two_player(x_name: &str, o_name: &str, scoreboard_visible: bool) -> Self {
        let player_x_name = clean_name(x_name, "X");
        let player_o_name = clean_name(o_name, "O");
        info!(%player_x_name, %player_o_name, "Starting two player session");
        Self {
            mode: Mode::TwoPlayer,
            player_x_name,
            player_o_name,
            scoreboard: Scoreboard::default(),
            scoreboard_visible,
        }
    }

    /// Display name for `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// Scoreboard line, e.g. `Score - Ann: 2   Bob: 1`.
    pub fn score_text(&self) -> String {
        format!(
            "Score - {}: {}   {}: {}",
            self.player_x_name,
            self.scoreboard.x_wins(),
            self.player_o_name,
            self.scoreboard.o_wins()
        )
    }

    /// Whose turn line, e.g. `Turn: Ann`.
    pub fn turn_text(&self, player: Player) -> String {
        format!("Turn: {}", self.name(player))
    }

    /// Popup text for a finished game.
    pub fn result_message(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Win(player) => format!("{} wins!", self.name(player)),
            GameOutcome::Draw => "It's a draw!".to_string(),
            GameOutcome::InProgress => "Game in progress".to_string(),
        }
    }

    /// Records a finished game on the scoreboard.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.scoreboard.record(outcome);
    }

    /// Shows or hides the scoreboard.
    pub fn toggle_scoreboard(&mut self) {
        self.scoreboard_visible = !self.scoreboard_visible;
    }
}

fn clean_name(raw: &str, fallback: &str) -> String {
    let trimmed: String = raw.trim().chars().take(MAX_NAME_LEN).collect();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed
    }
}
