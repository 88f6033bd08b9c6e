//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are only written by [`GameCore::place_mark`](crate::GameCore::place_mark)
/// and wiped by [`GameCore::reset`](crate::GameCore::reset); everything else
/// gets read access.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn at(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in row-major order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Builds a board from three row strings of `X`, `O` and `.`.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let square = match ch {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    _ => Square::Empty,
                };
                let pos = Position::from_coords(row, col).expect("test board is 3x3");
                board.set(pos, square);
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let line = cells
                .iter()
                .map(|sq| match sq {
                    Square::Empty => "_".to_string(),
                    Square::Occupied(p) => p.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Outcome of the game as derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row for the player.
    Win(Player),
    /// Board is full without a winner.
    Draw,
}

impl GameOutcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "Player {player} wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Who supplies O's moves for the lifetime of a game session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// A human plays X against the heuristic AI playing O.
    #[default]
    SinglePlayer,
    /// Two humans share the keyboard.
    TwoPlayer,
}

impl Mode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::SinglePlayer => "Single Player (vs AI)",
            Mode::TwoPlayer => "Two Player",
        }
    }

    /// True when O is played by the AI.
    pub fn ai_plays(self, player: Player) -> bool {
        self == Mode::SinglePlayer && player == Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_board_coords_match_positions() {
        let board = Board::from_rows(["X..", "...", "..O"]);
        assert_eq!(board.at(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.at(2, 2), Some(Square::Occupied(Player::O)));
        assert_eq!(board.at(1, 1), Some(Square::Empty));
        assert_eq!(board.at(3, 0), None);
    }

    #[test]
    fn test_empty_positions_row_major() {
        let board = Board::from_rows(["XOX", "O.X", "OX."]);
        assert_eq!(
            board.empty_positions(),
            vec![Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_board_display() {
        let board = Board::from_rows(["X..", ".O.", "..."]);
        assert_eq!(board.to_string(), "X|_|_\n-+-+-\n_|O|_\n-+-+-\n_|_|_");
    }

    #[test]
    fn test_only_single_player_o_is_ai() {
        assert!(Mode::SinglePlayer.ai_plays(Player::O));
        assert!(!Mode::SinglePlayer.ai_plays(Player::X));
        assert!(!Mode::TwoPlayer.ai_plays(Player::O));
    }
}
