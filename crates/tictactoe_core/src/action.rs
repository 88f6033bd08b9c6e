//! Moves and the single error kind a move can fail with.

use crate::{GameOutcome, Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{player} -> {position}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveKind {
    /// Coordinates are not on the 3x3 board.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square is already taken.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),

    /// Someone other than the player to move tried to place.
    #[display("it is {expected}'s turn, not {attempted}'s")]
    WrongTurn {
        /// Player that attempted the move.
        attempted: Player,
        /// Player whose turn it is.
        expected: Player,
    },

    /// The game already reached a terminal outcome.
    #[display("game is already over ({_0})")]
    GameOver(GameOutcome),
}

/// A rejected placement. The game state is untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct InvalidMove {
    /// What was wrong with the move.
    pub kind: InvalidMoveKind,
    /// Line number where the move was rejected.
    pub line: u32,
    /// Source file where the move was rejected.
    pub file: &'static str,
}

impl InvalidMove {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
