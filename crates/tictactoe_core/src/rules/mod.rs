//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The outcome of a game is never stored;
//! it is recomputed from the board with [`evaluate`].

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use crate::{Board, GameOutcome};
use tracing::instrument;

/// Derives the outcome of the game from the board alone.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(player) = check_winner(board) {
        GameOutcome::Win(player)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
