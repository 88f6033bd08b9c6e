//! The game core: board, turn tracking, outcome and AI move selection.

use crate::action::{InvalidMove, InvalidMoveKind, Move};
use crate::ai::{self, AiChoice};
use crate::rng::RandomSource;
use crate::rules;
use crate::{Board, GameOutcome, Mode, Player, Position, Square};
use tracing::{debug, info, instrument};

/// Owns one game's board, whose turn it is, and the session mode.
///
/// The board is only written through [`GameCore::place_mark`] and cleared
/// through [`GameCore::reset`]. The outcome is never cached; every query
/// recomputes it from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCore {
    board: Board,
    current_turn: Player,
    mode: Mode,
    history: Vec<Move>,
}

impl GameCore {
    /// Creates a fresh game in the given mode, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            mode,
            history: Vec::new(),
        }
    }

    /// Clears the board, hands the turn back to X and stores `mode`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Mode) {
        info!(?mode, "Resetting game");
        self.board = Board::new();
        self.current_turn = Player::X;
        self.mode = mode;
        self.history.clear();
    }

    /// Places `player`'s mark at `(row, col)` and returns the new outcome.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when the game is already over, the
    /// coordinates are off the board, it is not `player`'s turn, or the cell
    /// is occupied. Nothing changes on error.
    #[instrument(skip(self), fields(to_move = %self.current_turn))]
    pub fn place_mark(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<GameOutcome, InvalidMove> {
        let outcome = self.evaluate_outcome();
        if outcome.is_terminal() {
            debug!(%outcome, "Rejecting move after game end");
            return Err(InvalidMove::new(InvalidMoveKind::GameOver(outcome)));
        }

        let Some(position) = Position::from_coords(row, col) else {
            debug!("Rejecting off-board move");
            return Err(InvalidMove::new(InvalidMoveKind::OutOfBounds { row, col }));
        };

        if player != self.current_turn {
            debug!("Rejecting out-of-turn move");
            return Err(InvalidMove::new(InvalidMoveKind::WrongTurn {
                attempted: player,
                expected: self.current_turn,
            }));
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Rejecting move onto occupied cell");
            return Err(InvalidMove::new(InvalidMoveKind::CellOccupied(position)));
        }

        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.current_turn = player.opponent();

        let outcome = self.evaluate_outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        Ok(outcome)
    }

    /// Places a mark at a [`Position`] for the player to move.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GameCore::place_mark`].
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<GameOutcome, InvalidMove> {
        let (row, col) = position.coords();
        self.place_mark(row, col, self.current_turn)
    }

    /// Derives the outcome from the board. Pure.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&self) -> GameOutcome {
        rules::evaluate(&self.board)
    }

    /// Picks a cell for the player to move using the greedy heuristic.
    ///
    /// Intended for O's turn in [`Mode::SinglePlayer`] while the game is in
    /// progress. The board is not modified. Returns `None` only when no cell
    /// is free, which callers rule out by checking the outcome first.
    #[instrument(skip(self, rng), fields(to_move = %self.current_turn, mode = ?self.mode))]
    pub fn select_ai_move<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        self.select_ai_choice(rng).map(|choice| choice.position)
    }

    /// Like [`GameCore::select_ai_move`], also reporting which tier decided.
    #[instrument(skip(self, rng))]
    pub fn select_ai_choice<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<AiChoice> {
        ai::choose_move(&self.board, self.current_turn, rng)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Moves played since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when the AI supplies the next move.
    pub fn is_ai_turn(&self) -> bool {
        self.mode.ai_plays(self.current_turn) && !self.evaluate_outcome().is_terminal()
    }
}

impl Default for GameCore {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
