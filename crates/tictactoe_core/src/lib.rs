//! Tic-tac-toe game core.
//!
//! A UI-agnostic 3x3 game: board state, strict turn alternation, win/draw
//! detection and a greedy computer opponent. Presentation layers drive it
//! through [`GameCore`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameCore, GameOutcome, GameRng, Mode, Player, Position};
//!
//! let mut game = GameCore::new(Mode::SinglePlayer);
//! assert_eq!(game.place_mark(0, 0, Player::X)?, GameOutcome::InProgress);
//!
//! let mut rng = GameRng::new(7);
//! let reply = game.select_ai_move(&mut rng);
//! assert_eq!(reply, Some(Position::Center));
//! # Ok::<(), tictactoe_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod game;
mod position;
pub mod rng;
pub mod rules;
mod types;

pub use action::{InvalidMove, InvalidMoveKind, Move};
pub use ai::{AiChoice, Tier};
pub use game::GameCore;
pub use position::Position;
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use types::{Board, GameOutcome, Mode, Player, Square};
