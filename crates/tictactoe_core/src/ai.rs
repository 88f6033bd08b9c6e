//! Greedy one-ply move selection for the computer opponent.
//!
//! Tiers are consulted in order and the first one that yields a cell wins:
//! complete an own line, block the opponent's line, take the center, take a
//! random free corner, take a random free cell. There is no look-ahead past
//! one ply and no fork detection.

use crate::rng::RandomSource;
use crate::rules::win::has_line;
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument, warn};

/// Rule of the heuristic that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Tier {
    /// Completes three in a row for the mover.
    #[display("win")]
    Win,
    /// Occupies the cell the opponent would win on.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Takes a free corner, chosen at random.
    #[display("corner")]
    Corner,
    /// Takes any free cell, chosen at random.
    #[display("fallback")]
    Fallback,
}

/// A move picked by the heuristic along with the tier that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiChoice {
    /// Where to play.
    pub position: Position,
    /// Which rule chose it.
    pub tier: Tier,
}

/// Picks a move for `me` on `board`.
///
/// The board is only read; candidate placements are tried on a scratch
/// copy. Returns `None` only when no cell is free.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move<R: RandomSource + ?Sized>(
    board: &Board,
    me: Player,
    rng: &mut R,
) -> Option<AiChoice> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        warn!("AI asked to move on a full board");
        return None;
    }

    let choice = if let Some(position) = completing_move(board, &empty, me) {
        AiChoice {
            position,
            tier: Tier::Win,
        }
    } else if let Some(position) = completing_move(board, &empty, me.opponent()) {
        AiChoice {
            position,
            tier: Tier::Block,
        }
    } else if board.is_empty(Position::Center) {
        AiChoice {
            position: Position::Center,
            tier: Tier::Center,
        }
    } else {
        let corners: Vec<Position> = empty.iter().copied().filter(|p| p.is_corner()).collect();
        if corners.is_empty() {
            AiChoice {
                position: empty[rng.choose_index(empty.len())],
                tier: Tier::Fallback,
            }
        } else {
            AiChoice {
                position: corners[rng.choose_index(corners.len())],
                tier: Tier::Corner,
            }
        }
    };

    debug!(tier = %choice.tier, position = %choice.position, "AI chose move");
    Some(choice)
}

/// First empty cell (row-major) where `player` would complete a line.
fn completing_move(board: &Board, empty: &[Position], player: Player) -> Option<Position> {
    empty.iter().copied().find(|&pos| {
        let mut scratch = board.clone();
        scratch.set(pos, Square::Occupied(player));
        has_line(&scratch, player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    fn pick(rows: [&str; 3], me: Player, picks: &[usize]) -> Option<AiChoice> {
        let board = Board::from_rows(rows);
        let mut rng = ScriptedRandom::new(picks.iter().copied());
        choose_move(&board, me, &mut rng)
    }

    #[test]
    fn test_completes_own_row() {
        let choice = pick(["OO.", "XX.", "..."], Player::O, &[]).expect("free cells");
        assert_eq!(choice.position, Position::TopRight);
        assert_eq!(choice.tier, Tier::Win);
    }

    #[test]
    fn test_blocks_opponent_row() {
        let choice = pick(["XX.", ".O.", "..."], Player::O, &[]).expect("free cells");
        assert_eq!(choice.position, Position::TopRight);
        assert_eq!(choice.tier, Tier::Block);
    }

    #[test]
    fn test_prefers_win_over_block() {
        let choice = pick(["OO.", "OX.", ".XX"], Player::O, &[]).expect("free cells");
        assert_eq!(choice.position, Position::TopRight);
        assert_eq!(choice.tier, Tier::Win);
    }

    #[test]
    fn test_blocks_only_first_threat_of_a_fork() {
        // X threatens both (0,2) and (1,0); one ply only, first in row-major order.
        let choice = pick(["XX.", ".O.", "X.."], Player::O, &[]).expect("free cells");
        assert_eq!(choice.position, Position::TopRight);
        assert_eq!(choice.tier, Tier::Block);
    }

    #[test]
    fn test_takes_center() {
        let choice = pick(["X..", "...", "..."], Player::O, &[]).expect("free cells");
        assert_eq!(choice.position, Position::Center);
        assert_eq!(choice.tier, Tier::Center);
    }

    #[test]
    fn test_corner_uses_random_source() {
        let choice = pick(["...", ".X.", "..."], Player::O, &[2]).expect("free cells");
        assert_eq!(choice.position, Position::BottomLeft);
        assert_eq!(choice.tier, Tier::Corner);
    }

    #[test]
    fn test_corner_only_among_free_corners() {
        let choice = pick([".X.", ".O.", "X.."], Player::O, &[1]).expect("free cells");
        assert_eq!(choice.position, Position::TopRight);
        assert_eq!(choice.tier, Tier::Corner);
    }

    #[test]
    fn test_fallback_when_center_and_corners_taken() {
        let choice = pick(["OXO", ".X.", "XOX"], Player::O, &[1]).expect("free cells");
        assert_eq!(choice.position, Position::MiddleRight);
        assert_eq!(choice.tier, Tier::Fallback);
    }

    #[test]
    fn test_full_board_yields_none() {
        assert_eq!(pick(["XOX", "XOO", "OXX"], Player::O, &[]), None);
    }

    #[test]
    fn test_board_is_not_mutated() {
        let board = Board::from_rows(["XX.", ".O.", "..."]);
        let before = board.clone();
        let mut rng = ScriptedRandom::default();
        let _ = choose_move(&board, Player::O, &mut rng);
        assert_eq!(board, before);
    }
}
