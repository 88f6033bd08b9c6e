//! Property tests over random legal and illegal move sequences.

use proptest::prelude::*;
use tictactoe_core::{GameCore, GameOutcome, GameRng, Mode, Player};

/// Plays `picks` as indices into the current empty cells until the game ends.
fn play_picks(core: &mut GameCore, picks: &[usize]) -> Vec<Player> {
    let mut movers = Vec::new();
    for &pick in picks {
        if core.evaluate_outcome().is_terminal() {
            break;
        }
        let empty = core.board().empty_positions();
        let pos = empty[pick % empty.len()];
        movers.push(core.current_turn());
        core.play(pos).expect("legal move accepted");
    }
    movers
}

proptest! {
    #[test]
    fn turns_strictly_alternate_from_x(picks in prop::collection::vec(0usize..9, 0..9)) {
        let mut core = GameCore::new(Mode::TwoPlayer);
        let movers = play_picks(&mut core, &picks);
        for (i, player) in movers.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(*player, expected);
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        picks in prop::collection::vec(0usize..9, 0..9),
        row in 0usize..5,
        col in 0usize..5,
        as_x in any::<bool>(),
    ) {
        let mut core = GameCore::new(Mode::TwoPlayer);
        play_picks(&mut core, &picks);
        let before = core.clone();
        let player = if as_x { Player::X } else { Player::O };

        if core.place_mark(row, col, player).is_err() {
            prop_assert_eq!(&core, &before);
        }
    }

    #[test]
    fn evaluate_outcome_is_pure(picks in prop::collection::vec(0usize..9, 0..9)) {
        let mut core = GameCore::new(Mode::TwoPlayer);
        play_picks(&mut core, &picks);
        let before = core.clone();
        let first = core.evaluate_outcome();
        prop_assert_eq!(first, core.evaluate_outcome());
        prop_assert_eq!(&core, &before);
    }

    #[test]
    fn ai_move_is_always_a_free_cell(
        picks in prop::collection::vec(0usize..9, 0..8),
        seed in any::<u64>(),
    ) {
        let mut core = GameCore::new(Mode::SinglePlayer);
        play_picks(&mut core, &picks);
        prop_assume!(core.evaluate_outcome() == GameOutcome::InProgress);

        let before = core.clone();
        let mut rng = GameRng::new(seed);
        let pos = core.select_ai_move(&mut rng).expect("in-progress board has a free cell");
        prop_assert!(core.board().is_empty(pos));
        prop_assert_eq!(&core, &before);
    }

    #[test]
    fn full_game_against_ai_terminates(seed in any::<u64>(), human in prop::collection::vec(0usize..9, 5)) {
        let mut core = GameCore::new(Mode::SinglePlayer);
        let mut rng = GameRng::new(seed);
        let mut human = human.into_iter().cycle();

        while !core.evaluate_outcome().is_terminal() {
            let pos = if core.is_ai_turn() {
                core.select_ai_move(&mut rng).expect("free cell")
            } else {
                let empty = core.board().empty_positions();
                empty[human.next().unwrap_or(0) % empty.len()]
            };
            core.play(pos).expect("legal move accepted");
        }
        prop_assert!(core.history().len() <= 9);
    }
}
