//! Session scoring and labels across several games.

use tictactoe::{MAX_NAME_LEN, Scoreboard, Session};
use tictactoe_core::{GameOutcome, Mode, Player};

#[test]
fn test_scores_accumulate_across_games() {
    let mut session = Session::two_player("Ann", "Bob", true);
    session.record(GameOutcome::Win(Player::X));
    session.record(GameOutcome::Win(Player::X));
    session.record(GameOutcome::Win(Player::O));
    session.record(GameOutcome::Draw);

    assert_eq!(session.scoreboard().wins(Player::X), 2);
    assert_eq!(session.scoreboard().wins(Player::O), 1);
    assert_eq!(session.score_text(), "Score - Ann: 2   Bob: 1");
}

#[test]
fn test_messages_use_names() {
    let session = Session::two_player("Ann", "Bob", true);
    assert_eq!(session.turn_text(Player::O), "Turn: Bob");
    assert_eq!(session.result_message(GameOutcome::Win(Player::X)), "Ann wins!");
    assert_eq!(session.result_message(GameOutcome::Draw), "It's a draw!");
}

#[test]
fn test_long_names_truncated() {
    let long = "x".repeat(40);
    let session = Session::two_player(&long, "Bob", true);
    assert_eq!(session.name(Player::X).chars().count(), MAX_NAME_LEN);
}

#[test]
fn test_single_player_session() {
    let mut session = Session::single_player(false);
    assert_eq!(*session.mode(), Mode::SinglePlayer);
    assert!(!*session.scoreboard_visible());
    session.toggle_scoreboard();
    assert!(*session.scoreboard_visible());
    assert_eq!(*session.scoreboard(), Scoreboard::default());
}
