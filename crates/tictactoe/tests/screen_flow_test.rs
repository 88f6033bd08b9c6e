//! Drives the controller through whole sessions with synthetic key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::time::Instant;
use tictactoe::tui::screens::PopupChoice;
use tictactoe::{AppConfig, Cli, Controller, ScreenKind};
use tictactoe_core::{GameOutcome, Player, Position};

fn config(seed: u64) -> AppConfig {
    let cli = Cli {
        seed: Some(seed),
        ai_delay_ms: Some(0),
        ..Cli::default()
    };
    AppConfig::default().with_overrides(&cli)
}

fn press(controller: &mut Controller, code: KeyCode) {
    controller.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn type_str(controller: &mut Controller, text: &str) {
    for c in text.chars() {
        press(controller, KeyCode::Char(c));
    }
}

fn digit(position: Position) -> KeyCode {
    let c = char::from_digit(position.to_index() as u32 + 1, 10).unwrap_or('0');
    KeyCode::Char(c)
}

fn start_two_player(controller: &mut Controller, x: &str, o: &str) {
    press(controller, KeyCode::Down);
    press(controller, KeyCode::Enter);
    assert_eq!(controller.active(), ScreenKind::NameEntry);
    type_str(controller, x);
    press(controller, KeyCode::Enter);
    type_str(controller, o);
    press(controller, KeyCode::Enter);
    assert_eq!(controller.active(), ScreenKind::InGame);
}

#[test]
fn test_two_player_win_then_play_again_keeps_score() {
    let mut controller = Controller::new(config(0));
    start_two_player(&mut controller, "Ann", "Bob");

    for c in ['1', '4', '2', '5', '3'] {
        press(&mut controller, KeyCode::Char(c));
    }

    let game = controller.in_game().unwrap();
    assert_eq!(game.core().evaluate_outcome(), GameOutcome::Win(Player::X));
    assert_eq!(game.popup_message(), Some("Ann wins!"));
    assert_eq!(game.popup_choice(), Some(PopupChoice::PlayAgain));
    assert_eq!(game.session().score_text(), "Score - Ann: 1   Bob: 0");

    // Board input is ignored while the popup is open.
    press(&mut controller, KeyCode::Char('9'));
    assert_eq!(controller.in_game().unwrap().core().history().len(), 5);

    press(&mut controller, KeyCode::Char('p'));
    let game = controller.in_game().unwrap();
    assert!(game.popup_message().is_none());
    assert!(game.core().history().is_empty());
    assert_eq!(game.core().current_turn(), Player::X);
    assert_eq!(game.status(), "Turn: Ann");
    assert_eq!(game.session().score_text(), "Score - Ann: 1   Bob: 0");
}

#[test]
fn test_popup_main_menu_starts_fresh_session() {
    let mut controller = Controller::new(config(0));
    start_two_player(&mut controller, "Ann", "Bob");
    // X O X / X O O / O X X
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut controller, KeyCode::Char(c));
    }
    let game = controller.in_game().unwrap();
    assert_eq!(game.core().evaluate_outcome(), GameOutcome::Draw);
    assert_eq!(game.popup_message(), Some("It's a draw!"));

    press(&mut controller, KeyCode::Right);
    assert_eq!(
        controller.in_game().unwrap().popup_choice(),
        Some(PopupChoice::MainMenu)
    );
    press(&mut controller, KeyCode::Enter);
    assert_eq!(controller.active(), ScreenKind::MainMenu);

    start_two_player(&mut controller, "Cy", "Di");
    let game = controller.in_game().unwrap();
    assert_eq!(game.session().score_text(), "Score - Cy: 0   Di: 0");
}

#[test]
fn test_single_player_game_runs_to_completion() {
    let mut controller = Controller::new(config(11));
    press(&mut controller, KeyCode::Enter);
    assert_eq!(controller.active(), ScreenKind::InGame);

    for _ in 0..9 {
        let game = controller.in_game().unwrap();
        if game.popup_message().is_some() {
            break;
        }
        let Some(&next) = game.core().board().empty_positions().first() else {
            break;
        };
        press(&mut controller, digit(next));
        controller.tick(Instant::now());
    }

    let game = controller.in_game().unwrap();
    assert!(game.core().evaluate_outcome().is_terminal());
    let message = game.popup_message().unwrap();
    assert!(["You (X) wins!", "AI (O) wins!", "It's a draw!"].contains(&message));
    let x_marks = game.core().history().iter().filter(|m| m.player == Player::X).count();
    let o_marks = game.core().history().len() - x_marks;
    assert!(x_marks == o_marks || x_marks == o_marks + 1);
}

#[test]
fn test_ai_replies_on_tick() {
    let mut controller = Controller::new(config(5));
    press(&mut controller, KeyCode::Enter);
    press(&mut controller, KeyCode::Char('1'));
    assert!(controller.in_game().unwrap().ai_pending());

    controller.tick(Instant::now());
    let game = controller.in_game().unwrap();
    assert!(!game.ai_pending());
    assert_eq!(game.core().history().len(), 2);
    assert_eq!(game.core().history()[1].position, Position::Center);
}

#[test]
fn test_screens_render_without_panicking() {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    let mut controller = Controller::new(config(0));
    terminal.draw(|f| controller.render(f)).unwrap();

    start_two_player(&mut controller, "Ann", "Bob");
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut controller, KeyCode::Char(c));
    }
    terminal.draw(|f| controller.render(f)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect();
    assert!(text.contains("Ann wins!"));
    assert!(text.contains("Play Again"));
}
