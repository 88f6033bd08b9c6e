//! Screen implementations.

mod in_game;
mod main_menu;
mod name_entry;

pub use in_game::{InGameScreen, PopupChoice};
pub use main_menu::{MainMenuScreen, MenuOption};
pub use name_entry::{NameEntryScreen, NameField};
