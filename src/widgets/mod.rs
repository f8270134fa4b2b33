// Reusable UI widgets

pub mod board;
pub mod dialog;
pub mod menu;
pub mod skin;

pub use board::BoardWidget;
pub use dialog::{Dialog, DialogVariant};
pub use menu::{Menu, MenuItem, MenuState};
pub use skin::Skin;
