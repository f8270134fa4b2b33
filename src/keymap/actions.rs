//! Semantic actions triggered by key bindings

use serde::{Deserialize, Serialize};

/// Every user action the screens understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation / sliding ============
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // ============ Selection ============
    /// Activate the selected entry (Enter)
    Confirm,
    /// Go back one screen (Esc)
    Cancel,
    /// Flip the selected setting (Space)
    Toggle,

    // ============ Global ============
    /// Leave the current screen, or the game from the main menu
    Quit,
    /// Close the application from anywhere
    ForceQuit,

    // ============ Game ============
    /// Shuffle a fresh puzzle
    Restart,

    // ============ Tutorial pages ============
    NextPage,
    PrevPage,

    // ============ Yes/No prompts ============
    Yes,
    No,
}

impl Action {
    /// Every action, grouped by category in listing order
    pub const ALL: [Action; 14] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Confirm,
        Action::Cancel,
        Action::Toggle,
        Action::Quit,
        Action::ForceQuit,
        Action::Restart,
        Action::NextPage,
        Action::PrevPage,
        Action::Yes,
        Action::No,
    ];

    /// Human-readable description, shown in the About controls list
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up / slide tile up",
            Action::MoveDown => "Move down / slide tile down",
            Action::MoveLeft => "Move left / slide tile left",
            Action::MoveRight => "Move right / slide tile right",
            Action::Confirm => "Select",
            Action::Cancel => "Back",
            Action::Toggle => "Toggle setting",
            Action::Quit => "Quit",
            Action::ForceQuit => "Quit immediately",
            Action::Restart => "New puzzle",
            Action::NextPage => "Next page",
            Action::PrevPage => "Previous page",
            Action::Yes => "Yes",
            Action::No => "No",
        }
    }

    /// Group name for help listings
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
                "Navigation"
            }
            Action::Confirm | Action::Cancel | Action::Toggle => "Selection",
            Action::Quit | Action::ForceQuit => "Global",
            Action::Restart => "Game",
            Action::NextPage | Action::PrevPage => "Tutorial",
            Action::Yes | Action::No => "Prompts",
        }
    }
}
