//! User-facing strings, looked up by key.

use std::collections::HashMap;
use tracing::warn;

/// English strings shipped with the game
const ENGLISH: &[(&str, &str)] = &[
    ("app.title", "gridlock"),
    ("app.tagline", "Slide the tiles back into order."),
    ("menu.play", "Play"),
    ("menu.statistics", "Statistics"),
    ("menu.settings", "Settings"),
    ("menu.about", "About"),
    ("menu.exit", "Exit"),
    ("menu.description", "Pick an option to get started."),
    ("tutorial.prompt.title", "New here?"),
    ("tutorial.prompt.body", "Would you like a short tutorial before your first puzzle?"),
    ("tutorial.declined.title", "No problem"),
    ("tutorial.declined.body", "You can ask for the tutorial again from Settings."),
    ("tutorial.title", "How to play"),
    ("tutorial.page.1", "The board is a grid of numbered tiles with one empty cell."),
    ("tutorial.page.2", "Arrow keys slide a neighbouring tile into the empty cell."),
    ("tutorial.page.3", "Put the tiles back in order, left to right and top to bottom, with the empty cell last."),
    ("tutorial.page.4", "Fewer moves and less time make a better score. Good luck!"),
    ("tutorial.next", "Next"),
    ("tutorial.start", "Start playing"),
    ("game.title", "Puzzle"),
    ("game.moves", "Moves"),
    ("game.time", "Time"),
    ("game.abandon.title", "Abandon puzzle?"),
    ("game.abandon.body", "Your progress on this board will be lost."),
    ("game.solved.title", "Solved!"),
    ("game.solved.body", "Press Enter to return to the menu, or r for a new board."),
    ("stats.title", "Statistics"),
    ("stats.description", "Your record so far."),
    ("stats.played", "Puzzles started"),
    ("stats.solved", "Puzzles solved"),
    ("stats.best_moves", "Fewest moves"),
    ("stats.best_time", "Fastest time"),
    ("stats.last_solved", "Last solved"),
    ("stats.none", "-"),
    ("settings.title", "Settings"),
    ("settings.description", "Changes are saved immediately."),
    ("settings.fullscreen", "Fullscreen"),
    ("settings.sound", "Sound"),
    ("settings.tutorial", "Ask about the tutorial again"),
    ("settings.reset_stats", "Reset statistics"),
    ("settings.reset_stats.title", "Reset statistics?"),
    ("settings.reset_stats.body", "All recorded games and best scores will be erased."),
    ("settings.on", "On"),
    ("settings.off", "Off"),
    ("about.title", "About"),
    ("dialog.yes", "Yes"),
    ("dialog.no", "No"),
    ("dialog.ok", "OK"),
];

/// Key-to-string table with a fallback to the key itself
#[derive(Debug, Clone)]
pub struct Locale {
    strings: HashMap<&'static str, &'static str>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    pub fn english() -> Self {
        Self {
            strings: ENGLISH.iter().copied().collect(),
        }
    }

    /// Look up a string; unknown keys come back verbatim
    pub fn get(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(s) => (*s).to_string(),
            None => {
                warn!("Missing locale string: {}", key);
                key.to_string()
            }
        }
    }
}
