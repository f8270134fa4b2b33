//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset binds every action at least once.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl on top of the arrows
    Vim,
    /// Ctrl+N/P/B/F on top of the arrows
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::Toggle),
        KeyBinding::new("ctrl+c", Action::ForceQuit),
        KeyBinding::new("pagedown", Action::NextPage),
        KeyBinding::new("pageup", Action::PrevPage),
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = common_bindings();
    bindings.extend([
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("r", Action::Restart),
    ]);
    bindings
}

fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("ctrl+d", Action::NextPage),
        KeyBinding::new("ctrl+u", Action::PrevPage),
    ];
    bindings.extend(common_bindings());
    bindings.extend([
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("r", Action::Restart),
    ]);
    bindings
}

fn emacs_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is keyboard-quit
        KeyBinding::new("ctrl+v", Action::NextPage),
        KeyBinding::new("alt+v", Action::PrevPage),
    ];
    bindings.extend(common_bindings());
    bindings.extend([
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+r", Action::Restart),
    ]);
    bindings
}
