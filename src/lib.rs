//! Gridlock - a casual sliding-tile puzzle for the terminal
//!
//! The game is a stack of screens driven by a [`navigator::Navigator`]:
//! a main menu, the puzzle itself, statistics, settings, about and a
//! tutorial. Player state survives restarts in a preferences file.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod dialog;
pub mod keymap;
pub mod navigator;
pub mod preferences;
pub mod puzzle;
pub mod screens;
pub mod services;
pub mod stats;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use navigator::{Lifecycle, NavError, NavStatus, Navigator, PopPolicy};
pub use preferences::{FilePreferences, MemoryPreferences, PreferencesStore};
pub use screens::{Screen, ScreenAction, ScreenId};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
