//! Named button styles for menu entries.
//!
//! Screens refer to a look by name ("greenPlay", "exit", ...) so the
//! palette can change without touching the screens.

use crate::styles::theme;
use crate::widgets::MenuItem;
use ratatui::style::Color;
use tracing::warn;

/// Style names the skin knows about
pub const STYLE_NAMES: [&str; 7] = [
    "greenPlay", "stats", "settings", "about", "exit", "toggle", "danger",
];

pub struct Skin;

impl Skin {
    /// Icon and color for a named style; `None` for unknown names
    fn lookup(style: &str) -> Option<(&'static str, Color)> {
        let t = theme();
        Some(match style {
            "greenPlay" => ("▶", t.success),
            "stats" => ("≡", t.tertiary),
            "settings" => ("⚙", t.secondary),
            "about" => ("ℹ", t.primary),
            "exit" => ("⏻", t.error),
            "toggle" => ("◆", t.text),
            "danger" => ("✖", t.warning),
            _ => return None,
        })
    }

    /// A menu item in the named style. Unknown names fall back to plain
    /// text with a warning.
    pub fn button(style: &str, label: impl Into<String>) -> MenuItem {
        let (icon, color) = Self::lookup(style).unwrap_or_else(|| {
            warn!("Unknown button style '{}', using default", style);
            ("•", theme().text)
        });
        MenuItem::new(icon, label, color)
    }
}
