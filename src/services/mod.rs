//! Fire-and-forget services the screens call into.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Screens                         │
//! │  (MainMenu, Game, Settings, ...)                │
//! └─────────────────────┬───────────────────────────┘
//!                       │ ScreenContext
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │  ┌──────────────┐ ┌────────┐ ┌────────────────┐ │
//! │  │ SoundService │ │ Locale │ │ PreferencesStore│ │
//! │  └──────────────┘ └────────┘ └────────────────┘ │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! None of these own navigation state; the navigator only passes them
//! through to whichever screen is active.

pub mod locale;
pub mod sound;

pub use locale::Locale;
pub use sound::{Muted, RecordingSound, SoundCode, SoundService, TerminalBell};

use crate::keymap::Keymap;
use crate::preferences::{MemoryPreferences, PreferencesStore};
use crate::screens::{RenderContext, ScreenContext};

/// Owns the shared services for the lifetime of the app and lends them
/// out as contexts
pub struct Services {
    pub prefs: Box<dyn PreferencesStore>,
    pub sound: Box<dyn SoundService>,
    pub locale: Locale,
    pub keymap: Keymap,
    pub board_size: u8,
}

impl Services {
    pub fn new(
        prefs: Box<dyn PreferencesStore>,
        sound: Box<dyn SoundService>,
        keymap: Keymap,
        board_size: u8,
    ) -> Self {
        Self {
            prefs,
            sound,
            locale: Locale::english(),
            keymap,
            board_size,
        }
    }

    /// Memory-only preferences and no sound
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(MemoryPreferences::new()),
            Box::new(Muted),
            Keymap::default(),
            4,
        )
    }

    pub fn context(&mut self) -> ScreenContext<'_> {
        ScreenContext {
            prefs: self.prefs.as_mut(),
            sound: self.sound.as_mut(),
            locale: &self.locale,
            keymap: &self.keymap,
            board_size: self.board_size,
        }
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.locale, &self.keymap)
    }
}
