//! Screen trait and associated types.
//!
//! A screen is one full-page view. The navigator owns every screen and
//! drives its lifecycle:
//!
//! 1. `set_up` builds the widget tree, once per transition into `Built`
//! 2. `show` / `hide` run whenever the screen becomes or stops being the top
//! 3. `dispose` tears the widget tree down
//!
//! Event handling returns a [`ScreenAction`] instead of touching the stack,
//! and contexts give access to the shared services.

use crate::keymap::{Action, Keymap};
use crate::preferences::PreferencesStore;
use crate::services::{Locale, SoundCode, SoundService};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::fmt;

/// Stable identifier of every screen in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScreenId {
    MainMenu,
    Game,
    Statistics,
    Settings,
    About,
    Tutorial,
}

impl ScreenId {
    pub const ALL: [ScreenId; 6] = [
        ScreenId::MainMenu,
        ScreenId::Game,
        ScreenId::Statistics,
        ScreenId::Settings,
        ScreenId::About,
        ScreenId::Tutorial,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::MainMenu => "main-menu",
            ScreenId::Game => "game",
            ScreenId::Statistics => "statistics",
            ScreenId::Settings => "settings",
            ScreenId::About => "about",
            ScreenId::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Context provided for rendering screens (read-only).
pub struct RenderContext<'a> {
    pub locale: &'a Locale,
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(locale: &'a Locale, keymap: &'a Keymap) -> Self {
        Self { locale, keymap }
    }

    /// Localized string
    pub fn text(&self, key: &str) -> String {
        self.locale.get(key)
    }
}

/// Context provided for lifecycle hooks and event handling.
pub struct ScreenContext<'a> {
    pub prefs: &'a mut dyn PreferencesStore,
    pub sound: &'a mut dyn SoundService,
    pub locale: &'a Locale,
    pub keymap: &'a Keymap,
    /// Edge length for new puzzles
    pub board_size: u8,
}

impl<'a> ScreenContext<'a> {
    /// Play a sound effect unless the player turned sound off
    pub fn play(&mut self, code: SoundCode) {
        if self
            .prefs
            .get_boolean_or(crate::preferences::keys::SOUND, true)
        {
            self.sound.play_sound(code);
        }
    }

    /// Localized string
    pub fn text(&self, key: &str) -> String {
        self.locale.get(key)
    }

    /// Map a key press to a semantic action; other events map to nothing
    pub fn action_for(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.keymap.action_for(key),
            _ => None,
        }
    }
}

/// Actions that a screen can return after handling an event.
///
/// Screens never mutate the stack themselves; the navigator applies these.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Put a screen on top of the current one.
    Push(ScreenId),
    /// Go back, keeping the current screen built for later.
    Pop,
    /// Go back and tear the current screen down.
    PopAndDispose,
    /// Dispose specific screens by id, then push a new one.
    Replace { evict: Vec<ScreenId>, push: ScreenId },
    /// Dispose the current screen and put another in its place.
    Swap(ScreenId),
    /// Ask the host loop to exit.
    Quit,
}

/// Capability interface implemented by every screen.
pub trait Screen {
    fn id(&self) -> ScreenId;

    /// Build the widget tree. Called exactly once per transition into
    /// `Built`; never for a screen that is still built.
    fn set_up(&mut self, ctx: &mut ScreenContext);

    /// The screen became the top of the stack.
    fn show(&mut self, _ctx: &mut ScreenContext) {}

    /// Another screen covered this one, or it was popped.
    fn hide(&mut self, _ctx: &mut ScreenContext) {}

    /// Drop the widget tree.
    fn dispose(&mut self);

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction>;

    /// Whether a modal dialog currently owns this screen's input
    fn has_modal(&self) -> bool {
        false
    }
}
