//! Shared test utilities for navigation workflow tests.
//!
//! Provides `TestEnv`, an isolated preferences location backed by
//! `TempDir`, and `Session`, a headless game: the real navigator with every
//! screen registered, driven by synthetic key events and rendered into a
//! `TestBackend`.

#![allow(dead_code)]

use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use gridlock::keymap::Keymap;
use gridlock::navigator::{NavStatus, Navigator};
use gridlock::preferences::{FilePreferences, PreferencesStore};
use gridlock::screens::{self, ScreenId};
use gridlock::services::{RecordingSound, Services};
use gridlock::utils::windowed_area;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

/// Isolated preferences file that survives across sessions of one test
pub struct TestEnv {
    pub dir: TempDir,
    pub prefs_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let prefs_path = dir.path().join("preferences.toml");
        Self { dir, prefs_path }
    }

    /// A player who already answered the tutorial offer
    pub fn returning_player() -> Self {
        let env = Self::new();
        env.seed_boolean(gridlock::preferences::keys::TUTORIAL_ASKED, true);
        env
    }

    /// What a fresh process would read from disk right now
    pub fn reload(&self) -> FilePreferences {
        FilePreferences::load(&self.prefs_path).expect("Failed to reload preferences")
    }

    /// Write a flag to disk before any session starts
    pub fn seed_boolean(&self, key: &str, value: bool) {
        let mut prefs = self.reload();
        prefs.put_boolean(key, value);
        prefs.flush().expect("Failed to seed preferences");
    }

    pub fn session(&self) -> Session {
        Session::start(Box::new(self.reload()), Keymap::default())
    }

    pub fn session_with_keymap(&self, keymap: Keymap) -> Session {
        Session::start(Box::new(self.reload()), keymap)
    }
}

/// A running game without a terminal
pub struct Session {
    pub navigator: Navigator,
    pub services: Services,
    pub sound: RecordingSound,
}

impl Session {
    pub fn start(prefs: Box<dyn PreferencesStore>, keymap: Keymap) -> Self {
        let sound = RecordingSound::new();
        let mut services = Services::new(prefs, Box::new(sound.clone()), keymap, 3);
        let mut navigator = Navigator::new();
        screens::register_all(&mut navigator);
        navigator
            .start(ScreenId::MainMenu, &mut services.context())
            .expect("Failed to start at the main menu");
        Self {
            navigator,
            services,
            sound,
        }
    }

    pub fn key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> NavStatus {
        let event = Event::Key(KeyEvent::new(code, modifiers));
        self.navigator
            .handle_event(event, &mut self.services.context())
            .expect("Navigation failed")
    }

    pub fn press(&mut self, code: KeyCode) -> NavStatus {
        self.key(code, KeyModifiers::NONE)
    }

    pub fn char(&mut self, c: char) -> NavStatus {
        self.press(KeyCode::Char(c))
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.navigator.current()
    }

    pub fn stack(&self) -> Vec<ScreenId> {
        self.navigator.stack().to_vec()
    }

    /// Push and pop a screen through the navigator directly
    pub fn visit(&mut self, id: ScreenId) {
        let mut ctx = self.services.context();
        self.navigator.push(id, &mut ctx).expect("push failed");
        self.navigator
            .pop(gridlock::navigator::PopPolicy::Retain, &mut ctx)
            .expect("pop failed");
    }

    /// Draw one frame and return the screen contents as text
    pub fn render(&mut self, width: u16, height: u16) -> String {
        let fullscreen = self
            .services
            .prefs
            .get_boolean(gridlock::preferences::keys::FULLSCREEN);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let navigator = &mut self.navigator;
        let ctx = self.services.render_context();
        terminal
            .draw(|frame| {
                let area = windowed_area(frame.area(), fullscreen);
                navigator.render(frame, area, &ctx).expect("render failed");
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }
}
