//! Sound effects.
//!
//! A terminal has exactly one instrument, the bell, so every effect maps to
//! it. The codes still matter: tests record them, and a richer backend can
//! tell them apart.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::debug;

/// Effects the screens ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCode {
    /// Menu entry activated
    Click,
    /// Leaving a screen
    Back,
    /// A tile slid
    Slide,
    /// A move into the wall
    Blocked,
    /// Puzzle completed
    Solved,
    /// A prompt was answered yes
    Success,
    /// A prompt was turned down
    Fail,
}

impl SoundCode {
    /// Whether the effect is loud enough to ring the terminal bell
    fn rings_bell(self) -> bool {
        matches!(self, SoundCode::Blocked | SoundCode::Solved | SoundCode::Fail)
    }
}

/// Fire-and-forget sound playback
pub trait SoundService {
    fn play_sound(&mut self, code: SoundCode);
}

/// Rings the terminal bell for the effects that warrant it
#[derive(Debug, Default)]
pub struct TerminalBell;

impl SoundService for TerminalBell {
    fn play_sound(&mut self, code: SoundCode) {
        debug!("sound: {:?}", code);
        if code.rings_bell() {
            let mut out = std::io::stdout();
            // bell failures are ignored
            let _ = out.write_all(b"\x07").and_then(|()| out.flush());
        }
    }
}

/// Plays nothing
#[derive(Debug, Default)]
pub struct Muted;

impl SoundService for Muted {
    fn play_sound(&mut self, _code: SoundCode) {}
}

/// Remembers every effect requested, for tests
///
/// Clones share one log, so a test can keep a handle while the service
/// itself is boxed away inside [`super::Services`].
#[derive(Debug, Default, Clone)]
pub struct RecordingSound {
    log: Rc<RefCell<Vec<SoundCode>>>,
}

impl RecordingSound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<SoundCode> {
        self.log.borrow().clone()
    }
}

impl SoundService for RecordingSound {
    fn play_sound(&mut self, code: SoundCode) {
        self.log.borrow_mut().push(code);
    }
}
