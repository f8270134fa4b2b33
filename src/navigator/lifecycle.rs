use std::fmt;

/// Lifecycle state of a registered screen
///
/// ```text
/// Uninitialized ──▶ Built ──▶ Shown ◀──▶ Hidden ──▶ Disposed
///                     ▲                                │
///                     └────────── next activation ─────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Never activated
    #[default]
    Uninitialized,
    /// Widget tree exists, not yet shown
    Built,
    /// Top of the stack, receiving input
    Shown,
    /// Built but covered or popped
    Hidden,
    /// Widget tree discarded; the next activation rebuilds
    Disposed,
}

impl Lifecycle {
    /// Whether activation has to call `set_up` first
    pub fn needs_build(self) -> bool {
        matches!(self, Lifecycle::Uninitialized | Lifecycle::Disposed)
    }

    /// Whether a widget tree currently exists
    pub fn is_built(self) -> bool {
        matches!(self, Lifecycle::Built | Lifecycle::Shown | Lifecycle::Hidden)
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Built => "built",
            Lifecycle::Shown => "shown",
            Lifecycle::Hidden => "hidden",
            Lifecycle::Disposed => "disposed",
        };
        f.write_str(s)
    }
}
