use super::Lifecycle;
use crate::screens::ScreenId;

/// Navigation wiring errors.
///
/// None of these are transient: each one means a screen asked for a
/// transition the stack cannot make.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NavError {
    /// No factory was registered for the screen
    #[error("no screen registered for '{0}'")]
    Lookup(ScreenId),

    /// Pop would remove the root screen
    #[error("cannot pop the root screen")]
    EmptyStack,

    /// The screen is in a state that does not allow the operation
    #[error("cannot {op} '{id}' while it is {state}")]
    State {
        id: ScreenId,
        state: Lifecycle,
        op: &'static str,
    },
}
