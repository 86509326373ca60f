use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a group model controller.
///
/// Variants are ordered: a controller only ever moves towards `Finished`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    /// Constructed, context not applied yet
    #[default]
    Initial,
    /// Composite controller is applying context to its children
    Pending,
    /// Presentation node built and cached (terminal)
    Finished,
}

impl ControllerState {
    /// Move to `next` if it lies ahead of the current state.
    ///
    /// Returns `false` (and leaves the state untouched) for a backward or
    /// same-state request.
    pub fn advance(&mut self, next: ControllerState) -> bool {
        if next > *self {
            *self = next;
            true
        } else {
            false
        }
    }

    pub fn is_finished(self) -> bool {
        self == ControllerState::Finished
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerState::Initial => write!(f, "initial"),
            ControllerState::Pending => write!(f, "pending"),
            ControllerState::Finished => write!(f, "finished"),
        }
    }
}
