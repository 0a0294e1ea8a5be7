//! Outcome of dispatching a single event.

use crate::core::State;

/// Result of dispatching one event to a state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch<S: State> {
    /// The event triggered a transition, which has been committed
    Transitioned { from: S, to: S },

    /// The event was ignored in the current state
    Unchanged,
}

impl<S: State> Dispatch<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// The state entered by this dispatch, if any.
    pub fn new_state(&self) -> Option<&S> {
        match self {
            Self::Transitioned { to, .. } => Some(to),
            Self::Unchanged => None,
        }
    }

    /// Collapse into the optional-next-state form of the transition function.
    pub fn into_option(self) -> Option<S> {
        match self {
            Self::Transitioned { to, .. } => Some(to),
            Self::Unchanged => None,
        }
    }
}
