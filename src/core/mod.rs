//! Core state machine types and logic.
//!
//! This module contains the pure core of the state machine:
//! - State and event definitions via the `State` and `Event` traits
//! - The `Transition` function from `(state, event)` to an optional next state
//! - Immutable history of committed transitions
//!
//! Nothing in this module performs side effects.

mod event;
mod history;
mod state;
mod transition;

pub use event::Event;
pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use transition::Transition;
