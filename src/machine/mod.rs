//! The dispatch entry point around the pure transition function.
//!
//! `StateMachine` is the imperative shell: it owns the single current
//! state, consults a [`Transition`](crate::core::Transition) for each
//! incoming event, and commits the result. Bookkeeping happens only for
//! committed transitions:
//! - the transition is appended to the history
//! - it is logged through `tracing`
//! - registered effects are invoked with the transition record

mod dispatch;
mod state_machine;

pub use dispatch::Dispatch;
pub use state_machine::{Effect, StateMachine};
