//! Sumstate: finite state machines over closed sum types
//!
//! States and events are enums whose variants are exhaustive and
//! mutually exclusive. A transition function maps every
//! `(state, event)` pair to `Option<State>`: `Some` means move there,
//! `None` means the event does not apply and nothing changes. The
//! transition logic is pure; the [`machine::StateMachine`] shell owns the
//! current state and commits results.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: closed sets, usually declared with
//!   [`state_union!`] and [`event_union!`]
//! - **Transition**: a total function, written as a `match`, as per-state
//!   handler impls, or as closures merged with [`overloaded!`]
//! - **Dispatch**: apply an event to the held state and commit the result
//! - **History**: immutable record of committed transitions
//!
//! # Example
//!
//! ```rust
//! use sumstate::machine::{Dispatch, StateMachine};
//! use sumstate::{event_union, state_union};
//!
//! state_union! {
//!     pub enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! event_union! {
//!     pub enum Input {
//!         Coin,
//!         PushBar,
//!     }
//! }
//!
//! fn turnstile(state: &Turnstile, input: &Input) -> Option<Turnstile> {
//!     match (state, input) {
//!         (Turnstile::Locked(_), Input::Coin(_)) => Some(Unlocked.into()),
//!         (Turnstile::Unlocked(_), Input::PushBar(_)) => Some(Locked.into()),
//!         _ => None,
//!     }
//! }
//!
//! let mut machine = StateMachine::new(Turnstile::Locked(Locked), turnstile);
//!
//! assert_eq!(machine.dispatch(PushBar.into()), Dispatch::Unchanged);
//! assert!(machine.dispatch(Coin.into()).is_transitioned());
//! assert_eq!(machine.current_state(), &Turnstile::Unlocked(Unlocked));
//! ```

// Lets macro expansions inside this crate name it as `sumstate`.
extern crate self as sumstate;

pub mod alarm;
pub mod builder;
pub mod core;
pub mod machine;
pub mod overload;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{Event, State, StateHistory, StateTransition, Transition};
pub use machine::{Dispatch, StateMachine};
pub use overload::{Overloaded, RuleConflict};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
