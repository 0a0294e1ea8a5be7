//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition function not specified. Call .transitions(function) before .build()")]
    MissingTransitions,
}
