//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent machine builder and the macros that
//! declare tagged-union states and events.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
