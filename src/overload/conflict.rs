//! Errors reported when validating a set of rules.

use thiserror::Error;

/// Two rules claim the same `(state, event)` pair.
///
/// Only the earlier rule can ever fire, so the later one is dead.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Arm {duplicate} repeats rule ({state}, {event}) already handled by arm {first}")]
pub struct RuleConflict {
    pub state: String,
    pub event: String,
    /// Position of the arm that wins
    pub first: usize,
    /// Position of the arm that is shadowed
    pub duplicate: usize,
}
