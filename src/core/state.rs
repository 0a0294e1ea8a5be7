//! Core State trait for state machine states.
//!
//! A state is one member of a closed set. Exactly one state is held by a
//! machine at any time.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing the current
/// mode of a machine; they are usually enums whose variants carry
/// zero-sized tag types (see [`state_union!`](crate::state_union)).
///
/// # Example
///
/// ```rust
/// use sumstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Welded => "Welded",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Open,
        Closed,
        Welded,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Closed => "Closed",
                Self::Welded => "Welded",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Welded)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Plain;

    impl State for Plain {
        fn name(&self) -> &str {
            "Plain"
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Open.name(), "Open");
        assert_eq!(TestState::Closed.name(), "Closed");
        assert_eq!(TestState::Welded.name(), "Welded");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Open.is_final());
        assert!(!TestState::Closed.is_final());
        assert!(TestState::Welded.is_final());
    }

    #[test]
    fn is_final_defaults_to_false() {
        assert!(!Plain.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Closed;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
