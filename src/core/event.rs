//! Event trait for the triggers a state machine reacts to.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine events.
///
/// Events form a closed set, just like states. They carry no behavior of
/// their own; the transition function decides what each one means in a
/// given state.
///
/// # Example
///
/// ```rust
/// use sumstate::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     Push,
///     Pull,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Pull.name(), "Pull");
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Push,
        Pull,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Push => "Push",
                Self::Pull => "Pull",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Push.name(), "Push");
        assert_eq!(TestEvent::Pull.name(), "Pull");
    }

    #[test]
    fn event_is_comparable() {
        assert_eq!(TestEvent::Push, TestEvent::Push);
        assert_ne!(TestEvent::Push, TestEvent::Pull);
    }
}
