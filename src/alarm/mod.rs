//! Home alarm built on tagged-union dispatch.
//!
//! The alarm is always in exactly one of three modes and reacts to two
//! kinds of trigger:
//!
//! | state    | event                   | next      |
//! |----------|-------------------------|-----------|
//! | Disarmed | AuthenticationPresented | Armed     |
//! | Armed    | AuthenticationPresented | Disarmed  |
//! | Alarming | AuthenticationPresented | Disarmed  |
//! | Armed    | DoorIntrusionDetected   | Alarming  |
//!
//! Every other combination leaves the state alone. In particular the
//! door sensor is ignored while disarmed.
//!
//! The same transition function is written three ways: per-tag handler
//! impls ([`HandlerTransitions`]), merged inline closures
//! ([`closure_transitions`]) and equality rules ([`rule_transitions`]).
//!
//! # Example
//!
//! ```rust
//! use sumstate::alarm::{self, AlarmState, Armed, AuthenticationPresented};
//!
//! let mut system = alarm::system();
//! system.dispatch(AuthenticationPresented.into());
//!
//! assert_eq!(system.current_state(), &AlarmState::Armed(Armed));
//! ```

mod closures;
mod handlers;
mod panel;

pub use closures::{closure_transitions, rule_transitions};
pub use handlers::{HandlerTransitions, On};
pub use panel::{perform, AlarmPanel};

use crate::machine::StateMachine;

crate::state_union! {
    /// Operating mode of the alarm.
    pub enum AlarmState {
        /// Sensors are ignored
        Disarmed,
        /// Sensors are watched
        Armed,
        /// The siren is sounding
        Alarming,
    }
}

crate::event_union! {
    /// Triggers the alarm reacts to.
    pub enum AlarmEvent {
        /// A valid code or badge was presented at the keypad
        AuthenticationPresented,
        /// The door contact reported an opening
        DoorIntrusionDetected,
    }
}

impl AlarmState {
    pub const ALL: [AlarmState; 3] = [
        AlarmState::Disarmed(Disarmed),
        AlarmState::Armed(Armed),
        AlarmState::Alarming(Alarming),
    ];
}

impl Default for AlarmState {
    fn default() -> Self {
        AlarmState::Disarmed(Disarmed)
    }
}

impl AlarmEvent {
    pub const ALL: [AlarmEvent; 2] = [
        AlarmEvent::AuthenticationPresented(AuthenticationPresented),
        AlarmEvent::DoorIntrusionDetected(DoorIntrusionDetected),
    ];
}

/// Alarm state machine using the handler formulation.
pub type AlarmSystem = StateMachine<AlarmState, AlarmEvent, HandlerTransitions>;

/// A new alarm, disarmed.
pub fn system() -> AlarmSystem {
    StateMachine::new(AlarmState::default(), HandlerTransitions)
}

/// A new alarm that drives `panel` on every committed transition.
pub fn system_with_panel<P>(mut panel: P) -> AlarmSystem
where
    P: AlarmPanel + Send + 'static,
{
    let mut system = system();
    system.on_transition(move |transition| perform(&mut panel, transition));
    system
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, State};

    #[test]
    fn new_system_starts_disarmed() {
        let system = system();

        assert_eq!(system.current_state(), &AlarmState::Disarmed(Disarmed));
        assert!(!system.is_final());
    }

    #[test]
    fn names_match_variants() {
        let names: Vec<&str> = AlarmState::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Disarmed", "Armed", "Alarming"]);

        let names: Vec<&str> = AlarmEvent::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["AuthenticationPresented", "DoorIntrusionDetected"]);
    }

    #[test]
    fn no_state_is_final() {
        assert!(AlarmState::ALL.iter().all(|s| !s.is_final()));
    }
}
