//! Alarm transitions as merged closures.

use super::{
    AlarmEvent, AlarmState, Alarming, Armed, AuthenticationPresented, Disarmed,
    DoorIntrusionDetected,
};
use crate::overload::Overloaded;

/// The alarm transition function written as one inline closure per
/// handled `(state, event)` pair.
pub fn closure_transitions() -> Overloaded<AlarmState, AlarmEvent> {
    crate::overloaded![
        |s: &AlarmState, e: &AlarmEvent| {
            matches!(
                (s, e),
                (AlarmState::Disarmed(_), AlarmEvent::AuthenticationPresented(_))
            )
            .then_some(AlarmState::Armed(Armed))
        },
        |s: &AlarmState, e: &AlarmEvent| {
            matches!(
                (s, e),
                (AlarmState::Armed(_), AlarmEvent::AuthenticationPresented(_))
            )
            .then_some(AlarmState::Disarmed(Disarmed))
        },
        |s: &AlarmState, e: &AlarmEvent| {
            matches!(
                (s, e),
                (AlarmState::Alarming(_), AlarmEvent::AuthenticationPresented(_))
            )
            .then_some(AlarmState::Disarmed(Disarmed))
        },
        |s: &AlarmState, e: &AlarmEvent| {
            matches!(
                (s, e),
                (AlarmState::Armed(_), AlarmEvent::DoorIntrusionDetected(_))
            )
            .then_some(AlarmState::Alarming(Alarming))
        },
    ]
}

/// The alarm transition function written as equality rules.
pub fn rule_transitions() -> Overloaded<AlarmState, AlarmEvent> {
    Overloaded::new()
        .rule(Disarmed.into(), AuthenticationPresented.into(), Armed.into())
        .rule(Armed.into(), AuthenticationPresented.into(), Disarmed.into())
        .rule(Alarming.into(), AuthenticationPresented.into(), Disarmed.into())
        .rule(Armed.into(), DoorIntrusionDetected.into(), Alarming.into())
}
