//! Alarm transitions as per-tag handler impls.
//!
//! Each state tag implements [`On`] once per event tag. The default
//! method ignores the event, so only the four meaningful pairs override
//! it; the remaining impls are empty and spell out the fallback.

use super::{
    AlarmEvent, AlarmState, Alarming, Armed, AuthenticationPresented, Disarmed,
    DoorIntrusionDetected,
};
use crate::core::Transition;

/// Reaction of one state to one kind of event.
pub trait On<Ev> {
    fn on(&self, _event: &Ev) -> Option<AlarmState> {
        None
    }
}

impl On<AuthenticationPresented> for Disarmed {
    fn on(&self, _event: &AuthenticationPresented) -> Option<AlarmState> {
        Some(Armed.into())
    }
}

impl On<DoorIntrusionDetected> for Disarmed {}

impl On<AuthenticationPresented> for Armed {
    fn on(&self, _event: &AuthenticationPresented) -> Option<AlarmState> {
        Some(Disarmed.into())
    }
}

impl On<DoorIntrusionDetected> for Armed {
    fn on(&self, _event: &DoorIntrusionDetected) -> Option<AlarmState> {
        Some(Alarming.into())
    }
}

impl On<AuthenticationPresented> for Alarming {
    fn on(&self, _event: &AuthenticationPresented) -> Option<AlarmState> {
        Some(Disarmed.into())
    }
}

impl On<DoorIntrusionDetected> for Alarming {}

fn handle<T>(tag: &T, event: &AlarmEvent) -> Option<AlarmState>
where
    T: On<AuthenticationPresented> + On<DoorIntrusionDetected>,
{
    match event {
        AlarmEvent::AuthenticationPresented(e) => On::<AuthenticationPresented>::on(tag, e),
        AlarmEvent::DoorIntrusionDetected(e) => On::<DoorIntrusionDetected>::on(tag, e),
    }
}

/// Alarm transition function dispatching to the [`On`] impls.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandlerTransitions;

impl Transition<AlarmState, AlarmEvent> for HandlerTransitions {
    fn transition(&self, state: &AlarmState, event: &AlarmEvent) -> Option<AlarmState> {
        match state {
            AlarmState::Disarmed(tag) => handle(tag, event),
            AlarmState::Armed(tag) => handle(tag, event),
            AlarmState::Alarming(tag) => handle(tag, event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_handle_authentication() {
        assert_eq!(
            Disarmed.on(&AuthenticationPresented),
            Some(AlarmState::Armed(Armed))
        );
        assert_eq!(
            Armed.on(&AuthenticationPresented),
            Some(AlarmState::Disarmed(Disarmed))
        );
        assert_eq!(
            Alarming.on(&AuthenticationPresented),
            Some(AlarmState::Disarmed(Disarmed))
        );
    }

    #[test]
    fn default_handlers_ignore_the_door() {
        assert_eq!(Disarmed.on(&DoorIntrusionDetected), None);
        assert_eq!(Alarming.on(&DoorIntrusionDetected), None);
    }

    #[test]
    fn armed_door_intrusion_raises_alarm() {
        assert_eq!(
            HandlerTransitions.transition(
                &AlarmState::Armed(Armed),
                &AlarmEvent::DoorIntrusionDetected(DoorIntrusionDetected)
            ),
            Some(AlarmState::Alarming(Alarming))
        );
    }

    #[test]
    fn disarmed_door_intrusion_is_ignored() {
        assert_eq!(
            HandlerTransitions.transition(
                &AlarmState::Disarmed(Disarmed),
                &AlarmEvent::DoorIntrusionDetected(DoorIntrusionDetected)
            ),
            None
        );
    }
}
