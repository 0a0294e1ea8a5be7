//! Side effects of alarm transitions.

use super::{AlarmEvent, AlarmState};
use crate::core::StateTransition;

/// Hardware the alarm drives.
pub trait AlarmPanel {
    fn arm(&mut self);
    fn disarm(&mut self);
    fn sound_siren(&mut self);
    fn silence_siren(&mut self);
}

/// Drive `panel` for a committed transition.
///
/// Pairs with no associated action are a no-op.
pub fn perform<P>(panel: &mut P, transition: &StateTransition<AlarmState, AlarmEvent>)
where
    P: AlarmPanel + ?Sized,
{
    match (&transition.from, &transition.to) {
        (AlarmState::Disarmed(_), AlarmState::Armed(_)) => panel.arm(),
        (AlarmState::Armed(_), AlarmState::Disarmed(_)) => panel.disarm(),
        (AlarmState::Alarming(_), AlarmState::Disarmed(_)) => {
            panel.silence_siren();
            panel.disarm();
        }
        (AlarmState::Armed(_), AlarmState::Alarming(_)) => panel.sound_siren(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::{
        system_with_panel, Alarming, Armed, AuthenticationPresented, Disarmed,
        DoorIntrusionDetected,
    };
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingPanel {
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RecordingPanel {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AlarmPanel for RecordingPanel {
        fn arm(&mut self) {
            self.calls.lock().unwrap().push("arm");
        }

        fn disarm(&mut self) {
            self.calls.lock().unwrap().push("disarm");
        }

        fn sound_siren(&mut self) {
            self.calls.lock().unwrap().push("sound_siren");
        }

        fn silence_siren(&mut self) {
            self.calls.lock().unwrap().push("silence_siren");
        }
    }

    fn record(
        from: AlarmState,
        event: AlarmEvent,
        to: AlarmState,
    ) -> StateTransition<AlarmState, AlarmEvent> {
        StateTransition {
            from,
            event,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn alarming_to_disarmed_silences_before_disarming() {
        let mut panel = RecordingPanel::default();

        perform(
            &mut panel,
            &record(
                Alarming.into(),
                AuthenticationPresented.into(),
                Disarmed.into(),
            ),
        );

        assert_eq!(panel.calls(), ["silence_siren", "disarm"]);
    }

    #[test]
    fn unrelated_pairs_do_nothing() {
        let mut panel = RecordingPanel::default();

        perform(
            &mut panel,
            &record(Alarming.into(), DoorIntrusionDetected.into(), Armed.into()),
        );

        assert!(panel.calls().is_empty());
    }

    #[test]
    fn system_drives_panel_through_a_break_in() {
        let panel = RecordingPanel::default();
        let mut system = system_with_panel(panel.clone());

        system.dispatch_all([
            AlarmEvent::DoorIntrusionDetected(DoorIntrusionDetected),
            AlarmEvent::AuthenticationPresented(AuthenticationPresented),
            AlarmEvent::DoorIntrusionDetected(DoorIntrusionDetected),
            AlarmEvent::AuthenticationPresented(AuthenticationPresented),
        ]);

        assert_eq!(panel.calls(), ["arm", "sound_siren", "silence_siren", "disarm"]);
        assert_eq!(system.current_state(), &AlarmState::Disarmed(Disarmed));
    }
}
