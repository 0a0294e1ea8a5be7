//! Home Alarm State Machine
//!
//! This example walks a home alarm through a break-in.
//!
//! Key concepts:
//! - States and events as tagged unions
//! - Ignored events are not errors
//! - Side effects run in the shell after a transition commits
//! - Logging of committed and ignored events via tracing
//!
//! Run with: RUST_LOG=debug cargo run --example home_alarm

use sumstate::alarm::{
    self, closure_transitions, AlarmEvent, AlarmPanel, AuthenticationPresented,
    DoorIntrusionDetected, HandlerTransitions,
};
use sumstate::core::{Event, State, Transition};
use tracing_subscriber::EnvFilter;

struct ConsolePanel;

impl AlarmPanel for ConsolePanel {
    fn arm(&mut self) {
        println!("  [panel] sensors armed");
    }

    fn disarm(&mut self) {
        println!("  [panel] sensors disarmed");
    }

    fn sound_siren(&mut self) {
        println!("  [panel] SIREN ON");
    }

    fn silence_siren(&mut self) {
        println!("  [panel] siren off");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Home Alarm State Machine ===\n");

    let mut system = alarm::system_with_panel(ConsolePanel);
    println!("Initial state: {}\n", system.current_state().name());

    let script: [AlarmEvent; 6] = [
        DoorIntrusionDetected.into(),
        AuthenticationPresented.into(),
        DoorIntrusionDetected.into(),
        DoorIntrusionDetected.into(),
        AuthenticationPresented.into(),
        AuthenticationPresented.into(),
    ];

    for event in script {
        let before = system.current_state().name().to_string();
        let outcome = system.dispatch(event);
        match outcome.new_state() {
            Some(next) => println!("{} + {} -> {}", before, event.name(), next.name()),
            None => println!("{} + {} -> (no change)", before, event.name()),
        }
    }

    println!("\nPath taken:");
    let path: Vec<&str> = system
        .path()
        .into_iter()
        .map(|s| s.name())
        .collect();
    println!("  {}", path.join(" -> "));

    println!("\nHandler and closure formulations agree:");
    let closures = closure_transitions();
    for state in alarm::AlarmState::ALL {
        for event in AlarmEvent::ALL {
            let handler = HandlerTransitions.transition(&state, &event);
            let closure = closures.transition(&state, &event);
            assert_eq!(handler, closure);
            let next = handler.as_ref().map_or("(no change)", |s| s.name());
            println!("  {:<8} + {:<23} -> {}", state.name(), event.name(), next);
        }
    }

    println!("\n=== Example Complete ===");
}
