//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, State, StateTransition, Transition};
use crate::machine::{Effect, StateMachine};

/// Builder for constructing state machines with a fluent API.
pub struct MachineBuilder<S: State, E: Event, T> {
    initial: Option<S>,
    transitions: Option<T>,
    effects: Vec<Effect<S, E>>,
}

impl<S: State, E: Event, T: Transition<S, E>> MachineBuilder<S, E, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: None,
            effects: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition function (required).
    pub fn transitions(mut self, transitions: T) -> Self {
        self.transitions = Some(transitions);
        self
    }

    /// Register a side effect to run after every committed transition.
    pub fn on_transition<F>(mut self, effect: F) -> Self
    where
        F: FnMut(&StateTransition<S, E>) + Send + 'static,
    {
        self.effects.push(Box::new(effect));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S, E, T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let transitions = self.transitions.ok_or(BuildError::MissingTransitions)?;

        let mut machine = StateMachine::new(initial, transitions);
        for effect in self.effects {
            machine.add_effect(effect);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event, T: Transition<S, E>> Default for MachineBuilder<S, E, T> {
    fn default() -> Self {
        Self::new()
    }
}
