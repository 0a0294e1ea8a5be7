//! State machine that holds the current state and dispatches events.

use crate::core::{Event, State, StateHistory, StateTransition, Transition};
use crate::machine::dispatch::Dispatch;
use chrono::Utc;

/// Side effect run after a transition has been committed.
pub type Effect<S, E> = Box<dyn FnMut(&StateTransition<S, E>) + Send>;

/// State machine holding exactly one current state.
///
/// `dispatch` takes `&mut self`, so the read-then-write of the current
/// state cannot race. To share a machine between threads, wrap it in a
/// `Mutex` (or similar) owned by the caller.
pub struct StateMachine<S: State, E: Event, T> {
    initial: S,
    current: S,
    transitions: T,
    history: StateHistory<S, E>,
    effects: Vec<Effect<S, E>>,
}

impl<S: State, E: Event, T: Transition<S, E>> StateMachine<S, E, T> {
    /// Create a new state machine in the initial state
    pub fn new(initial: S, transitions: T) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions,
            history: StateHistory::new(),
            effects: Vec::new(),
        }
    }

    /// Register a side effect to run after every committed transition.
    pub fn on_transition<F>(&mut self, effect: F)
    where
        F: FnMut(&StateTransition<S, E>) + Send + 'static,
    {
        self.add_effect(Box::new(effect));
    }

    pub(crate) fn add_effect(&mut self, effect: Effect<S, E>) {
        self.effects.push(effect);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine started in (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Get the transition function (pure)
    pub fn transitions(&self) -> &T {
        &self.transitions
    }

    /// States visited since the last reset, starting with the initial state.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.initial)
            .chain(self.history.transitions().iter().map(|t| &t.to))
            .collect()
    }

    /// Compute the state `event` would lead to, without committing it.
    pub fn peek(&self, event: &E) -> Option<S> {
        self.transitions.transition(&self.current, event)
    }

    /// Apply `event` to the current state.
    ///
    /// If the transition function yields a new state it replaces the
    /// current one and is appended to the history. Registered effects
    /// run last, once the bookkeeping is complete. Otherwise nothing
    /// changes.
    pub fn dispatch(&mut self, event: E) -> Dispatch<S> {
        let Some(next) = self.transitions.transition(&self.current, &event) else {
            tracing::debug!(
                state = self.current.name(),
                event = event.name(),
                "event ignored"
            );
            return Dispatch::Unchanged;
        };

        let from = std::mem::replace(&mut self.current, next.clone());
        tracing::info!(
            from = from.name(),
            to = next.name(),
            event = event.name(),
            "state transition"
        );

        self.history.push(StateTransition {
            from: from.clone(),
            event,
            to: next.clone(),
            timestamp: Utc::now(),
        });
        if let Some(record) = self.history.transitions().last() {
            for effect in self.effects.iter_mut() {
                effect(record);
            }
        }

        Dispatch::Transitioned { from, to: next }
    }

    /// Dispatch every event in order.
    /// Returns how many of them caused a transition.
    pub fn dispatch_all<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = E>,
    {
        events
            .into_iter()
            .map(|event| self.dispatch(event))
            .filter(Dispatch::is_transitioned)
            .count()
    }

    /// Return to the initial state and forget the history.
    /// Registered effects are kept.
    pub fn reset(&mut self) {
        tracing::debug!(state = self.initial.name(), "state machine reset");
        self.current = self.initial.clone();
        self.history = StateHistory::new();
    }
}
