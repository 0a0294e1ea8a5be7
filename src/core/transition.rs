//! The transition function: a total map from `(state, event)` to an
//! optional next state.

/// Pure transition function over a closed set of states and events.
///
/// Implementations must be total: every `(state, event)` pair yields an
/// answer. `Some(next)` means the pair triggers a transition to `next`;
/// `None` means the event is ignored and the state stays as it is. An
/// unrecognized pair is never an error.
///
/// Any closure `Fn(&S, &E) -> Option<S>` is a transition function.
///
/// # Example
///
/// ```rust
/// use sumstate::core::Transition;
///
/// let toggle = |on: &bool, _press: &()| Some(!*on);
///
/// assert_eq!(toggle.transition(&false, &()), Some(true));
/// ```
pub trait Transition<S, E> {
    /// Decide the next state for `event` arriving while in `state`.
    fn transition(&self, state: &S, event: &E) -> Option<S>;
}

impl<S, E, F> Transition<S, E> for F
where
    F: Fn(&S, &E) -> Option<S>,
{
    fn transition(&self, state: &S, event: &E) -> Option<S> {
        self(state, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Light {
        Off,
        On,
    }

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Switch {
        Flip,
        Tap,
    }

    fn light(state: &Light, event: &Switch) -> Option<Light> {
        match (state, event) {
            (Light::Off, Switch::Flip) => Some(Light::On),
            (Light::On, Switch::Flip) => Some(Light::Off),
            (_, Switch::Tap) => None,
        }
    }

    #[test]
    fn function_items_are_transitions() {
        assert_eq!(light.transition(&Light::Off, &Switch::Flip), Some(Light::On));
        assert_eq!(light.transition(&Light::On, &Switch::Flip), Some(Light::Off));
    }

    #[test]
    fn unhandled_pairs_yield_none() {
        assert_eq!(light.transition(&Light::Off, &Switch::Tap), None);
        assert_eq!(light.transition(&Light::On, &Switch::Tap), None);
    }

    #[test]
    fn closures_capture_environment() {
        let target = Light::On;
        let force = move |_: &Light, _: &Switch| Some(target);

        assert_eq!(force.transition(&Light::Off, &Switch::Tap), Some(Light::On));
    }
}
