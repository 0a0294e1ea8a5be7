//! Transition functions merged from a list of closures.
//!
//! Each arm is an anonymous function handling one `(state, event)`
//! combination and returning `None` for everything else. `Overloaded`
//! merges the arms into a single [`Transition`]: they are tried in
//! order and the first arm that answers decides. When no arm answers,
//! the event is ignored, which keeps the merged function total.
//!
//! # Example
//!
//! ```rust
//! use sumstate::core::Transition;
//! use sumstate::overloaded;
//!
//! #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
//! enum Lamp { Off, On }
//! # impl sumstate::core::State for Lamp {
//! #     fn name(&self) -> &str { "Lamp" }
//! # }
//!
//! #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
//! enum Press { Short, Long }
//! # impl sumstate::core::Event for Press {
//! #     fn name(&self) -> &str { "Press" }
//! # }
//!
//! let lamp = overloaded![
//!     |s: &Lamp, e: &Press| matches!((s, e), (Lamp::Off, Press::Short)).then_some(Lamp::On),
//!     |s: &Lamp, _: &Press| matches!(s, Lamp::On).then_some(Lamp::Off),
//! ];
//!
//! assert_eq!(lamp.transition(&Lamp::Off, &Press::Short), Some(Lamp::On));
//! assert_eq!(lamp.transition(&Lamp::Off, &Press::Long), None);
//! assert_eq!(lamp.transition(&Lamp::On, &Press::Long), Some(Lamp::Off));
//! ```

mod conflict;

pub use conflict::RuleConflict;

use crate::core::{Event, State, Transition};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One handler in an overload set.
pub type Arm<S, E> = Box<dyn Fn(&S, &E) -> Option<S> + Send + Sync>;

/// Equality key recorded for arms added through [`Overloaded::rule`].
struct RuleKey<S, E> {
    arm: usize,
    from: S,
    on: E,
}

/// A transition function assembled from independent closures.
pub struct Overloaded<S: State, E: Event> {
    arms: Vec<Arm<S, E>>,
    rules: Vec<RuleKey<S, E>>,
}

impl<S: State + 'static, E: Event + 'static> Overloaded<S, E> {
    /// Create an empty overload set. It ignores every event.
    pub fn new() -> Self {
        Self {
            arms: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Append a handler closure.
    pub fn arm<F>(mut self, arm: F) -> Self
    where
        F: Fn(&S, &E) -> Option<S> + Send + Sync + 'static,
    {
        self.arms.push(Box::new(arm));
        self
    }

    /// Append a handler that moves `from` to `to` when `on` arrives.
    pub fn rule(mut self, from: S, on: E, to: S) -> Self {
        self.rules.push(RuleKey {
            arm: self.arms.len(),
            from: from.clone(),
            on: on.clone(),
        });
        self.arm(move |state, event| (*state == from && *event == on).then(|| to.clone()))
    }

    /// Number of arms in the set.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Check the rules for pairs handled more than once.
    ///
    /// Every conflict is reported, not just the first. Arms added with
    /// [`arm`](Self::arm) are opaque and are not checked.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<RuleConflict>> {
        let checks: Vec<Validation<(), NonEmptyVec<RuleConflict>>> = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let earlier = self.rules[..i]
                    .iter()
                    .find(|other| other.from == rule.from && other.on == rule.on);

                match earlier {
                    Some(first) => Validation::fail(RuleConflict {
                        state: rule.from.name().to_string(),
                        event: rule.on.name().to_string(),
                        first: first.arm,
                        duplicate: rule.arm,
                    }),
                    None => Validation::success(()),
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<S: State + 'static, E: Event + 'static> Default for Overloaded<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> Transition<S, E> for Overloaded<S, E> {
    fn transition(&self, state: &S, event: &E) -> Option<S> {
        self.arms.iter().find_map(|arm| arm(state, event))
    }
}

impl<S: State, E: Event> fmt::Debug for Overloaded<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overloaded")
            .field("arms", &self.arms.len())
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Merge closures into one [`Overloaded`] transition function.
///
/// ```
/// use sumstate::core::Transition;
/// use sumstate::overloaded;
///
/// # #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
/// # struct Counter(u8);
/// # impl sumstate::core::State for Counter {
/// #     fn name(&self) -> &str { "Counter" }
/// # }
/// # #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
/// # struct Tick;
/// # impl sumstate::core::Event for Tick {
/// #     fn name(&self) -> &str { "Tick" }
/// # }
/// let counter = overloaded![|c: &Counter, _: &Tick| (c.0 < 3).then(|| Counter(c.0 + 1))];
///
/// assert_eq!(counter.transition(&Counter(0), &Tick), Some(Counter(1)));
/// assert_eq!(counter.transition(&Counter(3), &Tick), None);
/// ```
#[macro_export]
macro_rules! overloaded {
    ($($arm:expr),* $(,)?) => {
        $crate::overload::Overloaded::new()$(.arm($arm))*
    };
}
