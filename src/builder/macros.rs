//! Macros for declaring closed sum types of states and events.
//!
//! Each variant wraps a zero-sized tag struct of the same name, so the
//! generated enum is a tagged union whose alternatives are real types.
//! Per-state handlers can then be written as trait impls on the tags.

/// Generate a tagged-union state enum and its `State` implementation.
///
/// For every variant a unit struct of the same name is declared, along
/// with `From<Tag>` for the enum.
///
/// # Example
///
/// ```
/// use sumstate::core::State;
/// use sumstate::state_union;
///
/// state_union! {
///     pub enum Valve {
///         Open,
///         Closed,
///         Sealed,
///     }
///     final: [Sealed]
/// }
///
/// let state: Valve = Open.into();
/// assert_eq!(state, Valve::Open(Open));
/// assert_eq!(state.name(), "Open");
/// assert!(Valve::Sealed(Sealed).is_final());
/// ```
#[macro_export]
macro_rules! state_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $crate::__tagged_union! {
            $(#[$meta])*
            $vis enum $name {
                $($(#[$variant_meta])* $variant),*
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant(_) => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final(_) => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate a tagged-union event enum and its `Event` implementation.
///
/// # Example
///
/// ```
/// use sumstate::core::Event;
/// use sumstate::event_union;
///
/// event_union! {
///     pub enum ValveCommand {
///         Turn,
///         Weld,
///     }
/// }
///
/// assert_eq!(ValveCommand::from(Weld).name(), "Weld");
/// ```
#[macro_export]
macro_rules! event_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__tagged_union! {
            $(#[$meta])*
            $vis enum $name {
                $($(#[$variant_meta])* $variant),*
            }
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant(_) => stringify!($variant)),*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),*
        }
    ) => {
        $(
            $(#[$variant_meta])*
            #[derive(
                Clone, Copy, PartialEq, Eq, Hash, Debug, Default,
                $crate::__private::serde::Serialize, $crate::__private::serde::Deserialize,
            )]
            #[serde(crate = "sumstate::__private::serde")]
            $vis struct $variant;

            impl From<$variant> for $name {
                fn from(tag: $variant) -> Self {
                    $name::$variant(tag)
                }
            }
        )*

        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            $crate::__private::serde::Serialize, $crate::__private::serde::Deserialize,
        )]
        #[serde(crate = "sumstate::__private::serde")]
        $vis enum $name {
            $($variant($variant)),*
        }
    };
}
