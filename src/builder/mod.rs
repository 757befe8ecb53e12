//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring
//! transition tables with minimal boilerplate while keeping every
//! callable shape checked at compile time.

pub mod error;
pub mod machine;
pub mod macros;
pub mod row;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use row::RowBuilder;

use crate::core::{Event, State};

/// Start a row declaration for one transition.
///
/// Shorthand for `RowBuilder::new().from(from).to(to)`. The event type
/// is inferred from an attached action or guard closure, or named with
/// a turbofish for rows that carry neither:
///
/// ```
/// use rowfsm::builder::row;
/// use rowfsm::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// struct Switch;
///
/// let builder = row::<_, (), Switch>(Light::Red, Light::Green);
/// assert!(builder.build().is_ok());
/// ```
pub fn row<S: State, C, E: Event>(from: S, to: S) -> RowBuilder<S, C, E> {
    RowBuilder::new().from(from).to(to)
}
