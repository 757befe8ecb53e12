//! Transition table metamodel.
//!
//! A table is the complete, ordered set of transition rows a host
//! declares, indexed by event type at construction time so dispatch
//! never looks at rows for unrelated events.

mod map;
mod row;

pub use map::{NoTransitionFn, TransitionTable};
pub use row::Row;
