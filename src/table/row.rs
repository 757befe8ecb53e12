//! Transition rows.

use crate::core::{Action, Event, Guard, State};

/// One transition rule: start state, event type, target state, action,
/// guard.
///
/// Rows are immutable once built and totally ordered by declaration
/// within their table; when several rows share a start state and event
/// type, the first one declared whose guard accepts wins.
///
/// The event type is part of the row's Rust type, not a runtime field:
/// a `Row<S, C, Play>` can only ever be consulted for `Play` events.
pub struct Row<S: State, C, E: Event> {
    pub start: S,
    pub target: S,
    pub action: Action<C, E>,
    pub guard: Guard<C, E>,
}

impl<S: State, C, E: Event> Row<S, C, E> {
    /// Create a row with no action and no guard.
    pub fn new(start: S, target: S) -> Self {
        Self {
            start,
            target,
            action: Action::Noop,
            guard: Guard::Always,
        }
    }

    /// Check whether this row fires for the current state and event:
    /// start-state equality first, then the guard. Pure.
    pub fn accepts(&self, current: &S, ctx: &C, event: &E) -> bool {
        self.start == *current && self.guard.check(ctx, event)
    }
}
