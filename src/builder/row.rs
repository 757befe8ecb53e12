//! Builder for transition rows.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, Guard, State};
use crate::table::Row;

/// Fluent builder for a single transition row.
///
/// The action and guard setters name the callable shape explicitly, one
/// setter per recognized shape, so a callable can never match more than
/// one shape: the compiler checks the signature against the setter
/// chosen. Both action and guard are optional; an absent action is a
/// no-op and an absent guard always accepts.
pub struct RowBuilder<S: State, C, E: Event> {
    from: Option<S>,
    to: Option<S>,
    action: Action<C, E>,
    guard: Guard<C, E>,
}

impl<S: State, C, E: Event> RowBuilder<S, C, E> {
    /// Create a new row builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            action: Action::Noop,
            guard: Guard::Always,
        }
    }

    /// Set the start state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Action over `(context, event)`. Host methods of the form
    /// `fn store(&mut self, e: &E)` coerce here as `Host::store`.
    pub fn action<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &E) + 'static,
    {
        self.action = Action::both(f);
        self
    }

    /// Action over the host context only.
    pub fn action_on_host<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C) + 'static,
    {
        self.action = Action::host(f);
        self
    }

    /// Action over the event payload only.
    pub fn action_on_event<F>(mut self, f: F) -> Self
    where
        F: Fn(&E) + 'static,
    {
        self.action = Action::event(f);
        self
    }

    /// Action taking no arguments.
    pub fn action_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.action = Action::nullary(f);
        self
    }

    /// Guard over `(context, event)`.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + 'static,
    {
        self.guard = Guard::both(predicate);
        self
    }

    /// Guard over the host context only.
    pub fn when_host<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.guard = Guard::host(predicate);
        self
    }

    /// Guard over the event payload only.
    pub fn when_event<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + 'static,
    {
        self.guard = Guard::event(predicate);
        self
    }

    /// Guard taking no arguments.
    pub fn when_fn<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.guard = Guard::nullary(predicate);
        self
    }

    /// Build the row.
    pub fn build(self) -> Result<Row<S, C, E>, BuildError> {
        let start = self.from.ok_or(BuildError::MissingFromState)?;
        let target = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Row {
            start,
            target,
            action: self.action,
            guard: self.guard,
        })
    }
}

impl<S: State, C, E: Event> Default for RowBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
