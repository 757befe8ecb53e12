//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::row::RowBuilder;
use crate::core::{Event, State};
use crate::machine::{ReentrancyPolicy, StateMachine};
use crate::table::{Row, TransitionTable};

/// Builder for constructing state machines with a fluent API.
///
/// Rows are appended in declaration order; that order is the tie-break
/// when several rows for the same start state and event type would
/// accept. The table is fixed once `build` runs.
pub struct StateMachineBuilder<S: State, C: 'static> {
    initial: Option<S>,
    table: TransitionTable<S, C>,
    policy: ReentrancyPolicy,
}

impl<S: State, C: 'static> StateMachineBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: TransitionTable::new(),
            policy: ReentrancyPolicy::default(),
        }
    }

    /// Set the initial state.
    ///
    /// Required by [`build`](Self::build); optional with
    /// [`build_with_default`](Self::build_with_default).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a row using a builder.
    /// Returns an error if the builder fails validation.
    pub fn row<E: Event>(mut self, builder: RowBuilder<S, C, E>) -> Result<Self, BuildError> {
        let row = builder.build()?;
        self.table.add(row);
        Ok(self)
    }

    /// Declare a pre-built row.
    pub fn add_row<E: Event>(mut self, row: Row<S, C, E>) -> Self {
        self.table.add(row);
        self
    }

    /// Override the no-transition policy for events of type `E`.
    ///
    /// The handler receives the context, the unmatched event, and the
    /// current state; the machine adopts whatever state it returns.
    /// Event types without a handler keep the current state.
    pub fn on_no_transition<E, F>(mut self, handler: F) -> Self
    where
        E: Event,
        F: Fn(&mut C, &E, &S) -> S + 'static,
    {
        self.table.set_no_transition(handler);
        self
    }

    /// Set the reentrancy policy (default: [`ReentrancyPolicy::Reject`]).
    pub fn reentrancy(mut self, policy: ReentrancyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the state machine around the given host context.
    /// Returns an error if required fields are missing.
    pub fn build(self, context: C) -> Result<StateMachine<S, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.table.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(StateMachine::with_policy(
            self.table,
            initial,
            context,
            self.policy,
        ))
    }

    /// Build, falling back to `S::default()` when no initial state was
    /// set.
    pub fn build_with_default(self, context: C) -> Result<StateMachine<S, C>, BuildError>
    where
        S: Default,
    {
        let initial = self.initial.unwrap_or_default();

        if self.table.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(StateMachine::with_policy(
            self.table,
            initial,
            context,
            self.policy,
        ))
    }
}

impl<S: State, C: 'static> Default for StateMachineBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
