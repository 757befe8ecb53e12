//! The transition table and its per-event-type dispatch index.

use crate::core::{Event, State};
use crate::table::row::Row;
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Handler invoked when no row fires for an event of type `E`.
///
/// Receives the host context, the event, and the current state, and
/// returns the state the machine should adopt.
pub type NoTransitionFn<S, C, E> = Box<dyn Fn(&mut C, &E, &S) -> S>;

/// The complete, fixed, ordered set of transition rows for one host.
///
/// Rows are grouped by event type when they are added: each distinct
/// event type gets its own bucket holding that type's rows in
/// declaration order. Dispatch for an event of type `E` therefore only
/// ever scans the rows that mention `E`; rows for other event types
/// cost nothing at runtime. This is the construction-time equivalent of
/// filtering the row list by event type, and like that filter it is
/// stable: bucket order is exactly declaration order.
///
/// The table also records the optional per-event-type no-transition
/// handlers consulted when a scan finds no winning row.
pub struct TransitionTable<S: State, C: 'static> {
    buckets: HashMap<TypeId, Box<dyn Any>>,
    no_transition: HashMap<TypeId, Box<dyn Any>>,
    rows: usize,
    _marker: std::marker::PhantomData<(S, fn(&mut C))>,
}

impl<S: State, C: 'static> TransitionTable<S, C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            no_transition: HashMap::new(),
            rows: 0,
            _marker: std::marker::PhantomData,
        }
    }

    /// Append a row to its event type's bucket, preserving declaration
    /// order within the bucket.
    pub fn add<E: Event>(&mut self, row: Row<S, C, E>) {
        let bucket = self
            .buckets
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Vec::<Row<S, C, E>>::new()));
        if let Some(rows) = bucket.downcast_mut::<Vec<Row<S, C, E>>>() {
            rows.push(row);
            self.rows += 1;
        }
    }

    /// The ordered rows declared for event type `E`. Empty when the
    /// table never mentions `E`.
    pub fn rows<E: Event>(&self) -> &[Row<S, C, E>] {
        self.buckets
            .get(&TypeId::of::<E>())
            .and_then(|b| b.downcast_ref::<Vec<Row<S, C, E>>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Register the no-transition handler for event type `E`, replacing
    /// any previous one.
    pub fn set_no_transition<E, F>(&mut self, handler: F)
    where
        E: Event,
        F: Fn(&mut C, &E, &S) -> S + 'static,
    {
        let boxed: NoTransitionFn<S, C, E> = Box::new(handler);
        self.no_transition.insert(TypeId::of::<E>(), Box::new(boxed));
    }

    /// The no-transition handler registered for `E`, if any.
    pub fn no_transition_handler<E: Event>(&self) -> Option<&NoTransitionFn<S, C, E>> {
        self.no_transition
            .get(&TypeId::of::<E>())
            .and_then(|h| h.downcast_ref::<NoTransitionFn<S, C, E>>())
    }

    /// Total number of rows across all event types.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// True when no rows have been declared.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

impl<S: State, C: 'static> Default for TransitionTable<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
