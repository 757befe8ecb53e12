//! The dispatcher: a state machine instance that owns a context, a
//! current state, and a fixed transition table.

use crate::core::{Event, State};
use crate::machine::error::DispatchError;
use crate::table::TransitionTable;
use std::any::type_name;
use std::cell::{Cell, Ref, RefCell, RefMut};

/// What a machine does when `process_event` is invoked while a dispatch
/// on the same instance is still in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReentrancyPolicy {
    /// Detect the nested call and return
    /// [`DispatchError::ReentrantDispatch`] to it, leaving both the
    /// state and the outer dispatch untouched.
    #[default]
    Reject,
    /// Skip the check. A nested dispatch is then out of contract; it
    /// panics on the context borrow instead of returning an error.
    Unchecked,
}

/// RAII flag for the dispatch-in-progress check, cleared on every exit
/// path including panics.
struct DispatchLock<'a>(&'a Cell<bool>);

impl<'a> DispatchLock<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for DispatchLock<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A state machine instance.
///
/// Owns one current-state value, the host context actions and guards
/// operate on, and the transition table fixed at construction. The
/// machine is synchronous and single-threaded by contract: every
/// `process_event` call runs to completion before returning, and calls
/// must be serialized by the caller.
///
/// Interior mutability keeps [`process_event`](StateMachine::process_event)
/// at `&self`, so a machine can be shared behind `Rc` and handed to its
/// own actions; a nested dispatch is then a detectable runtime
/// condition governed by [`ReentrancyPolicy`] rather than something the
/// borrow checker rules out.
pub struct StateMachine<S: State, C: 'static> {
    table: TransitionTable<S, C>,
    context: RefCell<C>,
    current: RefCell<S>,
    dispatching: Cell<bool>,
    policy: ReentrancyPolicy,
}

impl<S: State, C: 'static> StateMachine<S, C> {
    /// Create a machine with the default [`ReentrancyPolicy::Reject`].
    pub fn new(table: TransitionTable<S, C>, initial: S, context: C) -> Self {
        Self::with_policy(table, initial, context, ReentrancyPolicy::default())
    }

    /// Create a machine with an explicit reentrancy policy.
    pub fn with_policy(
        table: TransitionTable<S, C>,
        initial: S,
        context: C,
        policy: ReentrancyPolicy,
    ) -> Self {
        Self {
            table,
            context: RefCell::new(context),
            current: RefCell::new(initial),
            dispatching: Cell::new(false),
            policy,
        }
    }

    /// Process one event.
    ///
    /// Scans the rows declared for `E` in declaration order. The first
    /// row whose start state equals the current state and whose guard
    /// accepts wins: its action runs, then the machine adopts its
    /// target state and the scan stops. If no row wins, the
    /// no-transition handler registered for `E` decides the next state
    /// (default: stay put).
    ///
    /// At most one action runs per call, and the state is updated only
    /// after that action returns. Returns the settled state.
    ///
    /// # Errors
    ///
    /// [`DispatchError::ReentrantDispatch`] if this machine is already
    /// processing an event and the policy is [`ReentrancyPolicy::Reject`].
    /// The error is returned to the nested caller before any state is
    /// read or written; the outer dispatch is unaffected.
    pub fn process_event<E: Event>(&self, event: &E) -> Result<S, DispatchError> {
        if self.dispatching.get() && self.policy == ReentrancyPolicy::Reject {
            return Err(DispatchError::ReentrantDispatch);
        }
        let _lock = DispatchLock::acquire(&self.dispatching);
        Ok(self.dispatch(event))
    }

    fn dispatch<E: Event>(&self, event: &E) -> S {
        let current = self.current.borrow().clone();

        {
            let mut ctx = self.context.borrow_mut();
            for row in self.table.rows::<E>() {
                if row.accepts(&current, &ctx, event) {
                    row.action.run(&mut ctx, event);
                    drop(ctx);
                    let next = row.target.clone();
                    log::debug!(
                        "{} -> {} on {}",
                        current.name(),
                        next.name(),
                        type_name::<E>()
                    );
                    self.current.replace(next.clone());
                    return next;
                }
            }
        }

        match self.table.no_transition_handler::<E>() {
            Some(handler) => {
                let next = handler(&mut self.context.borrow_mut(), event, &current);
                log::debug!(
                    "no transition from {} on {}, handler chose {}",
                    current.name(),
                    type_name::<E>(),
                    next.name()
                );
                self.current.replace(next.clone());
                next
            }
            None => {
                log::trace!(
                    "no transition from {} on {}, staying put",
                    current.name(),
                    type_name::<E>()
                );
                current
            }
        }
    }

    /// The state most recently settled by a dispatch. Pure accessor.
    pub fn current_state(&self) -> S {
        self.current.borrow().clone()
    }

    /// True when the current state is final.
    pub fn is_final(&self) -> bool {
        self.current.borrow().is_final()
    }

    /// Shared access to the host context.
    ///
    /// # Panics
    ///
    /// Panics if called while an action on this machine holds the
    /// context mutably (i.e. from inside a dispatch).
    pub fn context(&self) -> Ref<'_, C> {
        self.context.borrow()
    }

    /// Exclusive access to the host context, for seeding host fields
    /// between dispatches.
    ///
    /// # Panics
    ///
    /// Panics if called while a dispatch on this machine is in
    /// progress.
    pub fn context_mut(&self) -> RefMut<'_, C> {
        self.context.borrow_mut()
    }

    /// Consume the machine, returning the host context.
    pub fn into_context(self) -> C {
        self.context.into_inner()
    }
}
