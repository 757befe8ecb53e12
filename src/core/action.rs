//! Transition actions.
//!
//! An action is the side effect a row performs when it fires, before the
//! machine adopts the row's target state. Like guards, actions come in a
//! small closed set of shapes resolved at construction time: over the
//! host context, over the event payload, over both, over neither, or
//! absent entirely.

/// Side-effecting operation run when a transition row fires.
///
/// The dispatcher invokes every action through the uniform
/// `(context, event)` contract of [`run`](Action::run); the shape merely
/// decides which of the two arguments the underlying callable sees.
/// Host methods of the form `fn store(&mut self, e: &E)` coerce to the
/// [`Action::both`] shape as `Host::store`, methods taking no event to
/// [`Action::host`].
pub enum Action<C, E> {
    /// No action declared; the row only changes state.
    Noop,
    /// `fn()`
    Nullary(Box<dyn Fn()>),
    /// `fn(&mut C)`
    Host(Box<dyn Fn(&mut C)>),
    /// `fn(&E)`
    Event(Box<dyn Fn(&E)>),
    /// `fn(&mut C, &E)`
    Both(Box<dyn Fn(&mut C, &E)>),
}

impl<C, E> Action<C, E> {
    /// Action that ignores context and event.
    pub fn nullary<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Action::Nullary(Box::new(f))
    }

    /// Action over the host context only.
    pub fn host<F>(f: F) -> Self
    where
        F: Fn(&mut C) + 'static,
    {
        Action::Host(Box::new(f))
    }

    /// Action over the event payload only.
    pub fn event<F>(f: F) -> Self
    where
        F: Fn(&E) + 'static,
    {
        Action::Event(Box::new(f))
    }

    /// Action over both context and event.
    pub fn both<F>(f: F) -> Self
    where
        F: Fn(&mut C, &E) + 'static,
    {
        Action::Both(Box::new(f))
    }

    /// Execute the action against the uniform `(context, event)` contract.
    pub fn run(&self, ctx: &mut C, event: &E) {
        match self {
            Action::Noop => {}
            Action::Nullary(f) => f(),
            Action::Host(f) => f(ctx),
            Action::Event(f) => f(event),
            Action::Both(f) => f(ctx, event),
        }
    }
}
