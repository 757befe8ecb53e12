//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether a row may
//! fire for a given (context, event) pair. A guard can depend on the
//! host context, on the event payload, on both, or on nothing at all;
//! the shape is fixed when the guard is constructed, never inspected at
//! dispatch time.

/// Predicate gating whether a transition row may fire.
///
/// Exactly one of five shapes, chosen by the constructor used. An absent
/// guard is `Guard::Always`, which accepts every event. Whatever the
/// shape, the dispatcher invokes a guard through the uniform
/// [`check`](Guard::check) contract.
///
/// # Example
///
/// ```rust
/// use rowfsm::core::Guard;
///
/// struct Player {
///     autoplay: bool,
/// }
/// struct CdDetected {
///     title: String,
/// }
///
/// let bad_cd: Guard<Player, CdDetected> = Guard::event(|cd: &CdDetected| cd.title.is_empty());
/// let autoplay: Guard<Player, CdDetected> = Guard::host(|p: &Player| p.autoplay);
///
/// let player = Player { autoplay: false };
/// let cd = CdDetected { title: "louie, louie".into() };
/// assert!(!bad_cd.check(&player, &cd));
/// assert!(!autoplay.check(&player, &cd));
/// ```
pub enum Guard<C, E> {
    /// No guard declared; the row always matches when its start state does.
    Always,
    /// `fn() -> bool`
    Nullary(Box<dyn Fn() -> bool>),
    /// `fn(&C) -> bool`
    Host(Box<dyn Fn(&C) -> bool>),
    /// `fn(&E) -> bool`
    Event(Box<dyn Fn(&E) -> bool>),
    /// `fn(&C, &E) -> bool`
    Both(Box<dyn Fn(&C, &E) -> bool>),
}

impl<C, E> Guard<C, E> {
    /// Guard that ignores context and event.
    pub fn nullary<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard::Nullary(Box::new(predicate))
    }

    /// Guard over the host context only. Host methods of the form
    /// `fn is_ready(&self) -> bool` coerce here as `Host::is_ready`.
    pub fn host<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        Guard::Host(Box::new(predicate))
    }

    /// Guard over the event payload only.
    pub fn event<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + 'static,
    {
        Guard::Event(Box::new(predicate))
    }

    /// Guard over both context and event.
    pub fn both<F>(predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + 'static,
    {
        Guard::Both(Box::new(predicate))
    }

    /// Evaluate the guard against the uniform `(context, event)` contract.
    ///
    /// Pure: guards must not mutate anything.
    pub fn check(&self, ctx: &C, event: &E) -> bool {
        match self {
            Guard::Always => true,
            Guard::Nullary(f) => f(),
            Guard::Host(f) => f(ctx),
            Guard::Event(f) => f(event),
            Guard::Both(f) => f(ctx, event),
        }
    }
}
