//! Core state machine vocabulary.
//!
//! This module contains the leaf types everything else builds on:
//! - State definitions via the `State` trait
//! - The `Event` routing-key marker trait
//! - Guard predicates and transition actions in their recognized shapes
//!
//! Nothing here performs dispatch; guards and actions are inert values
//! until a table row carries them into the machine.

mod action;
mod event;
mod guard;
mod state;

pub use action::Action;
pub use event::Event;
pub use guard::Guard;
pub use state::State;
