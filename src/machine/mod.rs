//! The runtime dispatcher.
//!
//! A [`StateMachine`] pairs a fixed [`crate::table::TransitionTable`]
//! with one current-state value and a host context, and resolves events
//! against them: first matching row wins, no match falls back to the
//! no-transition policy, and nested dispatch on one instance is a
//! detected logic error.

mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use error::DispatchError;
pub use machine::{ReentrancyPolicy, StateMachine};
