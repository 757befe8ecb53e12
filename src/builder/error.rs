//! Build errors for state machine and row builders.

use thiserror::Error;

/// Errors that can occur when building state machines and rows.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No rows defined. Add at least one transition row")]
    NoTransitions,

    #[error("Row start state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Row target state not specified. Call .to(state)")]
    MissingToState,
}
