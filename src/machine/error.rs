//! Dispatch errors.

use thiserror::Error;

/// Errors surfaced by `process_event`.
///
/// A missing transition is *not* an error; it is resolved by the
/// no-transition policy. The only runtime failure the dispatcher itself
/// can report is the reentrancy logic error.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// `process_event` was invoked, directly or through an action, while
    /// a dispatch on the same machine instance was still in progress.
    #[error("process_event called recursively on the same machine instance")]
    ReentrantDispatch,
}
