//! Event marker trait.
//!
//! Events are routed to transition rows by their Rust type, decided when
//! the table is built. The values themselves carry whatever payload the
//! host wants; the dispatcher only borrows them for the duration of one
//! `process_event` call.

use std::any::Any;

/// Marker trait for event types.
///
/// Any `'static` type qualifies: unit structs, payload-carrying structs,
/// or plain primitives like `i32`. The type identity is the routing key;
/// no runtime tag is stored on the value.
pub trait Event: Any {}

impl<T: Any> Event for T {}
