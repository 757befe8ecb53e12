//! Rowfsm: a table-driven finite state machine library.
//!
//! A host declares an ordered table of transition rows — start state,
//! event type, target state, optional action, optional guard — and the
//! library resolves incoming events against it: rows are grouped by
//! event type when the table is built, dispatch scans only the rows for
//! the event's type in declaration order, and the first row whose start
//! state and guard match wins. No winning row means the per-event-type
//! no-transition policy decides (default: stay put).
//!
//! # Core Concepts
//!
//! - **State**: equality-comparable state values via the [`core::State`] trait
//! - **Events**: plain Rust types used as compile-time routing keys
//! - **Rows**: immutable transition rules, first-match-wins in declaration order
//! - **Guards/Actions**: callables in one of four shapes (nullary, over the
//!   host, over the event, over both), normalized behind one invocation
//!   contract when the row is declared
//!
//! # Example
//!
//! ```rust
//! use rowfsm::builder::{row, StateMachineBuilder};
//! use rowfsm::state_enum;
//!
//! state_enum! {
//!     enum Drawer {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Tray {
//!     cycles: u32,
//! }
//!
//! struct Push;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let machine = StateMachineBuilder::new()
//!     .initial(Drawer::Closed)
//!     .row(row::<_, _, Push>(Drawer::Closed, Drawer::Open)
//!         .action_on_host(|t: &mut Tray| t.cycles += 1))?
//!     .row(row::<_, _, Push>(Drawer::Open, Drawer::Closed))?
//!     .build(Tray::default())?;
//!
//! machine.process_event(&Push)?;
//! assert_eq!(machine.current_state(), Drawer::Open);
//! assert_eq!(machine.context().cycles, 1);
//!
//! machine.process_event(&Push)?;
//! assert_eq!(machine.current_state(), Drawer::Closed);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, RowBuilder, StateMachineBuilder};
pub use core::{Action, Event, Guard, State};
pub use machine::{DispatchError, ReentrancyPolicy, StateMachine};
pub use table::{Row, TransitionTable};
