//! Property-based tests for the dispatcher.
//!
//! These tests use proptest to verify dispatch properties hold across
//! many randomly generated event sequences, using the even/odd parity
//! machine as the host.

use proptest::prelude::*;
use rowfsm::builder::{row, StateMachineBuilder};
use rowfsm::state_enum;
use rowfsm::{BuildError, StateMachine};

state_enum! {
    enum Parity {
        Init,
        Even,
        Odd,
    }
}

fn is_even(e: &i32) -> bool {
    e % 2 == 0
}

fn try_parity() -> Result<StateMachine<Parity, ()>, BuildError> {
    use Parity::*;

    // Every state routes even events to Even; the unguarded rows are
    // the odd fallbacks, relying on first-match-wins.
    StateMachineBuilder::new()
        .initial(Init)
        .row(row(Init, Even).when_event(is_even))?
        .row(row::<_, _, i32>(Init, Odd))?
        .row(row(Even, Even).when_event(is_even))?
        .row(row::<_, _, i32>(Even, Odd))?
        .row(row(Odd, Even).when_event(is_even))?
        .row(row::<_, _, i32>(Odd, Odd))?
        .build(())
}

fn parity() -> StateMachine<Parity, ()> {
    try_parity().expect("parity table is well-formed")
}

struct Noise;

#[test]
fn parity_machine_walkthrough() {
    let m = parity();
    m.process_event(&0).unwrap();
    assert_eq!(m.current_state(), Parity::Even);
    m.process_event(&0).unwrap();
    assert_eq!(m.current_state(), Parity::Even);
    m.process_event(&1).unwrap();
    assert_eq!(m.current_state(), Parity::Odd);
    m.process_event(&0).unwrap();
    assert_eq!(m.current_state(), Parity::Even);
}

proptest! {
    #[test]
    fn final_state_tracks_last_event(events in prop::collection::vec(any::<i32>(), 1..32)) {
        let m = parity();
        for e in &events {
            m.process_event(e).unwrap();
        }

        let expected = if is_even(events.last().unwrap()) {
            Parity::Even
        } else {
            Parity::Odd
        };
        prop_assert_eq!(m.current_state(), expected);
    }

    #[test]
    fn replaying_a_sequence_is_deterministic(events in prop::collection::vec(any::<i32>(), 0..32)) {
        let a = parity();
        let b = parity();

        for e in &events {
            let next_a = a.process_event(e).unwrap();
            let next_b = b.process_event(e).unwrap();
            prop_assert_eq!(next_a, next_b);
        }
        prop_assert_eq!(a.current_state(), b.current_state());
    }

    #[test]
    fn unmatched_event_types_never_move_the_machine(events in prop::collection::vec(any::<i32>(), 0..16)) {
        let m = parity();
        for e in &events {
            m.process_event(e).unwrap();
        }
        let settled = m.current_state();

        // Noise is mentioned by no row and has no handler
        m.process_event(&Noise).unwrap();
        prop_assert_eq!(m.current_state(), settled);
    }

    #[test]
    fn dispatch_returns_the_settled_state(e in any::<i32>()) {
        let m = parity();
        let returned = m.process_event(&e).unwrap();
        prop_assert_eq!(m.current_state(), returned);
    }
}
