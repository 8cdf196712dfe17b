//! Property-based invariant tests for the runtime primitives.
//!
//! 1. Delayed messages are delivered in (deadline, schedule order)
//! 2. Time advanced in pieces delivers the same messages as one jump
//! 3. Observable version counts exactly the value-changing sets
//! 4. Retry delays are monotone and capped
//! 5. The scroll spring stays within its range

use std::time::Duration;

use folio_runtime::{BackoffStrategy, Cmd, Frame, Model, Observable, RetryPolicy, Spring, StepProgram};
use proptest::prelude::*;

#[derive(Default)]
struct Sink {
    delivered: Vec<(u64, usize)>,
}

enum Msg {
    Schedule(u64, usize),
    Deliver(u64, usize),
}

impl Model for Sink {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Schedule(ms, idx) => Cmd::delay(Duration::from_millis(ms), Msg::Deliver(ms, idx)),
            Msg::Deliver(ms, idx) => {
                self.delivered.push((ms, idx));
                Cmd::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        frame.text(&self.delivered.len().to_string());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Delivery order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delays_deliver_in_deadline_then_schedule_order(delays in prop::collection::vec(0u64..500, 0..32)) {
        let mut program = StepProgram::new(Sink::default());
        for (idx, ms) in delays.iter().enumerate() {
            program.push(Msg::Schedule(*ms, idx));
        }
        program.step();
        program.advance_time(Duration::from_millis(500));
        program.step();

        let mut expected: Vec<(u64, usize)> = delays.iter().copied().zip(0..).collect();
        expected.sort();
        prop_assert_eq!(&program.model().delivered, &expected);
        prop_assert_eq!(program.pending_delays(), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Advancing in pieces
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn piecewise_advance_matches_single_jump(
        delays in prop::collection::vec(1u64..300, 1..16),
        pieces in prop::collection::vec(1u64..50, 1..20),
    ) {
        let total: u64 = pieces.iter().sum();

        let mut jump = StepProgram::new(Sink::default());
        let mut piecewise = StepProgram::new(Sink::default());
        for (idx, ms) in delays.iter().enumerate() {
            jump.push(Msg::Schedule(*ms, idx));
            piecewise.push(Msg::Schedule(*ms, idx));
        }
        jump.step();
        piecewise.step();

        jump.advance_time(Duration::from_millis(total));
        jump.step();
        for piece in &pieces {
            piecewise.advance_time(Duration::from_millis(*piece));
            piecewise.step();
        }

        prop_assert_eq!(&jump.model().delivered, &piecewise.model().delivered);
        prop_assert_eq!(jump.now(), piecewise.now());
        prop_assert_eq!(jump.pending_delays(), piecewise.pending_delays());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Observable versioning
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn observable_version_counts_changes(values in prop::collection::vec(0u8..4, 0..64)) {
        let obs = Observable::new(0u8);
        let mut expected = 0u64;
        let mut current = 0u8;
        for v in values {
            if v != current {
                expected += 1;
                current = v;
            }
            obs.set(v);
        }
        prop_assert_eq!(obs.version(), expected);
        prop_assert_eq!(obs.get(), current);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Retry delays
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn backoff_is_monotone_and_capped(base in 1u64..1000, cap in 1u64..60_000, attempts in 1u32..40) {
        for backoff in [
            BackoffStrategy::Exponential { base_ms: base, max_ms: cap },
            BackoffStrategy::Linear { base_ms: base, max_ms: cap },
        ] {
            let policy = RetryPolicy::new(attempts, backoff);
            let mut previous = Duration::ZERO;
            for attempt in 0..attempts {
                let delay = policy.delay(attempt);
                prop_assert!(delay >= previous);
                prop_assert!(delay <= Duration::from_millis(cap));
                previous = delay;
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Scroll spring range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_spring_stays_in_unit_range(
        targets in prop::collection::vec(0.0f64..=1.0, 1..10),
        frame_ms in 1u64..100,
    ) {
        let mut spring = Spring::scroll_progress();
        for target in targets {
            spring.set_target(target);
            for _ in 0..30 {
                spring.advance(Duration::from_millis(frame_ms));
                prop_assert!(spring.position() >= -1e-6);
                prop_assert!(spring.position() <= 1.0 + 1e-6);
            }
        }
    }
}
