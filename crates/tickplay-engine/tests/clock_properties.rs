//! Property tests for `PlaybackClock`.
//!
//! Random command/sample sequences must keep the clock inside its invariants:
//! `tick < N` (or 0 for an empty timeline) and `progress` in `[0, 1]`.
//! Integration over time must add exactly `speed * T` ticks until the end of
//! the timeline is reached.

use proptest::prelude::*;

use tickplay_engine::time::PlaybackClock;
use tickplay_engine::Command;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Play),
        Just(Command::Pause),
        Just(Command::TogglePlay),
        Just(Command::StepForward),
        Just(Command::StepBackward),
        Just(Command::SeekToStart),
        Just(Command::SeekToEnd),
        Just(Command::SpeedUp),
        Just(Command::SpeedDown),
        Just(Command::Reset),
        (-5i64..60).prop_map(Command::SeekToTick),
        (-5i64..60).prop_map(Command::SetTick),
        (-2.0f64..25.0).prop_map(Command::SetSpeed),
        (1e300f64..f64::MAX).prop_map(Command::SetSpeed),
        (-3.0f64..3.0).prop_map(Command::AdjustSpeed),
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Command(Command),
    /// Advance the timestamp by this many ms and sample.
    Sample(f64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        command().prop_map(Step::Command),
        (0.0f64..400.0).prop_map(Step::Sample),
        (0.0f64..400.0).prop_map(Step::Sample),
    ]
}

proptest! {
    #[test]
    fn prop_state_stays_in_bounds(total in 0u64..40, steps in prop::collection::vec(step(), 0..200)) {
        let mut clock = PlaybackClock::new(total);
        let mut now = 0.0;

        for step in steps {
            match step {
                Step::Command(c) => c.apply(&mut clock),
                Step::Sample(dt) => {
                    now += dt;
                    clock.sample(now);
                }
            }

            match clock.last_tick() {
                Some(last) => prop_assert!(clock.tick() <= last),
                None => prop_assert_eq!(clock.tick(), 0),
            }
            prop_assert!((0.0..=1.0).contains(&clock.progress()), "progress {}", clock.progress());
            prop_assert!(clock.speed() > 0.0);
        }
    }

    #[test]
    fn prop_integration_matches_speed_times_elapsed(
        speed in 0.5f64..20.0,
        deltas in prop::collection::vec(0.0f64..250.0, 1..100),
    ) {
        let mut clock = PlaybackClock::new(1_000_000);
        prop_assert!(clock.set_speed(speed));
        clock.play();
        let start = clock.sample(0.0).position();

        let mut now = 0.0;
        for dt in &deltas {
            now += dt;
            clock.sample(now);
        }

        let expected = start + speed * now / 1000.0;
        prop_assert!(close(clock.snapshot().position(), expected),
            "position {} expected {}", clock.snapshot().position(), expected);
        prop_assert!(clock.is_playing());
    }

    #[test]
    fn prop_last_tick_saturates(total in 1u64..100, dt in 0.001f64..10_000.0) {
        let mut clock = PlaybackClock::new(total);
        clock.seek_to_end();
        clock.play();
        clock.sample(0.0);
        let s = clock.sample(dt);

        prop_assert!(!clock.is_playing());
        prop_assert_eq!(s.tick, total - 1);
        prop_assert_eq!(s.progress, 1.0);
    }

    #[test]
    fn prop_resume_never_jumps(
        played_ms in 0.0f64..2_000.0,
        paused_ms in 0.0f64..1e9,
    ) {
        let mut clock = PlaybackClock::new(50);
        clock.play();
        clock.sample(0.0);
        let before = clock.sample(played_ms);

        clock.pause();
        clock.sample(played_ms + paused_ms / 2.0);
        clock.play();
        let after = clock.sample(played_ms + paused_ms);

        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_seek_keeps_progress(
        (total, k) in (1u64..100).prop_flat_map(|t| (Just(t), 0..t)),
        warmup in 0.0f64..300.0,
    ) {
        let mut clock = PlaybackClock::new(total);
        clock.play();
        clock.sample(0.0);
        clock.sample(warmup);
        let progress = clock.progress();

        prop_assert!(clock.seek_to_tick(k as i64));
        prop_assert_eq!(clock.tick(), k);
        prop_assert_eq!(clock.progress(), progress);
    }

    #[test]
    fn prop_keyboard_speed_clamps(start in 0.01f64..100.0) {
        let mut clock = PlaybackClock::new(1);
        clock.set_speed(start);
        clock.adjust_speed(100.0);
        prop_assert_eq!(clock.speed(), 20.0);
        clock.adjust_speed(-100.0);
        prop_assert_eq!(clock.speed(), 1.0);
    }
}
