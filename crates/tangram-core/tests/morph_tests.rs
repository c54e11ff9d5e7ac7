//! Morph progress stepping tests.

use tangram_core::scene::{MorphConfig, MorphState};

fn run(state: &mut MorphState, frames: usize) -> f32 {
    let mut progress = state.progress();
    for _ in 0..frames {
        progress = state.advance();
    }
    progress
}

mod stepping {
    use super::*;

    #[test]
    fn idle_does_not_move() {
        let mut state = MorphState::new(MorphConfig::default());
        assert_eq!(run(&mut state, 10), 0.0);
    }

    #[test]
    fn holding_cube_reaches_one_in_a_hundred_frames() {
        let mut state = MorphState::new(MorphConfig::default());
        state.set_toward_cube(true);
        assert!(run(&mut state, 99) < 1.0);
        assert_eq!(run(&mut state, 1), 1.0);

        // Further frames pin it there.
        assert_eq!(run(&mut state, 5), 1.0);
    }

    #[test]
    fn holding_crab_returns_to_zero() {
        let mut state = MorphState::new(MorphConfig {
            initial_progress: 0.5,
            ..MorphConfig::default()
        });
        state.set_toward_crab(true);
        assert!((run(&mut state, 10) - 0.4).abs() < 1e-4);
        assert_eq!(run(&mut state, 60), 0.0);
    }

    #[test]
    fn full_sweep_back_lands_on_zero() {
        let mut state = MorphState::new(MorphConfig::default());
        state.set_toward_cube(true);
        assert_eq!(run(&mut state, 130), 1.0);
        state.set_toward_cube(false);
        state.set_toward_crab(true);
        assert_eq!(run(&mut state, 100), 0.0);
    }

    #[test]
    fn reversing_at_the_bound_starts_moving_at_once() {
        let mut state = MorphState::new(MorphConfig::default());
        state.set_toward_cube(true);
        run(&mut state, 150);
        state.set_toward_cube(false);
        state.set_toward_crab(true);
        assert!((state.advance() - 0.99).abs() < 1e-6);
    }

    #[test]
    fn both_held_cancel_out() {
        let mut state = MorphState::new(MorphConfig {
            initial_progress: 0.3,
            ..MorphConfig::default()
        });
        state.set_toward_crab(true);
        state.set_toward_cube(true);
        assert_eq!(run(&mut state, 20), 0.3);
    }

    #[test]
    fn release_stops_progress() {
        let mut state = MorphState::new(MorphConfig::default());
        state.set_toward_cube(true);
        let held = run(&mut state, 25);
        state.set_toward_cube(false);
        assert_eq!(run(&mut state, 25), held);
    }

    #[test]
    fn progress_is_monotonic_while_held() {
        let mut state = MorphState::new(MorphConfig::default());
        state.set_toward_cube(true);
        let mut last = state.progress();
        for _ in 0..150 {
            let next = state.advance();
            assert!(next >= last);
            assert!((0.0..=1.0).contains(&next));
            last = next;
        }
    }
}

mod config {
    use super::*;

    #[test]
    fn initial_progress_is_clamped() {
        let state = MorphState::new(MorphConfig {
            initial_progress: 3.0,
            ..MorphConfig::default()
        });
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn negative_step_is_taken_as_magnitude() {
        let mut state = MorphState::new(MorphConfig {
            step: -0.25,
            initial_progress: 0.0,
        });
        state.set_toward_cube(true);
        assert_eq!(state.advance(), 0.25);
    }

    #[test]
    fn non_finite_step_falls_back_to_default() {
        for step in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut state = MorphState::new(MorphConfig {
                step,
                initial_progress: 0.0,
            });
            assert_eq!(state.step(), MorphConfig::default().step);
            state.set_toward_cube(true);
            let progress = run(&mut state, 10);
            assert!(progress.is_finite(), "step {step}: progress {progress}");
        }
    }

    #[test]
    fn non_finite_initial_progress_starts_at_zero() {
        let state = MorphState::new(MorphConfig {
            initial_progress: f32::NAN,
            ..MorphConfig::default()
        });
        assert_eq!(state.progress(), 0.0);
    }
}
