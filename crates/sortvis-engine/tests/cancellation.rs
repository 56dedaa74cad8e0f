//! Cancellation: from inside the playback loop, from another thread,
//! and by dropping a pulled session.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use proptest::prelude::*;
use sortvis_algorithms::procedure_for;
use sortvis_core::{Algorithm, Step};
use sortvis_engine::{Outcome, Pacing, PlaybackConfig, PlaybackState, Player, Session};
use sortvis_test_utils::fixtures::{reversed, scrambled, PanickingSort, SlowSort};
use sortvis_test_utils::{is_permutation, RecordingRenderer};

fn cancel_after(algorithm: Algorithm, values: Vec<u32>, steps: usize) -> (Outcome, RecordingRenderer) {
    let player = Player::unpaced();
    let mut renderer = RecordingRenderer::cancelling_after(steps, player.cancel_handle());
    let outcome = player
        .start_session(algorithm, values, &mut renderer)
        .unwrap();
    (outcome, renderer)
}

fn wait_until_running(player: &Player) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while player.state() != PlaybackState::Running {
        assert!(Instant::now() < deadline, "session never started");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn cancelled_array_is_a_permutation_for_every_algorithm() {
    let input = scrambled(24);
    for algorithm in Algorithm::ALL {
        for steps in [1, 3, 10, 47, 200] {
            let (outcome, renderer) = cancel_after(algorithm, input.clone(), steps);
            let report = outcome.report().unwrap();
            assert!(
                is_permutation(&report.final_array, &input),
                "{algorithm} cancelled after {steps}: {:?}",
                report.final_array
            );
            let end = renderer.end.as_ref().unwrap();
            assert_eq!(end.final_array, report.final_array);
            if let Outcome::Cancelled(report) = &outcome {
                assert!(end.cancelled);
                // No closing mark on a cancelled run.
                assert_eq!(renderer.steps.len() as u64, report.steps_applied);
            }
        }
    }
}

#[test]
fn paced_algorithms_stop_soon_after_the_request() {
    let input = reversed(20);
    for algorithm in Algorithm::ALL {
        let paced = procedure_for(algorithm).paced();
        let (outcome, renderer) = cancel_after(algorithm, input.clone(), 5);
        if paced {
            assert!(matches!(outcome, Outcome::Cancelled(_)), "{algorithm}");
            assert!(renderer.end.as_ref().unwrap().cancelled, "{algorithm}");
        } else {
            // No suspension points: runs to completion.
            assert!(matches!(outcome, Outcome::Completed(_)), "{algorithm}");
        }
    }
}

#[test]
fn merge_cancel_waits_for_the_write_back() {
    // Step 3 of merge on [2, 1] is inside the only region.
    let (outcome, renderer) = cancel_after(Algorithm::Merge, vec![2, 1], 3);
    let report = outcome.report().unwrap();
    assert_eq!(report.final_array, vec![1, 2]);
    assert!(renderer
        .steps
        .iter()
        .any(|s| *s == Step::Overwrite { index: 1, value: 2 }));
}

#[test]
fn cancel_from_another_thread() {
    let config = PlaybackConfig::with_pacing(Pacing::Fixed(Duration::from_millis(1)));
    let player = Arc::new(Player::new(config).unwrap());
    let input = reversed(200);

    let runner = {
        let player = Arc::clone(&player);
        let input = input.clone();
        thread::spawn(move || {
            player
                .start_session(Algorithm::Bubble, input, &mut RecordingRenderer::new())
                .unwrap()
        })
    };
    wait_until_running(&player);
    thread::sleep(Duration::from_millis(10));
    player.cancel();

    let outcome = runner.join().unwrap();
    let Outcome::Cancelled(report) = outcome else {
        panic!("expected cancellation, got {outcome:?}");
    };
    assert!(is_permutation(&report.final_array, &input));
    assert_eq!(player.state(), PlaybackState::Cancelled);
}

#[test]
fn dropping_a_session_mid_run_returns_promptly() {
    let mut session = Session::with_procedure(
        Algorithm::Bubble,
        Box::new(SlowSort { rounds: 1_000_000 }),
        scrambled(64),
    )
    .unwrap();
    for _ in 0..10 {
        session.advance().unwrap();
    }
    let started = Instant::now();
    drop(session);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
#[should_panic(expected = "deliberate failure")]
fn procedure_panic_resurfaces_on_the_consumer() {
    let session =
        Session::with_procedure(Algorithm::Bubble, Box::new(PanickingSort), vec![2, 1]).unwrap();
    for _ in session {}
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cancel_at_any_step_preserves_the_multiset(
        algorithm in proptest::sample::select(Algorithm::ALL.to_vec()),
        values in proptest::collection::vec(1u32..=100, 1..30),
        steps in 1usize..400,
    ) {
        let (outcome, _) = cancel_after(algorithm, values.clone(), steps);
        let report = outcome.report().unwrap();
        prop_assert!(is_permutation(&report.final_array, &values));
        if matches!(outcome, Outcome::Completed(_)) {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&report.final_array, &sorted);
        }
    }
}
