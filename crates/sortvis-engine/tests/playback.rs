//! End-to-end playback through a recording renderer.

use std::time::Duration;

use sortvis_core::{Algorithm, ArrayState, Step};
use sortvis_engine::{Outcome, Pacing, PlaybackConfig, PlaybackState, Player};
use sortvis_test_utils::fixtures::{reversed, scrambled};
use sortvis_test_utils::{run_logged, RecordingRenderer, SessionEnd};

fn play(algorithm: Algorithm, values: Vec<u32>) -> (Outcome, RecordingRenderer) {
    let player = Player::unpaced();
    let mut renderer = RecordingRenderer::new();
    let outcome = player
        .start_session(algorithm, values, &mut renderer)
        .unwrap();
    assert_eq!(player.state(), PlaybackState::Completed);
    (outcome, renderer)
}

#[test]
fn bubble_reference_run_end_to_end() {
    let (outcome, renderer) = play(Algorithm::Bubble, vec![5, 3, 4, 1, 2]);
    let Outcome::Completed(report) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(report.final_array, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.stats.comparisons, 10);
    assert_eq!(report.stats.swaps, 8);
    assert_eq!(
        renderer.end,
        Some(SessionEnd {
            final_array: vec![1, 2, 3, 4, 5],
            cancelled: false,
        })
    );
}

#[test]
fn every_algorithm_completes_and_marks_everything_last() {
    let input = scrambled(40);
    for algorithm in Algorithm::ALL {
        let (outcome, renderer) = play(algorithm, input.clone());
        let report = outcome.report().unwrap();
        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(report.final_array, expected, "{algorithm}");
        assert_eq!(
            renderer.steps.last(),
            Some(&Step::MarkSorted(0..input.len())),
            "{algorithm}"
        );
    }
}

#[test]
fn rendered_steps_match_a_synchronous_run() {
    let input = reversed(16);
    for algorithm in Algorithm::ALL {
        let (outcome, renderer) = play(algorithm, input.clone());
        let (array, log) = run_logged(algorithm, &input);
        let logged: Vec<Step> = log.steps().cloned().collect();
        // The player appends one closing mark.
        assert_eq!(&renderer.steps[..logged.len()], logged.as_slice(), "{algorithm}");
        assert_eq!(renderer.steps.len(), logged.len() + 1, "{algorithm}");
        let report = outcome.report().unwrap();
        assert_eq!(report.stats.counters(), array.counters(), "{algorithm}");
        assert_eq!(report.steps_applied, logged.len() as u64, "{algorithm}");
    }
}

#[test]
fn snapshots_reflect_each_applied_step() {
    let input = vec![3, 1, 2];
    let (_, renderer) = play(Algorithm::Selection, input.clone());
    let mut array = ArrayState::new(input);
    for (step, snapshot) in renderer.steps.iter().zip(&renderer.snapshots) {
        array.apply(step);
        assert_eq!(array.values(), snapshot.as_slice());
    }
    assert_eq!(renderer.last_snapshot(), Some(&[1, 2, 3][..]));
}

#[test]
fn stats_never_decrease() {
    let (_, renderer) = play(Algorithm::QuickHoare, scrambled(30));
    assert!(renderer.stats.len() > 2);
    for pair in renderer.stats.windows(2) {
        assert!(pair[1].comparisons >= pair[0].comparisons);
        assert!(pair[1].swaps >= pair[0].swaps);
        assert!(pair[1].elapsed >= pair[0].elapsed);
    }
}

#[test]
fn pacing_sleeps_at_suspension_points() {
    let interval = Duration::from_millis(3);
    let player = Player::new(PlaybackConfig::with_pacing(Pacing::Fixed(interval))).unwrap();
    // One compare and one swap: two suspensions.
    let outcome = player
        .start_session(Algorithm::Bubble, vec![2, 1], &mut RecordingRenderer::new())
        .unwrap();
    assert!(outcome.report().unwrap().stats.elapsed >= interval * 2);
}

#[test]
fn elapsed_time_is_pushed_after_each_pause() {
    let interval = Duration::from_millis(2);
    let player = Player::new(PlaybackConfig::with_pacing(Pacing::Fixed(interval))).unwrap();
    let mut renderer = RecordingRenderer::new();
    player
        .start_session(Algorithm::Bubble, vec![2, 1], &mut renderer)
        .unwrap();
    // Start, compare, pause, swap, pause, end.
    assert_eq!(renderer.stats.len(), 6);
    let (before, after) = (renderer.stats[1], renderer.stats[2]);
    assert_eq!(after.counters(), before.counters());
    assert!(after.elapsed >= interval);
    assert!(renderer.stats[4].elapsed >= interval * 2);
}

#[test]
fn unpaced_algorithms_render_without_delay() {
    let player = Player::new(PlaybackConfig::with_pacing(Pacing::Speed(1))).unwrap();
    let outcome = player
        .start_session(Algorithm::Counting, reversed(50), &mut RecordingRenderer::new())
        .unwrap();
    // 50 suspensions at 104 ms would take seconds.
    assert!(outcome.report().unwrap().stats.elapsed < Duration::from_secs(2));
}

#[test]
fn player_can_run_again_after_completion() {
    let player = Player::unpaced();
    let mut renderer = RecordingRenderer::new();
    for algorithm in [Algorithm::Heap, Algorithm::Radix] {
        let outcome = player
            .start_session(algorithm, vec![9, 8, 7], &mut renderer)
            .unwrap();
        assert!(matches!(outcome, Outcome::Completed(_)));
    }
}
