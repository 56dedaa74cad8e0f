//! The single-running-session rule.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use sortvis_core::{Algorithm, NullRenderer, Renderer, Step, Value};
use sortvis_engine::{Outcome, Pacing, PlaybackConfig, PlaybackState, Player, Rejection};
use sortvis_test_utils::fixtures::reversed;
use sortvis_test_utils::RecordingRenderer;

/// Tries to start a second session from inside the running one.
struct Reentrant<'a> {
    player: &'a Player,
    nested: Vec<Outcome>,
    after_end: Option<Outcome>,
}

impl Renderer for Reentrant<'_> {
    fn on_step(&mut self, _step: &Step, _array: &[Value]) {
        if self.nested.is_empty() {
            let outcome = self
                .player
                .start_session(Algorithm::Bubble, vec![2, 1], &mut NullRenderer)
                .unwrap();
            self.nested.push(outcome);
        }
    }

    fn on_session_end(&mut self, _final_array: &[Value], _cancelled: bool) {
        let outcome = self
            .player
            .start_session(Algorithm::Insertion, vec![3, 2, 1], &mut NullRenderer)
            .unwrap();
        self.after_end = Some(outcome);
    }
}

#[test]
fn start_from_inside_a_renderer_is_rejected() {
    let player = Player::unpaced();
    let mut renderer = Reentrant {
        player: &player,
        nested: Vec::new(),
        after_end: None,
    };
    let outcome = player
        .start_session(Algorithm::Selection, vec![3, 1, 2], &mut renderer)
        .unwrap();
    assert!(matches!(outcome, Outcome::Completed(_)));
    assert_eq!(renderer.nested, vec![Outcome::Rejected(Rejection::SessionActive)]);
}

#[test]
fn session_end_callback_may_start_the_next_session() {
    let player = Player::unpaced();
    let mut renderer = Reentrant {
        player: &player,
        nested: Vec::new(),
        after_end: None,
    };
    player
        .start_session(Algorithm::Heap, vec![2, 3, 1], &mut renderer)
        .unwrap();
    let after = renderer.after_end.expect("callback ran");
    assert_eq!(after.report().unwrap().final_array, vec![1, 2, 3]);
}

#[test]
fn start_from_another_thread_is_rejected_while_running() {
    let config = PlaybackConfig::with_pacing(Pacing::Fixed(Duration::from_millis(1)));
    let player = Arc::new(Player::new(config).unwrap());

    let runner = {
        let player = Arc::clone(&player);
        thread::spawn(move || {
            player
                .start_session(Algorithm::Bubble, reversed(150), &mut NullRenderer)
                .unwrap()
        })
    };
    let deadline = Instant::now() + Duration::from_secs(5);
    while player.state() != PlaybackState::Running {
        assert!(Instant::now() < deadline, "session never started");
        thread::sleep(Duration::from_millis(1));
    }

    let mut renderer = RecordingRenderer::new();
    let second = player
        .start_session(Algorithm::Merge, vec![2, 1], &mut renderer)
        .unwrap();
    assert_eq!(second, Outcome::Rejected(Rejection::SessionActive));
    assert!(renderer.steps.is_empty());
    assert!(renderer.end.is_none());

    player.cancel();
    assert!(matches!(runner.join().unwrap(), Outcome::Cancelled(_)));
}

#[test]
fn rejection_leaves_end_state_untouched() {
    let player = Player::unpaced();
    player
        .start_session(Algorithm::Bubble, vec![1, 2], &mut NullRenderer)
        .unwrap();
    let rejected = player
        .start_session(Algorithm::Bubble, Vec::new(), &mut NullRenderer)
        .unwrap();
    assert_eq!(rejected, Outcome::Rejected(Rejection::EmptyArray));
    assert_eq!(player.state(), PlaybackState::Completed);
}
