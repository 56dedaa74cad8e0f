//! Test utilities for sortvis development.
//!
//! Provides a [`RecordingRenderer`] that captures every callback, helpers
//! to run a procedure synchronously into a [`StepLog`], and input
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use sortvis_algorithms::procedure_for;
use sortvis_core::{Algorithm, ArrayState, CancelToken, Renderer, Stats, Step, Value};
use sortvis_step::{execute, StepLog};

/// Run `algorithm` over `values` synchronously, capturing every event.
pub fn run_logged(algorithm: Algorithm, values: &[Value]) -> (ArrayState, StepLog) {
    let procedure = procedure_for(algorithm);
    let mut array = ArrayState::new(values.to_vec());
    let mut log = StepLog::new();
    execute(&*procedure, &mut array, &mut log).expect("unbounded log never halts");
    (array, log)
}

/// Whether `a` and `b` hold the same multiset of values.
pub fn is_permutation(a: &[Value], b: &[Value]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// How a session ended, as seen by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEnd {
    pub final_array: Vec<Value>,
    pub cancelled: bool,
}

/// A [`Renderer`] that records every callback.
///
/// Optionally requests cancellation through a [`CancelToken`] once a
/// given number of steps has been rendered, which drives the cancel
/// path deterministically from inside the playback loop.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub steps: Vec<Step>,
    pub snapshots: Vec<Vec<Value>>,
    pub stats: Vec<Stats>,
    pub end: Option<SessionEnd>,
    cancel_after: Option<(usize, CancelToken)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel via `token` as soon as `steps` steps have been rendered.
    pub fn cancelling_after(steps: usize, token: CancelToken) -> Self {
        Self {
            cancel_after: Some((steps, token)),
            ..Self::default()
        }
    }

    /// The last array snapshot handed to [`Renderer::on_step`].
    pub fn last_snapshot(&self) -> Option<&[Value]> {
        self.snapshots.last().map(Vec::as_slice)
    }

    /// Number of rendered steps matching `pred`.
    pub fn count(&self, pred: impl Fn(&Step) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(s)).count()
    }
}

impl Renderer for RecordingRenderer {
    fn on_step(&mut self, step: &Step, array: &[Value]) {
        self.steps.push(step.clone());
        self.snapshots.push(array.to_vec());
        if let Some((after, token)) = &self.cancel_after {
            if self.steps.len() >= *after {
                token.cancel();
            }
        }
    }

    fn on_stats(&mut self, stats: &Stats) {
        self.stats.push(*stats);
    }

    fn on_session_end(&mut self, final_array: &[Value], cancelled: bool) {
        self.end = Some(SessionEnd {
            final_array: final_array.to_vec(),
            cancelled,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_check() {
        assert!(is_permutation(&[3, 1, 2], &[1, 2, 3]));
        assert!(!is_permutation(&[1, 1, 2], &[1, 2, 2]));
    }

    #[test]
    fn recording_renderer_cancels_at_threshold() {
        let token = CancelToken::new();
        let mut r = RecordingRenderer::cancelling_after(2, token.clone());
        r.on_step(&Step::Compare(0, 1), &[1, 2]);
        assert!(!token.is_cancelled());
        r.on_step(&Step::Swap(0, 1), &[2, 1]);
        assert!(token.is_cancelled());
        assert_eq!(r.last_snapshot(), Some(&[2, 1][..]));
    }
}
