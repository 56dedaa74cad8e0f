//! The renderer boundary.
//!
//! A [`Renderer`] is the external collaborator that turns consumed steps
//! into pixels (or text, or nothing). The playback controller is the only
//! caller; renderers never see the producer's working array, only the
//! consumer-side snapshot after each step has been applied.

use crate::array::Value;
use crate::stats::Stats;
use crate::step::Step;

/// Receives step events and stats snapshots from a running session.
///
/// All callbacks run on the thread driving playback, between two
/// suspension points. A renderer that wants to stop the run holds a
/// clone of the session's [`CancelToken`](crate::CancelToken).
pub trait Renderer {
    /// Called once per consumed step, after it has been applied.
    ///
    /// `array` is the full array as it stands after the step.
    fn on_step(&mut self, step: &Step, array: &[Value]);

    /// Called whenever comparisons, swaps, or elapsed time change.
    ///
    /// Default: ignore.
    fn on_stats(&mut self, stats: &Stats) {
        let _ = stats;
    }

    /// Called exactly once when the session stops running.
    ///
    /// Default: ignore.
    fn on_session_end(&mut self, final_array: &[Value], cancelled: bool) {
        let _ = (final_array, cancelled);
    }
}

/// A renderer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_step(&mut self, _step: &Step, _array: &[Value]) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_step(&mut self, step: &Step, array: &[Value]) {
        (**self).on_step(step, array);
    }

    fn on_stats(&mut self, stats: &Stats) {
        (**self).on_stats(stats);
    }

    fn on_session_end(&mut self, final_array: &[Value], cancelled: bool) {
        (**self).on_session_end(final_array, cancelled);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn on_step(&mut self, step: &Step, array: &[Value]) {
        (**self).on_step(step, array);
    }

    fn on_stats(&mut self, stats: &Stats) {
        (**self).on_stats(stats);
    }

    fn on_session_end(&mut self, final_array: &[Value], cancelled: bool) {
        (**self).on_session_end(final_array, cancelled);
    }
}
