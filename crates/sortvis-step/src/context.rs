//! Execution context passed to sort procedures.
//!
//! [`SortContext`] pairs the procedure's working [`ArrayState`] with the
//! [`StepSink`] it reports into. Every helper both performs the operation
//! on the working array and emits the matching [`Step`], so the emitted
//! sequence replayed onto a copy of the input always reproduces the
//! working array and its counters exactly.
//!
//! # Suspension points
//!
//! A paced context emits [`Event::Suspend`] after every
//! [`compare`](SortContext::compare) / [`focus`](SortContext::focus)
//! highlight and after every [`swap`](SortContext::swap) /
//! [`overwrite`](SortContext::overwrite). An unpaced context never
//! suspends; its steps are still emitted one by one.

use std::ops::Range;

use sortvis_core::{ArrayState, Step, Value};

use crate::error::Halted;
use crate::event::{Event, StepSink};

/// Working array plus step sink, handed to [`SortProcedure::sort`](crate::SortProcedure::sort).
pub struct SortContext<'a> {
    array: &'a mut ArrayState,
    sink: &'a mut dyn StepSink,
    paced: bool,
}

impl<'a> SortContext<'a> {
    /// Construct a context over `array` reporting into `sink`.
    ///
    /// Typically called by [`execute`](crate::execute), not by procedures.
    pub fn new(array: &'a mut ArrayState, sink: &'a mut dyn StepSink, paced: bool) -> Self {
        Self { array, sink, paced }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Value at `i`. Reads are free: no step, no counter.
    pub fn get(&self, i: usize) -> Value {
        self.array.get(i)
    }

    /// The whole working array.
    pub fn values(&self) -> &[Value] {
        self.array.values()
    }

    /// Whether this context emits suspension points.
    pub fn is_paced(&self) -> bool {
        self.paced
    }

    /// Emit a raw step without touching the working array.
    ///
    /// Only for visual steps; mutations must go through
    /// [`swap`](Self::swap) or [`overwrite`](Self::overwrite).
    pub fn emit(&mut self, step: Step) -> Result<(), Halted> {
        debug_assert!(!step.is_mutation(), "mutating step emitted raw: {step}");
        self.sink.send(Event::Step(step))
    }

    /// Yield to the consumer. No-op when unpaced.
    pub fn suspend(&mut self) -> Result<(), Halted> {
        if self.paced {
            self.sink.send(Event::Suspend)
        } else {
            Ok(())
        }
    }

    /// Highlight `i` and `j`, count one comparison, then suspend.
    ///
    /// The caller inspects the values after this returns and must
    /// [`release`](Self::release) the pair once it has acted.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<(), Halted> {
        self.sink.send(Event::Step(Step::highlight(i, j)))?;
        self.tally(i, j)?;
        self.suspend()
    }

    /// Count one comparison between `i` and `j` with no highlight and
    /// no suspension (tight pointer scans).
    pub fn tally(&mut self, i: usize, j: usize) -> Result<(), Halted> {
        self.array.count_comparison();
        self.sink.send(Event::Step(Step::Compare(i, j)))
    }

    /// Highlight `i` and `j` ahead of a swap, then suspend. No comparison.
    pub fn focus(&mut self, i: usize, j: usize) -> Result<(), Halted> {
        self.sink.send(Event::Step(Step::highlight(i, j)))?;
        self.suspend()
    }

    /// Clear the highlight on `i` and `j`.
    pub fn release(&mut self, i: usize, j: usize) -> Result<(), Halted> {
        self.sink.send(Event::Step(Step::unhighlight(i, j)))
    }

    /// Exchange `i` and `j`, then suspend.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), Halted> {
        self.array.swap(i, j);
        self.sink.send(Event::Step(Step::Swap(i, j)))?;
        self.suspend()
    }

    /// Store `value` at `index`, then suspend.
    pub fn overwrite(&mut self, index: usize, value: Value) -> Result<(), Halted> {
        self.array.set(index, value);
        self.sink.send(Event::Step(Step::Overwrite { index, value }))?;
        self.suspend()
    }

    /// Mark `range` as final. Empty ranges emit nothing.
    pub fn mark_sorted(&mut self, range: Range<usize>) -> Result<(), Halted> {
        if range.is_empty() {
            return Ok(());
        }
        self.sink.send(Event::Step(Step::MarkSorted(range)))
    }

    /// Mark a single index as final.
    pub fn mark(&mut self, index: usize) -> Result<(), Halted> {
        self.mark_sorted(index..index + 1)
    }

    /// Mark every index as final.
    pub fn mark_all_sorted(&mut self) -> Result<(), Halted> {
        let n = self.len();
        self.mark_sorted(0..n)
    }

    /// Run `f` inside an atomic write region.
    ///
    /// Consumers defer cancellation requested inside the region until it
    /// closes, so a stopped run never leaves a half-finished write-back.
    pub fn atomic<F>(&mut self, f: F) -> Result<(), Halted>
    where
        F: FnOnce(&mut Self) -> Result<(), Halted>,
    {
        self.sink.send(Event::BeginAtomic)?;
        f(self)?;
        self.sink.send(Event::EndAtomic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::StepLog;

    #[test]
    fn compare_highlights_counts_and_suspends() {
        let mut array = ArrayState::new(vec![2, 1]);
        let mut log = StepLog::new();
        {
            let mut ctx = SortContext::new(&mut array, &mut log, true);
            ctx.compare(0, 1).unwrap();
            ctx.release(0, 1).unwrap();
        }
        assert_eq!(
            log.events(),
            &[
                Event::Step(Step::highlight(0, 1)),
                Event::Step(Step::Compare(0, 1)),
                Event::Suspend,
                Event::Step(Step::unhighlight(0, 1)),
            ]
        );
        assert_eq!(array.counters().comparisons, 1);
    }

    #[test]
    fn unpaced_context_never_suspends() {
        let mut array = ArrayState::new(vec![2, 1, 3]);
        let mut log = StepLog::new();
        {
            let mut ctx = SortContext::new(&mut array, &mut log, false);
            ctx.compare(0, 1).unwrap();
            ctx.swap(0, 1).unwrap();
            ctx.overwrite(2, 7).unwrap();
        }
        assert_eq!(log.suspensions(), 0);
        assert_eq!(array.values(), &[1, 2, 7]);
    }

    #[test]
    fn mutations_update_working_array_and_log() {
        let mut array = ArrayState::new(vec![3, 1, 2]);
        let mut log = StepLog::new();
        {
            let mut ctx = SortContext::new(&mut array, &mut log, true);
            ctx.swap(0, 1).unwrap();
            ctx.overwrite(2, 3).unwrap();
        }
        assert_eq!(array.values(), &[1, 3, 3]);
        let replayed = log.replay(&[3, 1, 2]);
        assert_eq!(replayed, array);
    }

    #[test]
    fn empty_mark_range_emits_nothing() {
        let mut array = ArrayState::new(vec![1]);
        let mut log = StepLog::new();
        {
            let mut ctx = SortContext::new(&mut array, &mut log, true);
            ctx.mark_sorted(1..1).unwrap();
        }
        assert!(log.events().is_empty());
    }

    #[test]
    fn atomic_brackets_the_region() {
        let mut array = ArrayState::new(vec![1, 2]);
        let mut log = StepLog::new();
        {
            let mut ctx = SortContext::new(&mut array, &mut log, false);
            ctx.atomic(|ctx| ctx.overwrite(0, 2)).unwrap();
        }
        assert_eq!(
            log.events(),
            &[
                Event::BeginAtomic,
                Event::Step(Step::Overwrite { index: 0, value: 2 }),
                Event::EndAtomic,
            ]
        );
    }

    #[test]
    fn halted_sink_stops_helpers() {
        let mut array = ArrayState::new(vec![2, 1]);
        let mut log = StepLog::bounded(1);
        let mut ctx = SortContext::new(&mut array, &mut log, true);
        assert_eq!(ctx.compare(0, 1), Err(Halted));
    }
}
