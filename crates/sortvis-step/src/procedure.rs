//! The [`SortProcedure`] trait and the [`execute`] entry point.

use sortvis_core::ArrayState;

use crate::context::SortContext;
use crate::error::Halted;
use crate::event::StepSink;

/// A sorting strategy that reports every operation as it goes.
///
/// # Contract
///
/// - `sort()` leaves the context's array in ascending order.
/// - `sort()` is deterministic: same input, same event sequence.
/// - Every index is covered by some `MarkSorted` step before returning.
/// - `&self`: procedures are stateless; all state lives in the context.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores procedures as
/// `Box<dyn SortProcedure>` and moves them onto a producer thread.
///
/// # Examples
///
/// ```
/// use sortvis_core::ArrayState;
/// use sortvis_step::{execute, Halted, SortContext, SortProcedure, StepLog};
///
/// /// Sorts arrays of length two and nothing longer.
/// struct PairSort;
///
/// impl SortProcedure for PairSort {
///     fn name(&self) -> &str { "pair" }
///
///     fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
///         ctx.compare(0, 1)?;
///         if ctx.get(0) > ctx.get(1) {
///             ctx.swap(0, 1)?;
///         }
///         ctx.release(0, 1)?;
///         ctx.mark_all_sorted()
///     }
/// }
///
/// let mut array = ArrayState::new(vec![9, 4]);
/// let mut log = StepLog::new();
/// execute(&PairSort, &mut array, &mut log).unwrap();
/// assert_eq!(array.values(), &[4, 9]);
/// assert_eq!(log.suspensions(), 2);
/// ```
pub trait SortProcedure: Send + Sync + 'static {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Whether the procedure yields for pacing.
    ///
    /// Unpaced procedures run to completion between two pulls of the
    /// consumer and therefore cannot be cancelled part-way.
    ///
    /// Default: `true`.
    fn paced(&self) -> bool {
        true
    }

    /// Sort the context's array, reporting every operation.
    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted>;
}

/// Run `procedure` over `array`, reporting into `sink`.
///
/// An empty array is a no-op: nothing is emitted and the procedure is
/// never invoked, so procedures may assume `len() >= 1`.
pub fn execute(
    procedure: &dyn SortProcedure,
    array: &mut ArrayState,
    sink: &mut dyn StepSink,
) -> Result<(), Halted> {
    if array.is_empty() {
        return Ok(());
    }
    let paced = procedure.paced();
    let mut ctx = SortContext::new(array, sink, paced);
    procedure.sort(&mut ctx)
}
