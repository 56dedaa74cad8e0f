//! Insertion sort.
//!
//! Each element sinks left by adjacent swaps while its predecessor is
//! larger. Only comparisons that lead to a shift are counted, highlighted
//! and paced; the test that stops a sink is a plain read, so a sorted
//! input costs no comparisons and never suspends. The whole array is
//! marked at once when the last pass completes.

use sortvis_step::{Halted, SortContext, SortProcedure};

/// Adjacent-swap insertion sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl SortProcedure for InsertionSort {
    fn name(&self) -> &str {
        "insertion"
    }

    fn sort(&self, ctx: &mut SortContext<'_>) -> Result<(), Halted> {
        for i in 1..ctx.len() {
            let mut j = i;
            while j > 0 && ctx.get(j) < ctx.get(j - 1) {
                ctx.compare(j, j - 1)?;
                ctx.swap(j, j - 1)?;
                ctx.release(j, j - 1)?;
                j -= 1;
            }
        }
        ctx.mark_all_sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run;
    use sortvis_core::Step;

    #[test]
    fn reversed_input_costs_one_swap_per_inversion() {
        let (array, _) = run(&InsertionSort, &[4, 3, 2, 1]);
        assert_eq!(array.values(), &[1, 2, 3, 4]);
        assert_eq!(array.counters().swaps, 6);
        assert_eq!(array.counters().comparisons, 6);
    }

    #[test]
    fn sorted_input_costs_nothing() {
        let (array, log) = run(&InsertionSort, &[1, 2, 3, 4, 5]);
        assert_eq!(array.counters().comparisons, 0);
        assert_eq!(array.counters().swaps, 0);
        assert_eq!(log.suspensions(), 0);
        assert_eq!(log.steps().collect::<Vec<_>>(), vec![&Step::MarkSorted(0..5)]);
    }

    #[test]
    fn only_shifting_comparisons_are_counted() {
        let (array, log) = run(&InsertionSort, &[1, 3, 2]);
        assert_eq!(array.values(), &[1, 2, 3]);
        assert_eq!(array.counters().comparisons, 1);
        assert_eq!(array.counters().swaps, 1);
        assert_eq!(
            log.steps().filter(|s| matches!(s, Step::Highlight(_))).count(),
            1
        );
        // One pause after the highlight, one after the swap.
        assert_eq!(log.suspensions(), 2);
    }

    #[test]
    fn marks_only_at_the_end() {
        let (_, log) = run(&InsertionSort, &[2, 1, 3]);
        let marks: Vec<_> = log
            .steps()
            .filter(|s| matches!(s, Step::MarkSorted(_)))
            .collect();
        assert_eq!(marks, vec![&Step::MarkSorted(0..3)]);
        assert_eq!(log.steps().last(), Some(&Step::MarkSorted(0..3)));
    }

    #[test]
    fn equal_neighbours_do_not_move() {
        let (array, _) = run(&InsertionSort, &[2, 2, 2]);
        assert_eq!(array.counters().swaps, 0);
    }
}
