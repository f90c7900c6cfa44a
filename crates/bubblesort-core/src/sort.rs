//! Bubble sort over a borrowed slice.
//!
//! Every pass walks the unsorted prefix comparing adjacent pairs and swaps a
//! pair only when the earlier element is strictly greater. After pass `p` the
//! largest `p + 1` elements sit in their final positions at the end of the
//! slice, so the next pass stops one element earlier.
//!
//! All entry points funnel into [`bubble_sort_observed`]; the others only fix
//! the strategy, the predicate or the observer.

/// Counters collected during one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Completed passes over the unsorted prefix.
    pub passes: usize,
    /// Adjacent comparisons made.
    pub comparisons: usize,
    /// Adjacent exchanges made.
    pub exchanges: usize,
}

/// Pass scheduling. Both strategies produce the same output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Always run `len - 1` passes.
    #[default]
    FullPasses,
    /// Stop after the first pass that made no exchange.
    EarlyExit,
}

/// Sorts `seq` in place, ascending, running every pass.
///
/// Stable: equal elements are never exchanged.
///
/// # Example
/// ```
/// use bubblesort_core::bubble_sort;
///
/// let mut arr = [60, 7, 8, 3, 20];
/// let stats = bubble_sort(&mut arr);
/// assert_eq!(arr, [3, 7, 8, 20, 60]);
/// assert_eq!(stats.passes, 4);
/// ```
pub fn bubble_sort<T: PartialOrd>(seq: &mut [T]) -> SortStats {
    bubble_sort_with(seq, Strategy::FullPasses)
}

/// Sorts `seq` in place, ascending, with the given pass strategy.
pub fn bubble_sort_with<T: PartialOrd>(seq: &mut [T], strategy: Strategy) -> SortStats {
    bubble_sort_by(seq, strategy, |a, b| a > b)
}

/// Sorts `seq` in place using `is_greater` as the strict ordering.
///
/// `is_greater(a, b)` must return `true` only when `a` belongs after `b`;
/// returning `true` for equal elements breaks stability.
pub fn bubble_sort_by<T, G>(seq: &mut [T], strategy: Strategy, is_greater: G) -> SortStats
where
    G: FnMut(&T, &T) -> bool,
{
    bubble_sort_observed(seq, strategy, is_greater, |_, _| {})
}

/// Sorts `seq` in place, calling `after_pass(pass, seq)` after each pass.
pub fn bubble_sort_observed<T, G, F>(
    seq: &mut [T],
    strategy: Strategy,
    mut is_greater: G,
    mut after_pass: F,
) -> SortStats
where
    G: FnMut(&T, &T) -> bool,
    F: FnMut(usize, &[T]),
{
    let mut stats = SortStats::default();
    let len = seq.len();

    for pass in 0..len.saturating_sub(1) {
        let mut exchanged = false;
        // j + 1 <= len - 1 - pass, always in bounds.
        for j in 0..len - 1 - pass {
            stats.comparisons += 1;
            if is_greater(&seq[j], &seq[j + 1]) {
                seq.swap(j, j + 1);
                stats.exchanges += 1;
                exchanged = true;
            }
        }
        stats.passes += 1;
        after_pass(pass, seq);

        if strategy == Strategy::EarlyExit && !exchanged {
            break;
        }
    }

    stats
}

/// Exchange count for a strictly descending input of `len` elements.
///
/// Saturates at `usize::MAX` instead of overflowing.
pub const fn max_exchanges(len: usize) -> usize {
    let below = len.saturating_sub(1);
    // Halve whichever factor is even so the division is exact.
    if len % 2 == 0 {
        (len / 2).saturating_mul(below)
    } else {
        len.saturating_mul(below / 2)
    }
}

/// `true` when every adjacent pair is non-decreasing.
pub fn is_sorted<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reference_array() {
        let mut arr = [60, 7, 8, 3, 20];
        bubble_sort(&mut arr);
        assert_eq!(arr, [3, 7, 8, 20, 60]);
    }

    #[test]
    fn empty_needs_no_pass() {
        let mut arr: [i32; 0] = [];
        let stats = bubble_sort(&mut arr);
        assert_eq!(arr, []);
        assert_eq!(stats, SortStats::default());
    }

    #[test]
    fn single_element_unchanged() {
        let mut arr = [5];
        let stats = bubble_sort(&mut arr);
        assert_eq!(arr, [5]);
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.comparisons, 0);
    }

    #[test]
    fn duplicates_need_no_exchange() {
        let mut arr = [1, 1, 2];
        let stats = bubble_sort(&mut arr);
        assert_eq!(arr, [1, 1, 2]);
        assert_eq!(stats.exchanges, 0);
    }

    #[test]
    fn reverse_sorted_takes_max_exchanges() {
        let mut arr = [9, 7, 5, 3, 1, -1];
        let stats = bubble_sort(&mut arr);
        assert_eq!(arr, [-1, 1, 3, 5, 7, 9]);
        assert_eq!(stats.exchanges, max_exchanges(6));
        assert_eq!(stats.exchanges, 15);
    }

    #[test]
    fn full_passes_compare_every_pair_of_the_triangle() {
        let mut arr = [4, 1, 3, 2];
        let stats = bubble_sort(&mut arr);
        assert_eq!(stats.passes, 3);
        assert_eq!(stats.comparisons, 3 + 2 + 1);
    }

    #[test]
    fn early_exit_stops_on_quiet_pass() {
        let mut arr = [1, 2, 3, 4, 5];
        let stats = bubble_sort_with(&mut arr, Strategy::EarlyExit);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.comparisons, 4);

        let mut arr = [2, 1, 3, 4, 5];
        let stats = bubble_sort_with(&mut arr, Strategy::EarlyExit);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.exchanges, 1);
    }

    #[test]
    fn strategies_agree() {
        let mut full = [3, -8, 12, 0, 0, 7, -8, 41];
        let mut early = full;
        bubble_sort_with(&mut full, Strategy::FullPasses);
        bubble_sort_with(&mut early, Strategy::EarlyExit);
        assert_eq!(full, early);
    }

    #[test]
    fn largest_settles_after_each_pass() {
        let mut arr = [5, 1, 4, 2, 8, 0];
        let mut sorted = arr;
        sorted.sort_unstable();
        let len = arr.len();
        bubble_sort_observed(
            &mut arr,
            Strategy::FullPasses,
            |a, b| a > b,
            |pass, seq| {
                let settled = len - 1 - pass;
                assert_eq!(&seq[settled..], &sorted[settled..], "pass {pass}");
            },
        );
        assert_eq!(arr, sorted);
    }

    #[test]
    fn by_predicate_is_stable() {
        let mut arr = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        bubble_sort_by(&mut arr, Strategy::FullPasses, |a, b| a.0 > b.0);
        assert_eq!(arr, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn sorts_strings() {
        let mut arr = ["zebra", "apple", "banana", "cherry"];
        bubble_sort(&mut arr);
        assert_eq!(arr, ["apple", "banana", "cherry", "zebra"]);
    }

    #[test]
    fn extreme_values() {
        let mut arr = [i64::MAX, 0, i64::MIN, -1];
        bubble_sort(&mut arr);
        assert_eq!(arr, [i64::MIN, -1, 0, i64::MAX]);
    }

    #[test]
    fn is_sorted_checks_adjacent_pairs() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn max_exchanges_small_lengths() {
        assert_eq!(max_exchanges(0), 0);
        assert_eq!(max_exchanges(1), 0);
        assert_eq!(max_exchanges(2), 1);
        assert_eq!(max_exchanges(5), 10);
        assert_eq!(max_exchanges(6), 15);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn max_exchanges_large_lengths_do_not_overflow() {
        let n: usize = 1 << 32;
        assert_eq!(max_exchanges(n), (n / 2) * (n - 1));
        assert_eq!(max_exchanges(n + 1), (n + 1) * (n / 2));
        assert_eq!(max_exchanges(usize::MAX), usize::MAX);
        assert_eq!(max_exchanges(usize::MAX - 1), usize::MAX);
    }
}

// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p bubblesort-core
//
// The proofs establish, for every 4-element i32 input, that:
// - sorting never panics and yields a non-decreasing sequence
// - the output is a permutation of the input
// - both strategies produce the same output

#[cfg(kani)]
mod proofs {
    use super::*;

    fn count(seq: &[i32; 4], value: i32) -> usize {
        seq.iter().filter(|&&v| v == value).count()
    }

    /// Proof: output is sorted and a permutation of the input.
    #[kani::proof]
    #[kani::unwind(5)]
    fn sort_yields_sorted_permutation() {
        let input: [i32; 4] = kani::any();
        let mut seq = input;
        let stats = bubble_sort(&mut seq);

        kani::assert(is_sorted(&seq), "output must be non-decreasing");
        kani::assert(stats.passes == 3, "full passes run len - 1 times");
        kani::assert(
            stats.exchanges <= max_exchanges(4),
            "exchanges are bounded by the reverse-sorted case",
        );
        for value in input {
            kani::assert(
                count(&input, value) == count(&seq, value),
                "output must be a permutation of the input",
            );
        }
    }

    /// Proof: early exit never changes the result.
    #[kani::proof]
    #[kani::unwind(5)]
    fn strategies_agree() {
        let input: [i32; 4] = kani::any();
        let mut full = input;
        let mut early = input;
        bubble_sort_with(&mut full, Strategy::FullPasses);
        bubble_sort_with(&mut early, Strategy::EarlyExit);
        kani::assert(full == early, "strategies must agree");
    }
}
