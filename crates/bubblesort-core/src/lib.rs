//! `bubblesort-core` — in-place bubble sort and initialized-by-construction
//! stack frames.
//!
//! This crate is `#![no_std]` and never allocates. It provides:
//! - [`bubble_sort`] and friends: stable, in-place, adjacent-exchange sorting
//!   with [`SortStats`] counters
//! - [`Frame<const CAPACITY: usize>`](Frame): fixed-size stack slots where a
//!   read before the first write is a [`Fault`], never a stale value

#![no_std]

mod sort;
pub use sort::{
    bubble_sort, bubble_sort_by, bubble_sort_observed, bubble_sort_with, is_sorted,
    max_exchanges, SortStats, Strategy,
};

mod frame;
pub use frame::{Frame, Region};

/// Frame access errors — no panics, no unwinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Index past its region or the current top of the frame, or a region
    /// whose length does not match the data supplied for it.
    OutOfBounds,
    /// Slot was allocated but never stored to.
    Uninitialized { slot: usize },
    /// Allocation asked for more slots than remain in the frame.
    CapacityExceeded { requested: usize, available: usize },
    /// Release of a region that is not on top of the frame.
    NotTopmost { start: usize },
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Fault::OutOfBounds => write!(f, "frame access out of bounds"),
            Fault::Uninitialized { slot } => write!(f, "slot {slot} read before initialization"),
            Fault::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "cannot allocate {requested} slots, only {available} available"
            ),
            Fault::NotTopmost { start } => {
                write!(f, "region starting at slot {start} is not on top of the frame")
            }
        }
    }
}

impl core::error::Error for Fault {}

/// Result type for frame operations — `Result<T, Fault>`.
pub type FaultResult<T> = Result<T, Fault>;
