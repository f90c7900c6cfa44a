//! bubblesort — console driver for the sort demo and the uninitialized-read
//! demo.
//!
//! The sorting itself and the frame model live in `bubblesort-core`; this
//! crate turns them into the text the `bubblesort` binary prints.

pub mod demo;
pub mod report;

// Re-export key types for convenience
pub use anyhow::{Context, Result};
pub use bubblesort_core::{SortStats, Strategy};
pub use demo::initialization_demo;
pub use report::{format_report, render_line, sort_report, SortReport};

/// Input used when the command line supplies no values.
pub const DEFAULT_VALUES: [i32; 5] = [60, 7, 8, 3, 20];

/// Configuration options for a sort run
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// Pass scheduling used by the sorter
    pub strategy: Strategy,
    /// Append the pass/comparison/exchange counters to the report
    pub show_stats: bool,
}
