//! Reads before initialization, replayed on a [`Frame`].
//!
//! Each scenario declares slots and reads them before any store. On a
//! `Frame` that read is `Fault::Uninitialized`, printed as `<unassigned>`,
//! so the demo shows the absence of a value instead of leftover stack bytes.

use anyhow::{Context, Result};
use bubblesort_core::{Fault, Frame, Region};
use tracing::debug;

/// Text printed for a slot that holds no value.
pub const UNASSIGNED: &str = "<unassigned>";

/// Slots available to the demo; the largest scenario needs five.
const FRAME_SLOTS: usize = 16;

type DemoFrame = Frame<FRAME_SLOTS>;

/// Render `region[index]`, or [`UNASSIGNED`] if it was never stored.
fn show(frame: &DemoFrame, region: &Region, index: usize) -> Result<String> {
    match frame.load(region, index) {
        Ok(value) => Ok(value.to_string()),
        Err(Fault::Uninitialized { .. }) => Ok(UNASSIGNED.to_string()),
        Err(fault) => Err(fault).with_context(|| {
            format!("failed to read index {index} of region at {}", region.start())
        }),
    }
}

fn show_region(frame: &DemoFrame, region: &Region) -> Result<Vec<String>> {
    (0..region.len())
        .map(|index| show(frame, region, index))
        .collect()
}

/// Declare-then-read scenarios: one scalar, three scalars, a five-slot array.
fn declared_but_unassigned(frame: &mut DemoFrame, out: &mut String) -> Result<()> {
    let age = frame.alloc(1).context("failed to allocate age")?;
    out.push_str(&format!("Uninitialized age: {}\n", show(frame, &age, 0)?));

    let abc = frame.alloc(3).context("failed to allocate a, b, c")?;
    out.push_str(&format!(
        "Unassigned values: {}\n",
        show_region(frame, &abc)?.join(", ")
    ));

    let arr = frame.alloc(5).context("failed to allocate array")?;
    out.push_str("Unassigned array: ");
    for value in show_region(frame, &arr)? {
        out.push_str(&format!("{value} "));
    }
    out.push('\n');

    frame.release(arr)?;
    frame.release(abc)?;
    frame.release(age)?;
    Ok(())
}

/// Store `x` and `y`, release them, then read `a` and `b` from the same slots.
fn released_and_reused(frame: &mut DemoFrame, out: &mut String) -> Result<()> {
    let xy = frame.alloc(2).context("failed to allocate x, y")?;
    frame.init_region(&xy, &[100, 200])?;
    out.push_str(&format!(
        "Initial values: x={}, y={}\n",
        show(frame, &xy, 0)?,
        show(frame, &xy, 1)?
    ));
    let xy_start = xy.start();
    frame.release(xy)?;

    let ab = frame.alloc(2).context("failed to allocate a, b")?;
    debug!(reused = ab.start() == xy_start, "reallocated x, y slots");
    out.push_str(&format!(
        "New vars in same area: a={}, b={}\n",
        show(frame, &ab, 0)?,
        show(frame, &ab, 1)?
    ));
    frame.release(ab)?;
    Ok(())
}

/// Run every scenario and return the text the `uninit` command prints.
pub fn initialization_demo() -> Result<String> {
    let mut frame = DemoFrame::new();
    let mut out = String::new();

    out.push_str("=== Demonstration of Uninitialized Variables ===\n");
    declared_but_unassigned(&mut frame, &mut out).context("declaration scenario failed")?;
    out.push_str("\n--- Memory Reuse Example ---\n");
    released_and_reused(&mut frame, &mut out).context("reuse scenario failed")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_never_prints_stale_values() {
        let text = initialization_demo().unwrap();
        let expected = "\
=== Demonstration of Uninitialized Variables ===
Uninitialized age: <unassigned>
Unassigned values: <unassigned>, <unassigned>, <unassigned>
Unassigned array: <unassigned> <unassigned> <unassigned> <unassigned> <unassigned> \n\
\n\
--- Memory Reuse Example ---
Initial values: x=100, y=200
New vars in same area: a=<unassigned>, b=<unassigned>
";
        assert_eq!(text, expected);
    }

    #[test]
    fn show_propagates_out_of_bounds() {
        let mut frame = DemoFrame::new();
        let r = frame.alloc(1).unwrap();
        let err = show(&frame, &r, 1).unwrap_err();
        assert_eq!(err.downcast_ref::<Fault>(), Some(&Fault::OutOfBounds));
    }

    #[test]
    fn show_renders_stored_value() {
        let mut frame = DemoFrame::new();
        let r = frame.alloc(1).unwrap();
        frame.store(&r, 0, -7).unwrap();
        assert_eq!(show(&frame, &r, 0).unwrap(), "-7");
    }

    #[test]
    fn scenarios_leave_frame_empty() {
        let mut frame = DemoFrame::new();
        let mut out = String::new();
        declared_but_unassigned(&mut frame, &mut out).unwrap();
        released_and_reused(&mut frame, &mut out).unwrap();
        assert_eq!(frame.top(), 0);
    }
}
