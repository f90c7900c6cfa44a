//! Stack frame model — `Frame<const CAPACITY: usize>`.
//!
//! Slots are handed out in contiguous [`Region`]s by bumping `top`, and
//! handed back LIFO. A slot holds `Option<i32>`: `None` until the first
//! store, so reading a slot that was never written is a
//! [`Fault::Uninitialized`] instead of whatever the previous owner left there.
//!
//! A `Region` is a move-only token: it is neither `Copy` nor `Clone`, every
//! access borrows it, and [`Frame::release`] consumes it. A handle to slots
//! that were released and handed to a new owner cannot exist.
//!
//! Invariants:
//! - `top <= CAPACITY`
//! - every slot at or above `top` is `None`
//!
//! No indexing, no panic paths.

use crate::{Fault, FaultResult};

/// A contiguous run of slots returned by [`Frame::alloc`].
///
/// Released regions are gone for good:
///
/// ```compile_fail
/// use bubblesort_core::Frame;
///
/// let mut frame = Frame::<4>::new();
/// let old = frame.alloc(2).unwrap();
/// frame.release(old).unwrap();
/// let _new = frame.alloc(2).unwrap();
/// frame.init_region(&old, &[100, 200]).unwrap(); // `old` was moved
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Region {
    start: usize,
    len: usize,
}

impl Region {
    /// First frame slot of the region.
    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of slots in the region.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last frame slot of the region.
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Frame slot for the region-relative `index`, or `None` past the end.
    #[inline(always)]
    pub fn slot(&self, index: usize) -> Option<usize> {
        if index < self.len {
            Some(self.start + index)
        } else {
            None
        }
    }
}

/// Fixed-capacity frame of integer slots.
///
/// The backing array is fully allocated up front; `alloc` and `release`
/// only move `top`.
#[derive(Debug)]
pub struct Frame<const CAPACITY: usize> {
    slots: [Option<i32>; CAPACITY],
    top: usize,
}

impl<const CAPACITY: usize> Default for Frame<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> Frame<CAPACITY> {
    /// Create an empty frame with every slot unassigned.
    pub const fn new() -> Self {
        Self {
            slots: [None; CAPACITY],
            top: 0,
        }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Number of slots currently allocated.
    #[inline(always)]
    pub fn top(&self) -> usize {
        self.top
    }

    /// Slots still free above `top`.
    #[inline(always)]
    pub fn available(&self) -> usize {
        CAPACITY - self.top
    }

    /// Reserve `len` unassigned slots on top of the frame.
    ///
    /// # Errors
    /// Returns `Fault::CapacityExceeded` if fewer than `len` slots remain.
    pub fn alloc(&mut self, len: usize) -> FaultResult<Region> {
        let available = self.available();
        if len > available {
            return Err(Fault::CapacityExceeded {
                requested: len,
                available,
            });
        }
        let region = Region {
            start: self.top,
            len,
        };
        self.top += len;
        Ok(region)
    }

    /// Frame slot for `region[index]`, checked against `top`.
    #[inline(always)]
    fn slot_of(&self, region: &Region, index: usize) -> FaultResult<usize> {
        let slot = region.slot(index).ok_or(Fault::OutOfBounds)?;
        if slot >= self.top {
            return Err(Fault::OutOfBounds);
        }
        Ok(slot)
    }

    /// Store `value` into `region[index]`.
    pub fn store(&mut self, region: &Region, index: usize, value: i32) -> FaultResult<()> {
        let slot = self.slot_of(region, index)?;
        let cell = self.slots.get_mut(slot).ok_or(Fault::OutOfBounds)?;
        *cell = Some(value);
        Ok(())
    }

    /// Load the value stored in `region[index]`.
    ///
    /// # Errors
    /// `Fault::OutOfBounds` if `index` is past the region, `Fault::Uninitialized`
    /// if the slot was allocated but never stored to.
    pub fn load(&self, region: &Region, index: usize) -> FaultResult<i32> {
        let slot = self.slot_of(region, index)?;
        match self.slots.get(slot) {
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(Fault::Uninitialized { slot }),
            None => Err(Fault::OutOfBounds),
        }
    }

    /// `true` if `region[index]` holds a value.
    pub fn is_assigned(&self, region: &Region, index: usize) -> bool {
        self.load(region, index).is_ok()
    }

    /// Store `values` into every slot of `region`.
    ///
    /// # Errors
    /// Returns `Fault::OutOfBounds` if `values.len() != region.len()` or the
    /// region lies beyond `top`.
    pub fn init_region(&mut self, region: &Region, values: &[i32]) -> FaultResult<()> {
        if values.len() != region.len || region.end() > self.top {
            return Err(Fault::OutOfBounds);
        }
        let cells = self
            .slots
            .get_mut(region.start..region.end())
            .ok_or(Fault::OutOfBounds)?;
        for (cell, &value) in cells.iter_mut().zip(values) {
            *cell = Some(value);
        }
        Ok(())
    }

    /// Load every slot of `region`, in order.
    pub fn load_region<'a>(
        &'a self,
        region: &'a Region,
    ) -> impl Iterator<Item = FaultResult<i32>> + 'a {
        (0..region.len).map(move |index| self.load(region, index))
    }

    /// Pop `region` off the frame, returning its slots to unassigned.
    ///
    /// The handle is consumed either way; on error the frame is unchanged.
    ///
    /// # Errors
    /// Returns `Fault::NotTopmost` unless `region` ends exactly at `top`.
    pub fn release(&mut self, region: Region) -> FaultResult<()> {
        if region.end() != self.top || region.start > self.top {
            return Err(Fault::NotTopmost {
                start: region.start,
            });
        }
        let cells = self
            .slots
            .get_mut(region.start..region.end())
            .ok_or(Fault::OutOfBounds)?;
        cells.fill(None);
        self.top = region.start;
        Ok(())
    }
}


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p bubblesort-core
//
// The proofs establish that:
// - load/store never panic for any index
// - a freshly allocated slot is never assigned, even after reuse
// - top never exceeds CAPACITY

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: load never panics, only returns Ok or a Fault.
    #[kani::proof]
    #[kani::unwind(5)]
    fn load_never_panics() {
        let mut frame = Frame::<4>::new();
        let len: usize = kani::any();
        kani::assume(len <= 4);
        let region = frame.alloc(len).unwrap();
        let index: usize = kani::any();
        let result = frame.load(&region, index);
        if index >= len {
            kani::assert(result == Err(Fault::OutOfBounds), "index past region");
        }
    }

    /// Proof: store never panics for any index and value.
    #[kani::proof]
    #[kani::unwind(5)]
    fn store_never_panics() {
        let mut frame = Frame::<4>::new();
        let region = frame.alloc(2).unwrap();
        let index: usize = kani::any();
        let value: i32 = kani::any();
        let _ = frame.store(&region, index, value);
    }

    /// Proof: reused slots come back unassigned.
    #[kani::proof]
    #[kani::unwind(5)]
    fn reuse_is_unassigned() {
        let mut frame = Frame::<4>::new();
        let values: [i32; 4] = kani::any();
        let first = frame.alloc(4).unwrap();
        frame.init_region(&first, &values).unwrap();
        frame.release(first).unwrap();

        let len: usize = kani::any();
        kani::assume(len <= 4);
        let second = frame.alloc(len).unwrap();
        let index: usize = kani::any();
        kani::assume(index < len);
        let slot = second.start() + index;
        kani::assert(
            frame.load(&second, index) == Err(Fault::Uninitialized { slot }),
            "reused slot must be unassigned",
        );
    }

    /// Proof: alloc respects CAPACITY.
    #[kani::proof]
    #[kani::unwind(5)]
    fn alloc_respects_capacity() {
        let mut frame = Frame::<4>::new();
        let a: usize = kani::any();
        let b: usize = kani::any();
        let _ = frame.alloc(a);
        let _ = frame.alloc(b);
        kani::assert(frame.top() <= 4, "top must not exceed CAPACITY");
    }
}
