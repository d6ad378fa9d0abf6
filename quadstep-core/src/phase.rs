//! Phase index generation for the step primitive
//!
//! A signed step count is turned into a stream of `|count|` phase indices.
//! The sign only picks the scan order of the underlying step counter:
//!
//! - `count > 0`: counter runs `count, count - 1, ..., 1`
//! - `count <= 0`: counter runs `0, 1, ..., |count| - 1`
//!
//! Each counter value is reduced modulo 8. Both orders index the same
//! forward-ordered table, so a negative count is not a mirrored phase
//! progression (for `count = -8` the phases are `0..8`, for `count = 8`
//! they are `0, 7, 6, ..., 1`).

use crate::sequence::PHASE_COUNT;

/// Which way the step counter is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanOrder {
    /// Positive counts: counter descends from `count` to 1
    Descending,
    /// Zero and negative counts: counter ascends from 0 to `|count| - 1`
    Ascending,
}

impl ScanOrder {
    /// Scan order used for a signed step count
    pub fn for_count(count: i32) -> Self {
        if count > 0 {
            ScanOrder::Descending
        } else {
            ScanOrder::Ascending
        }
    }
}

/// Iterator over the phase indices of one `step(count)` call
#[derive(Debug, Clone)]
pub struct PhaseIndices {
    order: ScanOrder,
    /// Next step counter value
    counter: u32,
    /// Indices left to yield
    remaining: u32,
}

impl PhaseIndices {
    /// Build the index stream for a signed step count
    pub fn new(count: i32) -> Self {
        let order = ScanOrder::for_count(count);
        let remaining = count.unsigned_abs();
        let counter = match order {
            ScanOrder::Descending => remaining,
            ScanOrder::Ascending => 0,
        };

        Self {
            order,
            counter,
            remaining,
        }
    }

    /// Scan order of this stream
    pub fn order(&self) -> ScanOrder {
        self.order
    }
}

impl Iterator for PhaseIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let phase = (self.counter % PHASE_COUNT as u32) as usize;
        match self.order {
            ScanOrder::Descending => self.counter -= 1,
            ScanOrder::Ascending => self.counter += 1,
        }
        Some(phase)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for PhaseIndices {}

impl core::iter::FusedIterator for PhaseIndices {}
