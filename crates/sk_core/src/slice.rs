//! Index and slice normalization.
//!
//! Every container operation that takes a position goes through one of the
//! three primitives here, so negative-offset and clamping rules stay in one
//! place:
//! - `wrap_index` - single index, offset once by `len` when negative
//! - `clamp_index` - insertion position, never fails
//! - `SliceIndices::adjust` - `start:stop:step` triple, clamped so that an
//!   empty result is possible but an out-of-range read is not

use crate::error::{ErrorKind, Result};

/// Normalize a possibly negative index against `len`.
///
/// Returns `None` when the index is still out of `[0, len)` after adding
/// `len` once.
#[inline]
pub fn wrap_index(i: i64, len: usize) -> Option<usize> {
    let len = len as i64;
    let i = if i < 0 { i + len } else { i };
    if i < 0 || i >= len {
        None
    } else {
        Some(i as usize)
    }
}

/// Normalize an insertion position into `[0, len]`.
#[inline]
pub fn clamp_index(i: i64, len: usize) -> usize {
    let n = len as i64;
    let i = if i < 0 { i + n } else { i };
    i.clamp(0, n) as usize
}

/// A slice resolved against a concrete length.
///
/// `start` and `stop` may be `-1` for negative steps (one before the first
/// element); `count` is the number of positions the stride walk touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
    pub count: usize,
}

impl SliceIndices {
    pub fn adjust(
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
        len: usize,
    ) -> Result<Self> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(ErrorKind::ZeroSliceStep.into());
        }
        // Negation of the stride must not overflow.
        let step = step.max(-i64::MAX);
        let n = len as i64;
        let start = match start {
            None if step < 0 => n - 1,
            None => 0,
            Some(i) => adjust_bound(i, n, step),
        };
        let stop = match stop {
            None if step < 0 => -1,
            None => n,
            Some(i) => adjust_bound(i, n, step),
        };
        let count = if step < 0 {
            if stop < start {
                ((start - stop - 1) / -step + 1) as usize
            } else {
                0
            }
        } else if start < stop {
            ((stop - start - 1) / step + 1) as usize
        } else {
            0
        };
        Ok(Self {
            start,
            stop,
            step,
            count,
        })
    }

    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.step == 1
    }

    /// Positions touched by the stride walk, in walk order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        let (start, step) = (self.start, self.step);
        (0..self.count).map(move |k| (start + k as i64 * step) as usize)
    }

    /// Lowest touched position and the absolute stride, for ascending scans.
    pub fn ascending(&self) -> (usize, usize) {
        let abs = self.step.unsigned_abs() as usize;
        if self.count == 0 {
            return (0, abs);
        }
        let lo = if self.step > 0 {
            self.start
        } else {
            self.start + (self.count as i64 - 1) * self.step
        };
        (lo as usize, abs)
    }

    /// Whether position `i` is touched by the stride walk.
    pub fn covers(&self, i: usize) -> bool {
        if self.count == 0 {
            return false;
        }
        let (lo, abs) = self.ascending();
        let hi = lo + (self.count - 1) * abs;
        i >= lo && i <= hi && (i - lo) % abs == 0
    }

    /// Contiguous range for a unit step; `stop` before `start` collapses to
    /// an empty range at `start`.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.start.max(0) as usize;
        let stop = (self.stop.max(self.start)).max(0) as usize;
        start..stop
    }
}

fn adjust_bound(i: i64, len: i64, step: i64) -> i64 {
    if i < 0 {
        let i = i + len;
        if i < 0 {
            if step < 0 { -1 } else { 0 }
        } else {
            i
        }
    } else if i >= len {
        if step < 0 { len - 1 } else { len }
    } else {
        i
    }
}
