//! Head/tail index arithmetic shared by both buffer variants.
//!
//! `head` is the next slot to be written and `tail` the next slot to be
//! read; both stay in `0..len`. `head == tail` means empty and `head` one
//! behind `tail` means full, so one slot is always left unused and a buffer
//! of `len` slots holds at most `len - 1` items.

use crate::error::CapacityError;

/// Checks that `len` can serve as a slot count.
pub(crate) fn check_len(len: usize) -> Result<(), CapacityError> {
    if len >= 2 && len.is_power_of_two() {
        Ok(())
    } else {
        Err(CapacityError::new(len))
    }
}

/// Wraps an index past the end of the linear buffer back to the start.
#[inline]
pub(crate) fn wrap(i: usize, len: usize) -> usize {
    i & (len - 1)
}

/// Number of items stored in the buffer.
#[inline]
pub(crate) fn count(head: usize, tail: usize, len: usize) -> usize {
    head.wrapping_sub(tail) & (len - 1)
}

/// Number of free slots remaining in the buffer.
#[inline]
pub(crate) fn space(head: usize, tail: usize, len: usize) -> usize {
    tail.wrapping_sub(head).wrapping_sub(1) & (len - 1)
}

/// Contiguous run of stored items starting at `tail`.
///
/// A logical read may span the physical end of the buffer, in which case it
/// has to be split into two contiguous pieces; this is the length of the
/// first one. `tail` is a parameter so a peek can walk a local copy of the
/// read index without committing it.
#[inline]
pub(crate) fn count_to_end(head: usize, tail: usize, len: usize) -> usize {
    let to_end = len - tail;
    let run = wrap(head + to_end, len);
    if run < to_end {
        run
    } else {
        to_end
    }
}

/// Contiguous run of free slots starting at `head`.
#[inline]
pub(crate) fn space_to_end(head: usize, tail: usize, len: usize) -> usize {
    let to_end = len - head;
    let run = wrap(tail + to_end - 1, len);
    if to_end < run {
        to_end
    } else {
        run
    }
}
