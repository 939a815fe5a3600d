use crate::sem::Semaphore;
use circbuf::{CapacityError, MoveCons, MoveProd, MoveRb};
use core::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Bounded blocking FIFO queue over a moving ring buffer.
///
/// Storage and index bookkeeping are the buffer's; the channel adds only
/// the blocking protocol around them. `write_sem` starts at the usable
/// capacity and counts free slots, `read_sem` starts at zero and counts
/// queued items; every push moves one unit from `write_sem` to `read_sem`
/// and every pop moves it back. The semaphore accounting admits at most one
/// thread into the push path and one into the pop path at a time, so no
/// further lock is needed around the buffer.
///
/// There is no timeout and no cancellation: a blocked [`Sender::push`] or
/// [`Receiver::pop`] is released only by the counterpart operation.
/// Dropping one half does not wake a peer blocked on the other.
pub struct Chan<T> {
    rb: MoveRb<T>,
    sems: SemPair,
}

struct SemPair {
    /// Counts items available to read. Initially zero.
    read: Semaphore,
    /// Counts slots available to write. Initially the usable capacity.
    write: Semaphore,
}

impl<T: Default> Chan<T> {
    /// Creates a channel over `len` slots, of which `len - 1` are usable.
    ///
    /// `len` must be an integer power of two and at least 2.
    pub fn new(len: usize) -> Result<Self, CapacityError> {
        let rb = MoveRb::new(len)?;
        let sems = SemPair {
            read: Semaphore::new(0),
            write: Semaphore::new(rb.capacity()),
        };
        Ok(Self { rb, sems })
    }

    /// Splits the channel into its two ends.
    ///
    /// Neither end is `Clone`: exactly one thread may push and exactly one
    /// may pop, which is the contract the blocking protocol is valid for.
    pub fn split(self) -> (Sender<T>, Receiver<T>) {
        let Self { rb, sems } = self;
        let sems = Arc::new(sems);
        let (prod, cons) = rb.split();
        (
            Sender {
                prod,
                sems: sems.clone(),
            },
            Receiver { cons, sems },
        )
    }

    /// Maximum number of items the channel can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }

    /// Items currently queued.
    #[inline]
    pub fn occupied_len(&self) -> usize {
        self.rb.occupied_len()
    }

    /// Slots currently free.
    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.rb.vacant_len()
    }
}

/// Producer end of a [`Chan`].
pub struct Sender<T> {
    prod: MoveProd<T>,
    sems: Arc<SemPair>,
}

impl<T: Default> Sender<T> {
    /// Blocks until a slot is free, moves `item` into the queue, then wakes
    /// the reader.
    ///
    /// Fails only when a semaphore is poisoned (the receiving side panicked
    /// mid-operation); the item is handed back untransferred.
    pub fn push(&mut self, item: T) -> Result<(), SendError<T>> {
        if self.sems.write.acquire().is_err() {
            return Err(SendError(item));
        }
        // the semaphore accounting guarantees a vacant slot
        assert!(self.prod.try_push(item).is_ok());
        self.sems.read.post();
        Ok(())
    }

    /// Maximum number of items the channel can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.prod.capacity()
    }

    /// Items currently queued. Advisory: the receiver may pop concurrently.
    #[inline]
    pub fn occupied_len(&self) -> usize {
        self.prod.occupied_len()
    }

    /// Slots currently free. Advisory, like
    /// [`occupied_len`](Self::occupied_len).
    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.prod.vacant_len()
    }
}

/// Consumer end of a [`Chan`].
pub struct Receiver<T> {
    cons: MoveCons<T>,
    sems: Arc<SemPair>,
}

impl<T: Default> Receiver<T> {
    /// Blocks until an item is queued, takes it, then wakes the writer.
    ///
    /// Fails only when a semaphore is poisoned (the sending side panicked
    /// mid-operation).
    pub fn pop(&mut self) -> Result<T, RecvError> {
        self.sems.read.acquire().map_err(|_| RecvError)?;
        // the semaphore accounting guarantees a queued item
        let item = self.cons.try_pop().unwrap();
        self.sems.write.post();
        Ok(item)
    }

    /// Maximum number of items the channel can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cons.capacity()
    }

    /// Items currently queued. Advisory: the sender may push concurrently.
    #[inline]
    pub fn occupied_len(&self) -> usize {
        self.cons.occupied_len()
    }

    /// Slots currently free. Advisory, like
    /// [`occupied_len`](Self::occupied_len).
    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.cons.vacant_len()
    }
}

/// A push failed before anything was transferred; the undelivered value is
/// handed back in the error.
#[derive(Error, Clone, Copy, PartialEq, Eq)]
#[error("pushing into a poisoned channel")]
pub struct SendError<T>(pub T);

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SendError(..)")
    }
}

/// A pop failed; nothing was taken from the queue.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("popping from a poisoned channel")]
pub struct RecvError;
