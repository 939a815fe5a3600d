//! Move-transfer ring buffer.

use crate::{error::CapacityError, index, storage::Storage};
use alloc::sync::Arc;
use core::mem;
use core::sync::atomic::{AtomicUsize, Ordering};
use crossbeam_utils::CachePadded;

/// Fixed-capacity FIFO queue over a contiguous buffer, transferring
/// ownership of its items.
///
/// Popping takes the value out of its slot and leaves `T::default()`
/// behind, so a vacated slot never owns live data and nothing is dropped
/// twice. There is no peek: observing an item without taking ownership has
/// no meaning under move semantics.
///
/// Through `&mut self` the buffer is an ordinary single-threaded queue.
/// [`split`] turns it into a producer half and a consumer half that may be
/// driven from two threads concurrently; the indices are atomic and each
/// side only ever touches the slots on its side of them.
///
/// [`split`]: Self::split
pub struct MoveRb<T> {
    storage: Storage<T>,
    /// Next slot to be written.
    head: CachePadded<AtomicUsize>,
    /// Next slot to be read.
    tail: CachePadded<AtomicUsize>,
}

impl<T: Default> MoveRb<T> {
    /// Creates a buffer of `len` slots, all holding `T::default()`.
    ///
    /// `len` must be an integer power of two and at least 2; the usable
    /// capacity is `len - 1`.
    pub fn new(len: usize) -> Result<Self, CapacityError> {
        index::check_len(len)?;
        Ok(Self {
            storage: Storage::new(len),
            head: CachePadded::new(AtomicUsize::new(0)),
            tail: CachePadded::new(AtomicUsize::new(0)),
        })
    }
}

impl<T> MoveRb<T> {
    /// Number of slots in the linear buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Maximum number of items the buffer can hold, `len() - 1`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    /// Index of the next slot to be read.
    #[inline]
    pub fn read_index(&self) -> usize {
        self.tail.load(Ordering::Acquire)
    }

    /// Index of the next slot to be written.
    #[inline]
    pub fn write_index(&self) -> usize {
        self.head.load(Ordering::Acquire)
    }

    /// Number of items currently stored.
    ///
    /// Under concurrent use this is a snapshot; the producer may only see
    /// it grow and the consumer only shrink.
    #[inline]
    pub fn occupied_len(&self) -> usize {
        index::count(self.write_index(), self.read_index(), self.len())
    }

    /// Number of items that can still be pushed. A snapshot, like
    /// [`occupied_len`](Self::occupied_len).
    #[inline]
    pub fn vacant_len(&self) -> usize {
        index::space(self.write_index(), self.read_index(), self.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read_index() == self.write_index()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.vacant_len() == 0
    }
}

impl<T: Default> MoveRb<T> {
    /// Producer-side single transfer.
    ///
    /// # Safety
    ///
    /// Must not run concurrently with itself or any other producer-side
    /// operation; a concurrent consumer is fine.
    unsafe fn produce(&self, item: T) -> Result<(), T> {
        if self.vacant_len() == 0 {
            return Err(item);
        }
        let len = self.len();
        let head = self.write_index();
        *self.storage.slot(head) = item;
        self.head.store(index::wrap(head + 1, len), Ordering::Release);
        Ok(())
    }

    /// Consumer-side single transfer; resets the slot to `T::default()`.
    ///
    /// # Safety
    ///
    /// Must not run concurrently with itself or any other consumer-side
    /// operation; a concurrent producer is fine.
    unsafe fn retrieve(&self) -> Option<T> {
        if self.occupied_len() == 0 {
            return None;
        }
        let len = self.len();
        let tail = self.read_index();
        let item = mem::take(self.storage.slot(tail));
        self.tail.store(index::wrap(tail + 1, len), Ordering::Release);
        Some(item)
    }

    /// Producer-side bulk transfer: moves items out of `elems` into the
    /// buffer one by one, leaving `T::default()` behind in the source.
    ///
    /// # Safety
    ///
    /// Same contract as [`produce`](Self::produce).
    unsafe fn produce_slice(&self, elems: &mut [T]) -> usize {
        let len = self.len();
        let mut written = 0;
        loop {
            let head = self.write_index();
            let run = index::space_to_end(head, self.read_index(), len).min(elems.len() - written);
            if run == 0 {
                return written;
            }
            for i in 0..run {
                *self.storage.slot(head + i) = mem::take(&mut elems[written + i]);
            }
            self.head.store(index::wrap(head + run, len), Ordering::Release);
            written += run;
        }
    }

    /// Consumer-side bulk transfer: moves items into `elems` one by one,
    /// resetting the vacated slots.
    ///
    /// # Safety
    ///
    /// Same contract as [`retrieve`](Self::retrieve).
    unsafe fn retrieve_slice(&self, elems: &mut [T]) -> usize {
        let len = self.len();
        let mut read = 0;
        loop {
            let tail = self.read_index();
            let run = index::count_to_end(self.write_index(), tail, len).min(elems.len() - read);
            if run == 0 {
                return read;
            }
            for i in 0..run {
                elems[read + i] = mem::take(self.storage.slot(tail + i));
            }
            self.tail.store(index::wrap(tail + run, len), Ordering::Release);
            read += run;
        }
    }

    /// Moves an item into the buffer, or hands it back if the buffer is
    /// full.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        unsafe { self.produce(item) }
    }

    /// Removes and returns the oldest item, leaving `T::default()` in its
    /// slot, or `None` if the buffer is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        unsafe { self.retrieve() }
    }

    /// Moves items from `elems` into the buffer until it is full or the
    /// slice is exhausted. Transferred source slots are left at
    /// `T::default()`. Returns the number of items moved.
    pub fn push_slice(&mut self, elems: &mut [T]) -> usize {
        unsafe { self.produce_slice(elems) }
    }

    /// Moves items out into `elems`, oldest first, until the buffer is
    /// empty or the slice is full. Returns the number of items moved.
    pub fn pop_slice(&mut self, elems: &mut [T]) -> usize {
        unsafe { self.retrieve_slice(elems) }
    }

    /// Splits the buffer into its producer and consumer halves.
    ///
    /// Neither half is `Clone`, so at most one thread can be pushing and at
    /// most one popping at any moment; that exclusivity is what makes the
    /// concurrent use sound.
    pub fn split(self) -> (MoveProd<T>, MoveCons<T>) {
        let rb = Arc::new(self);
        (MoveProd { rb: rb.clone() }, MoveCons { rb })
    }
}

/// Producer half of a split [`MoveRb`].
pub struct MoveProd<T> {
    rb: Arc<MoveRb<T>>,
}

impl<T: Default> MoveProd<T> {
    /// Moves an item into the buffer, or hands it back if the buffer is
    /// full.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        unsafe { self.rb.produce(item) }
    }

    /// Moves items from `elems` into the buffer; see [`MoveRb::push_slice`].
    pub fn push_slice(&mut self, elems: &mut [T]) -> usize {
        unsafe { self.rb.produce_slice(elems) }
    }
}

impl<T> MoveProd<T> {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }
    #[inline]
    pub fn occupied_len(&self) -> usize {
        self.rb.occupied_len()
    }
    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.rb.vacant_len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rb.is_empty()
    }
    #[inline]
    pub fn is_full(&self) -> bool {
        self.rb.is_full()
    }
}

/// Consumer half of a split [`MoveRb`].
pub struct MoveCons<T> {
    rb: Arc<MoveRb<T>>,
}

impl<T: Default> MoveCons<T> {
    /// Removes and returns the oldest item, or `None` if the buffer is
    /// empty.
    pub fn try_pop(&mut self) -> Option<T> {
        unsafe { self.rb.retrieve() }
    }

    /// Moves items out into `elems`; see [`MoveRb::pop_slice`].
    pub fn pop_slice(&mut self, elems: &mut [T]) -> usize {
        unsafe { self.rb.retrieve_slice(elems) }
    }
}

impl<T> MoveCons<T> {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }
    #[inline]
    pub fn occupied_len(&self) -> usize {
        self.rb.occupied_len()
    }
    #[inline]
    pub fn vacant_len(&self) -> usize {
        self.rb.vacant_len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rb.is_empty()
    }
    #[inline]
    pub fn is_full(&self) -> bool {
        self.rb.is_full()
    }
}
