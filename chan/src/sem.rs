use std::sync::{Condvar, Mutex, PoisonError};

/// Counting semaphore built from a mutex-guarded counter and a condvar.
///
/// `acquire` blocks while the count is zero, then decrements it; `post`
/// increments it and wakes one waiter. Spurious wakeups are absorbed by the
/// wait loop and never surface to the caller.
pub(crate) struct Semaphore {
    count: Mutex<usize>,
    cond: Condvar,
}

/// The counter lock was poisoned: the other side of the queue panicked
/// mid-operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Poisoned;

impl Semaphore {
    pub fn new(count: usize) -> Self {
        Self {
            count: Mutex::new(count),
            cond: Condvar::new(),
        }
    }

    /// Blocks until the count is positive, then takes one unit. The wait is
    /// unbounded.
    pub fn acquire(&self) -> Result<(), Poisoned> {
        let mut count = self.count.lock().map_err(|_| Poisoned)?;
        while *count == 0 {
            count = self.cond.wait(count).map_err(|_| Poisoned)?;
        }
        *count -= 1;
        Ok(())
    }

    /// Returns one unit and wakes a waiter if there is one.
    ///
    /// A poisoned lock is recovered rather than reported: the increment
    /// cannot corrupt the counter, and the unit must not be lost.
    pub fn post(&self) {
        let mut count = self
            .count
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *count += 1;
        self.cond.notify_one();
    }
}
