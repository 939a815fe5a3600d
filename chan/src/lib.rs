//! Bounded blocking queue for one producer thread and one consumer thread.
//!
//! A [`Chan`] owns a moving ring buffer and a pair of counting semaphores:
//! one counts items available to read, the other free slots available to
//! write. [`Sender::push`] blocks while the queue is full and
//! [`Receiver::pop`] while it is empty; items arrive strictly in push
//! order, moved rather than copied.

mod chan;
mod sem;

pub use crate::chan::{Chan, Receiver, RecvError, SendError, Sender};
pub use circbuf::CapacityError;

#[cfg(test)]
mod tests;
