#![no_std]

//! Fixed-capacity queues over a contiguous buffer addressed by two wrapping
//! indices. The slot count is an integer power of two, so wraparound is a
//! bitmask rather than a modulo.
//!
//! Two variants share the same index arithmetic. [`CopyRb`] copies items in
//! and out, so the occupied region can be examined and replayed without
//! consuming it. [`MoveRb`] transfers ownership per element and resets
//! vacated slots; it can be split into producer and consumer halves usable
//! from two threads. The `circbuf-chan` crate builds a blocking bounded
//! queue on top of the moving variant.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod copying;
pub mod moving;

mod error;
mod index;
mod storage;

pub use copying::CopyRb;
pub use error::CapacityError;
pub use moving::{MoveCons, MoveProd, MoveRb};

#[cfg(test)]
mod tests;
