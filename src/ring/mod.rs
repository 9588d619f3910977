// src/ring/mod.rs
//! Raw byte ring with LIFO and FIFO read orderings

pub mod byte_ring;
pub(crate) mod cursor;
#[cfg(feature = "std")]
mod io;

pub use byte_ring::ByteRing;

/// Largest supported storage length.
///
/// Capacity, cursor, length, transfer counts and the block length field all
/// share this 16-bit bound.
pub const MAX_CAPACITY: usize = u16::MAX as usize;
