// src/lib.rs
//! # Circular Stack Library
//!
//! Fixed-capacity, overwrite-on-full ring buffers for memory-constrained
//! targets. The ring keeps the most recent bytes of an unbounded stream in
//! storage the caller owns; nothing here allocates.
//!
//! Features:
//! - [`ByteRing`]: raw bytes over a borrowed slice, read back newest-first
//!   (LIFO) or in write order (FIFO), destructively or by peeking
//! - [`BlockRing`]: variable-length records framed with a trailing length
//!   field, popped newest record first, with detection of records split by
//!   eviction
//! - Secure erase of the backing storage via `zeroize`
//! - `no_std` by disabling the default `std` feature
//!
//! Neither type locks. One writer and one reader at a time; share across
//! threads behind your own mutex.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod error;
pub mod ring;

// Re-export main types
pub use block::{BlockRing, FrameConfig, LengthOrder};
pub use error::{Result, ResultExt, RingError};
pub use ring::ByteRing;

/// Commonly used imports.
pub mod prelude {
    pub use crate::block::{BlockRing, FrameConfig, LengthOrder};
    pub use crate::error::{Result, ResultExt, RingError};
    pub use crate::ring::ByteRing;
}
