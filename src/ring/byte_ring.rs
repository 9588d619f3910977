// src/ring/byte_ring.rs
//! Overwrite-on-full byte ring over borrowed storage
//!
//! # Layout
//!
//! The ring never allocates. It borrows a caller-supplied slice for its
//! whole lifetime and tracks two numbers: `top`, the offset just past the
//! newest byte, and `length`, how many bytes ending at `top` are valid.
//! Everything further back than `length` is stale.
//!
//! # Read orderings
//!
//! Every read takes the window of bytes nearest `top`. [`ByteRing::read`]
//! hands them out newest first (LIFO), [`ByteRing::read_fifo`] hands out
//! the same window in the order it was written. Use the FIFO form whenever
//! the window encodes a multi-byte value.
//!
//! # Overwrite
//!
//! Writes never fail. Once the ring is full each new byte replaces the
//! oldest one.

use core::fmt;

use super::cursor::Cursor;
use super::MAX_CAPACITY;
use crate::error::{Result, RingError};
use zeroize::Zeroize;

/// A fixed-capacity ring that keeps the most recent bytes of a stream.
///
/// # Example
///
/// ```rust
/// use circstack::prelude::*;
///
/// let mut storage = [0u8; 8];
/// let mut ring = ByteRing::new(&mut storage);
/// ring.write(b"ABCDE");
///
/// let mut out = [0u8; 5];
/// ring.peek(&mut out);
/// assert_eq!(&out, b"EDCBA");
///
/// ring.read_fifo(&mut out);
/// assert_eq!(&out, b"ABCDE");
/// assert!(ring.is_empty());
/// ```
pub struct ByteRing<'a> {
    /// Borrowed storage (capacity is its length)
    storage: &'a mut [u8],
    /// Live cursor; peeks work on copies of it
    cursor: Cursor,
}

impl<'a> ByteRing<'a> {
    /// Creates an empty ring over the whole of `storage`.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty or longer than [`MAX_CAPACITY`].
    pub fn new(storage: &'a mut [u8]) -> Self {
        assert!(
            (1..=MAX_CAPACITY).contains(&storage.len()),
            "Ring capacity {} outside 1..={}",
            storage.len(),
            MAX_CAPACITY
        );

        Self {
            storage,
            cursor: Cursor::default(),
        }
    }

    /// Creates an empty ring, rejecting unusable storage instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidCapacity`] if `storage` is empty or longer
    /// than [`MAX_CAPACITY`].
    pub fn try_new(storage: &'a mut [u8]) -> Result<Self> {
        if !(1..=MAX_CAPACITY).contains(&storage.len()) {
            return Err(RingError::InvalidCapacity(storage.len()));
        }
        Ok(Self::new(storage))
    }

    /// Returns the number of valid bytes in the ring.
    #[inline(always)]
    pub fn len(&self) -> u16 {
        self.cursor.length
    }

    /// Returns the total size of the ring.
    #[inline(always)]
    pub fn capacity(&self) -> u16 {
        self.storage.len() as u16
    }

    /// Returns `true` if the ring holds no valid bytes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cursor.length == 0
    }

    /// Returns `true` if the next write will evict the oldest byte.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        usize::from(self.cursor.length) == self.storage.len()
    }

    /// Appends one byte, evicting the oldest byte if the ring is full.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        let top = usize::from(self.cursor.top);
        self.storage[top] = byte;
        self.cursor.top = ((top + 1) % self.storage.len()) as u16;
        if !self.is_full() {
            self.cursor.length += 1;
        }
    }

    /// Appends `data`, evicting the oldest bytes as needed.
    ///
    /// If `data` is at least as long as the ring only its last
    /// [`capacity`](Self::capacity) bytes are kept, and they are laid out
    /// from the start of storage.
    pub fn write(&mut self, data: &[u8]) {
        let size = self.storage.len();
        let mut src = data;

        if src.len() >= size {
            if src.len() > size {
                tracing::trace!(
                    written = src.len(),
                    capacity = size,
                    "write larger than ring, keeping tail only"
                );
            }
            src = &src[src.len() - size..];
            self.cursor = Cursor::default();
        }

        let top = usize::from(self.cursor.top);
        let len1 = src.len().min(size - top);
        self.storage[top..top + len1].copy_from_slice(&src[..len1]);
        let len2 = src.len() - len1;
        self.storage[..len2].copy_from_slice(&src[len1..]);
        self.cursor.top = ((top + src.len()) % size) as u16;

        // src.len() <= size here, so the sum below cannot overflow u16
        let free = size - usize::from(self.cursor.length);
        if src.len() >= free {
            self.cursor.length = size as u16;
        } else {
            self.cursor.length += src.len() as u16;
        }
    }

    /// Removes up to `dest.len()` bytes, newest first.
    ///
    /// `dest[0]` receives the most recently written byte. Returns the number
    /// of bytes removed, which is smaller than `dest.len()` when the ring
    /// held fewer bytes.
    pub fn read(&mut self, dest: &mut [u8]) -> u16 {
        self.cursor.take_lifo(&*self.storage, dest)
    }

    /// Removes the same bytes as [`read`](Self::read) but delivers them in
    /// the order they were written.
    pub fn read_fifo(&mut self, dest: &mut [u8]) -> u16 {
        self.cursor.take_fifo(&*self.storage, dest)
    }

    /// Removes up to `n` of the newest bytes without copying them.
    pub fn discard(&mut self, n: u16) -> u16 {
        self.cursor.skip(n, self.storage.len())
    }

    /// Copies what [`read`](Self::read) would return, leaving the ring as is.
    pub fn peek(&self, dest: &mut [u8]) -> u16 {
        let mut snapshot = self.cursor;
        snapshot.take_lifo(&*self.storage, dest)
    }

    /// Copies what [`read_fifo`](Self::read_fifo) would return, leaving the
    /// ring as is.
    pub fn peek_fifo(&self, dest: &mut [u8]) -> u16 {
        let mut snapshot = self.cursor;
        snapshot.take_fifo(&*self.storage, dest)
    }

    /// Returns the valid bytes in write order without copying.
    ///
    /// The second slice is empty unless the data wraps the end of storage.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        self.cursor.window(&*self.storage, self.cursor.length)
    }

    /// Forgets all bytes. Storage contents are left in place.
    #[inline]
    pub fn clear(&mut self) {
        self.cursor = Cursor::default();
    }

    /// Forgets all bytes and securely zeroes the storage.
    pub fn burn(&mut self) {
        self.storage.zeroize();
        self.clear();
    }
}

impl fmt::Debug for ByteRing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteRing")
            .field("capacity", &self.storage.len())
            .field("top", &self.cursor.top)
            .field("length", &self.cursor.length)
            .finish()
    }
}
