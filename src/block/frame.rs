// src/block/frame.rs
//! Variable-length records stacked in a byte ring
//!
//! Each record is stored as its payload followed by a 2-byte length field,
//! so the field of the newest record always sits right before `top`. Reads
//! pop the field, then the payload, newest record first.
//!
//! When the ring fills, the oldest bytes are evicted even if that splits a
//! record. A split is only noticed when the record is reached: the length
//! field asks for more bytes than the ring still holds.
//!
//! All internal reads are FIFO so that neither the length field nor the
//! payload comes back reversed.

use core::fmt;

use super::config::FrameConfig;
use crate::error::{Result, RingError};
use crate::ring::{ByteRing, MAX_CAPACITY};

/// Bytes taken by the trailing length field of every record.
pub const LENGTH_FIELD_LEN: u16 = 2;

/// A ring of whole records, newest first.
///
/// # Example
///
/// ```rust
/// use circstack::prelude::*;
///
/// let mut storage = [0u8; 32];
/// let mut log = BlockRing::new(&mut storage);
/// log.write(b"boot");
/// log.write(b"panic: oom");
///
/// let mut record = [0u8; 16];
/// let n = log.read(&mut record);
/// assert_eq!(&record[..usize::from(n)], b"panic: oom");
/// let n = log.read(&mut record);
/// assert_eq!(&record[..usize::from(n)], b"boot");
/// assert!(log.is_empty());
/// ```
pub struct BlockRing<'a> {
    ring: ByteRing<'a>,
    config: FrameConfig,
}

impl<'a> BlockRing<'a> {
    /// Creates an empty block ring over `storage` with the default
    /// [`FrameConfig`].
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty or longer than [`MAX_CAPACITY`].
    pub fn new(storage: &'a mut [u8]) -> Self {
        Self::with_config(storage, FrameConfig::default())
    }

    /// Creates an empty block ring with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty or longer than [`MAX_CAPACITY`].
    pub fn with_config(storage: &'a mut [u8], config: FrameConfig) -> Self {
        Self {
            ring: ByteRing::new(storage),
            config,
        }
    }

    /// Creates an empty block ring, rejecting unusable storage.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidCapacity`] for empty or oversized storage.
    pub fn try_new(storage: &'a mut [u8]) -> Result<Self> {
        Ok(Self {
            ring: ByteRing::try_new(storage)?,
            config: FrameConfig::default(),
        })
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Returns the underlying byte ring.
    #[inline]
    pub fn ring(&self) -> &ByteRing<'a> {
        &self.ring
    }

    /// Consumes the block ring, returning the byte ring it framed.
    pub fn into_inner(self) -> ByteRing<'a> {
        self.ring
    }

    /// Returns the storage size in bytes.
    #[inline]
    pub fn capacity(&self) -> u16 {
        self.ring.capacity()
    }

    /// Returns how many bytes (payloads plus length fields) are held.
    #[inline]
    pub fn bytes_used(&self) -> u16 {
        self.ring.len()
    }

    /// Stores one record, evicting the oldest bytes if needed.
    ///
    /// A record longer than `capacity - 2` evicts its own head and will read
    /// back as truncated.
    ///
    /// # Panics
    ///
    /// Panics if `payload` is longer than [`MAX_CAPACITY`], since its length
    /// cannot be stored.
    pub fn write(&mut self, payload: &[u8]) {
        assert!(
            payload.len() <= MAX_CAPACITY,
            "Record length {} exceeds maximum {}",
            payload.len(),
            MAX_CAPACITY
        );
        let len = payload.len() as u16;

        let needed = payload.len() + usize::from(LENGTH_FIELD_LEN);
        let free = usize::from(self.ring.capacity() - self.ring.len());
        if needed > free {
            tracing::trace!(
                record = len,
                evicted = (needed - free).min(usize::from(self.ring.len())),
                "record write evicts older bytes"
            );
        }

        self.ring.write(payload);
        self.ring.write(&self.config.length_order.encode(len));
    }

    /// Pops the newest record into `dest` and returns its length.
    ///
    /// Returns 0 when there is no usable record: the ring is empty, the
    /// record is longer than `dest` (it is discarded anyway), or the record
    /// was partially evicted. A zero-length record also returns 0; use
    /// [`try_read`](Self::try_read) to tell these apart.
    pub fn read(&mut self, dest: &mut [u8]) -> u16 {
        self.try_read(dest).unwrap_or(0)
    }

    /// Pops the newest record into `dest`, reporting why it failed if it did.
    ///
    /// Ring state changes exactly as for [`read`](Self::read): a failed read
    /// still consumes whatever belonged to the record.
    ///
    /// # Errors
    ///
    /// - [`RingError::Empty`] if fewer than two bytes were left
    /// - [`RingError::RecordTooLarge`] if the payload does not fit `dest`
    /// - [`RingError::RecordTruncated`] if the payload was partially evicted
    pub fn try_read(&mut self, dest: &mut [u8]) -> Result<u16> {
        let mut field = [0u8; LENGTH_FIELD_LEN as usize];
        if self.ring.read_fifo(&mut field) != LENGTH_FIELD_LEN {
            tracing::debug!("no length field left in ring");
            return Err(RingError::Empty);
        }
        let len = self.config.length_order.decode(field);

        if usize::from(len) > dest.len() {
            self.ring.discard(len);
            tracing::debug!(
                record = len,
                capacity = dest.len(),
                "record larger than destination, discarded"
            );
            return Err(RingError::RecordTooLarge {
                len,
                capacity: dest.len(),
            });
        }

        let got = self.ring.read_fifo(&mut dest[..usize::from(len)]);
        if got != len {
            tracing::debug!(record = len, available = got, "record truncated by eviction");
            return Err(RingError::RecordTruncated {
                len,
                available: got,
            });
        }

        Ok(len)
    }

    /// Returns the payload length of the newest record if it is intact.
    pub fn peek_len(&self) -> Option<u16> {
        let mut field = [0u8; LENGTH_FIELD_LEN as usize];
        if self.ring.peek_fifo(&mut field) != LENGTH_FIELD_LEN {
            return None;
        }
        let len = self.config.length_order.decode(field);

        let stored = u32::from(len) + u32::from(LENGTH_FIELD_LEN);
        (u32::from(self.ring.len()) >= stored).then_some(len)
    }

    /// Returns `true` if the newest record cannot be recovered.
    ///
    /// This covers an empty ring as well as a newest record that has been
    /// partially evicted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.peek_len().is_none()
    }

    /// Forgets every record.
    ///
    /// With [`FrameConfig::zero_on_clear`] the storage is zeroed too.
    pub fn clear(&mut self) {
        if self.config.zero_on_clear {
            self.ring.burn();
        } else {
            self.ring.clear();
        }
    }
}

impl fmt::Debug for BlockRing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRing")
            .field("ring", &self.ring)
            .field("config", &self.config)
            .finish()
    }
}
