// src/error.rs
//! Error types for ring construction and record recovery

use core::fmt;

/// Errors reported by the fallible ring operations.
///
/// The plain byte-level operations never fail: writes overwrite, reads
/// clamp. These variants only surface from constructors and from
/// [`BlockRing::try_read`](crate::BlockRing::try_read).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Storage length is zero or exceeds [`MAX_CAPACITY`](crate::ring::MAX_CAPACITY)
    InvalidCapacity(usize),
    /// Not enough bytes left to hold even a length field
    Empty,
    /// Newest record is larger than the destination (record was discarded)
    RecordTooLarge {
        /// Payload length recorded in the length field
        len: u16,
        /// Length of the destination the caller supplied
        capacity: usize,
    },
    /// Newest record was partially evicted by later writes
    RecordTruncated {
        /// Payload length recorded in the length field
        len: u16,
        /// Payload bytes that were still present
        available: u16,
    },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity(size) => {
                write!(f, "Invalid ring capacity: {} (expected 1..=65535)", size)
            }
            Self::Empty => write!(f, "Ring holds no complete record"),
            Self::RecordTooLarge { len, capacity } => write!(
                f,
                "Record of {} bytes does not fit destination of {} bytes",
                len, capacity
            ),
            Self::RecordTruncated { len, available } => write!(
                f,
                "Record truncated by eviction: {} of {} bytes left",
                available, len
            ),
        }
    }
}

impl core::error::Error for RingError {}

/// Convert RingError to std::io::Error
#[cfg(feature = "std")]
impl From<RingError> for std::io::Error {
    fn from(err: RingError) -> Self {
        use std::io::ErrorKind;
        match err {
            RingError::Empty | RingError::RecordTruncated { .. } => {
                std::io::Error::new(ErrorKind::UnexpectedEof, err)
            }
            RingError::RecordTooLarge { .. } | RingError::InvalidCapacity(_) => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
        }
    }
}

/// Result type alias for ring operations
pub type Result<T> = core::result::Result<T, RingError>;

/// Extension trait for converting ring results into other error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    #[cfg(feature = "std")]
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(anyhow::Error::new)
    }

    #[cfg(feature = "std")]
    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_error_conversion_io() {
        let err: std::io::Error = RingError::Empty.into();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);

        let err: std::io::Error = RingError::RecordTooLarge { len: 10, capacity: 5 }.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_display() {
        let msg = RingError::RecordTruncated { len: 8, available: 3 }.to_string();
        assert!(msg.contains("3 of 8"));
        assert!(RingError::InvalidCapacity(0).to_string().contains("0"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_result_ext() {
        let result: Result<u16> = Ok(42);
        assert_eq!(result.into_io().unwrap(), 42);

        let result: Result<u16> = Err(RingError::Empty);
        assert!(result.into_io().is_err());
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_anyhow_conversion() {
        let result: Result<u16> = Err(RingError::Empty);
        let err = result.into_anyhow().unwrap_err();
        assert!(err.to_string().contains("no complete record"));
    }
}
