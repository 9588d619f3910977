// src/block/config.rs
//! Configuration for the block framing layer

/// Byte order of the 2-byte length field that trails every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthOrder {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
    /// Whatever the target uses (matches a raw `u16` copy)
    Native,
}

impl LengthOrder {
    /// Encodes a payload length into its stored form.
    #[inline]
    pub fn encode(self, len: u16) -> [u8; 2] {
        match self {
            Self::Little => len.to_le_bytes(),
            Self::Big => len.to_be_bytes(),
            Self::Native => len.to_ne_bytes(),
        }
    }

    /// Decodes a stored length field.
    #[inline]
    pub fn decode(self, field: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(field),
            Self::Big => u16::from_be_bytes(field),
            Self::Native => u16::from_ne_bytes(field),
        }
    }
}

/// Configuration for [`BlockRing`](crate::BlockRing) behavior.
///
/// Writer and reader of the same storage must use the same `length_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Byte order of the trailing length field
    pub length_order: LengthOrder,
    /// Zero the storage on `clear()` instead of only resetting the cursor
    pub zero_on_clear: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            length_order: LengthOrder::Little,
            zero_on_clear: false,
        }
    }
}

impl FrameConfig {
    /// Configuration for rings holding sensitive records.
    pub fn secure() -> Self {
        Self {
            zero_on_clear: true,
            ..Self::default()
        }
    }

    /// Configuration for storage dumped to tooling that expects network
    /// byte order.
    pub fn network() -> Self {
        Self {
            length_order: LengthOrder::Big,
            ..Self::default()
        }
    }
}
