// src/block/mod.rs
//! Record framing on top of a byte ring

pub(crate) mod config;
pub(crate) mod frame;

pub use config::{FrameConfig, LengthOrder};
pub use frame::{BlockRing, LENGTH_FIELD_LEN};
