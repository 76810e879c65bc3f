//! LSB steganography over WAV sample slots
//!
//! The wire protocol, shared bit-for-bit by both directions:
//!
//! - The carrier's `data` region is divided into fixed-stride sample
//!   slots (stride = bits per sample / 8). Each slot donates its least
//!   significant byte; the rest of the sample is never touched.
//! - The first four slots hold the *length frame*: the payload length
//!   XORed with the payload's own leading four bytes (the *seed*),
//!   little-endian, one byte per slot.
//! - The payload follows, one byte per slot, starting with the very
//!   bytes that served as the seed. The decoder therefore recovers the
//!   length with nothing but the carrier in hand.
//! - Slots left over after the payload are filled with random noise so
//!   the payload boundary leaves no clean zero tail.

pub mod embed;
pub mod extract;
pub mod length;
pub mod sample;

pub use embed::{embed, EmbedReport};
pub use extract::{extract, ExtractReport};
pub use length::{LengthFrame, FRAME_SLOTS};
pub use sample::SampleCodec;

use crate::error::Result;
use crate::format::wav::WavLayout;

/// Payload bytes embeddable in a carrier after the length-frame slots
pub fn payload_capacity(layout: &WavLayout) -> Result<u64> {
    Ok(layout.slot_count()?.saturating_sub(FRAME_SLOTS as u64))
}
