//! Low-byte access to fixed-stride sample slots

use crate::error::Result;
use std::io::{Read, Write};

/// Sample bits given over to payload data
const SLOT_MASK: u32 = 0xFF;

/// Reads and writes the least significant byte of sample slots.
///
/// A slot is one `stride`-byte little-endian sample word. Embedding
/// masks out the low byte and substitutes the payload byte, leaving
/// every higher-order bit of the carrier sample untouched; extraction
/// just reads the low byte back. The asymmetry is deliberate: only the
/// write path may touch carrier bits at all.
#[derive(Debug, Clone, Copy)]
pub struct SampleCodec {
    stride: usize,
}

impl SampleCodec {
    /// Create a codec for the given slot stride in bytes (2 to 4)
    pub fn new(stride: usize) -> Self {
        debug_assert!((2..=4).contains(&stride));
        SampleCodec { stride }
    }

    /// Slot stride in bytes
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Copy one slot from carrier to output with its low byte replaced
    pub fn embed<R: Read, W: Write>(
        &self,
        carrier: &mut R,
        output: &mut W,
        byte: u8,
    ) -> Result<()> {
        let mut slot = [0u8; 4];
        carrier.read_exact(&mut slot[..self.stride])?;

        let mut sample = u32::from_le_bytes(slot);
        sample &= !SLOT_MASK;
        sample |= u32::from(byte);

        output.write_all(&sample.to_le_bytes()[..self.stride])?;
        Ok(())
    }

    /// Read one slot's low byte; sign and higher-order bits are ignored
    pub fn extract<R: Read>(&self, carrier: &mut R) -> Result<u8> {
        let mut slot = [0u8; 4];
        carrier.read_exact(&mut slot[..self.stride])?;
        Ok((u32::from_le_bytes(slot) & SLOT_MASK) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_embed_replaces_only_low_byte() {
        let codec = SampleCodec::new(2);
        let mut carrier = Cursor::new(vec![0x34, 0x12]);
        let mut output = Vec::new();

        codec.embed(&mut carrier, &mut output, 0xAB).unwrap();
        assert_eq!(output, vec![0xAB, 0x12]);
    }

    #[test]
    fn test_embed_three_byte_stride() {
        let codec = SampleCodec::new(3);
        let mut carrier = Cursor::new(vec![0xFF, 0x7F, 0x80]);
        let mut output = Vec::new();

        codec.embed(&mut carrier, &mut output, 0x00).unwrap();
        assert_eq!(output, vec![0x00, 0x7F, 0x80]);
    }

    #[test]
    fn test_embed_four_byte_stride() {
        let codec = SampleCodec::new(4);
        let mut carrier = Cursor::new(vec![0x11, 0x22, 0x33, 0x44]);
        let mut output = Vec::new();

        codec.embed(&mut carrier, &mut output, 0x5A).unwrap();
        assert_eq!(output, vec![0x5A, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_extract_ignores_high_bits() {
        let codec = SampleCodec::new(2);
        // Negative 16-bit sample: high byte all ones.
        let mut carrier = Cursor::new(vec![0x42, 0xFF]);
        assert_eq!(codec.extract(&mut carrier).unwrap(), 0x42);
    }

    #[test]
    fn test_extract_after_embed() {
        let codec = SampleCodec::new(3);
        let mut carrier = Cursor::new(vec![0x10, 0x20, 0x30]);
        let mut packed = Vec::new();
        codec.embed(&mut carrier, &mut packed, 0xC3).unwrap();

        assert_eq!(codec.extract(&mut Cursor::new(packed)).unwrap(), 0xC3);
    }

    #[test]
    fn test_short_slot_is_an_error() {
        let codec = SampleCodec::new(4);
        let mut carrier = Cursor::new(vec![0x01, 0x02]);
        assert!(codec.extract(&mut carrier).is_err());
    }
}
