//! Self-salting length framing
//!
//! The payload length is never stored in the clear. The first four
//! payload bytes, read as a little-endian word, are XORed with the total
//! length; the result occupies the first four sample slots. Those same
//! four payload bytes are then embedded again as ordinary data in the
//! slots that follow, so they are simultaneously the decoder's key and
//! the start of the message. No separate salt ever exists on the wire.

use crate::error::{Error, Result};
use std::io::{Read, Seek, SeekFrom};

/// Sample slots reserved for the length frame
pub const FRAME_SLOTS: usize = 4;

/// Smallest payload the scheme is defined for: one seed's worth
pub const MIN_PAYLOAD_LEN: u64 = FRAME_SLOTS as u64;

/// The 32-bit XOR-obfuscated encoding of payload length.
///
/// Meaningful only together with the payload's leading four bytes; on
/// its own the value carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFrame(u32);

impl LengthFrame {
    /// Build the frame for a payload stream.
    ///
    /// Measures the total length, reads the leading four bytes as the
    /// seed, and leaves the stream rewound to the start so those bytes
    /// get embedded again as genuine payload data.
    pub fn from_payload<P: Read + Seek>(payload: &mut P) -> Result<Self> {
        let len = payload.seek(SeekFrom::End(0))?;
        if len < MIN_PAYLOAD_LEN {
            return Err(Error::PayloadTooSmall(len));
        }
        let len = u32::try_from(len)
            .map_err(|_| Error::invalid_input("payload does not fit a 32-bit length frame"))?;

        payload.seek(SeekFrom::Start(0))?;
        let mut seed = [0u8; FRAME_SLOTS];
        payload.read_exact(&mut seed)?;
        payload.seek(SeekFrom::Start(0))?;

        Ok(Self::from_parts(u32::from_le_bytes(seed), len))
    }

    /// Assemble a frame from its seed and the true payload length
    pub fn from_parts(seed: u32, len: u32) -> Self {
        LengthFrame(seed ^ len)
    }

    /// Reinterpret four low bytes read back from the carrier,
    /// least-significant-first, as a frame
    pub fn from_le_bytes(raw: [u8; 4]) -> Self {
        LengthFrame(u32::from_le_bytes(raw))
    }

    /// Undo the obfuscation given the seed read back from the carrier
    pub fn recover(self, seed: u32) -> u32 {
        self.0 ^ seed
    }

    /// Frame bytes in embed order, least significant first
    pub fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Raw frame value
    pub fn value(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_recover_is_exact_at_boundaries() {
        for len in [0, 4, 14, u32::MAX - 4, u32::MAX] {
            for seed in [0, 1, 0x0403_0201, u32::MAX] {
                let frame = LengthFrame::from_parts(seed, len);
                assert_eq!(frame.recover(seed), len);
            }
        }
    }

    #[test]
    fn test_known_frame_value() {
        // Payload 01 02 03 04 aa*10: seed 0x04030201, length 14.
        let frame = LengthFrame::from_parts(0x0403_0201, 14);
        assert_eq!(frame.value(), 0x0403_0201 ^ 14);
        assert_eq!(frame.recover(0x0403_0201), 14);
    }

    #[test]
    fn test_byte_order_round_trip() {
        let frame = LengthFrame::from_parts(0xAABB_CCDD, 1000);
        assert_eq!(LengthFrame::from_le_bytes(frame.to_le_bytes()), frame);
    }

    #[test]
    fn test_from_payload_rewinds() {
        let mut payload = Cursor::new(vec![0x01, 0x02, 0x03, 0x04, 0xAA, 0xAA]);
        let frame = LengthFrame::from_payload(&mut payload).unwrap();
        assert_eq!(frame.value(), 0x0403_0201 ^ 6);
        assert_eq!(payload.position(), 0);
    }

    #[test]
    fn test_from_payload_rejects_short_payloads() {
        for short in [vec![], vec![1], vec![1, 2, 3]] {
            let len = short.len() as u64;
            let mut payload = Cursor::new(short);
            assert!(matches!(
                LengthFrame::from_payload(&mut payload),
                Err(Error::PayloadTooSmall(l)) if l == len
            ));
        }
    }
}
