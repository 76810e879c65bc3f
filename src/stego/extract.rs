//! Extract pipeline: payload-bearing carrier in, payload out

use super::length::{LengthFrame, FRAME_SLOTS};
use super::sample::SampleCodec;
use crate::error::{Error, Result};
use crate::format::wav::WavLayout;
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::debug;

/// Summary of a completed extract run
#[derive(Debug, Clone, Copy)]
pub struct ExtractReport {
    /// Payload length recovered from the length frame
    pub recovered_len: u32,
    /// Bytes actually written to the destination
    pub bytes_extracted: u64,
}

/// Recover a hidden payload from `carrier`, writing it to `output`.
///
/// Reads the length frame from the first four sample slots, the seed
/// from the four after it, and re-reads the seed slots as the start of
/// the payload proper. The slot count of the declared data region
/// bounds the read loop regardless of what the frame claims; if the
/// region runs out first, the partial payload is flushed to `output`
/// and `LengthMismatch` is returned, since a frame the carrier cannot
/// satisfy means a corrupted or foreign file.
pub fn extract<C, W>(carrier: &mut C, output: &mut W) -> Result<ExtractReport>
where
    C: Read + Seek,
    W: Write,
{
    carrier.seek(SeekFrom::Start(0))?;
    let layout = WavLayout::read(carrier)?;
    let stride = layout.sample_stride()?;
    let codec = SampleCodec::new(stride);

    let slots = layout.slot_count()?;
    let frame_and_seed = 2 * FRAME_SLOTS as u64;
    if slots < frame_and_seed {
        return Err(Error::CapacityTooSmall {
            need: frame_and_seed,
            have: slots,
        });
    }

    carrier.seek(SeekFrom::Start(layout.data_start()))?;

    // Frame slots, then seed slots, both assembled low-byte-first.
    let mut frame_raw = [0u8; FRAME_SLOTS];
    for byte in frame_raw.iter_mut() {
        *byte = codec.extract(carrier)?;
    }
    let mut seed_raw = [0u8; FRAME_SLOTS];
    for byte in seed_raw.iter_mut() {
        *byte = codec.extract(carrier)?;
    }

    let frame = LengthFrame::from_le_bytes(frame_raw);
    let recovered_len = frame.recover(u32::from_le_bytes(seed_raw));
    debug!("recovered payload length {}", recovered_len);

    // The seed slots double as the first four payload bytes, so the
    // main loop starts over from them.
    carrier.seek(SeekFrom::Start(
        layout.data_start() + (FRAME_SLOTS * stride) as u64,
    ))?;

    let payload_slots = slots - FRAME_SLOTS as u64;
    let mut bytes_extracted = 0u64;
    while bytes_extracted < u64::from(recovered_len) && bytes_extracted < payload_slots {
        let byte = codec.extract(carrier)?;
        output.write_all(&[byte])?;
        bytes_extracted += 1;
    }
    output.flush()?;

    if bytes_extracted < u64::from(recovered_len) {
        return Err(Error::LengthMismatch {
            expected: u64::from(recovered_len),
            actual: bytes_extracted,
        });
    }

    debug!("heard {} bytes", bytes_extracted);

    Ok(ExtractReport {
        recovered_len,
        bytes_extracted,
    })
}
