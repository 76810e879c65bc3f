//! Embed pipeline: carrier in, payload-bearing carrier out

use super::length::{LengthFrame, FRAME_SLOTS};
use super::sample::SampleCodec;
use crate::error::{Error, Result};
use crate::format::wav::WavLayout;
use rand::Rng;
use std::io::{self, Read, Seek, SeekFrom, Write};
use tracing::debug;

/// Summary of a completed embed run
#[derive(Debug, Clone, Copy)]
pub struct EmbedReport {
    /// Real payload bytes written into sample slots, padding excluded
    pub bytes_embedded: u64,
    /// Payload capacity of the carrier in bytes
    pub capacity: u64,
    /// Slots filled with random noise after the payload ran out
    pub padded_slots: u64,
    /// Total payload length, whether or not all of it fit
    pub payload_len: u64,
}

impl EmbedReport {
    /// Whether the payload was cut off at the carrier's capacity
    pub fn truncated(&self) -> bool {
        self.bytes_embedded < self.payload_len
    }
}

/// Hide `payload` inside the WAV `carrier`, writing the result to
/// `output`.
///
/// The output is byte-identical to the carrier everywhere except the
/// low byte of each sample slot in the data region: four slots of
/// length frame, then payload bytes, then random noise to the end of
/// the region. A payload longer than the carrier's capacity is cut off
/// without error; the returned count is the caller's signal.
///
/// The payload stream must be seekable because its leading four bytes
/// are read twice, once as the length-frame seed and once as data.
pub fn embed<P, C, W>(payload: &mut P, carrier: &mut C, output: &mut W) -> Result<EmbedReport>
where
    P: Read + Seek,
    C: Read + Seek,
    W: Write,
{
    carrier.seek(SeekFrom::Start(0))?;
    let layout = WavLayout::read(carrier)?;
    let stride = layout.sample_stride()?;
    let codec = SampleCodec::new(stride);

    let slots = layout.slot_count()?;
    if slots < FRAME_SLOTS as u64 {
        return Err(Error::CapacityTooSmall {
            need: FRAME_SLOTS as u64,
            have: slots,
        });
    }
    let capacity = slots - FRAME_SLOTS as u64;

    // The frame must exist before any payload byte is consumed; the
    // stream comes back rewound so the seed bytes embed again as data.
    let payload_len = payload.seek(SeekFrom::End(0))?;
    let frame = LengthFrame::from_payload(payload)?;

    // Everything up to the data region passes through verbatim.
    carrier.seek(SeekFrom::Start(0))?;
    let data_start = layout.data_start();
    io::copy(&mut carrier.by_ref().take(data_start), output)?;

    for byte in frame.to_le_bytes() {
        codec.embed(carrier, output, byte)?;
    }

    let mut bytes_embedded = 0u64;
    let mut padded_slots = 0u64;
    let mut finished = false;
    let mut rng = rand::thread_rng();

    for _ in 0..capacity {
        let mut byte = 0u8;
        if !finished {
            let mut one = [0u8; 1];
            if payload.read(&mut one)? == 0 {
                finished = true;
            } else {
                byte = one[0];
                bytes_embedded += 1;
            }
        }
        if finished {
            byte = rng.gen();
            padded_slots += 1;
        }
        codec.embed(carrier, output, byte)?;
    }

    // Region remainder (when data_size is not slot-aligned) and all
    // trailing chunks pass through verbatim as well.
    io::copy(carrier, output)?;
    output.flush()?;

    debug!(
        "whispered {} of {} payload bytes, {} slots padded",
        bytes_embedded, payload_len, padded_slots
    );

    Ok(EmbedReport {
        bytes_embedded,
        capacity,
        padded_slots,
        payload_len,
    })
}
