//! Common test utilities for wavwhisper integration tests
//!
//! Builds synthetic RIFF/WAVE carriers in memory so tests control every
//! byte of the container.

#![allow(dead_code)]

use wavwhisper_lib::format::wav::ChunkHeader;

/// Absolute offset of the first sample byte in a canonical 44-byte
/// header (no extra chunks).
pub const CANONICAL_DATA_START: usize = 44;

/// Assemble a WAV file in memory.
///
/// `between` chunks are inserted between `fmt ` and `data`; `trailing`
/// chunks are appended after the sample data. The RIFF size field is
/// patched to match the final length.
pub fn build_wav_with_chunks(
    bits_per_sample: u16,
    channels: u16,
    data: &[u8],
    between: &[(&[u8; 4], Vec<u8>)],
    trailing: &[(&[u8; 4], Vec<u8>)],
) -> Vec<u8> {
    let sample_rate: u32 = 44100;
    let block_align = channels * (bits_per_sample / 8);
    let byte_rate = sample_rate * u32::from(block_align);

    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&0u32.to_le_bytes()); // patched below
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());

    for (tag, body) in between {
        let header = ChunkHeader {
            id: **tag,
            size: body.len() as u32,
        };
        wav.extend_from_slice(&header.to_bytes());
        wav.extend_from_slice(body);
    }

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data.len() as u32).to_le_bytes());
    wav.extend_from_slice(data);

    for (tag, body) in trailing {
        let header = ChunkHeader {
            id: **tag,
            size: body.len() as u32,
        };
        wav.extend_from_slice(&header.to_bytes());
        wav.extend_from_slice(body);
    }

    let riff_size = (wav.len() - 8) as u32;
    wav[4..8].copy_from_slice(&riff_size.to_le_bytes());

    wav
}

/// Canonical-header mono carrier with deterministic nonzero sample data
pub fn build_carrier(bits_per_sample: u16, slots: usize) -> Vec<u8> {
    let stride = usize::from(bits_per_sample / 8);
    build_wav_with_chunks(bits_per_sample, 1, &sample_data(slots * stride), &[], &[])
}

/// Deterministic patterned sample bytes, nonzero in every position
pub fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) % 251 + 1) as u8).collect()
}

/// Low bytes of the first `count` sample slots of a carrier's data
/// region, given the absolute offset of the first sample byte.
pub fn slot_low_bytes(wav: &[u8], data_start: usize, stride: usize, count: usize) -> Vec<u8> {
    (0..count).map(|i| wav[data_start + i * stride]).collect()
}
