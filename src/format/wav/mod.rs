//! WAV container support
//!
//! This module implements the subset of RIFF/WAV parsing the embedding
//! scheme depends on: walking sub-chunks to the `data` chunk and reading
//! the `fmt ` fields that determine sample geometry.

pub mod header;

pub use header::{FormatTag, WavFormat, WavLayout};

use std::io::{self, Read};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Offset of the first sub-chunk header, right past the RIFF/WAVE preamble
pub const FIRST_CHUNK_OFFSET: u64 = 12;

/// Chunk header (4 byte ID + 4 byte little-endian size)
#[derive(Debug, Clone, Copy)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    /// Read a chunk header from the stream
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut raw = [0u8; 8];
        reader.read_exact(&mut raw)?;

        let mut id = [0u8; 4];
        id.copy_from_slice(&raw[0..4]);

        let size = u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]);

        Ok(ChunkHeader { id, size })
    }

    /// Whether this chunk carries the given tag
    pub fn is(&self, tag: &[u8; 4]) -> bool {
        &self.id == tag
    }

    /// Convert chunk header to bytes
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0..4].copy_from_slice(&self.id);
        bytes[4..8].copy_from_slice(&self.size.to_le_bytes());
        bytes
    }
}
