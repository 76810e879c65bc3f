//! WAV header parsing and carrier layout

use super::{ChunkHeader, DATA_CHUNK, FIRST_CHUNK_OFFSET, FMT_CHUNK, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use std::io::{Read, Seek, SeekFrom};
use tracing::warn;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed integer samples)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// A-Law
    ALaw,
    /// Mu-Law
    MuLaw,
    /// Extensible format
    Extensible,
    /// Unknown format
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::ALaw => 0x0006,
            FormatTag::MuLaw => 0x0007,
            FormatTag::Extensible => 0xFFFE,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// WAV format chunk data
#[derive(Debug, Clone)]
pub struct WavFormat {
    /// Format tag (codec ID)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Block alignment
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Parse WAV format chunk from its raw body
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < 16 {
            return Err(Error::malformed("fmt chunk too small"));
        }

        let format_tag = u16::from_le_bytes([data[0], data[1]]).into();
        let channels = u16::from_le_bytes([data[2], data[3]]);
        let sample_rate = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let byte_rate = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        let block_align = u16::from_le_bytes([data[12], data[13]]);
        let bits_per_sample = u16::from_le_bytes([data[14], data[15]]);

        Ok(WavFormat {
            format_tag,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        })
    }
}

/// Derived, read-only view of a carrier file.
///
/// `data_offset` is the absolute offset of the `data` tag itself; the
/// sample region is the `data_size` bytes starting 8 past it. The size
/// is whatever the file declares and is never trusted beyond bounding
/// slot arithmetic.
#[derive(Debug, Clone)]
pub struct WavLayout {
    /// Parsed `fmt ` chunk
    pub format: WavFormat,
    /// Absolute offset of the `data` chunk tag
    pub data_offset: u64,
    /// Declared byte length of the sample region
    pub data_size: u32,
}

impl WavLayout {
    /// Parse the RIFF preamble and walk sub-chunks until `data` is found.
    ///
    /// The walk starts at byte 12 and reads an 8-byte chunk header per
    /// iteration, seeking past each body by its declared length, so
    /// zero-length chunks cost one iteration like any other. The `fmt `
    /// chunk is parsed on the way; every other non-`data` chunk is
    /// skipped unread. Expects the stream positioned at the start of the
    /// file.
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let mut preamble = [0u8; 12];
        reader
            .read_exact(&mut preamble)
            .map_err(|e| Error::malformed(format!("failed to read RIFF header: {}", e)))?;

        if &preamble[0..4] != RIFF_MAGIC {
            return Err(Error::malformed("not a RIFF file"));
        }
        if &preamble[8..12] != WAVE_MAGIC {
            return Err(Error::malformed("not a WAVE file"));
        }

        reader.seek(SeekFrom::Start(FIRST_CHUNK_OFFSET))?;

        let mut format: Option<WavFormat> = None;
        loop {
            let offset = reader.stream_position()?;
            let chunk = match ChunkHeader::read(reader) {
                Ok(chunk) => chunk,
                Err(_) => return Err(Error::malformed("data chunk not found")),
            };

            if chunk.is(DATA_CHUNK) {
                let format =
                    format.ok_or_else(|| Error::malformed("fmt chunk not found before data"))?;
                return Ok(WavLayout {
                    format,
                    data_offset: offset,
                    data_size: chunk.size,
                });
            }

            if chunk.is(FMT_CHUNK) {
                let mut body = vec![0u8; chunk.size as usize];
                reader
                    .read_exact(&mut body)
                    .map_err(|e| Error::malformed(format!("failed to read fmt chunk: {}", e)))?;

                let parsed = WavFormat::from_bytes(&body)?;
                if parsed.format_tag != FormatTag::Pcm {
                    warn!(
                        "audio format tag {:?} is not integer PCM, embedded bytes may not survive",
                        parsed.format_tag
                    );
                }
                format = Some(parsed);
            } else {
                reader
                    .seek(SeekFrom::Current(i64::from(chunk.size)))
                    .map_err(|e| Error::malformed(format!("failed to skip chunk: {}", e)))?;
            }
        }
    }

    /// Absolute offset of the first sample byte
    pub fn data_start(&self) -> u64 {
        self.data_offset + 8
    }

    /// One past the last byte of the declared sample region
    pub fn data_end(&self) -> u64 {
        self.data_start() + u64::from(self.data_size)
    }

    /// Bytes per sample slot.
    ///
    /// The scheme needs a full low byte of slack under the significant
    /// sample bits, so widths below 16 are refused, and the slot word
    /// is capped at 32 bits.
    pub fn sample_stride(&self) -> Result<usize> {
        let bits = self.format.bits_per_sample;
        if !(16..=32).contains(&bits) {
            return Err(Error::UnsupportedSampleWidth { bits });
        }
        Ok(usize::from(bits / 8))
    }

    /// Number of whole sample slots in the declared data region.
    ///
    /// Trailing bytes of a region that is not slot-aligned are not
    /// counted; they are carried through untouched.
    pub fn slot_count(&self) -> Result<u64> {
        Ok(u64::from(self.data_size) / self.sample_stride()? as u64)
    }
}
