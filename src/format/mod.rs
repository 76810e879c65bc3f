//! Container format handling
//!
//! RIFF/WAVE is the only carrier format wavwhisper understands. This
//! module produces the read-only layout view that the stego pipelines
//! build on.

pub mod wav;

pub use wav::{ChunkHeader, FormatTag, WavFormat, WavLayout};
