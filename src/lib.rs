//! wavwhisper - LSB steganography for uncompressed PCM WAV audio
//!
//! Hides an arbitrary payload in the least significant byte of each
//! audio sample of a RIFF/WAVE carrier, and recovers it later. The
//! payload length is never stored in the clear: it is XORed with the
//! payload's own leading four bytes to form a length frame, and unused
//! carrier capacity is filled with random noise so the payload boundary
//! leaves no clean zero tail.
//!
//! # Architecture
//!
//! - `format`: RIFF/WAVE container parsing (chunk walk, `fmt ` fields,
//!   data-region layout)
//! - `stego`: length framing, sample-slot codec, and the embed/extract
//!   pipelines
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//!
//! let mut payload = BufReader::new(File::open("secret.bin")?);
//! let mut carrier = BufReader::new(File::open("song.wav")?);
//! let mut output = BufWriter::new(File::create("innocuous.wav")?);
//!
//! let report = wavwhisper_lib::embed(&mut payload, &mut carrier, &mut output)?;
//! println!("{} bytes hidden", report.bytes_embedded);
//! # Ok::<(), wavwhisper_lib::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod stego;

pub use error::{Error, Result};
pub use stego::{embed, extract, EmbedReport, ExtractReport};

/// wavwhisper version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the wavwhisper library
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
        }
    }
}

/// Initialize the library with the given configuration.
///
/// Installs a tracing subscriber when verbose or debug output is
/// requested; silent otherwise.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(level).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.verbose, false);
        assert_eq!(config.debug, false);
    }

    #[test]
    fn test_init() {
        let config = Config::default();
        assert!(init(config).is_ok());
    }
}
