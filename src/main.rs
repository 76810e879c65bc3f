//! wavwhisper CLI
//!
//! Command-line front end for hiding payloads inside PCM WAV audio and
//! getting them back out.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;
use wavwhisper_lib::format::wav::WavLayout;
use wavwhisper_lib::{init, stego, Config, Error};

#[derive(Parser)]
#[command(name = "wavwhisper")]
#[command(about = "Hide payloads in the low bytes of PCM WAV samples", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a payload file inside a WAV carrier
    Embed {
        /// Payload file to hide
        #[arg(short, long)]
        payload: PathBuf,

        /// Carrier WAV file
        #[arg(short, long)]
        carrier: PathBuf,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Recover a hidden payload from a WAV file
    Extract {
        /// Payload-bearing WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Destination for the recovered payload
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show carrier layout and embedding capacity
    Info {
        /// Input WAV path
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config {
        verbose: cli.verbose,
        debug: cli.debug,
    };

    init(config)?;

    match cli.command {
        Commands::Embed {
            payload,
            carrier,
            output,
        } => {
            info!(
                "Embedding {} into {}",
                payload.display(),
                carrier.display()
            );
            cmd_embed(&payload, &carrier, &output)?;
        }
        Commands::Extract { input, output } => {
            info!("Extracting from {}", input.display());
            cmd_extract(&input, &output)?;
        }
        Commands::Info { input } => {
            cmd_info(&input)?;
        }
    }

    Ok(())
}

fn cmd_embed(payload: &Path, carrier: &Path, output: &Path) -> anyhow::Result<()> {
    let mut payload_file = BufReader::new(File::open(payload)?);
    let mut carrier_file = BufReader::new(File::open(carrier)?);
    let mut output_file = BufWriter::new(File::create(output)?);

    match stego::embed(&mut payload_file, &mut carrier_file, &mut output_file) {
        Ok(report) => {
            println!(
                "Whispered {} bytes into {}",
                report.bytes_embedded,
                output.display()
            );
            println!("  Capacity: {} bytes", report.capacity);
            println!("  Padded slots: {}", report.padded_slots);
            if report.truncated() {
                println!(
                    "  Truncated: only {} of {} payload bytes fit",
                    report.bytes_embedded, report.payload_len
                );
            }
            Ok(())
        }
        Err(e) => {
            // Fatal embed errors leave no partial output behind.
            drop(output_file);
            let _ = std::fs::remove_file(output);
            Err(e.into())
        }
    }
}

fn cmd_extract(input: &Path, output: &Path) -> anyhow::Result<()> {
    let mut carrier_file = BufReader::new(File::open(input)?);
    let mut output_file = BufWriter::new(File::create(output)?);

    match stego::extract(&mut carrier_file, &mut output_file) {
        Ok(report) => {
            println!(
                "Heard {} bytes into {}",
                report.bytes_extracted,
                output.display()
            );
            Ok(())
        }
        Err(e) => {
            drop(output_file);
            // A length mismatch keeps its partial payload on disk;
            // every other failure leaves no output behind.
            if !matches!(e, Error::LengthMismatch { .. }) {
                let _ = std::fs::remove_file(output);
            }
            Err(e.into())
        }
    }
}

fn cmd_info(input: &Path) -> anyhow::Result<()> {
    let mut reader = BufReader::new(File::open(input)?);
    let layout = WavLayout::read(&mut reader)?;

    println!("File: {}", input.display());
    println!();
    println!("  Format Tag: {:?}", layout.format.format_tag);
    println!("  Channels: {}", layout.format.channels);
    println!("  Sample Rate: {} Hz", layout.format.sample_rate);
    println!("  Bits Per Sample: {}", layout.format.bits_per_sample);
    println!("  Data Offset: {}", layout.data_offset);
    println!("  Data Size: {} bytes", layout.data_size);

    match stego::payload_capacity(&layout) {
        Ok(capacity) => println!("  Capacity: {} payload bytes", capacity),
        Err(e) => println!("  Capacity: none ({})", e),
    }

    Ok(())
}
