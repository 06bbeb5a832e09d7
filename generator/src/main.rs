use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use memh_core::blob;
use memh_core::color::BitDepth;
use memh_core::encode::encode_rom;
use memh_core::source::{CroppedImage, PixelSource};

#[derive(Parser)]
#[command(name = "memh-gen", about = "Generate .memh memory initialization files for the display subsystem")]
struct Cli {
    #[command(subcommand)]
    memory: Memory,
}

#[derive(Subcommand)]
enum Memory {
    /// ILI9341 controller init command stream
    Ili9341 {
        /// Output .memh file path
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Fibonacci word sequence, a known-good ROM for memory bring-up
    Fibonacci {
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Encode an image file as a pixel ROM
    Image {
        /// Source image path (anything the image crate can decode)
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long)]
        out: PathBuf,

        /// Color depth in bits: 8 (RGB332) or 16 (RGB565)
        #[arg(long, default_value = "8")]
        bitdepth: u8,

        /// Keep every Nth pixel in both directions
        #[arg(long, default_value = "1")]
        downsample: u32,
    },

    /// Red/green test gradient
    Gradient {
        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, default_value = "8")]
        bitdepth: u8,

        #[arg(long, default_value = "2")]
        downsample: u32,
    },

    /// Alternating white/black vertical bars
    Bars {
        #[arg(short, long)]
        out: PathBuf,

        /// Total band count (must be even)
        #[arg(long, default_value = "2")]
        bars: u32,

        #[arg(long, default_value = "8")]
        bitdepth: u8,

        #[arg(long, default_value = "2")]
        downsample: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.memory {
        Memory::Ili9341 { out } => {
            eprintln!("Writing ILI9341 init sequence to {}", out.display());
            let n = write_rom(&out, |w| blob::write_init_sequence(w))?;
            eprintln!("Wrote {n} bytes. Set the ROM_LENGTH parameter to this count.");
        }
        Memory::Fibonacci { out } => {
            eprintln!("Writing Fibonacci sequence to {}", out.display());
            let n = write_rom(&out, |w| blob::write_fibonacci(w))?;
            eprintln!("Wrote {n} words.");
        }
        Memory::Image {
            file,
            out,
            bitdepth,
            downsample,
        } => {
            let depth = BitDepth::from_bits(bitdepth)?;
            let source = load_image(&file)?;
            eprintln!("Writing image ROM to {}", out.display());
            let n = write_rom(&out, |w| encode_rom(w, &source, depth, downsample))?;
            eprintln!("Wrote {n} pixels. Set the ROM_LENGTH parameter to this count.");
        }
        Memory::Gradient {
            out,
            bitdepth,
            downsample,
        } => {
            let depth = BitDepth::from_bits(bitdepth)?;
            eprintln!("Writing gradient to {}", out.display());
            let n = write_rom(&out, |w| {
                encode_rom(w, &PixelSource::Gradient, depth, downsample)
            })?;
            eprintln!("Wrote {n} pixels. Set the ROM_LENGTH parameter to this count.");
        }
        Memory::Bars {
            out,
            bars,
            bitdepth,
            downsample,
        } => {
            let depth = BitDepth::from_bits(bitdepth)?;
            let source = PixelSource::bars(bars, downsample)?;
            eprintln!("Writing {bars} bars to {}", out.display());
            let n = write_rom(&out, |w| encode_rom(w, &source, depth, downsample))?;
            eprintln!("Wrote {n} pixels. Set the ROM_LENGTH parameter to this count.");
        }
    }

    Ok(())
}

/// Decode the source image and crop it for sampling. Decode failures abort
/// before the output file is created.
fn load_image(path: &Path) -> anyhow::Result<PixelSource> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let has_alpha = img.color().has_alpha();
    let rgba = img.into_rgba8();
    let (w, h) = rgba.dimensions();
    eprintln!("Source: {w}x{h} pixels");
    let cropped = CroppedImage::new(rgba.into_raw(), w, h, has_alpha)
        .with_context(|| format!("cannot crop {}", path.display()))?;
    Ok(PixelSource::Image(cropped))
}

/// Open the output file, run the emitter against it, and flush.
fn write_rom<F>(out: &Path, emit: F) -> anyhow::Result<u64>
where
    F: FnOnce(&mut BufWriter<File>) -> anyhow::Result<u64>,
{
    let file = File::create(out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    let mut writer = BufWriter::new(file);
    let n = emit(&mut writer)?;
    writer.flush()?;
    Ok(n)
}
