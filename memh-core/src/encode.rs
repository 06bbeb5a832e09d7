use std::io::Write;

use crate::color::BitDepth;
use crate::source::PixelSource;

/// Encode a pixel source as `.memh` text: one fixed-width lowercase hex code
/// per line, columns outer and rows inner. The consuming display driver
/// writes the panel column by column, so the file must be ordered the same
/// way. Returns the number of lines written.
///
/// Downsampling is nearest-neighbor: output (col, row) reads the source at
/// (row * downsample, col * downsample). Dimensions that do not divide
/// evenly truncate, dropping trailing partial rows/columns.
pub fn encode_rom<W: Write>(
    out: &mut W,
    source: &PixelSource,
    depth: BitDepth,
    downsample: u32,
) -> anyhow::Result<u64> {
    if downsample == 0 {
        anyhow::bail!("downsample factor must be at least 1");
    }

    let out_cols = source.width() / downsample;
    let out_rows = source.height() / downsample;

    let mut lines = 0u64;
    for col in 0..out_cols {
        for row in 0..out_rows {
            let px = source.pixel_at(row * downsample, col * downsample);
            writeln!(out, "{}", depth.quantize(px))?;
            lines += 1;
        }
    }

    Ok(lines)
}
