use anyhow::Context;

use crate::color::Pixel;

/// Logical grid for procedurally generated patterns, matching the display.
pub const GRID_WIDTH: u32 = 320;
pub const GRID_HEIGHT: u32 = 240;

/// Images are center-cropped vertically to this many rows.
pub const CROP_HEIGHT: u32 = 240;

/// Where pixels come from. A closed set, picked once at startup.
pub enum PixelSource {
    /// A decoded image, already cropped to [`CROP_HEIGHT`] rows.
    Image(CroppedImage),
    /// Red ramps with row, green with column, blue stays 0.
    Gradient,
    /// Alternating white/black vertical bands.
    Bars { wrap: u32, downsample: u32 },
}

impl PixelSource {
    /// Build the bars pattern. `bars` is the total band count across the
    /// output width and must be even so the bands split symmetrically.
    pub fn bars(bars: u32, downsample: u32) -> anyhow::Result<Self> {
        if bars == 0 || bars % 2 != 0 {
            anyhow::bail!("bar count must be a positive even number, got {bars}");
        }
        if downsample == 0 {
            anyhow::bail!("downsample factor must be at least 1");
        }
        let wrap = GRID_WIDTH / downsample * (bars / 2);
        Ok(PixelSource::Bars { wrap, downsample })
    }

    pub fn width(&self) -> u32 {
        match self {
            PixelSource::Image(img) => img.width,
            _ => GRID_WIDTH,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            PixelSource::Image(_) => CROP_HEIGHT,
            _ => GRID_HEIGHT,
        }
    }

    /// Pixel at (row, col) in source-grid coordinates. Coordinates must be
    /// inside the declared width/height.
    pub fn pixel_at(&self, row: u32, col: u32) -> Pixel {
        match self {
            PixelSource::Image(img) => img.pixel_at(row, col),
            // Green wraps past column 255 to stay in byte range.
            PixelSource::Gradient => Pixel::rgb(row as u8, (col % 256) as u8, 0),
            PixelSource::Bars { wrap, downsample } => {
                let out_col = col / downsample;
                if out_col % wrap < wrap / 2 {
                    Pixel::WHITE
                } else {
                    Pixel::BLACK
                }
            }
        }
    }
}

/// RGBA8 pixel buffer cropped vertically around center to [`CROP_HEIGHT`]
/// rows, width preserved. The crop drops `(h - 240) / 2` rows from the top.
pub struct CroppedImage {
    rgba: Vec<u8>,
    width: u32,
    has_alpha: bool,
}

impl CroppedImage {
    /// `rgba` is the decoded image, row-major RGBA8. `has_alpha` records
    /// whether the original file carried an alpha channel; without one the
    /// transparency rule never fires.
    pub fn new(rgba: Vec<u8>, width: u32, height: u32, has_alpha: bool) -> anyhow::Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        anyhow::ensure!(
            rgba.len() == expected,
            "pixel buffer is {} bytes, expected {expected} for {width}x{height} RGBA",
            rgba.len()
        );
        if height < CROP_HEIGHT {
            anyhow::bail!(
                "image is {height} rows tall, needs at least {CROP_HEIGHT} to crop"
            );
        }
        let top = ((height - CROP_HEIGHT) / 2) as usize;
        let stride = (width as usize) * 4;
        let start = top * stride;
        let end = start + (CROP_HEIGHT as usize) * stride;
        let cropped = rgba
            .get(start..end)
            .context("crop window out of bounds")?
            .to_vec();
        Ok(Self {
            rgba: cropped,
            width,
            has_alpha,
        })
    }

    fn pixel_at(&self, row: u32, col: u32) -> Pixel {
        let off = ((row * self.width + col) * 4) as usize;
        Pixel {
            r: self.rgba[off],
            g: self.rgba[off + 1],
            b: self.rgba[off + 2],
            a: self.has_alpha.then(|| self.rgba[off + 3]),
        }
    }
}
