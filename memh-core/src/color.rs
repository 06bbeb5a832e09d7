use std::fmt;

// Channel masks keep the top bits that survive quantization.
const MASK_5_BITS: u8 = 0xF8;
const MASK_6_BITS: u8 = 0xFC;
const MASK_3_BITS: u8 = 0xE0;
const MASK_2_BITS: u8 = 0xC0;

/// One source pixel, 8 bits per channel. `a` is `Some` only when the decoded
/// image carried an alpha channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

/// Output color format of the pixel ROM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitDepth {
    /// 8-bit RGB332: R in bits 7-5, G in bits 4-2, B in bits 1-0.
    Rgb332,
    /// 16-bit RGB565: R in bits 15-11, G in bits 10-5, B in bits 4-0.
    Rgb565,
}

impl BitDepth {
    pub fn from_bits(bits: u8) -> anyhow::Result<Self> {
        match bits {
            8 => Ok(BitDepth::Rgb332),
            16 => Ok(BitDepth::Rgb565),
            other => anyhow::bail!("unsupported bit depth {other}, expected 8 or 16"),
        }
    }

    /// Reduce a pixel to a packed color code. Masks truncate each channel to
    /// its top bits; no rounding, matching the hardware convention.
    pub fn quantize(self, px: Pixel) -> ColorCode {
        match self {
            BitDepth::Rgb565 => {
                let r = ((px.r & MASK_5_BITS) as u16) << 8;
                let g = ((px.g & MASK_6_BITS) as u16) << 3;
                let b = ((px.b & MASK_5_BITS) as u16) >> 3;
                ColorCode::Rgb565(r | g | b)
            }
            BitDepth::Rgb332 => {
                // Fully transparent pixels read as black/off.
                if px.a == Some(0) {
                    return ColorCode::Rgb332(0);
                }
                let r = px.r & MASK_3_BITS;
                let g = (px.g & MASK_3_BITS) >> 3;
                let b = (px.b & MASK_2_BITS) >> 6;
                ColorCode::Rgb332(r | g | b)
            }
        }
    }
}

/// A packed color code, carried at its declared width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorCode {
    Rgb332(u8),
    Rgb565(u16),
}

impl fmt::Display for ColorCode {
    /// Fixed-width lowercase hex, as one `.memh` line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCode::Rgb332(v) => write!(f, "{v:02x}"),
            ColorCode::Rgb565(v) => write!(f, "{v:04x}"),
        }
    }
}
