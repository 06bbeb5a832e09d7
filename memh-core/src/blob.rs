//! Static ROM contents with no relationship to the pixel pipeline: the
//! ILI9341 controller init command stream and a Fibonacci word sequence
//! useful as a known-good memory for bring-up.

use std::io::Write;

/// ILI9341 register opcodes, from the Adafruit driver defines and Section
/// 8.1 of the datasheet.
#[derive(Debug, Copy, Clone)]
#[repr(u8)]
pub enum Register {
    /// No-op register (do nothing)
    Nop = 0x00,
    /// Software reset
    Swreset = 0x01,
    /// Read display id info
    Rddid = 0x04,
    /// Read display status
    Rddst = 0x09,
    /// Enter sleep mode
    Slpin = 0x10,
    /// Exit sleep mode
    Slpout = 0x11,
    /// Partial mode on
    Plton = 0x12,
    /// Normal mode on
    Noron = 0x13,
    /// Read display power mode
    Rdmode = 0x0A,
    /// Read display MADCTL
    Rdmadctl = 0x0B,
    /// Read display pixel format
    Rdpixfmt = 0x0C,
    /// Read display image format
    Rdimgfmt = 0x0D,
    /// Read display self-diagnostic result
    Rdselfdiag = 0x0F,
    /// Display inversion off
    Invoff = 0x20,
    /// Display inversion on
    Invon = 0x21,
    /// Gamma set
    Gammaset = 0x26,
    /// Display off
    Dispoff = 0x28,
    /// Display on
    Dispon = 0x29,
    /// Column address set
    Caset = 0x2A,
    /// Page address set
    Paset = 0x2B,
    /// Memory write
    Ramwr = 0x2C,
    /// Memory read
    Ramrd = 0x2E,
    /// Partial area
    Ptlar = 0x30,
    /// Vertical scrolling definition
    Vscrdef = 0x33,
    /// Memory access control
    Madctl = 0x36,
    /// Vertical scrolling start address
    Vscrsadd = 0x37,
    /// COLMOD: pixel format set
    Pixfmt = 0x3A,
    /// Frame rate control (normal mode / full colors)
    Frmctr1 = 0xB1,
    /// Frame rate control (idle mode / 8 colors)
    Frmctr2 = 0xB2,
    /// Frame rate control (partial mode / full colors)
    Frmctr3 = 0xB3,
    /// Display inversion control
    Invctr = 0xB4,
    /// Display function control
    Dfunctr = 0xB6,
    Pwctr1 = 0xC0,
    Pwctr2 = 0xC1,
    Pwctr3 = 0xC2,
    Pwctr4 = 0xC3,
    Pwctr5 = 0xC4,
    /// VCOM control 1
    Vmctr1 = 0xC5,
    /// VCOM control 2
    Vmctr2 = 0xC7,
    Rdid1 = 0xDA,
    Rdid2 = 0xDB,
    Rdid3 = 0xDC,
    Rdid4 = 0xDD,
    /// Positive gamma correction
    Gmctrp1 = 0xE0,
    /// Negative gamma correction
    Gmctrn1 = 0xE1,
    Pwctr6 = 0xFC,
}

impl Register {
    pub fn opcode(self) -> u8 {
        self as u8
    }
}

/// ILI9341 power-on command stream, consumed by the init state machine in
/// the HDL. Each group is a data-byte count followed by the command opcode
/// and its data; 0xFF marks a bare command (no data, insert a delay), and a
/// single 0x00 terminates the stream.
pub const INIT_SEQUENCE: &[u8] = &[
    0xFF, Register::Swreset as u8,
    3, 0xEF, 0x03, 0x80, 0x02,
    3, 0xCF, 0x00, 0xC1, 0x30,
    4, 0xED, 0x64, 0x03, 0x12, 0x81,
    3, 0xE8, 0x85, 0x00, 0x78,
    5, 0xCB, 0x39, 0x2C, 0x00, 0x34, 0x02,
    1, 0xF7, 0x20,
    2, 0xEA, 0x00, 0x00,
    // Power control VRH[5:0]
    1, Register::Pwctr1 as u8, 0x23,
    // Power control SAP[2:0]; BT[3:0]
    1, Register::Pwctr2 as u8, 0x10,
    // VCM control
    2, Register::Vmctr1 as u8, 0x3E, 0x28,
    1, Register::Vmctr2 as u8, 0x86,
    1, Register::Madctl as u8, 0x48,
    // Vertical scroll zero
    1, Register::Vscrsadd as u8, 0x00,
    1, Register::Pixfmt as u8, 0x55,
    2, Register::Frmctr1 as u8, 0x00, 0x18,
    3, Register::Dfunctr as u8, 0x08, 0x82, 0x27,
    // 3Gamma function disable
    1, 0xF2, 0x00,
    1, Register::Gammaset as u8, 0x01,
    15, Register::Gmctrp1 as u8, 0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E,
    0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09, 0x00,
    15, Register::Gmctrn1 as u8, 0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31,
    0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36, 0x0F,
    0xFF, Register::Slpout as u8,
    0xFF, Register::Dispon as u8,
    // X window 0..239, Y window 0..495
    4, Register::Caset as u8, 0x00, 0x00, 0x00, 0xEF,
    4, Register::Paset as u8, 0x00, 0x00, 0x01, 0xEF,
    0x00,
];

/// Write the init command stream as two-hex-digit lines. Returns the line
/// count, which is also the byte count.
pub fn write_init_sequence<W: Write>(out: &mut W) -> anyhow::Result<u64> {
    for b in INIT_SEQUENCE {
        writeln!(out, "{b:02x}")?;
    }
    Ok(INIT_SEQUENCE.len() as u64)
}

/// How many Fibonacci terms the sequence ROM holds. Term 47 is the largest
/// that fits in a 32-bit word.
pub const FIBONACCI_TERMS: usize = 48;

fn fibonacci_table(count: usize) -> Vec<u32> {
    let mut table = Vec::with_capacity(count);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..count {
        table.push(a as u32);
        (a, b) = (b, a + b);
    }
    table
}

/// Write [`FIBONACCI_TERMS`] Fibonacci terms as eight-hex-digit lines.
/// Returns the line count.
pub fn write_fibonacci<W: Write>(out: &mut W) -> anyhow::Result<u64> {
    let table = fibonacci_table(FIBONACCI_TERMS);
    for term in &table {
        writeln!(out, "{term:08x}")?;
    }
    Ok(table.len() as u64)
}
