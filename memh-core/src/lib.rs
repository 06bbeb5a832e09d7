pub mod blob;
pub mod color;
pub mod encode;
pub mod source;

#[cfg(test)]
mod tests {
    use crate::blob;
    use crate::color::{BitDepth, ColorCode, Pixel};
    use crate::encode::encode_rom;
    use crate::source::{CroppedImage, PixelSource, CROP_HEIGHT};

    fn lines(buf: &[u8]) -> Vec<&str> {
        std::str::from_utf8(buf).unwrap().lines().collect()
    }

    #[test]
    fn rgb565_extremes() {
        let d = BitDepth::Rgb565;
        assert_eq!(d.quantize(Pixel::WHITE), ColorCode::Rgb565(0xFFFF));
        assert_eq!(d.quantize(Pixel::BLACK), ColorCode::Rgb565(0x0000));
        assert_eq!(d.quantize(Pixel::rgb(255, 0, 0)), ColorCode::Rgb565(0xF800));
    }

    #[test]
    fn rgb332_keeps_top_red_bits_only() {
        let code = BitDepth::Rgb332.quantize(Pixel::rgb(248, 0, 0));
        assert_eq!(code, ColorCode::Rgb332(0xE0));
    }

    #[test]
    fn fully_transparent_reads_as_black() {
        let code = BitDepth::Rgb332.quantize(Pixel::rgba(255, 255, 255, 0));
        assert_eq!(code, ColorCode::Rgb332(0x00));
        // Alpha only matters at exactly zero.
        let code = BitDepth::Rgb332.quantize(Pixel::rgba(255, 255, 255, 1));
        assert_eq!(code, ColorCode::Rgb332(0xFF));
    }

    #[test]
    fn alpha_ignored_at_16_bits() {
        let code = BitDepth::Rgb565.quantize(Pixel::rgba(255, 255, 255, 0));
        assert_eq!(code, ColorCode::Rgb565(0xFFFF));
    }

    #[test]
    fn hex_lines_are_fixed_width() {
        assert_eq!(ColorCode::Rgb332(0x07).to_string(), "07");
        assert_eq!(ColorCode::Rgb565(0x001F).to_string(), "001f");
    }

    #[test]
    fn bad_bit_depth_is_rejected() {
        assert!(BitDepth::from_bits(12).is_err());
    }

    #[test]
    fn gradient_line_count_at_half_resolution() {
        let mut buf = Vec::new();
        let n = encode_rom(&mut buf, &PixelSource::Gradient, BitDepth::Rgb332, 2).unwrap();
        assert_eq!(n, 160 * 120);
        assert_eq!(lines(&buf).len(), 19200);
    }

    #[test]
    fn gradient_is_column_major() {
        let mut buf = Vec::new();
        encode_rom(&mut buf, &PixelSource::Gradient, BitDepth::Rgb332, 1).unwrap();
        let lines = lines(&buf);
        // Column 0: red ramps down the rows, green stays 0.
        assert_eq!(lines[0], "00");
        let px = BitDepth::Rgb332.quantize(Pixel::rgb(239, 0, 0));
        assert_eq!(lines[239], px.to_string());
        // First entry of column 1 picks up a green step instead.
        let px = BitDepth::Rgb332.quantize(Pixel::rgb(0, 1, 0));
        assert_eq!(lines[240], px.to_string());
    }

    #[test]
    fn bars_split_at_half_wrap() {
        let source = PixelSource::bars(2, 2).unwrap();
        let mut buf = Vec::new();
        let n = encode_rom(&mut buf, &source, BitDepth::Rgb332, 2).unwrap();
        assert_eq!(n, 160 * 120);

        // wrap = 160 * 1, so output columns 0..80 are white, 80..160 black.
        let lines = lines(&buf);
        let col = |c: usize| &lines[c * 120..(c + 1) * 120];
        assert!(col(0).iter().all(|l| *l == "ff"));
        assert!(col(79).iter().all(|l| *l == "ff"));
        assert!(col(80).iter().all(|l| *l == "00"));
        assert!(col(159).iter().all(|l| *l == "00"));
    }

    #[test]
    fn odd_or_zero_bar_count_is_rejected() {
        assert!(PixelSource::bars(3, 2).is_err());
        assert!(PixelSource::bars(0, 2).is_err());
    }

    #[test]
    fn zero_downsample_is_rejected() {
        let mut buf = Vec::new();
        assert!(encode_rom(&mut buf, &PixelSource::Gradient, BitDepth::Rgb332, 0).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn encoding_is_deterministic() {
        let source = PixelSource::bars(4, 2).unwrap();
        let mut a = Vec::new();
        let mut b = Vec::new();
        encode_rom(&mut a, &source, BitDepth::Rgb565, 2).unwrap();
        encode_rom(&mut b, &source, BitDepth::Rgb565, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn undersized_image_fails_to_crop() {
        let rgba = vec![0u8; 4 * 100 * 4];
        assert!(CroppedImage::new(rgba, 4, 100, false).is_err());
    }

    #[test]
    fn crop_centers_vertically() {
        // 2 wide, 242 tall: one spare row above and below the crop window.
        let h = CROP_HEIGHT + 2;
        let mut rgba = vec![0u8; (2 * h * 4) as usize];
        // Mark row 1 (the first row inside the crop) red.
        let stride = 2 * 4;
        rgba[stride] = 200;
        let img = CroppedImage::new(rgba, 2, h, false).unwrap();
        let source = PixelSource::Image(img);
        assert_eq!(source.height(), CROP_HEIGHT);
        assert_eq!(source.pixel_at(0, 0), Pixel::rgb(200, 0, 0));
    }

    #[test]
    fn image_rom_uses_cropped_dimensions() {
        let w = 8u32;
        let h = 300u32;
        let rgba = vec![0x10u8; (w * h * 4) as usize];
        let source = PixelSource::Image(CroppedImage::new(rgba, w, h, false).unwrap());
        let mut buf = Vec::new();
        let n = encode_rom(&mut buf, &source, BitDepth::Rgb565, 2).unwrap();
        assert_eq!(n, (w / 2) as u64 * (CROP_HEIGHT / 2) as u64);
    }

    #[test]
    fn init_sequence_emits_one_line_per_byte() {
        let mut buf = Vec::new();
        let n = blob::write_init_sequence(&mut buf).unwrap();
        assert_eq!(n, blob::INIT_SEQUENCE.len() as u64);

        let lines = lines(&buf);
        assert_eq!(lines.len(), blob::INIT_SEQUENCE.len());
        // Bare-command marker, then SWRESET.
        assert_eq!(lines[0], "ff");
        assert_eq!(lines[1], "01");
        assert_eq!(*lines.last().unwrap(), "00");
    }

    #[test]
    fn fibonacci_rom_is_48_words() {
        let mut buf = Vec::new();
        let n = blob::write_fibonacci(&mut buf).unwrap();
        assert_eq!(n, 48);

        let lines = lines(&buf);
        assert_eq!(lines[0], "00000000");
        assert_eq!(lines[1], "00000001");
        assert_eq!(lines[5], "00000005");
        assert_eq!(lines[47], "b11924e1");
    }
}
