use crate::config::ProcessingConfig;
use image::RgbaImage;
use std::io::{self, Write};

/// Compute 8-bit luminance from 8-bit RGB channels using the BT.601
/// integer weights.
///
/// Channels are widened to 16-bit scale (`c * 257`) and combined as
/// `(19595*R + 38470*G + 7471*B + (1 << 15)) >> 24`. The weights sum
/// to 65536, so the shift and rounding bias bring the result back to
/// the 0-255 range. Output depends on these exact constants, so they
/// must not be swapped for a float formula.
///
/// # Arguments
/// * `r`, `g`, `b` - 8-bit channel values; alpha is ignored upstream
///
/// # Returns
/// Luminance in `[0, 255]`
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let r = r as u32 * 257;
    let g = g as u32 * 257;
    let b = b as u32 * 257;

    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}

/// Map a luminance value to an index into the character ramp.
///
/// `index = luminance * (ramp_len - 1) / 255`, integer division with
/// floor semantics. For any luminance in `[0, 255]` the index is in
/// `[0, ramp_len - 1]`: index 0 is the darkest bucket, the last index
/// the brightest.
///
/// # Arguments
/// * `luminance` - Luminance in `[0, 255]`
/// * `ramp_len` - Number of characters in the ramp (must be >= 1)
///
/// # Returns
/// The ramp index for this luminance bucket
pub fn ramp_index(luminance: u8, ramp_len: usize) -> usize {
    luminance as usize * (ramp_len - 1) / 255
}

/// Walk the preprocessed image row by row and write one ramp character
/// per pixel, each row terminated by `\n`.
///
/// Rows are assembled in a reusable buffer and written with a single
/// call each, so the sink sees whole lines. A write failure aborts the
/// pass immediately and is returned to the caller; whatever was already
/// written stays written.
///
/// # Arguments
/// * `img` - The preprocessed image (alpha channel ignored)
/// * `config` - Conversion settings; `config.ramp` must be non-empty
/// * `sink` - Destination for the text output
///
/// # Returns
/// `Ok(())` on completion, or the first write error
pub fn rasterize(
    img: &RgbaImage,
    config: &ProcessingConfig,
    sink: &mut impl Write,
) -> io::Result<()> {
    // Indexing chars, not bytes, so multi-byte ramps bucket correctly
    let ramp: Vec<char> = config.ramp.chars().collect();
    assert!(!ramp.is_empty(), "character ramp must not be empty");

    let (width, height) = img.dimensions();
    log::info!("rasterizing {width}x{height} image with {} ramp characters", ramp.len());

    let mut row = String::with_capacity(width as usize + 1);
    for y in 0..height {
        row.clear();
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            let lum = luminance(pixel[0], pixel[1], pixel[2]);
            row.push(ramp[ramp_index(lum, ramp.len())]);
        }
        row.push('\n');
        sink.write_all(row.as_bytes())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn config_with_ramp(ramp: &str) -> ProcessingConfig {
        ProcessingConfig {
            ramp: ramp.to_string(),
            ..ProcessingConfig::unset()
        }
    }

    #[test]
    fn test_luminance_black_and_white() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_luminance_uniform_gray_is_identity() {
        for v in 0..=255u8 {
            let lum = luminance(v, v, v);
            assert!(lum.abs_diff(v) <= 1, "gray {v} mapped to {lum}");
        }
    }

    #[test]
    fn test_luminance_monotonic_in_gray() {
        let mut prev = 0;
        for v in 0..=255u8 {
            let lum = luminance(v, v, v);
            assert!(lum >= prev, "luminance decreased at gray {v}");
            prev = lum;
        }
    }

    #[test]
    fn test_luminance_green_dominates() {
        assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
        assert!(luminance(255, 0, 0) > luminance(0, 0, 255));
    }

    #[test]
    fn test_ramp_index_in_bounds_for_all_inputs() {
        for len in 1..=16usize {
            for lum in 0..=255u8 {
                let idx = ramp_index(lum, len);
                assert!(idx < len, "index {idx} out of bounds for len {len}");
            }
        }
    }

    #[test]
    fn test_ramp_index_extremes() {
        assert_eq!(ramp_index(0, 9), 0);
        assert_eq!(ramp_index(255, 9), 8);
        // Single-character ramps always pick index 0
        assert_eq!(ramp_index(255, 1), 0);
    }

    #[test]
    fn test_ramp_index_monotonic() {
        for len in 2..=10usize {
            let mut prev = 0;
            for lum in 0..=255u8 {
                let idx = ramp_index(lum, len);
                assert!(idx >= prev);
                prev = idx;
            }
        }
    }

    #[test]
    fn test_solid_black_maps_to_darkest() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let mut out = Vec::new();
        rasterize(&img, &config_with_ramp(" #"), &mut out).unwrap();
        assert_eq!(out, b"  \n  \n");
    }

    #[test]
    fn test_solid_white_maps_to_brightest() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let mut out = Vec::new();
        rasterize(&img, &config_with_ramp(" #"), &mut out).unwrap();
        assert_eq!(out, b"##\n##\n");
    }

    #[test]
    fn test_output_shape_matches_image() {
        let img = RgbaImage::new(7, 3);
        let mut out = Vec::new();
        rasterize(&img, &config_with_ramp(".:-=+*#%@"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.chars().count(), 7);
        }
    }

    #[test]
    fn test_every_character_comes_from_ramp() {
        let ramp = ".:-=+*#%@";
        let mut img = RgbaImage::new(16, 16);
        for (x, y, p) in img.enumerate_pixels_mut() {
            let v = ((x * 37 + y * 11) % 256) as u8;
            *p = Rgba([v, 255 - v, v / 3, 255]);
        }

        let mut out = Vec::new();
        rasterize(&img, &config_with_ramp(ramp), &mut out).unwrap();

        for ch in String::from_utf8(out).unwrap().chars() {
            assert!(ch == '\n' || ramp.contains(ch), "unexpected character {ch:?}");
        }
    }

    #[test]
    fn test_unicode_ramp_indexes_by_character() {
        // Multi-byte ramp: darkest is a full block, brightest a space
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let mut out = Vec::new();
        rasterize(&img, &config_with_ramp("█ "), &mut out).unwrap();
        assert_eq!(out, b" \n");
    }

    #[test]
    fn test_write_error_aborts() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let img = RgbaImage::new(4, 4);
        let err = rasterize(&img, &config_with_ramp(" #"), &mut FailingSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
