//! Nearest-neighbor resize that keeps pixel edges hard.

use image::{ImageBuffer, RgbImage};

/// Resize with integer index mapping `src = dst * src_len / dst_len`.
///
/// An integer ratio between target and source gives each source pixel an
/// exact, uniform block in the output.
pub fn upscale(src: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (src_w, src_h) = src.dimensions();
    if src_w == 0 || src_h == 0 {
        return ImageBuffer::new(width, height);
    }
    if (src_w, src_h) == (width, height) {
        return src.clone();
    }
    ImageBuffer::from_fn(width, height, |x, y| {
        let sx = (u64::from(x) * u64::from(src_w) / u64::from(width)) as u32;
        let sy = (u64::from(y) * u64::from(src_h) / u64::from(height)) as u32;
        *src.get_pixel(sx, sy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn checkerboard(size: u32) -> RgbImage {
        ImageBuffer::from_fn(size, size, |x, y| {
            Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) % 2 * 255) as u8])
        })
    }

    #[test]
    fn test_64_to_512_gives_uniform_8x8_blocks() {
        let src = checkerboard(64);

        let out = upscale(&src, 512, 512);

        assert_eq!(out.dimensions(), (512, 512));
        for by in 0..64 {
            for bx in 0..64 {
                let expected = src.get_pixel(bx, by);
                for dy in 0..8 {
                    for dx in 0..8 {
                        assert_eq!(out.get_pixel(bx * 8 + dx, by * 8 + dy), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_same_size_is_identity() {
        let src = checkerboard(16);
        assert_eq!(upscale(&src, 16, 16), src);
    }

    #[test]
    fn test_non_integer_ratio_still_samples_source() {
        let src = checkerboard(3);
        let out = upscale(&src, 7, 5);
        assert_eq!(out.dimensions(), (7, 5));
        assert_eq!(out.get_pixel(6, 4), src.get_pixel(2, 2));
        assert_eq!(out.get_pixel(0, 0), src.get_pixel(0, 0));
    }
}
