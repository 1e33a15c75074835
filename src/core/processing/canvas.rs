use image::Rgba;
use image::imageops;
use tracing::debug;

use crate::types::{CropOverflow, Raster};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub fn transparent_canvas(cols: u32, rows: u32) -> Raster {
    Raster::from_pixel(cols, rows, TRANSPARENT)
}

/// Copy the full-width band `[y_start, y_end)` out of `source`. Rows past the
/// bottom edge are clipped.
pub fn crop_band(source: &Raster, y_start: u32, y_end: u32) -> Raster {
    let height = y_end.saturating_sub(y_start);
    imageops::crop_imm(source, 0, y_start, source.width(), height).to_image()
}

/// Copy the `size x size` square anchored at the top-left corner.
///
/// When the square extends past the source, `Clip` returns only the covered
/// pixels while `Pad` keeps the full square with transparent fill. Sources are
/// always RGBA here, so RGB inputs are padded with transparency too rather than
/// the opaque black some libraries use for images without alpha.
pub fn crop_top_left_square(source: &Raster, size: u32, overflow: CropOverflow) -> Raster {
    let clipped = imageops::crop_imm(source, 0, 0, size, size).to_image();
    if clipped.dimensions() == (size, size) {
        return clipped;
    }

    match overflow {
        CropOverflow::Clip => {
            debug!(
                "Square crop {}x{} clipped to {}x{}",
                size,
                size,
                clipped.width(),
                clipped.height()
            );
            clipped
        }
        CropOverflow::Pad => {
            debug!(
                "Square crop {}x{} padded from {}x{}",
                size,
                size,
                clipped.width(),
                clipped.height()
            );
            let mut padded = transparent_canvas(size, size);
            paste(&mut padded, &clipped, 0, 0);
            padded
        }
    }
}

/// Overwrite a region of `canvas` with `tile`; no alpha blending.
pub fn paste(canvas: &mut Raster, tile: &Raster, x: u32, y: u32) {
    imageops::replace(canvas, tile, i64::from(x), i64::from(y));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(cols: u32, rows: u32) -> Raster {
        Raster::from_fn(cols, rows, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn band_spans_full_width() {
        let src = gradient(5, 20);
        let band = crop_band(&src, 4, 8);
        assert_eq!(band.dimensions(), (5, 4));
        assert_eq!(*band.get_pixel(3, 0), Rgba([3, 4, 0, 255]));
        assert_eq!(*band.get_pixel(0, 3), Rgba([0, 7, 0, 255]));
    }

    #[test]
    fn band_past_bottom_is_clipped() {
        let src = gradient(5, 10);
        let band = crop_band(&src, 8, 14);
        assert_eq!(band.dimensions(), (5, 2));
    }

    #[test]
    fn square_inside_source_is_plain_crop() {
        let src = gradient(6, 10);
        let sq = crop_top_left_square(&src, 6, CropOverflow::Pad);
        assert_eq!(sq.dimensions(), (6, 6));
        assert_eq!(*sq.get_pixel(5, 5), Rgba([5, 5, 0, 255]));
    }

    #[test]
    fn pad_keeps_square_with_transparent_fill() {
        let src = gradient(8, 3);
        let sq = crop_top_left_square(&src, 8, CropOverflow::Pad);
        assert_eq!(sq.dimensions(), (8, 8));
        assert_eq!(*sq.get_pixel(2, 2), Rgba([2, 2, 0, 255]));
        assert_eq!(*sq.get_pixel(2, 3), TRANSPARENT);
        assert_eq!(*sq.get_pixel(7, 7), TRANSPARENT);
    }

    #[test]
    fn pad_is_transparent_for_rgb_sources_too() {
        let rgb = image::RgbImage::from_pixel(6, 2, image::Rgb([40, 50, 60]));
        let src = image::DynamicImage::ImageRgb8(rgb).to_rgba8();
        let sq = crop_top_left_square(&src, 6, CropOverflow::Pad);
        assert_eq!(*sq.get_pixel(0, 1), Rgba([40, 50, 60, 255]));
        assert_eq!(*sq.get_pixel(0, 2), TRANSPARENT);
        assert_eq!(*sq.get_pixel(5, 5), TRANSPARENT);
    }

    #[test]
    fn clip_returns_available_rows() {
        let src = gradient(8, 3);
        let sq = crop_top_left_square(&src, 8, CropOverflow::Clip);
        assert_eq!(sq.dimensions(), (8, 3));
    }

    #[test]
    fn paste_replaces_without_blending() {
        let mut canvas = Raster::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let tile = Raster::from_pixel(2, 2, Rgba([10, 10, 10, 0]));
        paste(&mut canvas, &tile, 2, 2);
        assert_eq!(*canvas.get_pixel(3, 3), Rgba([10, 10, 10, 0]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
    }
}
