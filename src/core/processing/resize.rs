use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Raster;

fn lanczos_options() -> ResizeOptions {
    ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
}

/// Resample an RGBA raster to exactly `target_cols x target_rows` with Lanczos3.
///
/// Alpha is premultiplied for the convolution and divided back afterwards, so
/// transparent pixels do not bleed their color into neighbours.
pub fn resize_rgba(source: &Raster, target_cols: u32, target_rows: u32) -> Result<Raster> {
    let (cols, rows) = source.dimensions();
    if cols == 0 || rows == 0 || target_cols == 0 || target_rows == 0 {
        return Err(Error::geometry(format!(
            "cannot resize {}x{} to {}x{}",
            cols, rows, target_cols, target_rows
        )));
    }

    debug!(
        "Resizing {}x{} -> {}x{} (Lanczos3)",
        cols, rows, target_cols, target_rows
    );

    let src_image = Image::from_vec_u8(cols, rows, source.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &lanczos_options())?;

    Raster::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::geometry("resized buffer does not match target dimensions"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn produces_exact_target_dimensions() {
        let src = Raster::from_pixel(37, 91, Rgba([10, 20, 30, 255]));
        let out = resize_rgba(&src, 13, 50).unwrap();
        assert_eq!(out.dimensions(), (13, 50));
    }

    #[test]
    fn uniform_color_survives_resampling() {
        let src = Raster::from_pixel(64, 64, Rgba([200, 100, 50, 255]));
        let out = resize_rgba(&src, 16, 16).unwrap();
        let expected = [200i32, 100, 50, 255];
        for p in out.pixels() {
            for (got, want) in p.0.iter().zip(expected) {
                assert!((*got as i32 - want).abs() <= 1, "{:?}", p);
            }
        }
    }

    #[test]
    fn is_deterministic() {
        let src = Raster::from_fn(40, 30, |x, y| Rgba([(x * 6) as u8, (y * 8) as u8, 7, 255]));
        let a = resize_rgba(&src, 17, 11).unwrap();
        let b = resize_rgba(&src, 17, 11).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn zero_target_is_invalid_geometry() {
        let src = Raster::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(matches!(
            resize_rgba(&src, 0, 4),
            Err(Error::InvalidGeometry { .. })
        ));
    }
}
