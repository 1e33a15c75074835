use tracing::info;

use crate::core::params::ThumbnailSpec;
use crate::core::processing::canvas::crop_top_left_square;
use crate::core::processing::resize::resize_rgba;
use crate::error::{Error, Result};
use crate::types::{CropOverflow, Raster};

/// Side of the square taken from the top-left corner: the source width, capped
/// at `edge * crop_factor`.
pub fn crop_size(source_cols: u32, spec: &ThumbnailSpec) -> u32 {
    source_cols.min(spec.edge.saturating_mul(spec.crop_factor))
}

pub fn thumbnail_with_policy(
    source: &Raster,
    spec: &ThumbnailSpec,
    overflow: CropOverflow,
) -> Result<Raster> {
    if spec.edge == 0 {
        return Err(Error::geometry("thumbnail edge must be positive"));
    }
    let (cols, rows) = source.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::geometry(format!(
            "cannot thumbnail an empty {}x{} source",
            cols, rows
        )));
    }

    let size = crop_size(cols, spec);
    let square = crop_top_left_square(source, size, overflow);
    info!(
        "Thumbnail: crop {}x{} from top-left -> {}x{}px",
        square.width(),
        square.height(),
        spec.edge,
        spec.edge
    );

    resize_rgba(&square, spec.edge, spec.edge)
}

/// Square `edge x edge` thumbnail of the top-left region of `source`.
pub fn thumbnail(source: &Raster, edge: u32) -> Result<Raster> {
    thumbnail_with_policy(source, &ThumbnailSpec::new(edge), CropOverflow::Pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn crop_size_is_capped_by_width() {
        let spec = ThumbnailSpec::new(800);
        assert_eq!(crop_size(900, &spec), 900);
        assert_eq!(crop_size(5000, &spec), 3200);
        assert_eq!(crop_size(10, &ThumbnailSpec::new(2)), 8);
    }

    #[test]
    fn output_is_always_edge_square() {
        for (w, h) in [(900, 4000), (1, 1), (50, 3), (3, 50), (200, 200)] {
            let src = Raster::from_pixel(w, h, Rgba([1, 2, 3, 255]));
            for overflow in [CropOverflow::Pad, CropOverflow::Clip] {
                let out = thumbnail_with_policy(&src, &ThumbnailSpec::new(16), overflow).unwrap();
                assert_eq!(out.dimensions(), (16, 16));
            }
        }
    }

    #[test]
    fn pad_leaves_bottom_transparent_for_short_sources() {
        let src = Raster::from_pixel(40, 10, Rgba([255, 0, 0, 255]));
        let out = thumbnail_with_policy(&src, &ThumbnailSpec::new(20), CropOverflow::Pad).unwrap();
        assert!(out.get_pixel(10, 0).0[3] >= 250);
        assert_eq!(out.get_pixel(10, 19).0[3], 0);
    }

    #[test]
    fn clip_stretches_available_rows() {
        let src = Raster::from_pixel(40, 10, Rgba([255, 0, 0, 255]));
        let out = thumbnail_with_policy(&src, &ThumbnailSpec::new(20), CropOverflow::Clip).unwrap();
        assert!(out.get_pixel(10, 19).0[3] >= 250);
    }

    #[test]
    fn zero_edge_is_invalid_geometry() {
        let src = Raster::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(matches!(thumbnail(&src, 0), Err(Error::InvalidGeometry { .. })));
    }
}
