use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Raster;

/// Write `raster` as a best-compression RGBA PNG and return the file size in bytes.
pub fn write_png(output: &Path, raster: &Raster) -> Result<u64> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            raster.as_raw(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    writer.flush()?;
    drop(writer);

    let bytes = std::fs::metadata(output)?.len();
    debug!("Wrote {:?} ({} bytes)", output, bytes);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn png_preserves_pixels_and_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let raster = Raster::from_fn(9, 5, |x, y| Rgba([x as u8 * 20, y as u8 * 40, 7, (x * y) as u8]));

        let bytes = write_png(&path, &raster).unwrap();
        assert_eq!(bytes, std::fs::metadata(&path).unwrap().len());

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), raster.as_raw());
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.png");
        let raster = Raster::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        assert!(matches!(write_png(&path, &raster), Err(Error::Io(_))));
    }
}
