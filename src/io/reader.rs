use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::ImageReader;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::Raster;

/// Decode any supported container and convert it to RGBA8.
pub fn load_rgba(path: &Path) -> Result<Raster> {
    let file = File::open(path)?;
    let decoded = ImageReader::new(BufReader::new(file))
        .with_guessed_format()?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    let raster = decoded.to_rgba8();
    info!(
        "Loaded {:?}: {}x{}px",
        path,
        raster.width(),
        raster.height()
    );
    Ok(raster)
}
