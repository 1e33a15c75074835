//! Raster transforms: Lanczos resampling, crop/paste helpers, grid tiling and
//! square thumbnails.
pub mod canvas;
pub mod grid;
pub mod resize;
pub mod thumbnail;
