//! Core building blocks: job parameters and the raster transforms (resize,
//! crop/paste, grid tiling, thumbnails). These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
