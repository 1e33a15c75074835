//! I/O layer: decoding sources into RGBA rasters, PNG writers, and the
//! output-directory manifest.
pub mod manifest;
pub mod reader;
pub mod writers;

pub use manifest::{ManifestEntry, read_manifest};
pub use reader::load_rgba;
pub use writers::png::write_png;
