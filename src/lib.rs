#![doc = r#"
tilegrid — pack tall images into bounded-height tile grids.

This crate slices a tall source image into `rows * cols` horizontal bands,
resizes every band to one uniform tile size with a Lanczos3 kernel, and packs
the tiles row-major into a composite no taller than a given bound. It also
derives a fixed-size square thumbnail from the top-left of each source. It
powers the `tilegrid` CLI and can be embedded in your own Rust applications.

Quick start: run a batch
------------------------
```rust,no_run
use tilegrid::{BatchConfig, api::{run_batch, TracingSink}};

fn main() -> tilegrid::Result<()> {
    let config = BatchConfig::load(std::path::Path::new("jobs.json"))?;
    let report = run_batch(&config, &mut TracingSink)?;
    for entry in &report.manifest {
        println!("{} ({:.2} MB)", entry.name, entry.mebibytes());
    }
    Ok(())
}
```

Transform rasters in memory
---------------------------
```rust
use image::{Rgba, RgbaImage};

fn main() -> tilegrid::Result<()> {
    let source = RgbaImage::from_pixel(90, 400, Rgba([30, 60, 90, 255]));

    let composite = tilegrid::tile(&source, 4, 3, 300)?;
    assert_eq!(composite.height(), 300);

    let thumb = tilegrid::thumbnail(&source, 80)?;
    assert_eq!(thumb.dimensions(), (80, 80));
    Ok(())
}
```

Error handling
--------------
All public functions return `tilegrid::Result<T>`; match on `tilegrid::Error`
to tell bad geometry apart from I/O or decode failures.

```rust
use image::RgbaImage;
use tilegrid::Error;

let tiny = RgbaImage::new(10, 5);
match tilegrid::tile(&tiny, 2, 3, 100) {
    Err(Error::InvalidGeometry { reason }) => eprintln!("bad grid: {reason}"),
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`] — batch and per-job entry points, progress sinks.
- [`core`] — job parameters and raster transforms.
- [`io`] — decoding, PNG writing and the output manifest.
- [`types`] — policy enums and the `Raster` alias.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{BatchConfig, JobSpec, ThumbnailSpec, TileSpec};
pub use crate::core::processing::grid::GridLayout;
pub use error::{Error, Result};
pub use io::manifest::ManifestEntry;
pub use types::{CropOverflow, Raster, SlicingPolicy, Stage};

// Transforms
pub use crate::core::processing::grid::{plan_grid, tile, tile_with_policy};
pub use crate::core::processing::thumbnail::{thumbnail, thumbnail_with_policy};

// High-level API re-exports
pub use api::{
    BatchReport, JobOptions, JobOutcome, JobOutput, NullSink, ProgressSink, TracingSink,
    process_job, run_batch,
};
