//! Grid tiling: cut a tall raster into `rows * cols` horizontal bands, resize
//! every band to one uniform tile size and pack the tiles row-major into a
//! bounded-height composite.
use tracing::{debug, info};

use crate::core::params::TileSpec;
use crate::core::processing::canvas::{crop_band, paste, transparent_canvas};
use crate::core::processing::resize::resize_rgba;
use crate::error::{Error, Result};
use crate::types::{Raster, SlicingPolicy};

/// Geometry of one tiling run, computed from the source size alone.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub source_cols: u32,
    pub source_rows: u32,
    pub rows: u32,
    pub cols: u32,
    pub pieces: u32,
    /// Nominal band height, `floor(source_rows / pieces)`
    pub slice_height: u32,
    pub scale_ratio: f64,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Source rows `[start, end)` of every band, in placement order
    pub bands: Vec<(u32, u32)>,
}

impl GridLayout {
    pub fn canvas_width(&self) -> u32 {
        self.tile_width * self.cols
    }

    pub fn canvas_height(&self) -> u32 {
        self.tile_height * self.rows
    }

    /// Pixel origin of tile `index`; index 0 is the top-left cell.
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        let row = index / self.cols;
        let col = index % self.cols;
        (col * self.tile_width, row * self.tile_height)
    }
}

fn band_boundaries(
    source_rows: u32,
    pieces: u32,
    slice_height: u32,
    policy: SlicingPolicy,
) -> Vec<(u32, u32)> {
    match policy {
        SlicingPolicy::Floor => (0..pieces)
            .map(|i| {
                let start = i * slice_height;
                let end = ((i + 1) * slice_height).min(source_rows);
                (start, end)
            })
            .collect(),
        SlicingPolicy::Balanced => {
            let h = u64::from(source_rows);
            let n = u64::from(pieces);
            // round(i * h / n), half rounding up
            let boundary = |i: u64| ((i * h + n / 2) / n) as u32;
            (0..n).map(|i| (boundary(i), boundary(i + 1))).collect()
        }
    }
}

/// Compute the tiling geometry for a `source_cols x source_rows` raster.
pub fn plan_grid(
    source_cols: u32,
    source_rows: u32,
    spec: &TileSpec,
    policy: SlicingPolicy,
) -> Result<GridLayout> {
    if spec.rows == 0 || spec.cols == 0 || spec.max_height == 0 {
        return Err(Error::geometry(format!(
            "rows, cols and max_height must be positive (got {}x{}, max_height {})",
            spec.rows, spec.cols, spec.max_height
        )));
    }

    let pieces = spec
        .rows
        .checked_mul(spec.cols)
        .ok_or_else(|| Error::geometry(format!("{}x{} grid is too large", spec.rows, spec.cols)))?;

    let slice_height = source_rows / pieces;
    if slice_height == 0 {
        return Err(Error::geometry(format!(
            "source height {} is smaller than piece count {}",
            source_rows, pieces
        )));
    }

    let tile_height = spec.max_height / spec.rows;
    if tile_height == 0 {
        return Err(Error::geometry(format!(
            "max_height {} is smaller than row count {}",
            spec.max_height, spec.rows
        )));
    }

    let band_height = match policy {
        SlicingPolicy::Floor => f64::from(slice_height),
        SlicingPolicy::Balanced => f64::from(source_rows) / f64::from(pieces),
    };
    let scale_ratio = f64::from(tile_height) / band_height;
    let tile_width = (f64::from(source_cols) * scale_ratio) as u32;
    if tile_width == 0 {
        return Err(Error::geometry(format!(
            "source width {} scales to a zero-width tile (ratio {:.4})",
            source_cols, scale_ratio
        )));
    }
    if tile_width.checked_mul(spec.cols).is_none() {
        return Err(Error::geometry(format!(
            "composite width {} x {} overflows",
            tile_width, spec.cols
        )));
    }

    Ok(GridLayout {
        source_cols,
        source_rows,
        rows: spec.rows,
        cols: spec.cols,
        pieces,
        slice_height,
        scale_ratio,
        tile_width,
        tile_height,
        bands: band_boundaries(source_rows, pieces, slice_height, policy),
    })
}

/// Assemble the composite described by `layout` from `source`.
pub fn assemble_grid(source: &Raster, layout: &GridLayout) -> Result<Raster> {
    let mut canvas = transparent_canvas(layout.canvas_width(), layout.canvas_height());

    for (index, &(y_start, y_end)) in layout.bands.iter().enumerate() {
        let band = crop_band(source, y_start, y_end);
        let tile = resize_rgba(&band, layout.tile_width, layout.tile_height)?;
        let (x, y) = layout.cell_origin(index as u32);
        debug!(
            "Tile {}: rows {}..{} -> ({}, {})",
            index, y_start, y_end, x, y
        );
        paste(&mut canvas, &tile, x, y);
    }

    Ok(canvas)
}

/// Tile `source` with an explicit slicing policy, returning the layout used.
pub fn tile_with_policy(
    source: &Raster,
    spec: &TileSpec,
    policy: SlicingPolicy,
) -> Result<(Raster, GridLayout)> {
    let (cols, rows) = source.dimensions();
    let layout = plan_grid(cols, rows, spec, policy)?;

    info!(
        "Grid {}x{} ({} pieces): band {}x{}px -> tile {}x{}px, composite {}x{}px",
        layout.rows,
        layout.cols,
        layout.pieces,
        cols,
        layout.slice_height,
        layout.tile_width,
        layout.tile_height,
        layout.canvas_width(),
        layout.canvas_height()
    );

    let composite = assemble_grid(source, &layout)?;
    Ok((composite, layout))
}

/// Tile `source` into a `rows x cols` grid no taller than `max_height`.
pub fn tile(source: &Raster, rows: u32, cols: u32, max_height: u32) -> Result<Raster> {
    let spec = TileSpec::new(rows, cols, max_height);
    tile_with_policy(source, &spec, SlicingPolicy::Floor).map(|(composite, _)| composite)
}
