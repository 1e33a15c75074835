//! Shared types and enums used across tilegrid.
//! Includes the slicing and crop-overflow policies and the pipeline `Stage`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// In-memory RGBA8 raster used by every transform.
pub type Raster = image::RgbaImage;

/// How band boundaries are placed when the source height is not a multiple of
/// the piece count.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SlicingPolicy {
    /// Every band is `floor(height / pieces)` rows; the remainder at the bottom is dropped.
    #[default]
    Floor,
    /// Boundaries at `round(i * height / pieces)`; bands cover the whole source.
    Balanced,
}

impl std::fmt::Display for SlicingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlicingPolicy::Floor => write!(f, "floor"),
            SlicingPolicy::Balanced => write!(f, "balanced"),
        }
    }
}

/// What the thumbnailer does when the square crop runs past the bottom of the source.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CropOverflow {
    /// Keep the crop square and fill missing rows with transparent pixels,
    /// whatever the source's original color type.
    #[default]
    Pad,
    /// Crop to the available rows and let the resize stretch them.
    Clip,
}

impl std::fmt::Display for CropOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropOverflow::Pad => write!(f, "pad"),
            CropOverflow::Clip => write!(f, "clip"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Stage {
    Load,
    Grid,
    Thumbnail,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Load => write!(f, "Load"),
            Stage::Grid => write!(f, "Grid"),
            Stage::Thumbnail => write!(f, "Thumbnail"),
        }
    }
}
