use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::{CropOverflow, SlicingPolicy};

pub const DEFAULT_MAX_HEIGHT: u32 = 3000;
pub const DEFAULT_THUMBNAIL_EDGE: u32 = 800;
pub const DEFAULT_CROP_FACTOR: u32 = 4;
pub const DEFAULT_OUTPUT_DIR: &str = "optimized";

fn default_max_height() -> u32 {
    DEFAULT_MAX_HEIGHT
}

fn default_thumbnail_edge() -> u32 {
    DEFAULT_THUMBNAIL_EDGE
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Grid shape and height bound for one composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    pub rows: u32,
    pub cols: u32,
    /// Upper bound on composite height; exact when divisible by `rows`
    #[serde(default = "default_max_height")]
    pub max_height: u32,
}

impl TileSpec {
    pub fn new(rows: u32, cols: u32, max_height: u32) -> Self {
        Self {
            rows,
            cols,
            max_height,
        }
    }

    pub fn pieces(&self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSpec {
    pub edge: u32,
    /// The square crop is at most `edge * crop_factor` pixels wide
    pub crop_factor: u32,
}

impl ThumbnailSpec {
    pub fn new(edge: u32) -> Self {
        Self {
            edge,
            crop_factor: DEFAULT_CROP_FACTOR,
        }
    }
}

/// One input image and the two outputs derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    pub input: PathBuf,
    pub grid: TileSpec,
    #[serde(default = "default_thumbnail_edge")]
    pub thumbnail_edge: u32,
    /// File name of the composite, relative to the output directory
    pub grid_output: String,
    /// File name of the thumbnail, relative to the output directory
    pub thumbnail_output: String,
}

impl JobSpec {
    /// Short name used in progress reports
    pub fn label(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }

    pub fn thumbnail_spec(&self) -> ThumbnailSpec {
        ThumbnailSpec::new(self.thumbnail_edge)
    }

    /// Reject parameters that can never produce an image. Geometry that depends on
    /// the source dimensions is checked later by the transforms themselves.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("rows", self.grid.rows),
            ("cols", self.grid.cols),
            ("max_height", self.grid.max_height),
            ("thumbnail_edge", self.thumbnail_edge),
        ];
        for (arg, value) in checks {
            if value == 0 {
                return Err(Error::InvalidArgument {
                    arg,
                    value: value.to_string(),
                });
            }
        }

        if self.grid.max_height % self.grid.rows != 0 {
            warn!(
                "{}: max_height {} is not a multiple of rows {}; composite will be {}px tall",
                self.label(),
                self.grid.max_height,
                self.grid.rows,
                self.grid.max_height / self.grid.rows * self.grid.rows
            );
        }

        Ok(())
    }
}

/// Whole-run configuration suitable for JSON config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub slicing: SlicingPolicy,
    #[serde(default)]
    pub crop_overflow: CropOverflow,
    /// If true, a failing job is reported and the next one still runs
    #[serde(default)]
    pub continue_on_error: bool,
    pub jobs: Vec<JobSpec>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            slicing: SlicingPolicy::Floor,
            crop_overflow: CropOverflow::Pad,
            continue_on_error: false,
            jobs: vec![
                JobSpec {
                    input: PathBuf::from("PT4_상세페이지_제작.png"),
                    grid: TileSpec::new(4, 3, DEFAULT_MAX_HEIGHT),
                    thumbnail_edge: DEFAULT_THUMBNAIL_EDGE,
                    grid_output: "PT4_detail.png".to_string(),
                    thumbnail_output: "PT4_main.png".to_string(),
                },
                JobSpec {
                    input: PathBuf::from("Component 17.png"),
                    grid: TileSpec::new(2, 3, DEFAULT_MAX_HEIGHT),
                    thumbnail_edge: DEFAULT_THUMBNAIL_EDGE,
                    grid_output: "Component17_detail.png".to_string(),
                    thumbnail_output: "Component17_main.png".to_string(),
                },
            ],
        }
    }
}

impl BatchConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: BatchConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Batch-level checks: at least one job, and output names that are unique
    /// single file names inside `output_dir`. Per-job parameters are checked by
    /// `JobSpec::validate` when the job runs.
    pub fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "jobs",
                value: "[]".to_string(),
            });
        }

        let mut names = HashSet::new();
        for job in &self.jobs {
            for name in [&job.grid_output, &job.thumbnail_output] {
                if !is_plain_file_name(name) || !names.insert(name.as_str()) {
                    return Err(Error::InvalidArgument {
                        arg: "output",
                        value: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// True for a name that is exactly one normal path component (no separators,
/// no `..`, not absolute), so joining it keeps the file inside the directory.
fn is_plain_file_name(name: &str) -> bool {
    let components: Vec<_> = Path::new(name).components().collect();
    matches!(components.as_slice(), [Component::Normal(_)])
}
