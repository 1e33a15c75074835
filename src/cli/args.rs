use clap::Parser;
use std::path::PathBuf;

use tilegrid::{CropOverflow, SlicingPolicy};

#[derive(Parser)]
#[command(
    name = "tilegrid",
    version,
    about = "Pack tall images into bounded-height tile grids and square thumbnails"
)]
pub struct CliArgs {
    /// JSON batch config; the built-in job list is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Band slicing policy (floor, balanced)
    #[arg(long, value_enum)]
    pub slicing: Option<SlicingPolicy>,

    /// Thumbnail behaviour when the square crop is taller than the source (pad, clip)
    #[arg(long, value_enum)]
    pub crop_overflow: Option<CropOverflow>,

    /// Keep processing the remaining jobs when one fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Print the effective config as JSON and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
