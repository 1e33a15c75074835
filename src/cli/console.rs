use std::path::Path;

use tilegrid::api::ProgressSink;
use tilegrid::{Error, GridLayout, JobSpec, ManifestEntry, Stage};

pub const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Human-readable progress lines on stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn on_stage_start(&mut self, job: &JobSpec, stage: Stage) {
        match stage {
            Stage::Load => println!("Processing: {}", job.label()),
            Stage::Grid => {}
            Stage::Thumbnail => println!("Creating thumbnail: {}", job.label()),
        }
    }

    fn on_source_loaded(&mut self, _job: &JobSpec, cols: u32, rows: u32) {
        println!("  Source size: {} x {}px", cols, rows);
    }

    fn on_grid_planned(&mut self, _job: &JobSpec, layout: &GridLayout) {
        println!(
            "  Split: {} pieces ({} rows x {} cols)",
            layout.pieces, layout.rows, layout.cols
        );
        println!(
            "  Piece size: {} x {}px",
            layout.source_cols, layout.slice_height
        );
        println!(
            "  Tile size after resize: {} x {}px",
            layout.tile_width, layout.tile_height
        );
        println!(
            "  Final image size: {} x {}px",
            layout.canvas_width(),
            layout.canvas_height()
        );
    }

    fn on_stage_complete(&mut self, job: &JobSpec, stage: Stage, output: &Path, _bytes: u64) {
        match stage {
            Stage::Thumbnail => println!(
                "  Saved thumbnail: {} x {}px -> {}",
                job.thumbnail_edge,
                job.thumbnail_edge,
                output.display()
            ),
            _ => println!("  Saved: {}", output.display()),
        }
        println!();
    }

    fn on_job_skipped(&mut self, job: &JobSpec) {
        println!("Skipping {}: input not found", job.input.display());
        println!();
    }

    fn on_job_failed(&mut self, job: &JobSpec, error: &Error) {
        eprintln!("Failed {}: {}", job.label(), error);
        println!();
    }
}

pub fn format_manifest_line(entry: &ManifestEntry) -> String {
    format!("  - {} ({:.2} MB)", entry.name, entry.mebibytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_line_uses_two_decimal_mebibytes() {
        let entry = ManifestEntry {
            name: "PT4_detail.png".to_string(),
            bytes: 3 * 1024 * 1024 / 2,
        };
        assert_eq!(format_manifest_line(&entry), "  - PT4_detail.png (1.50 MB)");
    }
}
