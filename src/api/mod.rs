//! High-level, ergonomic library API: run a whole `BatchConfig` or a single
//! `JobSpec`, with progress delivered to a pluggable `ProgressSink`. Prefer
//! these entrypoints over the low-level processing modules when integrating
//! tilegrid.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::{BatchConfig, JobSpec};
use crate::core::processing::grid::{GridLayout, tile_with_policy};
use crate::core::processing::thumbnail::thumbnail_with_policy;
use crate::error::{Error, Result};
use crate::io::manifest::{ManifestEntry, read_manifest};
use crate::io::reader::load_rgba;
use crate::io::writers::png::write_png;
use crate::types::{CropOverflow, SlicingPolicy, Stage};

/// Receiver for pipeline progress. Every method defaults to a no-op so
/// consumers only implement what they display.
pub trait ProgressSink {
    fn on_stage_start(&mut self, _job: &JobSpec, _stage: Stage) {}

    fn on_source_loaded(&mut self, _job: &JobSpec, _cols: u32, _rows: u32) {}

    fn on_grid_planned(&mut self, _job: &JobSpec, _layout: &GridLayout) {}

    fn on_stage_complete(&mut self, _job: &JobSpec, _stage: Stage, _output: &Path, _bytes: u64) {}

    fn on_job_skipped(&mut self, _job: &JobSpec) {}

    fn on_job_failed(&mut self, _job: &JobSpec, _error: &Error) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn on_stage_start(&mut self, job: &JobSpec, stage: Stage) {
        info!(job = %job.label(), %stage, "stage started");
    }

    fn on_grid_planned(&mut self, job: &JobSpec, layout: &GridLayout) {
        info!(
            job = %job.label(),
            pieces = layout.pieces,
            tile_width = layout.tile_width,
            tile_height = layout.tile_height,
            width = layout.canvas_width(),
            height = layout.canvas_height(),
            "grid planned"
        );
    }

    fn on_stage_complete(&mut self, job: &JobSpec, stage: Stage, output: &Path, bytes: u64) {
        info!(job = %job.label(), %stage, ?output, bytes, "stage complete");
    }

    fn on_job_skipped(&mut self, job: &JobSpec) {
        info!(job = %job.label(), input = ?job.input, "input missing, skipped");
    }

    fn on_job_failed(&mut self, job: &JobSpec, error: &Error) {
        warn!(job = %job.label(), %error, "job failed");
    }
}

/// Policies shared by every job of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobOptions {
    pub slicing: SlicingPolicy,
    pub crop_overflow: CropOverflow,
}

impl From<&BatchConfig> for JobOptions {
    fn from(config: &BatchConfig) -> Self {
        Self {
            slicing: config.slicing,
            crop_overflow: config.crop_overflow,
        }
    }
}

/// Files written for one processed job
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutput {
    pub grid_path: PathBuf,
    pub grid_bytes: u64,
    pub thumbnail_path: PathBuf,
    pub thumbnail_bytes: u64,
    pub layout: GridLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Completed(JobOutput),
    /// Input file was absent; nothing was written
    Skipped,
}

#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub outputs: Vec<PathBuf>,
    /// Every regular file in the output directory after the run, sorted by name
    pub manifest: Vec<ManifestEntry>,
}

/// Run one job: composite first, then thumbnail, both written into `output_dir`.
/// The output directory must already exist. A missing input is skipped before
/// the job's parameters are checked.
pub fn process_job(
    job: &JobSpec,
    output_dir: &Path,
    options: JobOptions,
    sink: &mut dyn ProgressSink,
) -> Result<JobOutcome> {
    if !job.input.is_file() {
        sink.on_job_skipped(job);
        return Ok(JobOutcome::Skipped);
    }
    job.validate()?;

    sink.on_stage_start(job, Stage::Load);
    let source = load_rgba(&job.input)?;
    sink.on_source_loaded(job, source.width(), source.height());

    sink.on_stage_start(job, Stage::Grid);
    let (composite, layout) = tile_with_policy(&source, &job.grid, options.slicing)?;
    sink.on_grid_planned(job, &layout);
    let grid_path = output_dir.join(&job.grid_output);
    let grid_bytes = write_png(&grid_path, &composite)?;
    drop(composite);
    sink.on_stage_complete(job, Stage::Grid, &grid_path, grid_bytes);

    sink.on_stage_start(job, Stage::Thumbnail);
    let thumb = thumbnail_with_policy(&source, &job.thumbnail_spec(), options.crop_overflow)?;
    let thumbnail_path = output_dir.join(&job.thumbnail_output);
    let thumbnail_bytes = write_png(&thumbnail_path, &thumb)?;
    sink.on_stage_complete(job, Stage::Thumbnail, &thumbnail_path, thumbnail_bytes);

    Ok(JobOutcome::Completed(JobOutput {
        grid_path,
        grid_bytes,
        thumbnail_path,
        thumbnail_bytes,
        layout,
    }))
}

/// Run every job of `config` in order and list the output directory afterwards.
///
/// Without `continue_on_error` the first failing job aborts the run and its
/// error is returned; otherwise failures are reported to the sink and counted.
pub fn run_batch(config: &BatchConfig, sink: &mut dyn ProgressSink) -> Result<BatchReport> {
    config.validate()?;
    std::fs::create_dir_all(&config.output_dir)?;

    let options = JobOptions::from(config);
    let mut report = BatchReport::default();

    for job in &config.jobs {
        match process_job(job, &config.output_dir, options, sink) {
            Ok(JobOutcome::Completed(output)) => {
                report.processed += 1;
                report.outputs.push(output.grid_path);
                report.outputs.push(output.thumbnail_path);
            }
            Ok(JobOutcome::Skipped) => report.skipped += 1,
            Err(e) => {
                report.errors += 1;
                if !config.continue_on_error {
                    return Err(e);
                }
                sink.on_job_failed(job, &e);
            }
        }
    }

    report.manifest = read_manifest(&config.output_dir)?;
    Ok(report)
}
