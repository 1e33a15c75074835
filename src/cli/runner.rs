use tracing::info;

use tilegrid::BatchConfig;
use tilegrid::api::run_batch;

use super::args::CliArgs;
use super::console::{ConsoleSink, format_manifest_line, rule};
use super::errors::AppError;

fn effective_config(args: &CliArgs) -> Result<BatchConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => BatchConfig::load(path).map_err(|source| AppError::ConfigLoad {
            path: path.clone(),
            source,
        })?,
        None => BatchConfig::default(),
    };

    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(slicing) = args.slicing {
        config.slicing = slicing;
    }
    if let Some(overflow) = args.crop_overflow {
        config.crop_overflow = overflow;
    }
    if args.continue_on_error {
        config.continue_on_error = true;
    }

    Ok(config)
}

/// Pretty JSON of the effective config, loadable again with `--config`.
fn render_config(config: &BatchConfig) -> tilegrid::Result<String> {
    config.to_json_pretty()
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let config = effective_config(&args)?;
    config.validate()?;

    if args.print_config {
        println!("{}", render_config(&config)?);
        return Ok(());
    }

    info!(
        "Running {} job(s) into {:?} (slicing={}, crop_overflow={})",
        config.jobs.len(),
        config.output_dir,
        config.slicing,
        config.crop_overflow
    );

    println!("{}", rule());
    println!("Image grid optimization started");
    println!("{}", rule());
    println!();

    let report = run_batch(&config, &mut ConsoleSink)?;

    println!("{}", rule());
    println!("All images processed");
    println!("{}", rule());
    println!();
    println!("Output directory: {}/", config.output_dir.display());
    println!();
    println!("Generated files:");
    for entry in &report.manifest {
        println!("{}", format_manifest_line(entry));
    }

    info!(
        "Processed: {}, skipped: {}, errors: {}",
        report.processed, report.skipped, report.errors
    );

    if report.errors > 0 {
        return Err(AppError::JobsFailed {
            errors: report.errors,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tilegrid::{CropOverflow, SlicingPolicy};

    #[test]
    fn flags_override_builtin_config() {
        let args = CliArgs::parse_from([
            "tilegrid",
            "--output-dir",
            "out",
            "--slicing",
            "balanced",
            "--crop-overflow",
            "clip",
            "--continue-on-error",
        ]);
        let config = effective_config(&args).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.slicing, SlicingPolicy::Balanced);
        assert_eq!(config.crop_overflow, CropOverflow::Clip);
        assert!(config.continue_on_error);
        assert_eq!(config.jobs, BatchConfig::default().jobs);
    }

    #[test]
    fn missing_config_file_is_reported_with_path() {
        let args = CliArgs::parse_from(["tilegrid", "--config", "/definitely/not/here.json"]);
        let err = effective_config(&args).unwrap_err();
        assert!(matches!(err, AppError::ConfigLoad { .. }));
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn printed_config_loads_back() {
        let args = CliArgs::parse_from([
            "tilegrid",
            "--print-config",
            "--log",
            "--slicing",
            "balanced",
            "--output-dir",
            "elsewhere",
        ]);
        assert!(args.print_config);
        assert!(args.log);

        let config = effective_config(&args).unwrap();
        let printed = render_config(&config).unwrap();
        let reloaded = BatchConfig::from_json_str(&printed).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.slicing, SlicingPolicy::Balanced);
        assert_eq!(reloaded.output_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn flags_default_to_off() {
        let args = CliArgs::parse_from(["tilegrid"]);
        assert!(!args.print_config);
        assert!(!args.log);
        assert!(!args.continue_on_error);
    }
}
