use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not load config {path:?}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: tilegrid::Error,
    },

    #[error("Batch finished with {errors} failed job(s)")]
    JobsFailed { errors: usize },
}
