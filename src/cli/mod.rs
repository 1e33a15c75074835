//! Command Line Interface (CLI) layer for tilegrid.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! the console progress printer (`console`) and the orchestration logic
//! (`runner`). It wires user-provided options to the library functionality
//! exposed via `tilegrid::api`.
pub mod args;
pub mod console;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
