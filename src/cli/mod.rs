//! Command Line Interface (CLI) layer for docproc.
//!
//! This module defines argument parsing (`args`), value parsers
//! (`validators`), and the orchestration logic (`runner`) that resolves
//! paths and hands them to the extractor via `docproc::api`.
//!
//! If you are embedding docproc into another application, prefer using
//! the high-level `docproc::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;
pub mod validators;

pub use args::CliArgs;
pub use runner::run;
