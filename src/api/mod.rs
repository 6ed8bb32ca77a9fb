//! High-level library API: resolve an extraction request and hand it to an
//! extractor. Prefer these entrypoints over the CLI when embedding docproc.
use std::path::Path;

use tracing::info;

use crate::core::params::ExtractorConfig;
use crate::core::request::ExtractionRequest;
use crate::core::structure::OutputPaths;
use crate::error::Result;
use crate::extractor::{CommandFactory, Extractor, ExtractorFactory};

/// Construct an extractor for `request` and run it once.
pub fn run_extraction<F: ExtractorFactory>(factory: &F, request: ExtractionRequest) -> Result<()> {
    info!(
        "Running extraction for {:?} ({} task(s))",
        request.folder_path,
        request.valid_tasks.len()
    );
    let mut extractor = factory.construct(request)?;
    extractor.run()
}

/// Resolve paths and run the external-program extractor described by `config`.
pub fn extract_with_command(
    folder_path: &Path,
    outputs: &OutputPaths,
    apply_pipeline: bool,
    valid_tasks: Vec<String>,
    config: ExtractorConfig,
) -> Result<()> {
    let request = ExtractionRequest::resolve(folder_path, outputs, apply_pipeline, valid_tasks)?;
    run_extraction(&CommandFactory::new(config), request)
}
