use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::paths::resolve_path;
use crate::core::structure::{OutputPaths, OutputStructure};
use crate::error::Result;

/// Everything an extractor is constructed with.
///
/// Task names are passed through untouched; order and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub folder_path: PathBuf,
    pub output_structure: OutputStructure,
    pub apply_pipeline: bool,
    pub valid_tasks: Vec<String>,
}

impl ExtractionRequest {
    /// Resolve the source folder and every output path, then assemble the request.
    pub fn resolve(
        folder_path: &Path,
        outputs: &OutputPaths,
        apply_pipeline: bool,
        valid_tasks: Vec<String>,
    ) -> Result<Self> {
        let output_structure = OutputStructure::resolve(outputs)?;
        let folder_path = resolve_path(folder_path)?;

        debug!(
            "Extraction request: folder={:?} apply_pipeline={} tasks={:?}",
            folder_path, apply_pipeline, valid_tasks
        );

        Ok(Self {
            folder_path,
            output_structure,
            apply_pipeline,
            valid_tasks,
        })
    }
}
