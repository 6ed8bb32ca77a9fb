use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_EXTRACTOR_PROGRAM: &str = "docproc-extractor";

/// How to launch the external extractor, suitable for config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Program name or path; looked up on `PATH` when bare
    pub program: String,
    /// Arguments placed before anything else on the command line
    pub args: Vec<String>,
    /// Extra environment variables for the extractor process
    pub env: BTreeMap<String, String>,
    /// Working directory; None inherits ours
    pub working_dir: Option<PathBuf>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_EXTRACTOR_PROGRAM.to_string(),
            args: Vec::new(),
            env: BTreeMap::new(),
            working_dir: None,
        }
    }
}

impl ExtractorConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
