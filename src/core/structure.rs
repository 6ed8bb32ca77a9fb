use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::paths::resolve_path;
use crate::error::Result;
use crate::types::OutputKind;

/// Output destinations as given by the caller, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub metadata: PathBuf,
    pub text: PathBuf,
    pub formulas: PathBuf,
    pub figures: PathBuf,
    pub hierarchy: PathBuf,
    pub shrinks: PathBuf,
}

/// Mapping from the six logical output names to absolute paths.
///
/// Serialises as a JSON object keyed `metadata`, `text`, `formulas`,
/// `figures`, `hierarchy`, `shrinks`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputStructure {
    metadata: PathBuf,
    text: PathBuf,
    formulas: PathBuf,
    figures: PathBuf,
    hierarchy: PathBuf,
    shrinks: PathBuf,
}

impl OutputStructure {
    /// Resolve every path in `paths` to absolute form.
    pub fn resolve(paths: &OutputPaths) -> Result<Self> {
        Ok(Self {
            metadata: resolve_path(&paths.metadata)?,
            text: resolve_path(&paths.text)?,
            formulas: resolve_path(&paths.formulas)?,
            figures: resolve_path(&paths.figures)?,
            hierarchy: resolve_path(&paths.hierarchy)?,
            shrinks: resolve_path(&paths.shrinks)?,
        })
    }

    pub fn get(&self, kind: OutputKind) -> &Path {
        match kind {
            OutputKind::Metadata => &self.metadata,
            OutputKind::Text => &self.text,
            OutputKind::Formulas => &self.formulas,
            OutputKind::Figures => &self.figures,
            OutputKind::Hierarchy => &self.hierarchy,
            OutputKind::Shrinks => &self.shrinks,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OutputKind, &Path)> + '_ {
        OutputKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_under(root: &Path) -> OutputPaths {
        OutputPaths {
            metadata: root.join("out/meta"),
            text: root.join("out/text"),
            formulas: root.join("out/f"),
            figures: root.join("out/fig"),
            hierarchy: root.join("out/h"),
            shrinks: root.join("out/s"),
        }
    }

    #[test]
    fn resolve_keeps_each_path_under_its_own_key() {
        let tmp = TempDir::new().unwrap();
        let root = std::fs::canonicalize(tmp.path()).unwrap();
        let structure = OutputStructure::resolve(&paths_under(&root)).unwrap();

        assert_eq!(structure.get(OutputKind::Metadata), root.join("out/meta"));
        assert_eq!(structure.get(OutputKind::Text), root.join("out/text"));
        assert_eq!(structure.get(OutputKind::Formulas), root.join("out/f"));
        assert_eq!(structure.get(OutputKind::Figures), root.join("out/fig"));
        assert_eq!(structure.get(OutputKind::Hierarchy), root.join("out/h"));
        assert_eq!(structure.get(OutputKind::Shrinks), root.join("out/s"));
    }

    #[test]
    fn iter_yields_all_kinds_in_order() {
        let tmp = TempDir::new().unwrap();
        let structure = OutputStructure::resolve(&paths_under(tmp.path())).unwrap();
        let kinds: Vec<OutputKind> = structure.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, OutputKind::ALL.to_vec());
    }

    #[test]
    fn serialises_with_fixed_keys() {
        let tmp = TempDir::new().unwrap();
        let root = std::fs::canonicalize(tmp.path()).unwrap();
        let structure = OutputStructure::resolve(&paths_under(&root)).unwrap();

        let value = serde_json::to_value(&structure).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for kind in OutputKind::ALL {
            let path = object[kind.as_str()].as_str().unwrap();
            assert_eq!(Path::new(path), structure.get(kind));
        }
    }
}
