//! Shared types used across docproc.
//! `OutputKind` names the six logical extraction outputs.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Metadata,
    Text,
    Formulas,
    Figures,
    Hierarchy,
    Shrinks,
}

impl OutputKind {
    /// All kinds, in the order they appear in the output structure.
    pub const ALL: [OutputKind; 6] = [
        OutputKind::Metadata,
        OutputKind::Text,
        OutputKind::Formulas,
        OutputKind::Figures,
        OutputKind::Hierarchy,
        OutputKind::Shrinks,
    ];

    /// Key used in the output structure mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Metadata => "metadata",
            OutputKind::Text => "text",
            OutputKind::Formulas => "formulas",
            OutputKind::Figures => "figures",
            OutputKind::Hierarchy => "hierarchy",
            OutputKind::Shrinks => "shrinks",
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
