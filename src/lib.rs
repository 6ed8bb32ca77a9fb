#![doc = r#"
docproc — resolve document extraction paths and hand them to an extractor.

This crate powers the `extract_data` CLI. It turns a source folder, six output
destinations and a list of task names into an absolute, fully-resolved
[`ExtractionRequest`], then constructs an extractor from it and runs it once.
The extraction itself (task semantics, pipeline stages, output formats) lives
in the extractor, not here.

Quick start: run the external-program extractor
-----------------------------------------------
```rust,no_run
use std::path::Path;
use docproc::{extract_with_command, ExtractorConfig, OutputPaths};

fn main() -> docproc::Result<()> {
    let outputs = OutputPaths {
        metadata: "out/meta".into(),
        text: "out/text".into(),
        formulas: "out/formulas".into(),
        figures: "out/figures".into(),
        hierarchy: "out/hierarchy".into(),
        shrinks: "out/shrinks".into(),
    };

    extract_with_command(
        Path::new("./docs"),
        &outputs,
        true,
        vec!["shrinks".to_string(), "figures".to_string()],
        ExtractorConfig::default(),
    )
}
```

Bring your own extractor
------------------------
```rust
use docproc::{Extractor, ExtractorFactory, ExtractionRequest};

struct Echo;

struct EchoRun(ExtractionRequest);

impl Extractor for EchoRun {
    fn run(&mut self) -> docproc::Result<()> {
        println!("{} task(s)", self.0.valid_tasks.len());
        Ok(())
    }
}

impl ExtractorFactory for Echo {
    type Extractor = EchoRun;

    fn construct(&self, request: ExtractionRequest) -> docproc::Result<EchoRun> {
        Ok(EchoRun(request))
    }
}
```

Error handling
--------------
All public functions return `docproc::Result<T>`; match on `docproc::Error` to
tell resolution, configuration and extractor failures apart.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — path resolution, output structure, request and extractor config.
- [`extractor`] — the extractor traits and the external-program backend.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod extractor;
pub mod types;

// Types
pub use crate::core::params::ExtractorConfig;
pub use crate::core::paths::resolve_path;
pub use crate::core::request::ExtractionRequest;
pub use crate::core::structure::{OutputPaths, OutputStructure};
pub use error::{Error, Result};
pub use types::OutputKind;

// Extractors
pub use extractor::{CommandExtractor, CommandFactory, Extractor, ExtractorFactory};

// High-level API re-exports
pub use api::{extract_with_command, run_extraction};
