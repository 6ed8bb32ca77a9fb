//! Boundary to the document-processing extractor.
//!
//! An [`ExtractorFactory`] builds one [`Extractor`] from an
//! [`ExtractionRequest`]; the extractor is then run once. What the extractor
//! does with the request (task semantics, pipeline stages, output formats) is
//! not defined here.
pub mod command;

pub use command::{CommandExtractor, CommandFactory};

use crate::core::request::ExtractionRequest;
use crate::error::Result;

pub trait Extractor {
    /// Perform the extraction. Called once per constructed extractor.
    fn run(&mut self) -> Result<()>;
}

pub trait ExtractorFactory {
    type Extractor: Extractor;

    fn construct(&self, request: ExtractionRequest) -> Result<Self::Extractor>;
}
