//! Extractor backed by an external program.
//!
//! The program receives the request as one JSON document on stdin, with
//! `schema_version` and `requested_at` added next to the request fields.
//! stdout and stderr are inherited. A zero exit status is success.
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{Extractor, ExtractorFactory};
use crate::core::params::ExtractorConfig;
use crate::core::request::ExtractionRequest;
use crate::error::{Error, Result};

pub const REQUEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct RequestEnvelope<'a> {
    schema_version: u32,
    requested_at: DateTime<Utc>,
    #[serde(flatten)]
    request: &'a ExtractionRequest,
}

#[derive(Debug, Clone)]
pub struct CommandFactory {
    config: ExtractorConfig,
}

impl CommandFactory {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl ExtractorFactory for CommandFactory {
    type Extractor = CommandExtractor;

    fn construct(&self, request: ExtractionRequest) -> Result<CommandExtractor> {
        if self.config.program.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "extractor program must not be empty".to_string(),
            ));
        }
        if let Some(key) = self
            .config
            .env
            .keys()
            .find(|k| k.is_empty() || k.contains('='))
        {
            return Err(Error::InvalidConfig(format!(
                "invalid environment variable name: {key:?}"
            )));
        }

        Ok(CommandExtractor {
            config: self.config.clone(),
            request,
        })
    }
}

#[derive(Debug)]
pub struct CommandExtractor {
    config: ExtractorConfig,
    request: ExtractionRequest,
}

impl CommandExtractor {
    fn encode_request(&self) -> Result<Vec<u8>> {
        let envelope = RequestEnvelope {
            schema_version: REQUEST_SCHEMA_VERSION,
            requested_at: Utc::now(),
            request: &self.request,
        };
        Ok(serde_json::to_vec(&envelope)?)
    }
}

impl Extractor for CommandExtractor {
    fn run(&mut self) -> Result<()> {
        let payload = self.encode_request()?;
        let program = self.config.program.clone();

        let mut command = Command::new(&program);
        command
            .args(&self.config.args)
            .envs(&self.config.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.config.working_dir {
            command.current_dir(dir);
        }

        info!("Starting extractor: {}", program);
        debug!("Extractor args: {:?}", self.config.args);

        let mut child = command.spawn().map_err(|source| Error::Spawn {
            program: program.clone(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&payload) {
                Ok(()) => {}
                // The exit status decides whether ignoring stdin was a failure.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    warn!("Extractor closed stdin before reading the request");
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(Error::ExtractorFailed { program, status });
        }

        info!("Extractor finished: {}", program);
        Ok(())
    }
}
