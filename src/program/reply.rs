//! Programs obtained from outside the crate
//!
//! A language-model backed generator answers with free text that should
//! contain a ProgramSpec JSON object. The network call itself lives with
//! the caller; this module parses the reply and provides the local
//! synthesizer as an always-available fallback.

use log::warn;

use super::error::ProgramError;
use super::synth::synthesize;
use super::types::ProgramSpec;

/// Inputs from which a program is requested
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRequest {
    pub title: String,
    pub lot_width: f64,
    pub lot_length: f64,
    pub storeys: u32,
    /// Free-form brief for sources that accept one
    pub prompt: Option<String>,
}

impl ProgramRequest {
    pub fn new(title: impl Into<String>, lot_width: f64, lot_length: f64, storeys: u32) -> Self {
        Self {
            title: title.into(),
            lot_width,
            lot_length,
            storeys,
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// Anything that can produce a room program for a request
pub trait ProgramSource {
    /// Short name used in log output
    fn name(&self) -> &str;

    fn fetch(&self, request: &ProgramRequest) -> Result<ProgramSpec, ProgramError>;
}

/// The rule-based synthesizer; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSynthesizer;

impl ProgramSource for LocalSynthesizer {
    fn name(&self) -> &str {
        "local"
    }

    fn fetch(&self, request: &ProgramRequest) -> Result<ProgramSpec, ProgramError> {
        Ok(synthesize(
            &request.title,
            request.lot_width,
            request.lot_length,
            request.storeys,
        ))
    }
}

/// Ask `source` for a program, falling back to the synthesizer on failure
pub fn fetch_or_synthesize(source: &dyn ProgramSource, request: &ProgramRequest) -> ProgramSpec {
    match source.fetch(request) {
        Ok(program) => program,
        Err(e) => {
            warn!(
                "program source '{}' failed, using local synthesizer: {}",
                source.name(),
                e
            );
            synthesize(
                &request.title,
                request.lot_width,
                request.lot_length,
                request.storeys,
            )
        }
    }
}

/// Extract the outermost `{ ... }` span of a reply and parse it as a program.
///
/// Replies often wrap the JSON in prose or code fences; everything from the
/// first `{` to the last `}` is taken.
pub fn program_from_reply(reply: &str) -> Result<ProgramSpec, ProgramError> {
    let start = reply.find('{').ok_or(ProgramError::NoJson)?;
    let end = reply.rfind('}').ok_or(ProgramError::NoJson)?;
    if end < start {
        return Err(ProgramError::NoJson);
    }
    Ok(serde_json::from_str(&reply[start..=end])?)
}
