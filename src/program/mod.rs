//! Room programs: the declarative input to the layout engine
//!
//! A program is produced once, either by the rule-based [`synthesize`]
//! function or by an external source parsed with [`program_from_reply`],
//! and is never mutated afterwards.

pub mod error;
pub mod reply;
pub mod synth;
pub mod types;
pub mod validate;

pub use error::ProgramError;
pub use reply::{fetch_or_synthesize, program_from_reply, LocalSynthesizer, ProgramRequest, ProgramSource};
pub use synth::{setback_for, synthesize};
pub use types::*;
pub use validate::{validate, validate_with};
