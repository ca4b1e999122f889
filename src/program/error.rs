//! Errors raised around the program model: parsing and precondition checks

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Debug, Error)]
pub enum ProgramError {
    /// Program text is not a well-formed ProgramSpec
    #[error("malformed program JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A model reply did not contain a JSON object at all
    #[error("no JSON object found in reply")]
    NoJson,

    /// An external program source failed outright
    #[error("program source '{source_name}' failed: {reason}")]
    SourceFailed { source_name: String, reason: String },

    #[error("lot dimensions must be positive (got {width} x {length})")]
    InvalidLot { width: f64, length: f64 },

    #[error("program must have at least one storey")]
    NoStoreys,

    #[error("room '{room}' is on floor {floor}, but the program has {storeys} storey(s)")]
    FloorOutOfRange { room: String, floor: u32, storeys: u32 },

    #[error("room '{room}' has non-positive target area {area}")]
    NonPositiveArea { room: String, area: f64 },

    #[error("room '{room}' lists unknown neighbor '{name}'")]
    UnknownAdjacency {
        room: String,
        name: String,
        suggestions: Vec<String>,
    },

    #[error("setbacks leave no usable {axis} ({setback} m of setback on a {lot} m lot)")]
    SetbackExceedsLot {
        axis: &'static str,
        setback: f64,
        lot: f64,
    },
}

impl ProgramError {
    pub fn source_failed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceFailed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownAdjacency { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }

    /// Location of a JSON error in `source`, if this is one
    pub fn span(&self, source: &str) -> Option<Span> {
        match self {
            Self::Json(e) if e.line() > 0 => {
                let offset = line_col_to_offset(source, e.line(), e.column());
                Some(offset..(offset + 1).min(source.len()))
            }
            _ => None,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Errors without a source location fall back to their display text.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = match self.span(source) {
            Some(span) => span,
            None => {
                let mut message = self.to_string();
                if let Some(suggestions) = self.suggestions().filter(|s| !s.is_empty()) {
                    message.push_str(&format!(" (did you mean: {}?)", suggestions.join(", ")));
                }
                return message;
            }
        };

        // ariadne counts characters, not bytes
        let span = char_span(source, &span);
        let message = self.to_string();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(message.clone())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => message,
        }
    }
}

/// Convert serde_json's 1-based line / column into a byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Re-express a byte range as a character range
fn char_span(source: &str, span: &Span) -> Span {
    let to_char = |offset: usize| source.char_indices().take_while(|(i, _)| *i < offset).count();
    to_char(span.start)..to_char(span.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::ProgramSpec;

    #[test]
    fn test_floor_out_of_range_display() {
        let err = ProgramError::FloorOutOfRange {
            room: "Loft".to_string(),
            floor: 3,
            storeys: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Loft"));
        assert!(msg.contains("floor 3"));
    }

    #[test]
    fn test_line_col_to_offset() {
        let src = "ab\ncde\nf";
        assert_eq!(line_col_to_offset(src, 1, 1), 0);
        assert_eq!(line_col_to_offset(src, 2, 2), 4);
        assert_eq!(line_col_to_offset(src, 3, 1), 7);
    }

    #[test]
    fn test_format_json_error_has_context() {
        let src = "{\n  \"meta\": 12\n}";
        let err: ProgramError = serde_json::from_str::<ProgramSpec>(src).unwrap_err().into();
        assert!(err.span(src).is_some());
        let report = err.format(src, "program.json");
        assert!(report.contains("program.json"));
    }

    #[test]
    fn test_format_without_span_includes_suggestions() {
        let err = ProgramError::UnknownAdjacency {
            room: "Dining Area".to_string(),
            name: "Kitchn".to_string(),
            suggestions: vec!["Kitchen".to_string()],
        };
        let report = err.format("", "program.json");
        assert!(report.contains("did you mean: Kitchen?"));
    }

    #[test]
    fn test_char_span_skips_multibyte_characters() {
        let src = "{\"title\": \"Bahay ni Señor Nuñez\", \"x\": 1}";
        let byte_start = src.find("\"x\"").unwrap();
        let span = char_span(src, &(byte_start..byte_start + 1));
        // Two two-byte characters precede the key
        assert_eq!(span, (byte_start - 2)..(byte_start - 1));
        assert_eq!(src.chars().nth(span.start), Some('"'));
    }

    #[test]
    fn test_format_non_ascii_source() {
        let src = "{\n  \"meta\": {\"title\": \"Piñas\", \"storeys\": 1, \"lot\": 12}\n}";
        let err: ProgramError = serde_json::from_str::<ProgramSpec>(src).unwrap_err().into();
        let span = err.span(src).unwrap();
        assert!(src.is_char_boundary(span.start));
        let report = err.format(src, "piñas.json");
        assert!(report.contains("piñas.json"));
        assert!(report.contains("Piñas"));
    }
}
