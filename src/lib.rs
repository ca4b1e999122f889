//! Floor Planner - room program synthesis and floor-plan layout
//!
//! This library turns lot dimensions into a room program and a room
//! program into per-floor room rectangles, corridors and stairs.
//!
//! # Example
//!
//! ```rust
//! use floor_planner::generate_plan;
//!
//! let plan = generate_plan("Two-Storey", 10.0, 15.0, 2);
//! assert_eq!(plan.floors.len(), 2);
//! assert!(plan.floor(2).unwrap().stairs.is_some());
//! ```

pub mod layout;
pub mod program;

pub use layout::{lint, LayoutConfig, LayoutPlan};
pub use program::{synthesize, validate, validate_with, ProgramError, ProgramSpec};

use thiserror::Error;

use layout::ConfigError;

/// Errors that can occur in the JSON pipeline
#[derive(Debug, Error)]
pub enum PlanError {
    /// Error reading or checking the program
    #[error("program error: {0}")]
    Program(#[from] ProgramError),

    /// Error loading the layout configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error writing the plan
    #[error("failed to serialize plan: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Options for the JSON pipeline
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// Check program preconditions before laying out
    pub validate: bool,
    /// Run the plan lint after laying out
    pub lint: bool,
}

impl PlanOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Enable or disable program validation
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Enable or disable the plan lint
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Synthesize a program and lay it out with the default configuration
pub fn generate_plan(title: &str, lot_width: f64, lot_length: f64, storeys: u32) -> LayoutPlan {
    layout::compute(
        &synthesize(title, lot_width, lot_length, storeys),
        &LayoutConfig::default(),
    )
}

/// Parse ProgramSpec JSON
pub fn parse_program(source: &str) -> Result<ProgramSpec, ProgramError> {
    Ok(serde_json::from_str(source)?)
}

/// Lay out ProgramSpec JSON and return the plan with any lint warnings
pub fn plan_with_lint(
    source: &str,
    options: &PlanOptions,
) -> Result<(LayoutPlan, Vec<lint::LintWarning>), PlanError> {
    let program = parse_program(source)?;
    if options.validate {
        validate_with(&program, &options.layout)?;
    }

    let plan = layout::compute(&program, &options.layout);
    let warnings = if options.lint {
        lint::check(&plan)
    } else {
        Vec::new()
    };
    Ok((plan, warnings))
}

/// Lay out ProgramSpec JSON and return LayoutPlan JSON
///
/// # Example
///
/// ```rust
/// use floor_planner::{plan_json, PlanOptions};
///
/// let json = plan_json(r#"{
///     "meta": {"title": "Studio", "storeys": 1, "lot": {"width": 8, "length": 12}},
///     "rooms": [{"name": "Studio", "type": "living", "targetArea": 25, "floor": 1}]
/// }"#, &PlanOptions::new()).unwrap();
///
/// assert!(json.contains("\"usable\""));
/// ```
pub fn plan_json(source: &str, options: &PlanOptions) -> Result<String, PlanError> {
    let (plan, _) = plan_with_lint(source, options)?;
    to_json(&plan)
}

/// Pretty-print any plan or program as JSON
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, PlanError> {
    serde_json::to_string_pretty(value).map_err(PlanError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r#"{
        "meta": {"title": "Pair", "storeys": 1, "lot": {"width": 9, "length": 12}},
        "rooms": [
            {"name": "Living", "type": "living", "targetArea": 16, "floor": 1},
            {"name": "Bath", "type": "bath", "targetArea": 4, "floor": 1, "adjacency": ["Livng"]}
        ]
    }"#;

    #[test]
    fn test_generate_plan_single_storey() {
        let plan = generate_plan("Bungalow", 10.0, 15.0, 1);
        assert_eq!(plan.floors.len(), 1);
        assert_eq!(plan.floors[0].level, 1);
        assert!(plan.floors[0].stairs.is_none());
    }

    #[test]
    fn test_plan_json_without_validation_accepts_bad_adjacency() {
        let json = plan_json(PROGRAM, &PlanOptions::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["meta"]["title"], "Pair");
        assert_eq!(value["floors"][0]["rooms"][0]["name"], "Living");
    }

    #[test]
    fn test_plan_json_with_validation_rejects_bad_adjacency() {
        let result = plan_json(PROGRAM, &PlanOptions::new().with_validate(true));
        assert!(matches!(
            result,
            Err(PlanError::Program(ProgramError::UnknownAdjacency { .. }))
        ));
    }

    #[test]
    fn test_malformed_program_is_program_error() {
        let result = plan_json("{ not json", &PlanOptions::new());
        assert!(matches!(result, Err(PlanError::Program(ProgramError::Json(_)))));
    }

    #[test]
    fn test_lint_disabled_no_warnings() {
        let (_, warnings) = plan_with_lint(PROGRAM, &PlanOptions::new()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_lint_enabled_reports_corridor_overlap() {
        let options = PlanOptions::new().with_lint(true);
        let (_, warnings) = plan_with_lint(PROGRAM, &options).unwrap();
        assert!(warnings
            .iter()
            .any(|w| w.category == layout::LintCategory::Overlap));
    }
}
