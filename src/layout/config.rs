//! Configuration for the layout engine

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::program::Setback;

/// Errors that can occur when loading a layout configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where the corridor of a floor is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorridorPlacement {
    /// Always at the floor origin, whichever row triggered it
    #[default]
    Origin,
    /// Directly under the last row, spanning the usable width
    AfterLastRow,
}

/// Footprint reserved for stairs on upper floors
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StairFootprint {
    pub width: f64,
    pub length: f64,
    /// Distance of the stair's left edge from the right of the usable area
    pub inset: f64,
}

impl Default for StairFootprint {
    fn default() -> Self {
        Self {
            width: 1.0,
            length: 2.5,
            inset: 1.5,
        }
    }
}

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Wall thickness used when the program gives none
    pub default_wall_thickness: f64,

    /// Corridor threshold used when the program gives none
    pub default_corridor_min: f64,

    /// Setbacks used when the program gives none
    pub default_setback: Setback,

    /// Display pixels per meter
    pub scale: f64,

    pub stairs: StairFootprint,

    pub corridor_placement: CorridorPlacement,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_wall_thickness: 0.2,
            default_corridor_min: 1.0,
            default_setback: Setback::new(2.0, 2.0, 1.5, 1.5),
            scale: 100.0,
            stairs: StairFootprint::default(),
            corridor_placement: CorridorPlacement::Origin,
        }
    }
}

/// TOML structure for deserializing layout configs; every key is optional
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLayoutConfig {
    wall_thickness: Option<f64>,
    corridor_min: Option<f64>,
    scale: Option<f64>,
    corridor_placement: Option<CorridorPlacement>,
    setback: Option<Setback>,
    stairs: Option<StairFootprint>,
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string; absent keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlLayoutConfig = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(LayoutConfig {
            default_wall_thickness: parsed
                .wall_thickness
                .unwrap_or(defaults.default_wall_thickness),
            default_corridor_min: parsed.corridor_min.unwrap_or(defaults.default_corridor_min),
            default_setback: parsed.setback.unwrap_or(defaults.default_setback),
            scale: parsed.scale.unwrap_or(defaults.scale),
            stairs: parsed.stairs.unwrap_or(defaults.stairs),
            corridor_placement: parsed
                .corridor_placement
                .unwrap_or(defaults.corridor_placement),
        })
    }

    /// Set the fallback setback
    pub fn with_setback(mut self, setback: Setback) -> Self {
        self.default_setback = setback;
        self
    }

    /// Set the fallback wall thickness
    pub fn with_wall_thickness(mut self, wall_thickness: f64) -> Self {
        self.default_wall_thickness = wall_thickness;
        self
    }

    /// Set the fallback corridor threshold
    pub fn with_corridor_min(mut self, corridor_min: f64) -> Self {
        self.default_corridor_min = corridor_min;
        self
    }

    /// Set the display scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the stair footprint
    pub fn with_stairs(mut self, stairs: StairFootprint) -> Self {
        self.stairs = stairs;
        self
    }

    /// Set the corridor placement rule
    pub fn with_corridor_placement(mut self, placement: CorridorPlacement) -> Self {
        self.corridor_placement = placement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.default_wall_thickness, 0.2);
        assert_eq!(config.default_corridor_min, 1.0);
        assert_eq!(config.default_setback, Setback::new(2.0, 2.0, 1.5, 1.5));
        assert_eq!(config.scale, 100.0);
        assert_eq!(config.stairs, StairFootprint::default());
        assert_eq!(config.corridor_placement, CorridorPlacement::Origin);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_scale(50.0)
            .with_corridor_min(1.2)
            .with_wall_thickness(0.3)
            .with_corridor_placement(CorridorPlacement::AfterLastRow);

        assert_eq!(config.scale, 50.0);
        assert_eq!(config.default_corridor_min, 1.2);
        assert_eq!(config.default_wall_thickness, 0.3);
        assert_eq!(config.corridor_placement, CorridorPlacement::AfterLastRow);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
scale = 40
corridor_placement = "after-last-row"

[stairs]
width = 1.2
length = 3.0
inset = 2.0
"#;
        let config = LayoutConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.scale, 40.0);
        assert_eq!(config.corridor_placement, CorridorPlacement::AfterLastRow);
        assert_eq!(config.stairs.inset, 2.0);
        // Untouched keys keep defaults
        assert_eq!(config.default_wall_thickness, 0.2);
        assert_eq!(config.default_setback, Setback::new(2.0, 2.0, 1.5, 1.5));
    }

    #[test]
    fn test_parse_setback_table() {
        let toml_str = r#"
[setback]
front = 3
rear = 2.5
left = 1
right = 1
"#;
        let config = LayoutConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.default_setback, Setback::new(3.0, 2.5, 1.0, 1.0));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(LayoutConfig::from_str("").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(LayoutConfig::from_str("scale = {{{").is_err());
        assert!(LayoutConfig::from_str("unknown_key = 1").is_err());
    }

    #[test]
    fn test_partial_stairs_table() {
        let config = LayoutConfig::from_str("[stairs]\nwidth = 1.2\n").expect("Should parse");
        assert_eq!(
            config.stairs,
            StairFootprint {
                width: 1.2,
                ..StairFootprint::default()
            }
        );
    }
}
