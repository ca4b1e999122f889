//! Layout engine for computing room rectangles
//!
//! This module takes a room program and computes the spatial layout,
//! producing a LayoutPlan with per-floor rooms, corridors and stairs.

pub mod config;
pub mod engine;
pub mod lint;
pub mod shelf;
pub mod types;

pub use config::{ConfigError, CorridorPlacement, LayoutConfig, StairFootprint};
pub use engine::{compute, usable_area, ResolvedConstraints};
pub use lint::{LintCategory, LintWarning};
pub use shelf::{room_size, RoomSize};
pub use types::*;
