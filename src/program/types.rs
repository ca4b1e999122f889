//! Core types describing a room program

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of space a room represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Living,
    Kitchen,
    Dining,
    Bedroom,
    Bath,
    Circulation,
    Utility,
    Garage,
    Other,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomType::Living => "living",
            RoomType::Kitchen => "kitchen",
            RoomType::Dining => "dining",
            RoomType::Bedroom => "bedroom",
            RoomType::Bath => "bath",
            RoomType::Circulation => "circulation",
            RoomType::Utility => "utility",
            RoomType::Garage => "garage",
            RoomType::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Lot dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub width: f64,
    pub length: f64,
}

impl Lot {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// Project-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramMeta {
    pub title: String,
    pub storeys: u32,
    pub lot: Lot,
}

/// A single requested room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Target floor area in square meters
    pub target_area: f64,
    /// Despite the name this is an aspect factor, not a width bound.
    /// See [`RoomSpec::aspect_factor`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// 1-based floor number
    pub floor: u32,
    /// Names of rooms this one would like to neighbor
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjacency: Vec<String>,
    /// Wants an exterior wall / window
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RoomSpec {
    pub fn new(name: impl Into<String>, room_type: RoomType, target_area: f64, floor: u32) -> Self {
        Self {
            name: name.into(),
            room_type,
            target_area,
            min_width: None,
            floor,
            adjacency: vec![],
            external: false,
            notes: None,
        }
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn with_adjacency(mut self, names: &[&str]) -> Self {
        self.adjacency = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Multiplier skewing the room rectangle away from square.
    ///
    /// A missing or zero `minWidth` yields 1.0 (square room).
    pub fn aspect_factor(&self) -> f64 {
        falsy_or(self.min_width, 1.0)
    }
}

/// Clearances from each lot boundary, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Setback {
    pub front: f64,
    pub rear: f64,
    pub left: f64,
    pub right: f64,
}

impl Setback {
    pub fn new(front: f64, rear: f64, left: f64, right: f64) -> Self {
        Self {
            front,
            rear,
            left,
            right,
        }
    }
}

/// Optional building constraints; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setback: Option<Setback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corridor_min: Option<f64>,
}

/// The declarative description of a building: rooms, areas and constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSpec {
    pub meta: ProgramMeta,
    pub rooms: Vec<RoomSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ProgramConstraints>,
}

impl ProgramSpec {
    /// Look up a room by name
    pub fn room(&self, name: &str) -> Option<&RoomSpec> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Rooms assigned to the given floor, in program order
    pub fn rooms_on(&self, floor: u32) -> impl Iterator<Item = &RoomSpec> {
        self.rooms.iter().filter(move |r| r.floor == floor)
    }

    /// Sum of all target areas
    pub fn total_area(&self) -> f64 {
        self.rooms.iter().map(|r| r.target_area).sum()
    }
}

/// Returns `value` unless it is absent, zero or NaN, in which case `fallback`.
pub(crate) fn falsy_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_serializes_lowercase() {
        let json = serde_json::to_string(&RoomType::Circulation).unwrap();
        assert_eq!(json, "\"circulation\"");
    }

    #[test]
    fn test_unknown_room_type_rejected() {
        let result: Result<RoomType, _> = serde_json::from_str("\"attic\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_room_spec_optional_fields_default() {
        let json = r#"{"name": "Den", "type": "other", "targetArea": 9, "floor": 1}"#;
        let room: RoomSpec = serde_json::from_str(json).unwrap();
        assert_eq!(room.min_width, None);
        assert!(room.adjacency.is_empty());
        assert!(!room.external);
        assert_eq!(room.notes, None);
        assert_eq!(room.aspect_factor(), 1.0);
    }

    #[test]
    fn test_aspect_factor_zero_falls_back() {
        let room = RoomSpec::new("Nook", RoomType::Other, 4.0, 1).with_min_width(0.0);
        assert_eq!(room.aspect_factor(), 1.0);

        let room = RoomSpec::new("Nook", RoomType::Other, 4.0, 1).with_min_width(2.5);
        assert_eq!(room.aspect_factor(), 2.5);
    }

    #[test]
    fn test_room_spec_camel_case_fields() {
        let room = RoomSpec::new("Kitchen", RoomType::Kitchen, 8.0, 1)
            .with_min_width(2.5)
            .with_adjacency(&["Dining Area"]);
        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value["targetArea"], 8.0);
        assert_eq!(value["minWidth"], 2.5);
        assert_eq!(value["type"], "kitchen");
        assert_eq!(value["adjacency"][0], "Dining Area");
    }

    #[test]
    fn test_program_without_constraints() {
        let json = r#"{
            "meta": {"title": "Box", "storeys": 1, "lot": {"width": 8, "length": 12}},
            "rooms": []
        }"#;
        let program: ProgramSpec = serde_json::from_str(json).unwrap();
        assert!(program.constraints.is_none());
        assert_eq!(program.meta.lot.area(), 96.0);
    }

    #[test]
    fn test_rooms_on_floor() {
        let program = ProgramSpec {
            meta: ProgramMeta {
                title: "t".to_string(),
                storeys: 2,
                lot: Lot::new(10.0, 10.0),
            },
            rooms: vec![
                RoomSpec::new("a", RoomType::Living, 20.0, 1),
                RoomSpec::new("b", RoomType::Bedroom, 12.0, 2),
                RoomSpec::new("c", RoomType::Bath, 4.0, 1),
            ],
            constraints: None,
        };
        let names: Vec<_> = program.rooms_on(1).map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(program.total_area(), 36.0);
        assert!(program.room("b").is_some());
    }
}
