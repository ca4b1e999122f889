//! Core types for the layout engine

use serde::{Deserialize, Serialize};

use crate::program::{ProgramMeta, RoomType};

/// An axis-aligned rectangle in plan meters.
///
/// `x`/`y` is the top-left corner; `length` runs along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, length: f64) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.length
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Check if this rectangle overlaps another with positive area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Width and length of the overlapping region, if any
    pub fn overlap(&self, other: &Rect) -> Option<(f64, f64)> {
        if !self.intersects(other) {
            return None;
        }
        Some((
            self.right().min(other.right()) - self.x.max(other.x),
            self.bottom().min(other.bottom()) - self.y.max(other.y),
        ))
    }

    /// Check if the two rectangles share a stretch of edge without overlapping
    pub fn touches(&self, other: &Rect, tolerance: f64) -> bool {
        let span_x = self.right().min(other.right()) - self.x.max(other.x);
        let span_y = self.bottom().min(other.bottom()) - self.y.max(other.y);
        let vertical_edge = ((self.right() - other.x).abs() <= tolerance
            || (other.right() - self.x).abs() <= tolerance)
            && span_y > tolerance;
        let horizontal_edge = ((self.bottom() - other.y).abs() <= tolerance
            || (other.bottom() - self.y).abs() <= tolerance)
            && span_x > tolerance;
        vertical_edge || horizontal_edge
    }

    /// Check if `other` lies entirely within this rectangle
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

/// Lot outline plus the buildable area left after setbacks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub length: f64,
    /// Usable area, positioned relative to the lot origin
    pub usable: Rect,
}

impl Footprint {
    pub fn lot_area(&self) -> f64 {
        self.width * self.length
    }

    /// Share of the lot left buildable after setbacks, in `0.0..=1.0`.
    ///
    /// A degenerate usable area counts as zero.
    pub fn efficiency(&self) -> f64 {
        let lot_area = self.lot_area();
        if lot_area <= 0.0 || self.usable.width <= 0.0 || self.usable.length <= 0.0 {
            return 0.0;
        }
        self.usable.area() / lot_area
    }
}

/// Program metadata extended with drawing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    #[serde(flatten)]
    pub program: ProgramMeta,
    pub wall_thickness: f64,
    /// Display pixels per meter
    pub scale: f64,
}

/// A room with its computed rectangle.
///
/// Coordinates are relative to the usable-area origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedRoom {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub floor: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
    /// Wants an exterior window; copied from the program
    pub window: bool,
    /// Preferred neighbors; informational only
    pub door_to: Vec<String>,
}

impl PlacedRoom {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.length)
    }
}

/// Everything placed on one storey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorLayout {
    pub level: u32,
    pub rooms: Vec<PlacedRoom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stairs: Option<Rect>,
    #[serde(default)]
    pub corridors: Vec<Rect>,
}

impl FloorLayout {
    pub fn room(&self, name: &str) -> Option<&PlacedRoom> {
        self.rooms.iter().find(|r| r.name == name)
    }
}

/// The complete result of layout computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub meta: PlanMeta,
    pub footprint: Footprint,
    /// Floors in ascending level order
    pub floors: Vec<FloorLayout>,
}

impl LayoutPlan {
    pub fn floor(&self, level: u32) -> Option<&FloorLayout> {
        self.floors.iter().find(|f| f.level == level)
    }

    /// Iterate over every placed room on every floor
    pub fn rooms(&self) -> impl Iterator<Item = &PlacedRoom> {
        self.floors.iter().flat_map(|f| f.rooms.iter())
    }
}
