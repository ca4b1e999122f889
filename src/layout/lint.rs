//! Lint engine for detecting geometric defects in a computed plan.
//!
//! The layout engine never rejects a program, so a plan can come out with
//! rooms spilling past the usable area or a corridor laid over rooms.
//! These checks report such defects without touching the plan.

use std::fmt;

use super::types::{FloorLayout, LayoutPlan, PlacedRoom, Rect};

/// Slack for floating-point edge comparisons, in meters
const TOLERANCE: f64 = 1e-6;

/// A lint warning about a plan defect
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    /// Floor the defect is on; `None` for plan-wide defects
    pub level: Option<u32>,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Degenerate,
    Bounds,
    Overlap,
    Adjacency,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Degenerate => write!(f, "degenerate"),
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Adjacency => write!(f, "adjacency"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Some(level) => write!(f, "[{}] floor {}: {}", self.category, level, self.message),
            None => write!(f, "[{}] {}", self.category, self.message),
        }
    }
}

/// Run all lint checks on a completed plan.
pub fn check(plan: &LayoutPlan) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_degenerate(plan, &mut warnings);
    for floor in &plan.floors {
        check_bounds(plan, floor, &mut warnings);
        check_overlaps(floor, &mut warnings);
        check_adjacency(floor, &mut warnings);
    }
    warnings
}

// ── Degenerate usable area ────────────────────────────────────────

fn check_degenerate(plan: &LayoutPlan, warnings: &mut Vec<LintWarning>) {
    let usable = &plan.footprint.usable;
    if usable.width <= 0.0 || usable.length <= 0.0 {
        warnings.push(LintWarning {
            category: LintCategory::Degenerate,
            level: None,
            message: format!(
                "setbacks leave a usable area of {:.2}x{:.2} m on a {:.2}x{:.2} m lot",
                usable.width, usable.length, plan.footprint.width, plan.footprint.length
            ),
        });
    }
}

// ── Bounds ────────────────────────────────────────────────────────

fn check_bounds(plan: &LayoutPlan, floor: &FloorLayout, warnings: &mut Vec<LintWarning>) {
    let usable = &plan.footprint.usable;
    // Placed geometry is relative to the usable origin
    let area = Rect::new(0.0, 0.0, usable.width, usable.length);

    let mut outside = |what: String, rect: &Rect| {
        if !area.contains_rect(rect, TOLERANCE) {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                level: Some(floor.level),
                message: format!(
                    "{} extends to {:.2}x{:.2} m, usable area is {:.2}x{:.2} m",
                    what,
                    rect.right(),
                    rect.bottom(),
                    usable.width,
                    usable.length
                ),
            });
        }
    };

    for room in &floor.rooms {
        outside(format!("room \"{}\"", room.name), &room.rect());
    }
    for (i, corridor) in floor.corridors.iter().enumerate() {
        outside(format!("corridor #{}", i + 1), corridor);
    }
    if let Some(stairs) = &floor.stairs {
        outside("stairs".to_string(), stairs);
    }
}

// ── Overlap detection ─────────────────────────────────────────────

fn check_overlaps(floor: &FloorLayout, warnings: &mut Vec<LintWarning>) {
    let rooms = &floor.rooms;
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            push_overlap(
                floor.level,
                &format!("rooms \"{}\" and \"{}\"", rooms[i].name, rooms[j].name),
                &rooms[i].rect(),
                &rooms[j].rect(),
                warnings,
            );
        }
    }

    let fixtures = floor
        .corridors
        .iter()
        .enumerate()
        .map(|(i, r)| (format!("corridor #{}", i + 1), r))
        .chain(floor.stairs.iter().map(|r| ("stairs".to_string(), r)));

    for (what, fixture) in fixtures {
        for room in rooms {
            push_overlap(
                floor.level,
                &format!("{} and room \"{}\"", what, room.name),
                fixture,
                &room.rect(),
                warnings,
            );
        }
    }
}

fn push_overlap(level: u32, what: &str, a: &Rect, b: &Rect, warnings: &mut Vec<LintWarning>) {
    if let Some((w, l)) = a.overlap(b) {
        if w > TOLERANCE && l > TOLERANCE {
            warnings.push(LintWarning {
                category: LintCategory::Overlap,
                level: Some(level),
                message: format!("{} overlap by {:.2}x{:.2} m", what, w, l),
            });
        }
    }
}

// ── Adjacency ─────────────────────────────────────────────────────

/// Preferred neighbors on the same floor that ended up not sharing an edge.
///
/// Names placed on other floors are skipped; each pair is reported once.
fn check_adjacency(floor: &FloorLayout, warnings: &mut Vec<LintWarning>) {
    let mut reported: Vec<(&str, &str)> = Vec::new();

    for room in &floor.rooms {
        for name in &room.door_to {
            let Some(other) = floor.room(name).filter(|o| o.name != room.name) else {
                continue;
            };
            let pair = ordered_pair(room, other);
            if reported.contains(&pair) {
                continue;
            }
            if !room.rect().touches(&other.rect(), TOLERANCE) {
                reported.push(pair);
                warnings.push(LintWarning {
                    category: LintCategory::Adjacency,
                    level: Some(floor.level),
                    message: format!(
                        "room \"{}\" prefers to neighbor \"{}\" but they share no wall",
                        room.name, other.name
                    ),
                });
            }
        }
    }
}

fn ordered_pair<'a>(a: &'a PlacedRoom, b: &'a PlacedRoom) -> (&'a str, &'a str) {
    if a.name <= b.name {
        (a.name.as_str(), b.name.as_str())
    } else {
        (b.name.as_str(), a.name.as_str())
    }
}
