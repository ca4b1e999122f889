//! Rule-based room program synthesis
//!
//! Produces a plausible [`ProgramSpec`] from nothing more than lot
//! dimensions and a storey count, using proportional areas and a fixed
//! room catalog per storey. No external calls are made.

use super::types::{Lot, ProgramConstraints, ProgramMeta, ProgramSpec, RoomSpec, RoomType, Setback};

/// Share of the lot treated as buildable
pub const LOT_EFFICIENCY: f64 = 0.85;

/// Share of the usable area given to the upper floor
pub const UPPER_FLOOR_SHARE: f64 = 0.4;

/// Lots at least this wide get a garage
pub const GARAGE_MIN_LOT_WIDTH: f64 = 8.0;

/// Target areas for the ground floor catalog, in square meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundAreas {
    pub living: f64,
    pub dining: f64,
    pub kitchen: f64,
    pub bath: f64,
    pub service: f64,
    /// Zero when the lot is too narrow for a garage
    pub garage: f64,
}

impl GroundAreas {
    pub fn from_usable(usable_area: f64, lot_width: f64) -> Self {
        Self {
            living: (usable_area * 0.15).min(25.0).max(18.0),
            dining: (usable_area * 0.08).min(15.0).max(10.0),
            kitchen: (usable_area * 0.06).min(12.0).max(8.0),
            bath: 4.0,
            service: 4.0,
            garage: if lot_width >= GARAGE_MIN_LOT_WIDTH {
                12.0
            } else {
                0.0
            },
        }
    }
}

/// Target areas for the upper floor catalog, in square meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpperAreas {
    pub master_bedroom: f64,
    pub bedroom_2: f64,
    pub bedroom_3: f64,
    pub bath: f64,
    pub hallway: f64,
}

impl UpperAreas {
    pub fn from_upper(upper_floor_area: f64) -> Self {
        Self {
            master_bedroom: (upper_floor_area * 0.3).min(18.0).max(12.0),
            bedroom_2: (upper_floor_area * 0.25).min(14.0).max(10.0),
            bedroom_3: (upper_floor_area * 0.2).min(12.0).max(8.0),
            bath: 4.0,
            hallway: (upper_floor_area * 0.1).max(6.0),
        }
    }
}

/// Area reserved for the stair room on the ground floor
pub const STAIRS_AREA: f64 = 6.0;

/// Synthesize a complete room program.
///
/// Callers must pass positive dimensions and `storeys >= 1`; the function
/// itself never fails.
pub fn synthesize(title: &str, lot_width: f64, lot_length: f64, storeys: u32) -> ProgramSpec {
    let lot = Lot::new(lot_width, lot_length);
    let usable_area = lot.area() * LOT_EFFICIENCY;
    let ground = GroundAreas::from_usable(usable_area, lot_width);

    let mut rooms = vec![
        RoomSpec::new("Living Room", RoomType::Living, ground.living, 1)
            .with_min_width(3.5)
            .with_external(true)
            .with_notes("Main living area with natural light"),
        RoomSpec::new("Dining Area", RoomType::Dining, ground.dining, 1)
            .with_min_width(2.8)
            .with_adjacency(&["Living Room", "Kitchen"])
            .with_notes("Connected to living and kitchen"),
        RoomSpec::new("Kitchen", RoomType::Kitchen, ground.kitchen, 1)
            .with_min_width(2.5)
            .with_external(true)
            .with_adjacency(&["Dining Area", "Service Area"])
            .with_notes("Functional kitchen with service access"),
        RoomSpec::new("Service Area", RoomType::Utility, ground.service, 1)
            .with_min_width(2.0)
            .with_adjacency(&["Kitchen"])
            .with_notes("Laundry and utility space"),
        RoomSpec::new("Bathroom", RoomType::Bath, ground.bath, 1)
            .with_min_width(2.0)
            .with_notes("Ground floor bathroom"),
    ];

    if ground.garage > 0.0 {
        rooms.push(
            RoomSpec::new("Garage", RoomType::Garage, ground.garage, 1)
                .with_min_width(3.0)
                .with_external(true)
                .with_notes("Single car garage"),
        );
    }

    if storeys > 1 {
        let upper = UpperAreas::from_upper(usable_area * UPPER_FLOOR_SHARE);
        rooms.extend([
            RoomSpec::new("Master Bedroom", RoomType::Bedroom, upper.master_bedroom, 2)
                .with_min_width(3.0)
                .with_external(true)
                .with_notes("Main bedroom with window"),
            RoomSpec::new("Bedroom 2", RoomType::Bedroom, upper.bedroom_2, 2)
                .with_min_width(2.8)
                .with_external(true)
                .with_notes("Secondary bedroom"),
            RoomSpec::new("Bedroom 3", RoomType::Bedroom, upper.bedroom_3, 2)
                .with_min_width(2.5)
                .with_external(true)
                .with_notes("Third bedroom or study"),
            RoomSpec::new("Upper Bathroom", RoomType::Bath, upper.bath, 2)
                .with_min_width(2.0)
                .with_notes("Upper floor bathroom"),
            RoomSpec::new("Hallway", RoomType::Circulation, upper.hallway, 2)
                .with_min_width(1.2)
                .with_notes("Upper floor circulation"),
            RoomSpec::new("Stairs", RoomType::Circulation, STAIRS_AREA, 1)
                .with_min_width(1.0)
                .with_notes("Staircase to upper floor"),
        ]);
    }

    ProgramSpec {
        meta: ProgramMeta {
            title: title.to_string(),
            storeys,
            lot,
        },
        rooms,
        constraints: Some(ProgramConstraints {
            wall_thickness: Some(0.2),
            setback: Some(setback_for(lot_width, lot_length)),
            corridor_min: Some(1.0),
        }),
    }
}

/// Setbacks scaled to the lot with fixed minimums
pub fn setback_for(lot_width: f64, lot_length: f64) -> Setback {
    let side = (lot_width * 0.05).max(1.5);
    Setback {
        front: (lot_width * 0.1).max(2.0),
        rear: (lot_length * 0.1).max(2.0),
        left: side,
        right: side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_areas_clamped_low() {
        // 6 x 10 lot: usable 51, every proportional room hits its floor
        let areas = GroundAreas::from_usable(51.0, 6.0);
        assert_eq!(areas.living, 18.0);
        assert_eq!(areas.dining, 10.0);
        assert_eq!(areas.kitchen, 8.0);
        assert_eq!(areas.garage, 0.0);
    }

    #[test]
    fn test_ground_areas_clamped_high() {
        let areas = GroundAreas::from_usable(1000.0, 30.0);
        assert_eq!(areas.living, 25.0);
        assert_eq!(areas.dining, 15.0);
        assert_eq!(areas.kitchen, 12.0);
        assert_eq!(areas.garage, 12.0);
    }

    #[test]
    fn test_garage_threshold_inclusive() {
        assert_eq!(GroundAreas::from_usable(100.0, 8.0).garage, 12.0);
        assert_eq!(GroundAreas::from_usable(100.0, 7.99).garage, 0.0);
    }

    #[test]
    fn test_hallway_has_floor_of_six() {
        assert_eq!(UpperAreas::from_upper(20.0).hallway, 6.0);
        assert_eq!(UpperAreas::from_upper(80.0).hallway, 8.0);
    }

    #[test]
    fn test_single_storey_has_no_upper_rooms() {
        let program = synthesize("Bungalow", 10.0, 15.0, 1);
        assert_eq!(program.rooms.len(), 6);
        assert!(program.rooms.iter().all(|r| r.floor == 1));
        assert!(program.room("Stairs").is_none());
    }

    #[test]
    fn test_narrow_lot_skips_garage() {
        let program = synthesize("Row house", 6.0, 20.0, 1);
        assert!(program.room("Garage").is_none());
        assert_eq!(program.rooms.len(), 5);
    }

    #[test]
    fn test_setback_minimums() {
        let setback = setback_for(10.0, 15.0);
        assert_eq!(setback.front, 2.0);
        assert_eq!(setback.rear, 2.0);
        assert_eq!(setback.left, 1.5);
        assert_eq!(setback.right, 1.5);

        let setback = setback_for(40.0, 50.0);
        assert_eq!(setback.front, 4.0);
        assert_eq!(setback.rear, 5.0);
        assert_eq!(setback.left, 2.0);
        assert_eq!(setback.right, 2.0);
    }

    #[test]
    fn test_constraints_always_populated() {
        let program = synthesize("Any", 12.0, 18.0, 1);
        let constraints = program.constraints.expect("constraints");
        assert_eq!(constraints.wall_thickness, Some(0.2));
        assert_eq!(constraints.corridor_min, Some(1.0));
        assert!(constraints.setback.is_some());
    }
}
