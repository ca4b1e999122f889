//! Layout computation engine
//!
//! Projects a [`ProgramSpec`] into a [`LayoutPlan`]:
//!
//! 1. **Usable area**: the lot minus its setbacks
//! 2. **Floor grouping**: rooms partitioned by floor, ascending level order
//! 3. **Packing**: per floor, rooms sorted by target area (largest first)
//!    and shelf-packed into the usable width
//! 4. **Corridor and stairs**: one corridor when the last row is taller
//!    than the corridor threshold; a stair footprint on every upper floor
//! 5. **Assembly**: footprint and display metadata
//!
//! The computation is total. Setbacks larger than the lot give a degenerate
//! usable area and rectangles may spill past it; checking for that is left
//! to [`crate::layout::lint`].

use std::collections::BTreeMap;

use log::debug;

use crate::program::types::falsy_or;
use crate::program::{Lot, ProgramConstraints, ProgramSpec, RoomSpec, Setback};

use super::config::{CorridorPlacement, LayoutConfig};
use super::shelf::{room_size, ShelfPacker};
use super::types::*;

/// Program constraints with every fallback applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConstraints {
    pub wall_thickness: f64,
    pub setback: Setback,
    pub corridor_min: f64,
}

impl ResolvedConstraints {
    /// Fill in missing (or zero) values from `config`
    pub fn resolve(constraints: Option<&ProgramConstraints>, config: &LayoutConfig) -> Self {
        let wall_thickness = constraints.and_then(|c| c.wall_thickness);
        let corridor_min = constraints.and_then(|c| c.corridor_min);
        Self {
            wall_thickness: falsy_or(wall_thickness, config.default_wall_thickness),
            setback: constraints
                .and_then(|c| c.setback)
                .unwrap_or(config.default_setback),
            corridor_min: falsy_or(corridor_min, config.default_corridor_min),
        }
    }
}

/// Usable rectangle of a lot, positioned relative to the lot origin.
///
/// Width or length may come out zero or negative; no check is made.
pub fn usable_area(lot: &Lot, setback: &Setback) -> Rect {
    Rect::new(
        setback.left,
        setback.front,
        lot.width - setback.left - setback.right,
        lot.length - setback.front - setback.rear,
    )
}

/// Partition rooms by floor, keeping program order within each floor
pub fn group_by_floor(rooms: &[RoomSpec]) -> BTreeMap<u32, Vec<&RoomSpec>> {
    let mut floors: BTreeMap<u32, Vec<&RoomSpec>> = BTreeMap::new();
    for room in rooms {
        floors.entry(room.floor).or_default().push(room);
    }
    floors
}

/// Compute the layout plan for a program
pub fn compute(program: &ProgramSpec, config: &LayoutConfig) -> LayoutPlan {
    let constraints = ResolvedConstraints::resolve(program.constraints.as_ref(), config);
    let usable = usable_area(&program.meta.lot, &constraints.setback);

    let floors = group_by_floor(&program.rooms)
        .into_iter()
        .map(|(level, rooms)| layout_floor(level, &rooms, usable.width, &constraints, config))
        .collect();

    LayoutPlan {
        meta: PlanMeta {
            program: program.meta.clone(),
            wall_thickness: constraints.wall_thickness,
            scale: config.scale,
        },
        footprint: Footprint {
            width: program.meta.lot.width,
            length: program.meta.lot.length,
            usable,
        },
        floors,
    }
}

/// Pack one floor's rooms and add its corridor and stairs
pub fn layout_floor(
    level: u32,
    rooms: &[&RoomSpec],
    usable_width: f64,
    constraints: &ResolvedConstraints,
    config: &LayoutConfig,
) -> FloorLayout {
    let mut sorted = rooms.to_vec();
    // Stable: equal areas keep program order
    sorted.sort_by(|a, b| b.target_area.total_cmp(&a.target_area));

    let mut packer = ShelfPacker::new(usable_width);
    let placed: Vec<PlacedRoom> = sorted
        .into_iter()
        .map(|room| {
            let size = room_size(room.target_area, room.aspect_factor());
            let (x, y) = packer.place(size);
            PlacedRoom {
                name: room.name.clone(),
                room_type: room.room_type,
                floor: room.floor,
                x,
                y,
                width: size.width,
                length: size.length,
                window: room.external,
                door_to: room.adjacency.clone(),
            }
        })
        .collect();

    debug!(
        "floor {}: {} rooms in {} rows, widest row {:.2} m of {:.2} m",
        level,
        placed.len(),
        packer.rows(),
        packer.max_row_width(),
        usable_width
    );

    let corridors = corridor_for(&packer, usable_width, constraints.corridor_min, config)
        .into_iter()
        .collect();
    let stairs = stairs_for(level, usable_width, config);

    FloorLayout {
        level,
        rooms: placed,
        stairs,
        corridors,
    }
}

/// Corridor strip for a packed floor, if its last row is tall enough.
///
/// Only the last row's height is consulted. With the default
/// [`CorridorPlacement::Origin`] the strip sits at the floor origin no
/// matter which row triggered it, overlapping the first row of rooms.
pub fn corridor_for(
    packer: &ShelfPacker,
    usable_width: f64,
    corridor_min: f64,
    config: &LayoutConfig,
) -> Option<Rect> {
    if packer.row_height() <= corridor_min {
        return None;
    }
    let y = match config.corridor_placement {
        CorridorPlacement::Origin => 0.0,
        CorridorPlacement::AfterLastRow => packer.row_y() + packer.row_height(),
    };
    debug!("corridor at y={:.2}, last row height {:.2}", y, packer.row_height());
    Some(Rect::new(0.0, y, usable_width, corridor_min))
}

/// Stair footprint for floors above the first.
///
/// The ground floor gets no matching void.
pub fn stairs_for(level: u32, usable_width: f64, config: &LayoutConfig) -> Option<Rect> {
    if level <= 1 {
        return None;
    }
    let stairs = config.stairs;
    debug!("stairs on floor {}", level);
    Some(Rect::new(
        usable_width - stairs.inset,
        0.0,
        stairs.width,
        stairs.length,
    ))
}
