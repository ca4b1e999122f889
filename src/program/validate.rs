//! Precondition checks for a room program
//!
//! The layout engine accepts any program and never fails; these checks
//! exist for callers that want to reject nonsensical input up front.

use std::collections::HashSet;

use crate::layout::{LayoutConfig, ResolvedConstraints};

use super::error::ProgramError;
use super::types::ProgramSpec;

/// Validate a program against the default layout fallbacks.
pub fn validate(program: &ProgramSpec) -> Result<(), ProgramError> {
    validate_with(program, &LayoutConfig::default())
}

/// Validate a program, returning the first violated precondition.
///
/// Setbacks are checked as the engine will apply them, so a program
/// without its own setback is held to `config.default_setback`.
pub fn validate_with(program: &ProgramSpec, config: &LayoutConfig) -> Result<(), ProgramError> {
    let meta = &program.meta;
    if !(meta.lot.width > 0.0 && meta.lot.length > 0.0) {
        return Err(ProgramError::InvalidLot {
            width: meta.lot.width,
            length: meta.lot.length,
        });
    }
    if meta.storeys == 0 {
        return Err(ProgramError::NoStoreys);
    }

    for room in &program.rooms {
        if room.floor == 0 || room.floor > meta.storeys {
            return Err(ProgramError::FloorOutOfRange {
                room: room.name.clone(),
                floor: room.floor,
                storeys: meta.storeys,
            });
        }
        if !(room.target_area > 0.0) {
            return Err(ProgramError::NonPositiveArea {
                room: room.name.clone(),
                area: room.target_area,
            });
        }
    }

    validate_adjacency(program)?;

    let setback = ResolvedConstraints::resolve(program.constraints.as_ref(), config).setback;
    let across = setback.left + setback.right;
    if across >= meta.lot.width {
        return Err(ProgramError::SetbackExceedsLot {
            axis: "width",
            setback: across,
            lot: meta.lot.width,
        });
    }
    let along = setback.front + setback.rear;
    if along >= meta.lot.length {
        return Err(ProgramError::SetbackExceedsLot {
            axis: "length",
            setback: along,
            lot: meta.lot.length,
        });
    }

    Ok(())
}

/// Every adjacency hint must name a room in the program
fn validate_adjacency(program: &ProgramSpec) -> Result<(), ProgramError> {
    let defined: HashSet<&str> = program.rooms.iter().map(|r| r.name.as_str()).collect();

    for room in &program.rooms {
        for name in &room.adjacency {
            if !defined.contains(name.as_str()) {
                return Err(ProgramError::UnknownAdjacency {
                    room: room.name.clone(),
                    name: name.clone(),
                    suggestions: find_similar(&defined, name, 2),
                });
            }
        }
    }
    Ok(())
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Single rolling row
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b_chars.len()]
}

/// Room names within `max_distance` edits of `target`, closest first
fn find_similar(defined: &HashSet<&str>, target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = defined
        .iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(&name.to_lowercase(), &target.to_lowercase());
            (dist <= max_distance).then_some((*name, dist))
        })
        .collect();

    candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}
