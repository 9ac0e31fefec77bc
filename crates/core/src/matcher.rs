//! Matching engine - finds shaped runs of one color
//!
//! A template matches at a pivot when its footprint is not clipped by the
//! board edge, holds no empty cell, and holds a single color.

use crate::combinations::CATALOG;
use crate::grid::Grid;
use crate::mask::Mask;
use crate::types::Coordinate;

/// First matching template at `pivot`, largest first; empty when none match
pub fn combination_at(grid: &Grid, pivot: Coordinate) -> Mask {
    let rect = grid.rect();
    for template in CATALOG.iter() {
        let mask = template.mask_at(rect, pivot);
        if mask.len() < template.len() {
            // clipped shapes never match
            continue;
        }
        if !grid.mask_has_empty(&mask) && grid.mask_is_uniform(&mask) {
            return mask;
        }
    }
    Mask::new()
}

pub fn has_combination_at(grid: &Grid, pivot: Coordinate) -> bool {
    !combination_at(grid, pivot).is_empty()
}

/// Largest combination on the board.
///
/// Pivots are visited row-major; on equal sizes the first one found wins.
pub fn largest_combination(grid: &Grid) -> Mask {
    let mut best = Mask::new();
    for pivot in grid.occupied() {
        let mask = combination_at(grid, pivot);
        if mask.len() > best.len() {
            best = mask;
        }
    }
    best
}

/// True if any combination exists
pub fn has_combination(grid: &Grid) -> bool {
    grid.occupied().any(|pivot| has_combination_at(grid, pivot))
}
