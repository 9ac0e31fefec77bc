//! Swap validator
//!
//! Smart-swap legality is decided by simulation: the swap is applied to a copy
//! of the grid and the copy is searched for a combination. The live grid is
//! never touched.

use crate::grid::Grid;
use crate::matcher::largest_combination;
use crate::types::Coordinate;

/// Raw legality: both cells hold a token. Adjacency is not required.
pub fn is_swap_legal(grid: &Grid, a: Coordinate, b: Coordinate) -> bool {
    grid.rect().contains(a)
        && grid.rect().contains(b)
        && !grid.is_empty_cell(a)
        && !grid.is_empty_cell(b)
}

/// Adjacent swap that creates at least one combination
pub fn is_smart_swap_legal(grid: &Grid, a: Coordinate, b: Coordinate) -> bool {
    if !is_swap_legal(grid, a, b) || a.manhattan(b) != 1 {
        return false;
    }
    let mut sim = grid.clone();
    if sim.swap(a, b).is_err() {
        return false;
    }
    !largest_combination(&sim).is_empty()
}

/// First smart swap, scanning ordered pairs of occupied cells row-major
pub fn find_smart_swap(grid: &Grid) -> Option<(Coordinate, Coordinate)> {
    let occupied: Vec<Coordinate> = grid.occupied().collect();
    occupied.iter().find_map(|&a| {
        occupied
            .iter()
            .find(|&&b| is_smart_swap_legal(grid, a, b))
            .map(|&b| (a, b))
    })
}

pub fn has_any_smart_swap(grid: &Grid) -> bool {
    find_smart_swap(grid).is_some()
}
