//! Cascade controller - drives the board to a stable state
//!
//! Phases:
//!
//! ```text
//! Dropping -> Matching -> Erasing -> Dropping ...
//!                 |
//!                 +-> Filling -> Matching ...
//!                 |
//!                 +-> Stable
//! ```
//!
//! Matching always erases the largest combination first and only refills once
//! no combination is left. Each fill pass adds at most one token per column.
//! A stable board has no combination and no empty cell.

use tracing::{debug, trace};

use crate::error::{MoveError, MoveResult};
use crate::grid::Grid;
use crate::mask::Mask;
use crate::matcher::{has_combination, largest_combination};
use crate::rng::SimpleRng;

/// Step budget per board cell
pub const CASCADE_GUARD_FACTOR: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Dropping,
    Matching,
    Erasing(Mask),
    Filling,
    Stable,
}

/// What one cascade did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    /// Size of every erased combination, in erase order
    pub batches: Vec<usize>,
    /// Number of refill passes
    pub fills: usize,
    /// Phase transitions taken
    pub steps: usize,
}

impl CascadeReport {
    pub fn erased(&self) -> usize {
        self.batches.iter().sum()
    }

    /// True if the board was already stable
    pub fn is_noop(&self) -> bool {
        self.batches.is_empty() && self.fills == 0
    }
}

/// Run the cascade to completion.
///
/// `on_erase` sees the board and every combination right before it is erased. Exceeding the
/// step guard, or finishing on a board that is not stable, is a broken outcome.
pub fn run<F>(grid: &mut Grid, rng: &mut SimpleRng, mut on_erase: F) -> MoveResult<CascadeReport>
where
    F: FnMut(&Grid, &Mask),
{
    let guard = grid.rect().area() * CASCADE_GUARD_FACTOR;
    let mut report = CascadeReport::default();
    let mut phase = Phase::Dropping;

    while phase != Phase::Stable {
        if report.steps >= guard {
            return Err(MoveError::broken(format!(
                "cascade did not settle within {} steps",
                guard
            )));
        }
        report.steps += 1;

        phase = match phase {
            Phase::Dropping => {
                grid.drop_all();
                Phase::Matching
            }
            Phase::Matching => {
                let mask = largest_combination(grid);
                if !mask.is_empty() {
                    Phase::Erasing(mask)
                } else if grid.has_empty_cell() {
                    Phase::Filling
                } else {
                    Phase::Stable
                }
            }
            Phase::Erasing(mask) => {
                on_erase(grid, &mask);
                grid.erase_mask(&mask);
                debug!(size = mask.len(), cells = %mask, "erased combination");
                report.batches.push(mask.len());
                Phase::Dropping
            }
            Phase::Filling => {
                let filled = grid.fill_first_empty_layer(rng);
                report.fills += 1;
                debug!(filled, "refilled one layer");
                Phase::Matching
            }
            Phase::Stable => Phase::Stable,
        };
        trace!(?phase, step = report.steps, "cascade phase");
    }

    if grid.has_empty_cell() || has_combination(grid) {
        return Err(MoveError::broken("board is not stable after cascade"));
    }
    Ok(report)
}

/// True if the board has no combination and no empty cell
pub fn is_stable(grid: &Grid) -> bool {
    !grid.has_empty_cell() && !has_combination(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    const STABLE: [&str; 8] = [
        "ABCDEFGH", "BCDEFGHA", "CDEFGHAB", "DEFGHABC", "EFGHABCD", "FGHABCDE", "GHABCDEF",
        "HABCDEFG",
    ];

    #[test]
    fn stable_board_is_noop() {
        let mut grid = Grid::from_rows(Rect::default(), &STABLE).unwrap();
        let before = grid.clone();
        let mut rng = SimpleRng::new(1);
        let report = run(&mut grid, &mut rng, |_, _| panic!("nothing to erase")).unwrap();
        assert!(report.is_noop());
        assert_eq!(grid, before);
    }

    #[test]
    fn empty_board_fills_up() {
        let mut grid = Grid::default();
        let mut rng = SimpleRng::new(42);
        let report = run(&mut grid, &mut rng, |_, _| {}).unwrap();
        assert!(report.fills >= 8);
        assert!(is_stable(&grid));
    }

    #[test]
    fn erase_callback_sees_every_batch() {
        let mut rows = STABLE;
        rows[0] = "AAAAEFGH";
        let mut grid = Grid::from_rows(Rect::default(), &rows).unwrap();
        let mut rng = SimpleRng::new(7);
        let mut seen = Vec::new();
        let report = run(&mut grid, &mut rng, |_, mask| seen.push(mask.len())).unwrap();
        assert_eq!(seen, report.batches);
        assert_eq!(seen[0], 4);
        assert!(is_stable(&grid));
    }

    #[test]
    fn gravity_runs_before_matching() {
        let rect = Rect::new(3, 3).unwrap();
        // Column 0 has a hole at the bottom; only after the drop does row 0
        // read A A A.
        let mut grid = Grid::from_rows(rect, &[".AA", "ACB", "BBC"]).unwrap();
        let mut first = None;
        let mut rng = SimpleRng::new(5);
        run(&mut grid, &mut rng, |_, mask| {
            if first.is_none() {
                first = Some(mask.clone());
            }
        })
        .unwrap();
        let first = first.unwrap();
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|c| c.row() == 0));
    }
}
