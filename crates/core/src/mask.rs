//! Mask module - bounds-clipped coordinate sets
//!
//! A mask describes combinations, erase targets and bonus footprints. Members
//! are always inside the board rectangle: anything that would land outside is
//! dropped silently instead of being reported as an error.
//!
//! Members are kept in a `BTreeSet`, so iteration is row-major.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Coordinate, Offset, Rect};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mask {
    cells: BTreeSet<Coordinate>,
}

impl Mask {
    /// Create an empty mask
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mask from absolute coordinates, keeping only those inside `rect`
    pub fn from_coordinates<I>(rect: Rect, coords: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        Self {
            cells: coords.into_iter().filter(|&c| rect.contains(c)).collect(),
        }
    }

    /// Build a mask from a pivot plus relative offsets.
    ///
    /// An offset is kept only when it lies in the extended range
    /// `[-2·height, 2·height] x [-2·width, 2·width]` and `pivot + offset` is on
    /// the board. The result can therefore be shorter than `offsets`.
    pub fn from_offsets(rect: Rect, pivot: Coordinate, offsets: &[Offset]) -> Self {
        let max_dr = 2 * rect.height() as i16;
        let max_dc = 2 * rect.width() as i16;
        let cells = offsets
            .iter()
            .filter(|o| o.dr.abs() <= max_dr && o.dc.abs() <= max_dc)
            .filter_map(|&o| rect.translate(pivot, o))
            .collect();
        Self { cells }
    }

    /// Move every member by `delta`, dropping members that leave `rect`
    pub fn translate(&self, rect: Rect, delta: Offset) -> Self {
        Self {
            cells: self
                .cells
                .iter()
                .filter_map(|&c| rect.translate(c, delta))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells.contains(&c)
    }

    /// Members in row-major order
    pub fn iter(&self) -> btree_set::Iter<'_, Coordinate> {
        self.cells.iter()
    }

    /// Smallest member in row-major order
    pub fn first(&self) -> Option<Coordinate> {
        self.cells.first().copied()
    }
}

impl<'a> IntoIterator for &'a Mask {
    type Item = &'a Coordinate;
    type IntoIter = btree_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cells {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rc(rect: Rect, row: i32, col: i32) -> Coordinate {
        rect.coordinate(row, col).unwrap()
    }

    #[test]
    fn test_from_offsets_inside_board_keeps_everything() {
        let rect = Rect::default();
        let pivot = rc(rect, 3, 3);
        let offsets = [Offset::new(0, -1), Offset::ZERO, Offset::new(0, 1)];
        let mask = Mask::from_offsets(rect, pivot, &offsets);
        assert_eq!(mask.len(), 3);
        assert!(mask.contains(rc(rect, 3, 2)));
        assert!(mask.contains(rc(rect, 3, 4)));
    }

    #[test]
    fn test_from_offsets_clips_at_edge() {
        let rect = Rect::default();
        let pivot = rc(rect, 0, 0);
        let offsets = [Offset::new(-1, 0), Offset::ZERO, Offset::new(1, 0)];
        let mask = Mask::from_offsets(rect, pivot, &offsets);
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(pivot));
        assert!(mask.contains(rc(rect, 1, 0)));
    }

    #[test]
    fn test_from_offsets_drops_out_of_extended_range() {
        let rect = Rect::default();
        let pivot = rc(rect, 0, 0);
        // 17 is beyond 2 * 8, even though it would be clipped anyway.
        let offsets = [Offset::ZERO, Offset::new(17, 0), Offset::new(0, -17)];
        let mask = Mask::from_offsets(rect, pivot, &offsets);
        assert_eq!(mask.len(), 1);
    }

    #[test]
    fn test_from_coordinates_clips_to_smaller_rect() {
        let big = Rect::default();
        let small = Rect::new(4, 4).unwrap();
        let coords = [rc(big, 0, 0), rc(big, 3, 3), rc(big, 5, 5)];
        let mask = Mask::from_coordinates(small, coords);
        assert_eq!(mask.len(), 2);
    }

    #[test]
    fn test_translate_drops_members_leaving_board() {
        let rect = Rect::default();
        let mask = Mask::from_coordinates(rect, [rc(rect, 7, 7), rc(rect, 5, 5)]);
        let moved = mask.translate(rect, Offset::new(2, 2));
        assert_eq!(moved.len(), 1);
        assert!(moved.contains(rc(rect, 7, 7)));
    }

    #[test]
    fn test_iteration_is_row_major() {
        let rect = Rect::default();
        let mask = Mask::from_coordinates(
            rect,
            [rc(rect, 2, 0), rc(rect, 0, 5), rc(rect, 0, 1), rc(rect, 1, 7)],
        );
        let order: Vec<(u8, u8)> = mask.iter().map(|c| (c.row(), c.col())).collect();
        assert_eq!(order, vec![(0, 1), (0, 5), (1, 7), (2, 0)]);
        assert_eq!(mask.first(), Some(rc(rect, 0, 1)));
    }

    #[test]
    fn test_display() {
        let rect = Rect::default();
        let mask = Mask::from_coordinates(rect, [rc(rect, 1, 2), rc(rect, 0, 3)]);
        assert_eq!(mask.to_string(), "(0, 3) (1, 2)");
    }
}
