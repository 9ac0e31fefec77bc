//! Combination catalog and bonus geometry
//!
//! Combinations are static offset templates anchored at a pivot cell. Offsets
//! are `(row, col)` deltas; positive rows point up the board.
//!
//! | Template | Cells |
//! |----------|-------|
//! | `T_VERTICAL`, `T_HORIZONTAL` | 7 |
//! | `L_UP_RIGHT`, `L_DOWN_LEFT`, `L_UP_LEFT`, `FIVE_ROW_CENTERED`, `FIVE_COL`, `FIVE_ROW` | 5 |
//! | `FOUR_COL_UP`, `FOUR_ROW_RIGHT`, `FOUR_COL_DOWN`, `FOUR_ROW_LEFT` | 4 |
//! | `THREE_COL`, `THREE_ROW` | 3 |
//!
//! The matcher walks [`CATALOG`] largest first. Templates of equal size keep
//! their declaration order.

use crate::mask::Mask;
use crate::types::{Coordinate, Offset, Rect};

/// A named combination shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub offsets: &'static [Offset],
}

impl Template {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Footprint of this template at `pivot`, clipped to `rect`
    pub fn mask_at(&self, rect: Rect, pivot: Coordinate) -> Mask {
        Mask::from_offsets(rect, pivot, self.offsets)
    }
}

const fn o(dr: i16, dc: i16) -> Offset {
    Offset::new(dr, dc)
}

pub const T_VERTICAL: Template = Template {
    name: "T_VERTICAL",
    offsets: &[o(-2, 0), o(-1, 0), o(0, 0), o(1, 0), o(2, 0), o(0, 1), o(0, 2)],
};

pub const T_HORIZONTAL: Template = Template {
    name: "T_HORIZONTAL",
    offsets: &[o(0, -2), o(0, -1), o(0, 0), o(0, 1), o(0, 2), o(1, 0), o(2, 0)],
};

pub const L_UP_RIGHT: Template = Template {
    name: "L_UP_RIGHT",
    offsets: &[o(0, 2), o(0, 1), o(0, 0), o(1, 0), o(2, 0)],
};

pub const FIVE_ROW_CENTERED: Template = Template {
    name: "FIVE_ROW_CENTERED",
    offsets: &[o(0, -2), o(0, -1), o(0, 0), o(0, 1), o(0, 2)],
};

pub const L_DOWN_LEFT: Template = Template {
    name: "L_DOWN_LEFT",
    offsets: &[o(-2, 0), o(-1, 0), o(0, 0), o(0, -1), o(0, -2)],
};

pub const L_UP_LEFT: Template = Template {
    name: "L_UP_LEFT",
    offsets: &[o(0, 0), o(1, 0), o(2, 0), o(0, -2), o(0, -1)],
};

pub const THREE_COL: Template = Template {
    name: "THREE_COL",
    offsets: &[o(0, 0), o(-1, 0), o(1, 0)],
};

pub const THREE_ROW: Template = Template {
    name: "THREE_ROW",
    offsets: &[o(0, 0), o(0, -1), o(0, 1)],
};

pub const FOUR_COL_UP: Template = Template {
    name: "FOUR_COL_UP",
    offsets: &[o(-1, 0), o(0, 0), o(1, 0), o(2, 0)],
};

pub const FOUR_ROW_RIGHT: Template = Template {
    name: "FOUR_ROW_RIGHT",
    offsets: &[o(0, -1), o(0, 0), o(0, 1), o(0, 2)],
};

pub const FOUR_COL_DOWN: Template = Template {
    name: "FOUR_COL_DOWN",
    offsets: &[o(-2, 0), o(-1, 0), o(0, 0), o(1, 0)],
};

pub const FOUR_ROW_LEFT: Template = Template {
    name: "FOUR_ROW_LEFT",
    offsets: &[o(0, -2), o(0, -1), o(0, 0), o(0, 1)],
};

pub const FIVE_COL: Template = Template {
    name: "FIVE_COL",
    offsets: &[o(-1, 0), o(0, 0), o(1, 0), o(2, 0), o(3, 0)],
};

pub const FIVE_ROW: Template = Template {
    name: "FIVE_ROW",
    offsets: &[o(0, -1), o(0, 0), o(0, 1), o(0, 2), o(0, 3)],
};

/// Catalog in declaration order
pub const TEMPLATES: [Template; 14] = [
    T_VERTICAL,
    T_HORIZONTAL,
    L_UP_RIGHT,
    FIVE_ROW_CENTERED,
    L_DOWN_LEFT,
    L_UP_LEFT,
    THREE_COL,
    THREE_ROW,
    FOUR_COL_UP,
    FOUR_ROW_RIGHT,
    FOUR_COL_DOWN,
    FOUR_ROW_LEFT,
    FIVE_COL,
    FIVE_ROW,
];

/// Catalog sorted by descending size, ties in declaration order.
///
/// Written out rather than sorted at startup; `catalog_is_sorted_largest_first`
/// checks it against a stable sort of [`TEMPLATES`].
pub const CATALOG: [Template; 14] = [
    T_VERTICAL,
    T_HORIZONTAL,
    L_UP_RIGHT,
    FIVE_ROW_CENTERED,
    L_DOWN_LEFT,
    L_UP_LEFT,
    FIVE_COL,
    FIVE_ROW,
    FOUR_COL_UP,
    FOUR_ROW_RIGHT,
    FOUR_COL_DOWN,
    FOUR_ROW_LEFT,
    THREE_COL,
    THREE_ROW,
];

/// Geometric bonus footprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusShape {
    Row,
    Col,
    Cross,
    All,
}

/// Offset templates for the geometric bonuses of one board size.
///
/// Offsets span `[-2·extent, 2·extent]` so that, after clipping, any pivot on
/// the board yields the complete row, column, cross or board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusTemplates {
    rect: Rect,
    row: Vec<Offset>,
    col: Vec<Offset>,
    cross: Vec<Offset>,
    all: Vec<Offset>,
}

impl BonusTemplates {
    pub fn new(rect: Rect) -> Self {
        let max_dc = 2 * rect.width() as i16;
        let max_dr = 2 * rect.height() as i16;

        let row: Vec<Offset> = (-max_dc..=max_dc).map(|dc| Offset::new(0, dc)).collect();
        let col: Vec<Offset> = (-max_dr..=max_dr).map(|dr| Offset::new(dr, 0)).collect();
        let cross = row
            .iter()
            .chain(col.iter().filter(|o| o.dr != 0))
            .copied()
            .collect();
        let all = (-max_dr..=max_dr)
            .flat_map(|dr| (-max_dc..=max_dc).map(move |dc| Offset::new(dr, dc)))
            .collect();

        Self {
            rect,
            row,
            col,
            cross,
            all,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn offsets(&self, shape: BonusShape) -> &[Offset] {
        match shape {
            BonusShape::Row => &self.row,
            BonusShape::Col => &self.col,
            BonusShape::Cross => &self.cross,
            BonusShape::All => &self.all,
        }
    }

    /// Footprint of `shape` at `pivot`
    pub fn mask(&self, shape: BonusShape, pivot: Coordinate) -> Mask {
        Mask::from_offsets(self.rect, pivot, self.offsets(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_largest_first() {
        let mut sorted = TEMPLATES.to_vec();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));
        let names: Vec<&str> = sorted.iter().map(|t| t.name).collect();
        let catalog: Vec<&str> = CATALOG.iter().map(|t| t.name).collect();
        assert_eq!(names, catalog);
    }

    #[test]
    fn every_template_contains_its_pivot() {
        for t in TEMPLATES {
            assert!(t.offsets.contains(&Offset::ZERO), "{} misses pivot", t.name);
        }
    }

    #[test]
    fn template_sizes() {
        assert_eq!(T_VERTICAL.len(), 7);
        assert_eq!(L_UP_LEFT.len(), 5);
        assert_eq!(FOUR_ROW_LEFT.len(), 4);
        assert_eq!(THREE_COL.len(), 3);
    }

    #[test]
    fn bonus_row_covers_full_row_from_any_pivot() {
        let rect = Rect::new(6, 4).unwrap();
        let templates = BonusTemplates::new(rect);
        for pivot in rect.iter() {
            let mask = templates.mask(BonusShape::Row, pivot);
            assert_eq!(mask.len(), 6);
            assert!(mask.iter().all(|c| c.row() == pivot.row()));
        }
    }

    #[test]
    fn bonus_cross_and_all() {
        let rect = Rect::default();
        let templates = BonusTemplates::new(rect);
        let pivot = rect.coordinate(7, 0).unwrap();
        assert_eq!(templates.mask(BonusShape::Cross, pivot).len(), 15);
        assert_eq!(templates.mask(BonusShape::Col, pivot).len(), 8);
        assert_eq!(templates.mask(BonusShape::All, pivot).len(), 64);
    }
}
