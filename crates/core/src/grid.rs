//! Grid module - dense token storage
//!
//! The grid is a `width x height` array where each cell is empty or holds a
//! token. Uses a flat vector in row-major order (`row * width + col`) with row 0
//! stored first; row 0 is the bottom of the board, so gravity moves tokens
//! toward lower indices.

use std::fmt;

use crate::error::GridError;
use crate::mask::Mask;
use crate::rng::SimpleRng;
use crate::types::{cell_from_char, cell_to_char, Cell, Coordinate, Rect, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rect: Rect,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cells: vec![None; rect.area()],
        }
    }

    /// Create a grid of the given size from text rows (first row is row 0)
    pub fn from_rows<S: AsRef<str>>(rect: Rect, rows: &[S]) -> Result<Self, GridError> {
        let mut grid = Self::new(rect);
        grid.load_rows(rows)?;
        Ok(grid)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> u8 {
        self.rect.width()
    }

    pub fn height(&self) -> u8 {
        self.rect.height()
    }

    #[inline]
    fn index(&self, c: Coordinate) -> Result<usize, GridError> {
        self.rect.index(c).ok_or(GridError::OutOfBounds {
            row: c.row(),
            col: c.col(),
            width: self.rect.width(),
            height: self.rect.height(),
        })
    }

    /// Get cell at a coordinate
    pub fn get(&self, c: Coordinate) -> Result<Cell, GridError> {
        self.index(c).map(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate
    pub fn set(&mut self, c: Coordinate, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(c)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Cell lookup for coordinates already known to be on this grid
    ///
    /// Out-of-bounds coordinates read as empty.
    #[inline]
    pub fn cell(&self, c: Coordinate) -> Cell {
        self.rect.index(c).and_then(|idx| self.cells[idx])
    }

    pub fn is_empty_cell(&self, c: Coordinate) -> bool {
        self.cell(c).is_none()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Replace the contents from text rows.
    ///
    /// Expects exactly `height` rows of exactly `width` symbols from `A..H` or
    /// `.`; the first row is row 0 (the bottom). The whole input is validated
    /// before anything is written, so a rejected load leaves the grid unchanged.
    pub fn load_rows<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), GridError> {
        let width = self.rect.width() as usize;
        let height = self.rect.height() as usize;
        if rows.len() != height {
            return Err(GridError::RowCount {
                expected: height,
                actual: rows.len(),
            });
        }

        let mut parsed = Vec::with_capacity(self.cells.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != width {
                return Err(GridError::RowLength {
                    row,
                    expected: width,
                    actual: len,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell =
                    cell_from_char(symbol).ok_or(GridError::InvalidSymbol { row, col, symbol })?;
                parsed.push(cell);
            }
        }

        self.cells = parsed;
        Ok(())
    }

    /// Export as text rows, row 0 first (the inverse of [`Grid::load_rows`])
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.rect.width() as usize)
            .map(|row| row.iter().map(|&c| cell_to_char(c)).collect())
            .collect()
    }

    /// Swap the contents of two cells
    pub fn swap(&mut self, a: Coordinate, b: Coordinate) -> Result<(), GridError> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Set every member of the mask to empty
    pub fn erase_mask(&mut self, mask: &Mask) {
        self.update_mask(mask, None);
    }

    /// Set every member of the mask to `cell`
    pub fn update_mask(&mut self, mask: &Mask, cell: Cell) {
        for &c in mask {
            if let Some(idx) = self.rect.index(c) {
                self.cells[idx] = cell;
            }
        }
    }

    /// Let the tokens of one column fall toward row 0.
    ///
    /// Non-empty cells keep their relative order; empty cells end up on top.
    /// Uses a two-pointer pass over the column, no allocation.
    pub fn drop_column(&mut self, col: u8) {
        if col >= self.rect.width() {
            return;
        }
        let width = self.rect.width() as usize;
        let height = self.rect.height() as usize;
        let col = col as usize;

        let mut write_row = 0usize;
        for read_row in 0..height {
            let cell = self.cells[read_row * width + col];
            if cell.is_some() {
                if write_row != read_row {
                    self.cells[write_row * width + col] = cell;
                }
                write_row += 1;
            }
        }
        for row in write_row..height {
            self.cells[row * width + col] = None;
        }
    }

    /// Apply gravity to every column
    pub fn drop_all(&mut self) {
        for col in 0..self.rect.width() {
            self.drop_column(col);
        }
    }

    /// Uniformly permute all cells. The multiset of cells is unchanged.
    pub fn shuffle(&mut self, rng: &mut SimpleRng) {
        rng.shuffle(&mut self.cells);
    }

    /// Fill the lowest empty cell of every column with a random token.
    ///
    /// At most one cell per column is filled per call. Returns how many cells
    /// were filled.
    pub fn fill_first_empty_layer(&mut self, rng: &mut SimpleRng) -> usize {
        let width = self.rect.width() as usize;
        let height = self.rect.height() as usize;
        let mut filled = 0;
        for col in 0..width {
            if let Some(row) = (0..height).find(|&row| self.cells[row * width + col].is_none()) {
                self.cells[row * width + col] = Some(rng.next_token());
                filled += 1;
            }
        }
        filled
    }

    /// Every cell holding `token`, board-wide (not a connected region)
    pub fn find_by_value(&self, token: Token) -> Mask {
        Mask::from_coordinates(
            self.rect,
            self.rect.iter().filter(|&c| self.cell(c) == Some(token)),
        )
    }

    /// Every cell holding the same token as `c`; empty when `c` is empty
    pub fn find_equal_to(&self, c: Coordinate) -> Result<Mask, GridError> {
        Ok(match self.get(c)? {
            Some(token) => self.find_by_value(token),
            None => Mask::new(),
        })
    }

    /// Occupied coordinates in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rect.iter().filter(move |&c| !self.is_empty_cell(c))
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|c| c.is_none())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True if any member of the mask is empty
    pub fn mask_has_empty(&self, mask: &Mask) -> bool {
        mask.iter().any(|&c| self.is_empty_cell(c))
    }

    /// True if every member of a non-empty mask holds the same cell value
    pub fn mask_is_uniform(&self, mask: &Mask) -> bool {
        let mut iter = mask.iter();
        let Some(&first) = iter.next() else {
            return false;
        };
        let value = self.cell(first);
        iter.all(|&c| self.cell(c) == value)
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding each color, indexed by [`Token::index`]
    pub fn color_counts(&self) -> [usize; 8] {
        let mut counts = [0usize; 8];
        for token in self.cells.iter().flatten() {
            counts[token.index()] += 1;
        }
        counts
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

impl fmt::Display for Grid {
    /// Top row first, with row labels and a column footer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        for (row, line) in rows.iter().enumerate().rev() {
            write!(f, "{:>2} |", row)?;
            for ch in line.chars() {
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "   +")?;
        for _ in 0..self.rect.width() {
            write!(f, "--")?;
        }
        writeln!(f)?;
        write!(f, "    ")?;
        for col in 0..self.rect.width() {
            write!(f, " {}", col % 10)?;
        }
        Ok(())
    }
}
