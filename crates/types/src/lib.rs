//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core rules, text rendering, command parsing).
//!
//! # Board Geometry
//!
//! - **Default size**: 8 columns x 8 rows
//! - **Row 0** is the bottom of the board (gravity target); rows grow upward
//! - **Ordering**: coordinates compare row-major (row first, then column)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_PER_TOKEN` | 50 | Awarded for every erased token |
//! | `BONUS_SCORE` | 100 | Awarded when a bonus charge is spent |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{BonusKind, Rect, Token};
//!
//! let rect = Rect::default();
//! let c = rect.coordinate(0, 7).unwrap();
//! assert_eq!((c.row(), c.col()), (0, 7));
//! assert!(rect.coordinate(8, 0).is_none());
//!
//! assert_eq!(Token::from_char('C'), Some(Token::C));
//! assert_eq!(BonusKind::from_str("cross"), Some(BonusKind::Cross));
//! ```

use std::fmt;
use std::ops::Sub;

use serde::Serialize;

/// Default board width in cells (8 columns)
pub const BOARD_WIDTH: u8 = 8;

/// Default board height in cells (8 rows)
pub const BOARD_HEIGHT: u8 = 8;

/// Largest supported board side.
///
/// Swap search is O(n²) in occupied cells with a full board copy per candidate,
/// so boards are kept small.
pub const MAX_BOARD_SIDE: u8 = 32;

/// Points per erased token
pub const SCORE_PER_TOKEN: u64 = 50;

/// Points for spending one bonus charge
pub const BONUS_SCORE: u64 = 100;

/// Character used for an empty cell in text rows
pub const EMPTY_CHAR: char = '.';

/// The eight token colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Token {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Token::A,
        Token::B,
        Token::C,
        Token::D,
        Token::E,
        Token::F,
        Token::G,
        Token::H,
    ];

    /// Parse a token from its text symbol (uppercase letters only)
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A' => Some(Token::A),
            'B' => Some(Token::B),
            'C' => Some(Token::C),
            'D' => Some(Token::D),
            'E' => Some(Token::E),
            'F' => Some(Token::F),
            'G' => Some(Token::G),
            'H' => Some(Token::H),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Token::A => 'A',
            Token::B => 'B',
            Token::C => 'C',
            Token::D => 'D',
            Token::E => 'E',
            Token::F => 'F',
            Token::G => 'G',
            Token::H => 'H',
        }
    }

    /// Index into [`Token::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Token)`: Cell holding a token of that color
pub type Cell = Option<Token>;

/// Parse a cell from its text symbol (`A`..`H` or `.`)
///
/// Returns `None` for any other character.
pub fn cell_from_char(ch: char) -> Option<Cell> {
    if ch == EMPTY_CHAR {
        return Some(None);
    }
    Token::from_char(ch).map(Some)
}

/// Text symbol of a cell
pub fn cell_to_char(cell: Cell) -> char {
    cell.map_or(EMPTY_CHAR, |t| t.as_char())
}

/// Board position. Row 0 is the bottom row.
///
/// Coordinates are only handed out by a [`Rect`], which is where the range
/// check happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Manhattan distance between two coordinates
    pub fn manhattan(&self, other: Coordinate) -> u16 {
        let dr = (self.row as i16 - other.row as i16).unsigned_abs();
        let dc = (self.col as i16 - other.col as i16).unsigned_abs();
        dr + dc
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Sub for Coordinate {
    type Output = Offset;

    fn sub(self, rhs: Coordinate) -> Offset {
        Offset::new(
            self.row as i16 - rhs.row as i16,
            self.col as i16 - rhs.col as i16,
        )
    }
}

/// Signed relative position (row delta, column delta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    pub dr: i16,
    pub dc: i16,
}

impl Offset {
    pub const ZERO: Offset = Offset { dr: 0, dc: 0 };

    pub const fn new(dr: i16, dc: i16) -> Self {
        Self { dr, dc }
    }
}

/// Board rectangle: positive width x height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    width: u8,
    height: u8,
}

impl Rect {
    /// Create a rectangle; `None` when a side is zero or exceeds [`MAX_BOARD_SIDE`]
    pub fn new(width: u8, height: u8) -> Option<Self> {
        if width == 0 || height == 0 || width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return None;
        }
        Some(Self { width, height })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Range-checked coordinate constructor
    pub fn coordinate(&self, row: i32, col: i32) -> Option<Coordinate> {
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return None;
        }
        Some(Coordinate {
            row: row as u8,
            col: col as u8,
        })
    }

    /// True if the coordinate lies inside this rectangle
    pub fn contains(&self, c: Coordinate) -> bool {
        c.row < self.height && c.col < self.width
    }

    /// Checked `coordinate + offset`
    pub fn translate(&self, c: Coordinate, offset: Offset) -> Option<Coordinate> {
        self.coordinate(
            c.row as i32 + offset.dr as i32,
            c.col as i32 + offset.dc as i32,
        )
    }

    /// Flat row-major index of a coordinate inside this rectangle
    pub fn index(&self, c: Coordinate) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.width as usize + c.col as usize)
    }

    /// All coordinates, row ascending then column ascending
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coordinate { row, col }))
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

/// Single-use bonus charges
///
/// - **Row / Col / Cross / All**: erase a geometric footprint
/// - **Brush**: erase every token of one color
/// - **Shuffle**: permute the whole board
/// - **Swap**: swap any two occupied cells, adjacency not required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusKind {
    Row,
    Col,
    Cross,
    All,
    Brush,
    Shuffle,
    Swap,
}

impl BonusKind {
    pub const ALL: [BonusKind; 7] = [
        BonusKind::Row,
        BonusKind::Col,
        BonusKind::Cross,
        BonusKind::All,
        BonusKind::Brush,
        BonusKind::Shuffle,
        BonusKind::Swap,
    ];

    /// Parse bonus kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "row" => Some(BonusKind::Row),
            "col" => Some(BonusKind::Col),
            "cross" => Some(BonusKind::Cross),
            "all" => Some(BonusKind::All),
            "brush" => Some(BonusKind::Brush),
            "shuffle" => Some(BonusKind::Shuffle),
            "swap" => Some(BonusKind::Swap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BonusKind::Row => "row",
            BonusKind::Col => "col",
            BonusKind::Cross => "cross",
            BonusKind::All => "all",
            BonusKind::Brush => "brush",
            BonusKind::Shuffle => "shuffle",
            BonusKind::Swap => "swap",
        }
    }

    /// Index into [`BonusKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moves that can be applied to a game session
///
/// Positions are raw `(row, col)` pairs; the session validates them against
/// its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    /// Swap two occupied cells without any legality simulation
    Swap { a: (u8, u8), b: (u8, u8) },
    /// Adjacent swap that must produce a combination
    SmartSwap { a: (u8, u8), b: (u8, u8) },
    /// Play the first available smart swap
    AutoSwap,
    /// Spend a swap charge on any two occupied cells
    BonusSwap { a: (u8, u8), b: (u8, u8) },
    EraseRow { row: u8 },
    EraseCol { col: u8 },
    EraseCross { row: u8, col: u8 },
    EraseAll,
    /// Erase every token with the color found at the target
    Brush { row: u8, col: u8 },
    Shuffle,
    /// Start the session over from its preset
    Restart,
}

impl MoveCommand {
    /// Bonus charge consumed by this move, if any
    pub fn bonus(&self) -> Option<BonusKind> {
        match self {
            MoveCommand::Swap { .. }
            | MoveCommand::SmartSwap { .. }
            | MoveCommand::AutoSwap
            | MoveCommand::Restart => None,
            MoveCommand::BonusSwap { .. } => Some(BonusKind::Swap),
            MoveCommand::EraseRow { .. } => Some(BonusKind::Row),
            MoveCommand::EraseCol { .. } => Some(BonusKind::Col),
            MoveCommand::EraseCross { .. } => Some(BonusKind::Cross),
            MoveCommand::EraseAll => Some(BonusKind::All),
            MoveCommand::Brush { .. } => Some(BonusKind::Brush),
            MoveCommand::Shuffle => Some(BonusKind::Shuffle),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCommand::Swap { .. } => "swap",
            MoveCommand::SmartSwap { .. } => "smartSwap",
            MoveCommand::AutoSwap => "autoSwap",
            MoveCommand::BonusSwap { .. } => "bonusSwap",
            MoveCommand::EraseRow { .. } => "eraseRow",
            MoveCommand::EraseCol { .. } => "eraseCol",
            MoveCommand::EraseCross { .. } => "eraseCross",
            MoveCommand::EraseAll => "eraseAll",
            MoveCommand::Brush { .. } => "brush",
            MoveCommand::Shuffle => "shuffle",
            MoveCommand::Restart => "restart",
        }
    }
}
