//! Error types for the rules engine
//!
//! Every move reports one of three outcomes:
//!
//! - **Success**: `Ok(..)`, the move applied and the board is stable
//! - **Rejected**: a precondition failed; nothing was changed
//! - **Broken**: an internal invariant failed after a mutation; the session
//!   rolled back to its pre-move state

use crate::types::BonusKind;

/// Low-level grid access errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("coordinate ({row}, {col}) is outside the {width}x{height} board")]
    OutOfBounds {
        row: u8,
        col: u8,
        width: u8,
        height: u8,
    },

    #[error("a {width}x{height} board is not supported")]
    InvalidSize { width: usize, height: usize },

    #[error("expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} characters, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },
}

/// Why a move was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("invalid coordinate ({row}, {col})")]
    InvalidCoordinate { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is empty")]
    EmptyCell { row: u8, col: u8 },

    #[error("cells must be adjacent")]
    NotAdjacent,

    #[error("swap does not create a combination")]
    NoCombination,

    #[error("no smart swap is available")]
    NoSmartSwap,

    #[error("no {0} bonus left")]
    NoBonus(BonusKind),

    #[error("score increase must be positive")]
    ZeroScore,

    #[error("malformed board rows: {0}")]
    MalformedRows(#[from] GridError),
}

/// Outcome tier of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Rejected,
    Broken,
}

/// Error returned by the move surface
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("broken: {message}")]
    Broken { message: String },
}

impl MoveError {
    pub fn broken(message: impl Into<String>) -> Self {
        MoveError::Broken {
            message: message.into(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            MoveError::Rejected(_) => Status::Rejected,
            MoveError::Broken { .. } => Status::Broken,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.status() == Status::Rejected
    }

    pub fn is_broken(&self) -> bool {
        self.status() == Status::Broken
    }

    /// The rejection reason, when this is a precondition failure
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            MoveError::Rejected(r) => Some(r),
            MoveError::Broken { .. } => None,
        }
    }
}

/// Result type alias for move-surface operations
pub type MoveResult<T> = Result<T, MoveError>;

/// Tier of any move-surface result
pub fn status_of<T>(result: &MoveResult<T>) -> Status {
    match result {
        Ok(_) => Status::Success,
        Err(e) => e.status(),
    }
}
