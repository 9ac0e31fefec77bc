//! Snapshot module - owned, read-only copies of a session
//!
//! Snapshots are what the renderer draws and what the `snapshot` command prints
//! as JSON. They are never loaded back into a session.

use serde::Serialize;

use crate::types::BonusKind;

/// Charges left and spent for one bonus kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BonusSnapshot {
    pub kind: BonusKind,
    pub count: u32,
    pub used: u32,
}

/// Read-only view of a session, for rendering and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub preset: &'static str,
    pub seed: u32,
    pub width: u8,
    pub height: u8,
    /// Board rows, row 0 (bottom) first
    pub rows: Vec<String>,
    pub score: u64,
    pub moves: u32,
    pub bonuses: Vec<BonusSnapshot>,
    pub smart_swap_available: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn bonus(&self, kind: BonusKind) -> Option<&BonusSnapshot> {
        self.bonuses.iter().find(|b| b.kind == kind)
    }

    pub fn charges(&self) -> u32 {
        self.bonuses.iter().map(|b| b.count).sum()
    }
}
