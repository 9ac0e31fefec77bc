//! Scoring module - score and bonus usage bookkeeping
//!
//! | Event | Points |
//! |-------|--------|
//! | Erased token (combination or bonus) | `SCORE_PER_TOKEN` (50) each |
//! | Spent bonus charge | `BONUS_SCORE` (100) |

use crate::error::Rejection;
use crate::types::{BonusKind, BONUS_SCORE, SCORE_PER_TOKEN};

/// Points for erasing `cells` tokens
pub fn erase_score(cells: usize) -> u64 {
    SCORE_PER_TOKEN * cells as u64
}

/// Points for spending one bonus charge
pub fn bonus_score() -> u64 {
    BONUS_SCORE
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Statistics {
    score: u64,
    bonus_uses: [u32; 7],
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Add a strictly positive amount
    pub fn increase_score(&mut self, amount: u64) -> Result<(), Rejection> {
        if amount == 0 {
            return Err(Rejection::ZeroScore);
        }
        self.score = self.score.saturating_add(amount);
        Ok(())
    }

    pub fn record_bonus_use(&mut self, kind: BonusKind) {
        self.bonus_uses[kind.index()] = self.bonus_uses[kind.index()].saturating_add(1);
    }

    pub fn bonus_uses(&self, kind: BonusKind) -> u32 {
        self.bonus_uses[kind.index()]
    }

    pub fn total_bonus_uses(&self) -> u32 {
        self.bonus_uses.iter().sum()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
