//! Bonus chest - single-use charges per bonus kind

use crate::error::Rejection;
use crate::rng::SimpleRng;
use crate::types::BonusKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BonusChest {
    counts: [u32; 7],
}

impl BonusChest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chest holding `n` charges drawn uniformly from every kind
    pub fn random(n: usize, rng: &mut SimpleRng) -> Self {
        let mut chest = Self::new();
        for _ in 0..n {
            chest.add(rng.next_bonus());
        }
        chest
    }

    pub fn count(&self, kind: BonusKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn has(&self, kind: BonusKind) -> bool {
        self.count(kind) > 0
    }

    pub fn add(&mut self, kind: BonusKind) {
        self.counts[kind.index()] = self.counts[kind.index()].saturating_add(1);
    }

    /// Spend one charge
    pub fn use_bonus(&mut self, kind: BonusKind) -> Result<(), Rejection> {
        let slot = &mut self.counts[kind.index()];
        if *slot == 0 {
            return Err(Rejection::NoBonus(kind));
        }
        *slot -= 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.counts = [0; 7];
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(kind, count)` for every kind, in [`BonusKind::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (BonusKind, u32)> + '_ {
        BonusKind::ALL.iter().map(move |&k| (k, self.count(k)))
    }
}
