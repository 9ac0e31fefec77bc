//! Game presets and session configuration
//!
//! | Preset | Board | Bonus charges |
//! |--------|-------|---------------|
//! | `Classic` | fixed 8x8 layout | 15, drawn at random |
//! | `Diagonal` | 8-color diagonal, no smart swap | none |
//! | `Custom` | caller rows | none |

use crate::chest::BonusChest;
use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::Rect;

/// Bonus charges dealt by the classic preset
pub const CLASSIC_BONUS_CHARGES: usize = 15;

pub const CLASSIC_ROWS: [&str; 8] = [
    "ABCDEABC", "BCDEABCD", "CDEABCDE", "DEACBDEA", "ABABABAB", "BABABABA", "CDCDCDCD",
    "DCDCDCDC",
];

pub const DIAGONAL_ROWS: [&str; 8] = [
    "ABCDEFGH", "BCDEFGHA", "CDEFGHAB", "DEFGHABC", "EFGHABCD", "FGHABCDE", "GHABCDEF",
    "HABCDEFG",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Classic,
    Diagonal,
    /// Caller-supplied rows, row 0 first. The board size is taken from the rows.
    Custom(Vec<String>),
}

impl Preset {
    /// Parse a named preset (case-insensitive). `Custom` has no name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "diagonal" | "final" => Some(Preset::Diagonal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Diagonal => "diagonal",
            Preset::Custom(_) => "custom",
        }
    }

    pub fn rows(&self) -> Vec<String> {
        match self {
            Preset::Classic => CLASSIC_ROWS.iter().map(|r| r.to_string()).collect(),
            Preset::Diagonal => DIAGONAL_ROWS.iter().map(|r| r.to_string()).collect(),
            Preset::Custom(rows) => rows.clone(),
        }
    }

    /// Board size implied by the preset
    pub fn rect(&self) -> Result<Rect, GridError> {
        match self {
            Preset::Classic | Preset::Diagonal => Ok(Rect::default()),
            Preset::Custom(rows) => {
                let height = rows.len();
                let width = rows.first().map_or(0, |r| r.chars().count());
                let rect = match (u8::try_from(width), u8::try_from(height)) {
                    (Ok(w), Ok(h)) => Rect::new(w, h),
                    _ => None,
                };
                rect.ok_or(GridError::InvalidSize { width, height })
            }
        }
    }

    /// Build the starting grid and bonus chest
    pub fn build(&self, rng: &mut SimpleRng) -> Result<(Grid, BonusChest), GridError> {
        let grid = Grid::from_rows(self.rect()?, &self.rows())?;
        let chest = match self {
            Preset::Classic => BonusChest::random(CLASSIC_BONUS_CHARGES, rng),
            Preset::Diagonal | Preset::Custom(_) => BonusChest::new(),
        };
        Ok((grid, chest))
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub preset: Preset,
    /// Seed for refills, shuffles and dealt bonus charges
    pub seed: u32,
}

impl GameConfig {
    pub fn new(preset: Preset, seed: u32) -> Self {
        Self { preset, seed }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Classic,
            seed: 1,
        }
    }
}
