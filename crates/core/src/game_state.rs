//! Game state module - the move surface of one session
//!
//! Ties together grid, bonus chest, statistics and RNG. Every move follows the
//! same pipeline:
//!
//! 1. Validate: charge available, coordinates on the board, target legal.
//!    A failure here is a rejection and nothing changes.
//! 2. Spend the charge: one charge out of the chest, `+100`, usage recorded.
//! 3. Apply the effect (swap, erase footprint, shuffle); every cell of an
//!    erased footprint scores 50, empty or not.
//! 4. Cascade to a stable board; every erased combination scores 50 per token.
//!
//! Steps 2-4 run against a backup. If any of them fails the session is restored
//! to the backup before the error is returned.

use tracing::{debug, error, warn};

use crate::cascade::{self, CascadeReport};
use crate::chest::BonusChest;
use crate::combinations::{BonusShape, BonusTemplates};
use crate::error::{MoveError, MoveResult, Rejection};
use crate::grid::Grid;
use crate::mask::Mask;
use crate::presets::{GameConfig, Preset};
use crate::rng::SimpleRng;
use crate::scoring::{bonus_score, erase_score, Statistics};
use crate::snapshot::{BonusSnapshot, GameSnapshot};
use crate::swap::{find_smart_swap, has_any_smart_swap, is_smart_swap_legal};
use crate::types::{BonusKind, Coordinate, MoveCommand, Rect};

/// Board as it looked right before one cascade erase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeFrame {
    pub rows: Vec<String>,
    pub erased: Mask,
}

/// Outcome of a successful move
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub score_delta: u64,
    /// Cells covered by a bonus footprint, each scored like an erased token
    pub erased: usize,
    pub cascade: CascadeReport,
    /// Only recorded while step recording is on
    pub frames: Vec<CascadeFrame>,
}

#[derive(Debug, Clone)]
struct Backup {
    grid: Grid,
    chest: BonusChest,
    stats: Statistics,
    rng: SimpleRng,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    chest: BonusChest,
    stats: Statistics,
    rng: SimpleRng,
    templates: BonusTemplates,
    /// Successful moves since the last restart
    moves: u32,
    record_steps: bool,
}

impl GameState {
    /// Create a session from a preset. The board is taken as given, no
    /// cascade runs before the first move.
    pub fn new(config: GameConfig) -> Result<Self, Rejection> {
        let mut rng = SimpleRng::new(config.seed);
        let (grid, chest) = config.preset.build(&mut rng)?;
        let templates = BonusTemplates::new(grid.rect());
        Ok(Self {
            config,
            grid,
            chest,
            stats: Statistics::new(),
            rng,
            templates,
            moves: 0,
            record_steps: false,
        })
    }

    /// Session over caller rows (row 0 first) with an empty chest
    pub fn from_rows<S: AsRef<str>>(rows: &[S], seed: u32) -> Result<Self, Rejection> {
        let rows = rows.iter().map(|r| r.as_ref().to_string()).collect();
        Self::new(GameConfig::new(Preset::Custom(rows), seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rect(&self) -> Rect {
        self.grid.rect()
    }

    pub fn chest(&self) -> &BonusChest {
        &self.chest
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn score(&self) -> u64 {
        self.stats.score()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn record_steps(&self) -> bool {
        self.record_steps
    }

    /// Keep a frame of the board before every cascade erase
    pub fn set_record_steps(&mut self, on: bool) {
        self.record_steps = on;
    }

    /// Grant one bonus charge
    pub fn add_bonus(&mut self, kind: BonusKind) {
        self.chest.add(kind);
    }

    /// Replace the board contents. Rows must match the board size.
    pub fn load_rows<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Rejection> {
        self.grid.load_rows(rows)?;
        Ok(())
    }

    /// Range-checked coordinate on this board
    pub fn coordinate(&self, row: i32, col: i32) -> Result<Coordinate, Rejection> {
        self.grid
            .rect()
            .coordinate(row, col)
            .ok_or(Rejection::InvalidCoordinate { row, col })
    }

    pub fn has_smart_swap(&self) -> bool {
        has_any_smart_swap(&self.grid)
    }

    pub fn is_smart_swap_legal(&self, a: Coordinate, b: Coordinate) -> bool {
        is_smart_swap_legal(&self.grid, a, b)
    }

    /// Hint: the smart swap `auto_swap` would play
    pub fn hint(&self) -> Option<(Coordinate, Coordinate)> {
        find_smart_swap(&self.grid)
    }

    /// No smart swap left and no bonus charge to fall back on
    pub fn is_game_over(&self) -> bool {
        self.chest.is_empty() && !self.has_smart_swap()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let smart_swap_available = self.has_smart_swap();
        GameSnapshot {
            preset: self.config.preset.as_str(),
            seed: self.config.seed,
            width: self.grid.width(),
            height: self.grid.height(),
            rows: self.grid.rows(),
            score: self.stats.score(),
            moves: self.moves,
            bonuses: BonusKind::ALL
                .iter()
                .map(|&kind| BonusSnapshot {
                    kind,
                    count: self.chest.count(kind),
                    used: self.stats.bonus_uses(kind),
                })
                .collect(),
            smart_swap_available,
            game_over: self.chest.is_empty() && !smart_swap_available,
        }
    }

    // ---- moves ----------------------------------------------------------

    /// Swap two occupied cells, no adjacency or match required
    pub fn swap(&mut self, a: Coordinate, b: Coordinate) -> MoveResult<MoveReport> {
        self.play(
            "swap",
            None,
            |game| game.check_pair(a, b),
            |game, ()| game.swap_cells(a, b),
        )
    }

    /// Adjacent swap that must create a combination
    pub fn smart_swap(&mut self, a: Coordinate, b: Coordinate) -> MoveResult<MoveReport> {
        self.play(
            "smartSwap",
            None,
            |game| {
                game.check_pair(a, b)?;
                if a.manhattan(b) != 1 {
                    return Err(Rejection::NotAdjacent);
                }
                if !game.is_smart_swap_legal(a, b) {
                    return Err(Rejection::NoCombination);
                }
                Ok(())
            },
            |game, ()| game.swap_cells(a, b),
        )
    }

    /// Play the first smart swap in row-major order
    pub fn auto_swap(&mut self) -> MoveResult<MoveReport> {
        self.play(
            "autoSwap",
            None,
            |game| game.hint().ok_or(Rejection::NoSmartSwap),
            |game, (a, b)| game.swap_cells(a, b),
        )
    }

    /// Spend a swap charge on any two occupied cells
    pub fn bonus_swap(&mut self, a: Coordinate, b: Coordinate) -> MoveResult<MoveReport> {
        self.play(
            "bonusSwap",
            Some(BonusKind::Swap),
            |game| game.check_pair(a, b),
            |game, ()| game.swap_cells(a, b),
        )
    }

    pub fn erase_row(&mut self, at: Coordinate) -> MoveResult<MoveReport> {
        self.erase_shape("eraseRow", BonusKind::Row, BonusShape::Row, at)
    }

    pub fn erase_col(&mut self, at: Coordinate) -> MoveResult<MoveReport> {
        self.erase_shape("eraseCol", BonusKind::Col, BonusShape::Col, at)
    }

    pub fn erase_cross(&mut self, at: Coordinate) -> MoveResult<MoveReport> {
        self.erase_shape("eraseCross", BonusKind::Cross, BonusShape::Cross, at)
    }

    pub fn erase_all(&mut self) -> MoveResult<MoveReport> {
        let origin = self.coordinate(0, 0)?;
        self.erase_shape("eraseAll", BonusKind::All, BonusShape::All, origin)
    }

    /// Erase every token with the color found at `at`, anywhere on the board
    pub fn brush(&mut self, at: Coordinate) -> MoveResult<MoveReport> {
        self.play(
            "brush",
            Some(BonusKind::Brush),
            |game| game.check_occupied(at),
            |game, ()| {
                let mask = game
                    .grid
                    .find_equal_to(at)
                    .map_err(|e| MoveError::broken(e.to_string()))?;
                game.erase_scored(&mask)
            },
        )
    }

    pub fn shuffle(&mut self) -> MoveResult<MoveReport> {
        self.play(
            "shuffle",
            Some(BonusKind::Shuffle),
            |_| Ok(()),
            |game, ()| {
                game.grid.shuffle(&mut game.rng);
                Ok(0)
            },
        )
    }

    /// Start over from the configured preset and seed
    pub fn restart(&mut self) -> MoveResult<MoveReport> {
        let record_steps = self.record_steps;
        *self = Self::new(self.config.clone())?;
        self.record_steps = record_steps;
        debug!(preset = self.config.preset.as_str(), seed = self.config.seed, "restarted");
        Ok(MoveReport::default())
    }

    /// Dispatch a move command
    pub fn apply(&mut self, command: MoveCommand) -> MoveResult<MoveReport> {
        match command {
            MoveCommand::Swap { a, b } => {
                let (a, b) = self.pair(a, b)?;
                self.swap(a, b)
            }
            MoveCommand::SmartSwap { a, b } => {
                let (a, b) = self.pair(a, b)?;
                self.smart_swap(a, b)
            }
            MoveCommand::AutoSwap => self.auto_swap(),
            MoveCommand::BonusSwap { a, b } => {
                let (a, b) = self.pair(a, b)?;
                self.bonus_swap(a, b)
            }
            MoveCommand::EraseRow { row } => {
                let at = self.coordinate(row as i32, 0)?;
                self.erase_row(at)
            }
            MoveCommand::EraseCol { col } => {
                let at = self.coordinate(0, col as i32)?;
                self.erase_col(at)
            }
            MoveCommand::EraseCross { row, col } => {
                let at = self.coordinate(row as i32, col as i32)?;
                self.erase_cross(at)
            }
            MoveCommand::EraseAll => self.erase_all(),
            MoveCommand::Brush { row, col } => {
                let at = self.coordinate(row as i32, col as i32)?;
                self.brush(at)
            }
            MoveCommand::Shuffle => self.shuffle(),
            MoveCommand::Restart => self.restart(),
        }
    }

    // ---- internals ------------------------------------------------------

    fn pair(&self, a: (u8, u8), b: (u8, u8)) -> Result<(Coordinate, Coordinate), Rejection> {
        Ok((
            self.coordinate(a.0 as i32, a.1 as i32)?,
            self.coordinate(b.0 as i32, b.1 as i32)?,
        ))
    }

    fn check_on_board(&self, c: Coordinate) -> Result<(), Rejection> {
        if self.grid.rect().contains(c) {
            Ok(())
        } else {
            Err(Rejection::InvalidCoordinate {
                row: c.row() as i32,
                col: c.col() as i32,
            })
        }
    }

    fn check_occupied(&self, c: Coordinate) -> Result<(), Rejection> {
        self.check_on_board(c)?;
        if self.grid.is_empty_cell(c) {
            return Err(Rejection::EmptyCell {
                row: c.row(),
                col: c.col(),
            });
        }
        Ok(())
    }

    fn check_pair(&self, a: Coordinate, b: Coordinate) -> Result<(), Rejection> {
        self.check_occupied(a)?;
        self.check_occupied(b)
    }

    fn erase_shape(
        &mut self,
        name: &'static str,
        kind: BonusKind,
        shape: BonusShape,
        at: Coordinate,
    ) -> MoveResult<MoveReport> {
        self.play(
            name,
            Some(kind),
            |game| game.check_on_board(at),
            |game, ()| {
                let mask = game.templates.mask(shape, at);
                game.erase_scored(&mask)
            },
        )
    }

    fn swap_cells(&mut self, a: Coordinate, b: Coordinate) -> MoveResult<usize> {
        let (va, vb) = (self.grid.cell(a), self.grid.cell(b));
        self.grid
            .swap(a, b)
            .map_err(|e| MoveError::broken(e.to_string()))?;
        if self.grid.cell(a) != vb || self.grid.cell(b) != va {
            return Err(MoveError::broken(format!("swap of {} and {} did not apply", a, b)));
        }
        Ok(0)
    }

    /// Erase a footprint and score every cell in it; returns the footprint size
    fn erase_scored(&mut self, mask: &Mask) -> MoveResult<usize> {
        self.grid.erase_mask(mask);
        if mask.iter().any(|&c| !self.grid.is_empty_cell(c)) {
            return Err(MoveError::broken("erased cell still holds a token"));
        }
        if !mask.is_empty() {
            self.stats.increase_score(erase_score(mask.len()))?;
        }
        Ok(mask.len())
    }

    fn backup(&self) -> Backup {
        Backup {
            grid: self.grid.clone(),
            chest: self.chest.clone(),
            stats: self.stats.clone(),
            rng: self.rng.clone(),
        }
    }

    fn restore(&mut self, backup: Backup) {
        self.grid = backup.grid;
        self.chest = backup.chest;
        self.stats = backup.stats;
        self.rng = backup.rng;
    }

    /// Validate, then commit against a backup
    fn play<T, V, E>(
        &mut self,
        name: &'static str,
        bonus: Option<BonusKind>,
        validate: V,
        effect: E,
    ) -> MoveResult<MoveReport>
    where
        V: FnOnce(&Self) -> Result<T, Rejection>,
        E: FnOnce(&mut Self, T) -> MoveResult<usize>,
    {
        let checked = match bonus {
            Some(kind) if !self.chest.has(kind) => Err(Rejection::NoBonus(kind)),
            _ => validate(&*self),
        };
        let target = match checked {
            Ok(target) => target,
            Err(reason) => {
                warn!(command = name, %reason, "move rejected");
                return Err(reason.into());
            }
        };

        let backup = self.backup();
        match self.commit(bonus, target, effect) {
            Ok(report) => {
                self.moves += 1;
                debug!(
                    command = name,
                    delta = report.score_delta,
                    batches = report.cascade.batches.len(),
                    score = self.stats.score(),
                    "move applied"
                );
                Ok(report)
            }
            Err(err) => {
                self.restore(backup);
                if err.is_broken() {
                    error!(command = name, %err, "move failed, session rolled back");
                } else {
                    warn!(command = name, %err, "move rejected during commit");
                }
                Err(err)
            }
        }
    }

    fn commit<T, E>(&mut self, bonus: Option<BonusKind>, target: T, effect: E) -> MoveResult<MoveReport>
    where
        E: FnOnce(&mut Self, T) -> MoveResult<usize>,
    {
        let score_before = self.stats.score();
        if let Some(kind) = bonus {
            self.chest.use_bonus(kind)?;
            self.stats.increase_score(bonus_score())?;
            self.stats.record_bonus_use(kind);
        }

        let erased = effect(&mut *self, target)?;

        let record = self.record_steps;
        let mut frames = Vec::new();
        let cascade = cascade::run(&mut self.grid, &mut self.rng, |grid, mask| {
            if record {
                frames.push(CascadeFrame {
                    rows: grid.rows(),
                    erased: mask.clone(),
                });
            }
        })?;
        for &size in &cascade.batches {
            self.stats.increase_score(erase_score(size))?;
        }

        Ok(MoveReport {
            score_delta: self.stats.score() - score_before,
            erased,
            cascade,
            frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::DIAGONAL_ROWS;

    fn diagonal() -> GameState {
        GameState::new(GameConfig::new(Preset::Diagonal, 3)).unwrap()
    }

    #[test]
    fn test_new_game_is_untouched() {
        let game = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.chest().total(), 15);
    }

    #[test]
    fn test_broken_effect_rolls_back() {
        let mut game = diagonal();
        game.add_bonus(BonusKind::Shuffle);
        let before = game.snapshot();
        let result = game.play(
            "test",
            Some(BonusKind::Shuffle),
            |_| Ok(()),
            |game, ()| {
                game.grid.clear();
                Err(MoveError::broken("forced"))
            },
        );
        assert!(result.unwrap_err().is_broken());
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.chest().count(BonusKind::Shuffle), 1);
    }

    #[test]
    fn test_rejection_checks_charge_before_target() {
        let mut game = diagonal();
        let far = Rect::new(32, 32).unwrap().coordinate(20, 20).unwrap();
        let err = game.erase_row(far).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::NoBonus(BonusKind::Row)));

        game.add_bonus(BonusKind::Row);
        let err = game.erase_row(far).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::InvalidCoordinate { row: 20, col: 20 })
        );
        assert_eq!(game.chest().count(BonusKind::Row), 1);
    }

    #[test]
    fn test_step_recording() {
        let mut rows: Vec<&str> = DIAGONAL_ROWS.to_vec();
        rows[0] = "AHADEFGH";
        rows[1] = "BACEFGHA";
        let mut game = GameState::from_rows(&rows, 3).unwrap();
        game.set_record_steps(true);
        let a = game.coordinate(0, 1).unwrap();
        let b = game.coordinate(1, 1).unwrap();
        let report = game.smart_swap(a, b).unwrap();
        assert_eq!(report.frames.len(), report.cascade.batches.len());
        let first = &report.frames[0];
        assert_eq!(first.rows[0], "AAADEFGH");
        assert_eq!(first.erased.len(), 3);
    }

    #[test]
    fn test_restart_restores_preset() {
        let mut game = diagonal();
        game.add_bonus(BonusKind::All);
        game.erase_all().unwrap();
        assert!(game.score() > 0);
        game.restart().unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(game.grid().rows(), DIAGONAL_ROWS);
        assert!(game.chest().is_empty());
    }
}
