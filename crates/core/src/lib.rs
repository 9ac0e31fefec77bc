//! Core rules module - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: combination detection, the cascade
//! that drives a board to stability, swap validation, bonus moves and the
//! session state that ties them together. It has **no dependencies** on
//! terminal I/O or input parsing, making it:
//!
//! - **Deterministic**: Same seed produces identical refills and shuffles
//! - **Testable**: Every rule is reachable through plain function calls
//! - **Portable**: Runs in any environment (terminal, tests, benches)
//!
//! # Module Structure
//!
//! - [`mask`]: bounds-clipped coordinate sets
//! - [`grid`]: dense token storage with gravity, refill and shuffle
//! - [`combinations`]: the 14 combination templates and bonus footprints
//! - [`matcher`]: combination search, largest first
//! - [`cascade`]: erase → drop → refill loop until stable
//! - [`swap`]: raw and smart swap legality by simulation
//! - [`chest`], [`scoring`]: bonus charges, score and usage bookkeeping
//! - [`game_state`]: the move surface with rollback on failure
//! - [`presets`]: starting layouts and session configuration
//!
//! # Game Rules
//!
//! - **Combinations**: T (7 cells), L and five-runs (5), four-runs (4),
//!   three-runs (3); a shape clipped by the board edge never matches
//! - **Priority**: the largest combination is erased first; ties go to the
//!   first pivot in row-major order
//! - **Gravity**: tokens fall toward row 0; refill adds one token per column
//!   per pass
//! - **Scoring**: 50 per erased token, 100 per spent bonus charge
//! - **Game over**: no smart swap left and the bonus chest is empty
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{GameConfig, GameState, Preset};
//!
//! let mut game = GameState::new(GameConfig::new(Preset::Classic, 12345)).unwrap();
//! let before = game.score();
//!
//! if game.has_smart_swap() {
//!     let report = game.auto_swap().unwrap();
//!     assert!(report.score_delta >= 150);
//!     assert!(game.score() > before);
//! }
//! ```

pub mod cascade;
pub mod chest;
pub mod combinations;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod mask;
pub mod matcher;
pub mod presets;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod swap;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use cascade::CascadeReport;
pub use chest::BonusChest;
pub use combinations::{BonusShape, BonusTemplates, Template, CATALOG};
pub use error::{status_of, GridError, MoveError, MoveResult, Rejection, Status};
pub use game_state::{CascadeFrame, GameState, MoveReport};
pub use grid::Grid;
pub use mask::Mask;
pub use matcher::{combination_at, has_combination, has_combination_at, largest_combination};
pub use presets::{GameConfig, Preset};
pub use rng::SimpleRng;
pub use scoring::Statistics;
pub use snapshot::{BonusSnapshot, GameSnapshot};
pub use swap::{find_smart_swap, has_any_smart_swap, is_smart_swap_legal, is_swap_legal};
