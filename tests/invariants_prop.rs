//! Property tests over generated boards and move sequences.
//!
//! - Gravity and shuffle only move tokens around.
//! - A cascade always ends on a full board without combinations.
//! - Every point scored is explained by spent charges and erased tokens, and
//!   a failed move leaves the session untouched.

use proptest::prelude::*;
use tui_match3::core::{cascade, GameConfig, GameState, Grid, Preset, SimpleRng};
use tui_match3::types::{MoveCommand, Rect, BONUS_SCORE, SCORE_PER_TOKEN};

const SYMBOLS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', '.'];

fn board() -> impl Strategy<Value = Grid> {
    (3u8..7, 3u8..7).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::sample::select(SYMBOLS.to_vec()), w as usize * h as usize)
            .prop_map(move |symbols| {
                let rows: Vec<String> = symbols
                    .chunks(w as usize)
                    .map(|chunk| chunk.iter().collect())
                    .collect();
                Grid::from_rows(Rect::new(w, h).unwrap(), &rows).unwrap()
            })
    })
}

fn command() -> impl Strategy<Value = MoveCommand> {
    let pos = || (0u8..10, 0u8..10);
    prop_oneof![
        (pos(), pos()).prop_map(|(a, b)| MoveCommand::Swap { a, b }),
        (pos(), pos()).prop_map(|(a, b)| MoveCommand::SmartSwap { a, b }),
        Just(MoveCommand::AutoSwap),
        (pos(), pos()).prop_map(|(a, b)| MoveCommand::BonusSwap { a, b }),
        (0u8..10).prop_map(|row| MoveCommand::EraseRow { row }),
        (0u8..10).prop_map(|col| MoveCommand::EraseCol { col }),
        pos().prop_map(|(row, col)| MoveCommand::EraseCross { row, col }),
        Just(MoveCommand::EraseAll),
        pos().prop_map(|(row, col)| MoveCommand::Brush { row, col }),
        Just(MoveCommand::Shuffle),
    ]
}

fn column_is_settled(grid: &Grid, col: u8) -> bool {
    let rect = grid.rect();
    let mut seen_empty = false;
    for row in 0..rect.height() {
        let Some(c) = rect.coordinate(row as i32, col as i32) else {
            return false;
        };
        if grid.is_empty_cell(c) {
            seen_empty = true;
        } else if seen_empty {
            return false;
        }
    }
    true
}

proptest! {
    #[test]
    fn gravity_keeps_tokens(mut grid in board()) {
        let counts = grid.color_counts();
        let empties = grid.empty_count();

        grid.drop_all();

        prop_assert_eq!(grid.color_counts(), counts);
        prop_assert_eq!(grid.empty_count(), empties);
        for col in 0..grid.width() {
            prop_assert!(column_is_settled(&grid, col));
        }
    }

    #[test]
    fn shuffle_keeps_tokens(mut grid in board(), seed in any::<u32>()) {
        let counts = grid.color_counts();
        grid.shuffle(&mut SimpleRng::new(seed));
        prop_assert_eq!(grid.color_counts(), counts);
    }

    #[test]
    fn cascade_ends_stable(mut grid in board(), seed in any::<u32>()) {
        let mut rng = SimpleRng::new(seed);
        let mut erased = 0usize;
        let report = cascade::run(&mut grid, &mut rng, |_, mask| erased += mask.len());

        prop_assert!(report.is_ok());
        let report = report.unwrap();
        prop_assert_eq!(report.erased(), erased);
        prop_assert!(report.batches.iter().all(|&n| n >= 3));
        prop_assert!(cascade::is_stable(&grid));
    }

    #[test]
    fn moves_account_for_every_point(
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 1..25),
    ) {
        let mut game = GameState::new(GameConfig::new(Preset::Classic, seed)).unwrap();

        for command in commands {
            let before = game.snapshot();
            match game.apply(command) {
                Ok(report) => {
                    let charge = if command.bonus().is_some() { BONUS_SCORE } else { 0 };
                    let tokens = (report.erased + report.cascade.erased()) as u64;
                    prop_assert_eq!(report.score_delta, charge + SCORE_PER_TOKEN * tokens);
                    prop_assert_eq!(game.score(), before.score + report.score_delta);
                    prop_assert_eq!(game.moves(), before.moves + 1);
                    prop_assert_eq!(game.snapshot().charges() + u32::from(charge > 0), before.charges());
                    prop_assert!(cascade::is_stable(game.grid()));
                }
                Err(err) => {
                    prop_assert!(err.is_rejected());
                    prop_assert_eq!(game.snapshot(), before);
                }
            }
        }
    }
}
