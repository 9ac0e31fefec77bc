use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_match3::core::{
    cascade, find_smart_swap, largest_combination, GameConfig, GameState, Grid, Preset, SimpleRng,
};
use tui_match3::types::{BonusKind, Rect};

fn bench_largest_combination(c: &mut Criterion) {
    let game = GameState::new(GameConfig::new(Preset::Classic, 12345)).unwrap();
    let grid = game.grid().clone();

    c.bench_function("largest_combination_8x8", |b| {
        b.iter(|| largest_combination(black_box(&grid)))
    });
}

fn bench_fill_empty_board(c: &mut Criterion) {
    c.bench_function("cascade_fill_empty_8x8", |b| {
        let mut rng = SimpleRng::new(7);
        b.iter(|| {
            let mut grid = Grid::new(Rect::default());
            cascade::run(&mut grid, &mut rng, |_, _| {}).unwrap();
            grid
        })
    });
}

fn bench_find_smart_swap(c: &mut Criterion) {
    let diagonal = GameState::new(GameConfig::new(Preset::Diagonal, 1)).unwrap();
    let grid = diagonal.grid().clone();

    // worst case: no swap exists, every pair is simulated
    c.bench_function("find_smart_swap_none", |b| {
        b.iter(|| find_smart_swap(black_box(&grid)))
    });
}

fn bench_erase_all(c: &mut Criterion) {
    let mut game = GameState::new(GameConfig::new(Preset::Diagonal, 3)).unwrap();

    c.bench_function("erase_all_and_cascade", |b| {
        b.iter(|| {
            game.add_bonus(BonusKind::All);
            game.erase_all().unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_largest_combination,
    bench_fill_empty_board,
    bench_find_smart_swap,
    bench_erase_all
);
criterion_main!(benches);
