use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictac_core::{Board, MoveSelector, Player};

fn search_benchmark(c: &mut Criterion) {
    let empty = Board::new();
    let opening: Board = "X../.../...".parse().expect("valid board");

    c.bench_function("hard_search_empty_board", |b| {
        let selector = MoveSelector::new(Player::X);
        b.iter(|| black_box(selector.analyze(black_box(&empty))))
    });

    c.bench_function("hard_search_after_corner_opening", |b| {
        let selector = MoveSelector::new(Player::O);
        b.iter(|| black_box(selector.analyze(black_box(&opening))))
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
