use checkers::alpha_beta_searcher::best_move;
use checkers::board::side::Side;
use checkers::board::Board;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta depth 6 from the start", |b| {
        b.iter(play_opening)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn play_opening() {
    let mut board = Board::starting_position();
    let mut side = Side::White;

    for _ in 0..4 {
        let result = best_move(&board, 6, side, side.maximize_score());
        let chosen = match result.best_move {
            Some(chosen) => chosen,
            None => return,
        };
        board = chosen.apply(&board);
        side = side.opposite();
    }
}
