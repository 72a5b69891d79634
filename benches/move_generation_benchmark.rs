use checkers::board::side::Side;
use checkers::board::Board;
use checkers::checkers_position;
use checkers::move_generator::MoveGenerator;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let move_generator = MoveGenerator::new();
    let starting_position = Board::starting_position();
    let king_ring = checkers_position! {
        ........
        ..b.b...
        ........
        ..b.b...
        ...W....
        ..b.b...
        ........
        ........
    };

    c.bench_function("generate moves from the starting position", |b| {
        b.iter(|| move_generator.generate_moves(black_box(&starting_position), Side::White))
    });
    c.bench_function("generate king capture chains", |b| {
        b.iter(|| move_generator.generate_moves(black_box(&king_ring), Side::White))
    });
    c.bench_function("count positions to depth 5", |b| {
        b.iter(|| move_generator.count_positions(5, black_box(&starting_position), Side::White))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
