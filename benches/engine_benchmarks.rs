//! Benchmarks for move generation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::board::search::eval::evaluate;
use mailbox_chess::board::{
    best_move, Color, MoveGenerator, Position, SearchParams, SearchStrategy,
};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut position = Position::new();

    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| position.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Position::from_fen(KIWIPETE);

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", mailbox_chess::board::START_FEN),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        ),
        ("kiwipete", KIWIPETE),
    ];

    for (name, fen) in positions {
        let position = Position::from_fen(fen);
        let mut generator = MoveGenerator::new();
        group.bench_with_input(BenchmarkId::new("generate", name), &position, |b, position| {
            b.iter(|| black_box(generator.generate(position)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for strategy in [SearchStrategy::Minimax, SearchStrategy::AlphaBeta] {
        for depth in [2, 3] {
            let id = BenchmarkId::new(format!("startpos-{strategy:?}"), depth);
            group.bench_with_input(id, &depth, |b, &depth| {
                b.iter(|| {
                    let mut position = Position::new();
                    best_move(&mut position, &SearchParams::new(strategy, depth))
                })
            });
        }
    }

    // Tactical position
    group.bench_function("tactical-alphabeta-3", |b| {
        b.iter(|| {
            let mut position = Position::from_fen(
                "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
            );
            best_move(&mut position, &SearchParams::new(SearchStrategy::AlphaBeta, 3))
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let position = Position::from_fen(KIWIPETE);
    let mut generator = MoveGenerator::new();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(evaluate(&position, &mut generator, Color::White)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
