use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use sokoban_reborn::core::{load, resolve, Direction, MoveOutcome, Session};
use sokoban_reborn::levels::BUILTIN_LEVELS;

// walks a lap around the starting square, pushing whatever is in the way
const LAP: [Direction; 8] = [
    Direction::Right, Direction::Right, Direction::Down, Direction::Down,
    Direction::Left, Direction::Left, Direction::Up, Direction::Up,
];

pub fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_level");

    for (number, level) in BUILTIN_LEVELS.iter().enumerate() {
        group.bench_with_input(
            BenchmarkId::new("load", number + 1),
            &level.text,
            |b, &text| b.iter(|| black_box(load(black_box(text)))),
        );
    }
    group.finish();
}

pub fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_moves");

    for (number, level) in BUILTIN_LEVELS.iter().enumerate() {
        group.bench_with_input(
            BenchmarkId::new("lap", number + 1),
            &level.text,
            |b, &text| {
                b.iter_with_setup(
                    || load(text).expect("builtin levels load"),
                    |(mut grid, mut mover)| {
                        for direction in LAP {
                            if let MoveOutcome::NewPosition { to, .. } =
                                resolve(black_box(&mut grid), mover, direction)
                            {
                                mover = to;
                            }
                        }
                        black_box(grid)
                    },
                );
            },
        );
    }
    group.finish();
}

pub fn bench_session(c: &mut Criterion) {
    let text = BUILTIN_LEVELS[2].text;
    c.bench_function("session_submit_lap", |b| {
        b.iter_with_setup(
            || Session::load(text).expect("builtin levels load"),
            |mut session| {
                for direction in LAP {
                    let _ = black_box(session.submit_move(direction));
                }
                black_box(session)
            },
        );
    });
}

criterion_group!(move_benches, bench_load, bench_resolve, bench_session);
criterion_main!(move_benches);
