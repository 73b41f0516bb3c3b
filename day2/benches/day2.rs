use criterion::{criterion_group, criterion_main, Criterion};
use day2::{self, parse_input, solve_puzzle_part1, solve_puzzle_part2};
use std::hint::black_box;

const INPUT: &str = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

fn criterion_benchmark(c: &mut Criterion) {
    let games = parse_input(INPUT).unwrap();
    let mut group = c.benchmark_group("day2");
    group.bench_function("parse_input", |b| b.iter(|| parse_input(black_box(INPUT))));
    group.bench_function("solve_part1", |b| {
        b.iter(|| solve_puzzle_part1(black_box(&games)))
    });
    group.bench_function("solve_part2", |b| {
        b.iter(|| solve_puzzle_part2(black_box(&games)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
