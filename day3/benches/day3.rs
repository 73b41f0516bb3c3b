use criterion::{criterion_group, criterion_main, Criterion};
use day3::{self, parse_input, solve_puzzle_part1, solve_puzzle_part2};
use std::hint::black_box;

const INPUT: &str = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

fn criterion_benchmark(c: &mut Criterion) {
    let schematic = parse_input(INPUT).unwrap();
    let mut group = c.benchmark_group("day3");
    group.bench_function("parse_input", |b| b.iter(|| parse_input(black_box(INPUT))));
    group.bench_function("solve_part1", |b| {
        b.iter(|| solve_puzzle_part1(black_box(&schematic)))
    });
    group.bench_function("solve_part2", |b| {
        b.iter(|| solve_puzzle_part2(black_box(&schematic)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
