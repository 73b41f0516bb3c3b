use anyhow::{Context, Result};
use clap::Parser;
use day2::{parse_input, solve_puzzle_part1, solve_puzzle_part2, CliArgs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
    let args = CliArgs::parse();
    let input_str = std::fs::read_to_string(&args.input_path).with_context(|| {
        format!("Failed to read game records from {}", args.input_path.display())
    })?;
    let games = parse_input(&input_str).context("Failed to parse game records")?;
    let part1 = solve_puzzle_part1(&games).context("Failed to sum possible game ids")?;
    let part2 = solve_puzzle_part2(&games).context("Failed to sum game powers")?;
    println!("part one: {part1}");
    println!("part two: {part2}");
    Ok(())
}
