use anyhow::{Context, Result};
use clap::Parser;
use day1::{parse_input, solve_puzzle_part1, solve_puzzle_part2, CliArgs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
    let args = CliArgs::parse();
    let input_str = std::fs::read_to_string(&args.input_path).with_context(|| {
        format!(
            "Failed to read calibration document from {}",
            args.input_path.display()
        )
    })?;
    let lines = parse_input(&input_str);
    let part1 = solve_puzzle_part1(&lines).context("Failed to recover part one calibration")?;
    let part2 = solve_puzzle_part2(&lines).context("Failed to recover part two calibration")?;
    println!("part one: {part1}");
    println!("part two: {part2}");
    Ok(())
}
