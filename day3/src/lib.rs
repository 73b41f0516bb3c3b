use std::{collections::HashMap, path::PathBuf};

use clap::Parser;
use log::{debug, trace};
use parse_ints::digit_runs;

const BLANK: u8 = b'.';
const GEAR: u8 = b'*';

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line_number} contains non-ASCII characters")]
    NonAscii { line_number: usize },
    #[error("line {line_number} has a part number too large to represent")]
    PartNumberTooLarge {
        line_number: usize,
        #[source]
        source: parse_ints::Error,
    },
    #[error("gear at row {row}, column {column} has a ratio too large to represent")]
    GearRatioOverflow { row: usize, column: usize },
    #[error("the {0} does not fit in 64 bits")]
    TotalOverflow(&'static str),
}

#[derive(Debug, Parser)]
#[command(version, about = "Finds part numbers and gear ratios in an engine schematic")]
pub struct CliArgs {
    /// Path to the engine schematic.
    pub input_path: PathBuf,
}

/// A maximal horizontal run of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub row: usize,
    pub column: usize,
    pub width: usize,
    pub number: u64,
}

/// Any cell that is neither a digit nor blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark {
    pub row: usize,
    pub column: usize,
    pub shape: u8,
}

/// The parts bordering one mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkNeighbours {
    pub mark: Mark,
    pub parts: Vec<Part>,
}

impl MarkNeighbours {
    /// Product of the two part numbers when this mark is a gear.
    pub fn gear_ratio(&self) -> Result<Option<u64>, Error> {
        match self.parts.as_slice() {
            [first, second] if self.mark.shape == GEAR => first
                .number
                .checked_mul(second.number)
                .map(Some)
                .ok_or(Error::GearRatioOverflow {
                    row: self.mark.row,
                    column: self.mark.column,
                }),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Schematic {
    rows: Vec<Vec<u8>>,
    parts: Vec<Part>,
}

impl Schematic {
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| is_mark(**cell))
                .map(move |(column, cell)| Mark {
                    row,
                    column,
                    shape: *cell,
                })
        })
    }

    fn mark_at(&self, row: isize, column: isize) -> Option<Mark> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        let cell = *self.rows.get(row)?.get(column)?;
        is_mark(cell).then_some(Mark {
            row,
            column,
            shape: cell,
        })
    }

    /// Marks on the ring of cells surrounding `part`, diagonals included.
    pub fn adjacent_marks(&self, part: &Part) -> Vec<Mark> {
        let row = part.row as isize;
        let left = part.column as isize - 1;
        let right = (part.column + part.width) as isize;
        let above_and_below = (part.column..part.column + part.width)
            .flat_map(|column| [(row - 1, column as isize), (row + 1, column as isize)]);
        let ends = [left, right]
            .into_iter()
            .flat_map(|column| [(row - 1, column), (row, column), (row + 1, column)]);
        above_and_below
            .chain(ends)
            .filter_map(|(row, column)| self.mark_at(row, column))
            .collect()
    }

    pub fn is_part_number(&self, part: &Part) -> bool {
        !self.adjacent_marks(part).is_empty()
    }

    /// Groups parts under every mark they touch. A part next to several marks
    /// appears in each group.
    pub fn adjacent_parts(&self) -> HashMap<(usize, usize), MarkNeighbours> {
        let mut by_mark: HashMap<(usize, usize), MarkNeighbours> = HashMap::new();
        for part in &self.parts {
            for mark in self.adjacent_marks(part) {
                by_mark
                    .entry((mark.row, mark.column))
                    .or_insert_with(|| MarkNeighbours {
                        mark,
                        parts: Vec::new(),
                    })
                    .parts
                    .push(*part);
            }
        }
        by_mark
    }
}

fn is_mark(cell: u8) -> bool {
    cell != BLANK && !cell.is_ascii_digit()
}

pub fn parse_input(puzzle: &str) -> Result<Schematic, Error> {
    let mut rows = Vec::new();
    let mut parts = Vec::new();
    for (row, line) in puzzle.lines().enumerate() {
        if !line.is_ascii() {
            return Err(Error::NonAscii {
                line_number: row + 1,
            });
        }
        for run in digit_runs(line.as_bytes()) {
            let run = run.map_err(|source| Error::PartNumberTooLarge {
                line_number: row + 1,
                source,
            })?;
            parts.push(Part {
                row,
                column: run.start,
                width: run.width,
                number: run.value,
            });
        }
        rows.push(line.as_bytes().to_vec());
    }
    let schematic = Schematic { rows, parts };
    debug!(
        "schematic has {} rows, {} parts and {} marks",
        schematic.rows.len(),
        schematic.parts.len(),
        schematic.marks().count()
    );
    Ok(schematic)
}

pub fn solve_puzzle_part1(schematic: &Schematic) -> Result<u64, Error> {
    schematic
        .parts()
        .iter()
        .filter(|part| schematic.is_part_number(part))
        .try_fold(0u64, |total, part| {
            total
                .checked_add(part.number)
                .ok_or(Error::TotalOverflow("sum of part numbers"))
        })
}

pub fn solve_puzzle_part2(schematic: &Schematic) -> Result<u64, Error> {
    schematic
        .adjacent_parts()
        .values()
        .try_fold(0u64, |total, neighbours| {
            let Some(ratio) = neighbours.gear_ratio()? else {
                return Ok(total);
            };
            trace!(
                "gear at ({}, {}) has ratio {ratio}",
                neighbours.mark.row,
                neighbours.mark.column
            );
            total
                .checked_add(ratio)
                .ok_or(Error::TotalOverflow("sum of gear ratios"))
        })
}
