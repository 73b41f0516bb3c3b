use std::{collections::HashSet, path::PathBuf};

use clap::Parser;
use log::{debug, trace};
use once_cell::sync::Lazy;
use parse_ints::parse_until_newline;
use regex::Regex;

static CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Card +(?P<id>\d+):(?P<winning>(?: +\d+)+) +\|(?P<drawn>(?: +\d+)+) *$").unwrap()
});

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line_number} is not a scratchcard: {line:?}")]
    InvalidCard { line_number: usize, line: String },
    #[error("line {line_number} has a number too large to represent")]
    NumberTooLarge {
        line_number: usize,
        #[source]
        source: parse_ints::Error,
    },
    #[error("line {line_number} holds card {found}, expected card {expected}")]
    NonContiguousId {
        line_number: usize,
        expected: u64,
        found: u64,
    },
    #[error("card {id} scores more points than fit in 64 bits")]
    ScoreOverflow { id: u64 },
    #[error("card {id} is held more times than fit in 64 bits")]
    CopyOverflow { id: u64 },
    #[error("the {0} does not fit in 64 bits")]
    TotalOverflow(&'static str),
}

#[derive(Debug, Parser)]
#[command(version, about = "Scores scratchcards and counts the copies they win")]
pub struct CliArgs {
    /// Path to the pile of scratchcards.
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scratchcard {
    pub id: u64,
    pub winning: HashSet<u64>,
    pub drawn: HashSet<u64>,
}

impl Scratchcard {
    /// Number of distinct drawn numbers that are also winning numbers.
    pub fn wins(&self) -> usize {
        self.drawn.intersection(&self.winning).count()
    }

    /// One point for the first win, doubled for every win after it.
    pub fn score(&self) -> Result<u64, Error> {
        match self.wins() {
            0 => Ok(0),
            wins => u32::try_from(wins - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .ok_or(Error::ScoreOverflow { id: self.id }),
        }
    }
}

/// Parses one `Card <id>: <winning numbers> | <drawn numbers>` record.
pub fn parse_card(line: &str, line_number: usize) -> Result<Scratchcard, Error> {
    let captures = CARD.captures(line).ok_or_else(|| Error::InvalidCard {
        line_number,
        line: line.to_string(),
    })?;
    let numbers = |name: &str| {
        parse_until_newline(captures[name].as_bytes())
            .map_err(|source| Error::NumberTooLarge {
                line_number,
                source,
            })
    };
    let id = numbers("id")?.into_iter().next().ok_or_else(|| Error::InvalidCard {
        line_number,
        line: line.to_string(),
    })?;
    Ok(Scratchcard {
        id,
        winning: numbers("winning")?.into_iter().collect(),
        drawn: numbers("drawn")?.into_iter().collect(),
    })
}

/// Parses the pile and checks that it holds cards `1..=n` in order, which
/// copy propagation relies on.
pub fn parse_input(puzzle: &str) -> Result<Vec<Scratchcard>, Error> {
    let cards = puzzle
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_card(line, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;
    for (idx, card) in cards.iter().enumerate() {
        let expected = idx as u64 + 1;
        if card.id != expected {
            return Err(Error::NonContiguousId {
                line_number: idx + 1,
                expected,
                found: card.id,
            });
        }
    }
    debug!("parsed {} scratchcards", cards.len());
    Ok(cards)
}

/// Final number of copies of each card when every card with `w` wins adds
/// one copy of each of the next `w` cards per copy held.
///
/// A card only ever copies later cards, so its count is settled by the
/// time it is reached.
pub fn replicate(wins: &[usize]) -> Result<Vec<u64>, Error> {
    let mut copies = vec![1u64; wins.len()];
    for (idx, &card_wins) in wins.iter().enumerate() {
        let held = copies[idx];
        trace!("card {} held {held} times, copies the next {card_wins}", idx + 1);
        for (offset, later) in copies.iter_mut().enumerate().skip(idx + 1).take(card_wins) {
            *later = later.checked_add(held).ok_or(Error::CopyOverflow {
                id: offset as u64 + 1,
            })?;
        }
    }
    Ok(copies)
}

pub fn solve_puzzle_part1(cards: &[Scratchcard]) -> Result<u64, Error> {
    cards.iter().try_fold(0u64, |total, card| {
        total
            .checked_add(card.score()?)
            .ok_or(Error::TotalOverflow("total score"))
    })
}

pub fn solve_puzzle_part2(cards: &[Scratchcard]) -> Result<u64, Error> {
    let wins = cards.iter().map(Scratchcard::wins).collect::<Vec<_>>();
    replicate(&wins)?.iter().try_fold(0u64, |total, &copies| {
        total
            .checked_add(copies)
            .ok_or(Error::TotalOverflow("total number of scratchcards"))
    })
}
