use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

static GAME_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Game (?P<id>\d+): (?P<handfuls>.+)$").unwrap());

/// Most cubes of each color the bag can hold for a game to be possible.
pub const BAG_LIMITS: CubeCounts = CubeCounts {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line_number} is not a game record: {line:?}")]
    InvalidGameHeader { line_number: usize, line: String },
    #[error("line {line_number} has an invalid id: {text:?}")]
    InvalidGameId { line_number: usize, text: String },
    #[error("line {line_number} has an invalid draw {text:?}, expected \"<count> <color>\"")]
    InvalidDraw { line_number: usize, text: String },
    #[error("line {line_number} draws cubes of an unknown color")]
    InvalidColor {
        line_number: usize,
        #[source]
        source: UnknownColor,
    },
    #[error("game {id} needs a bag whose power does not fit in 64 bits")]
    PowerOverflow { id: u32 },
    #[error("the {0} does not fit in 64 bits")]
    TotalOverflow(&'static str),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown cube color {0:?}")]
pub struct UnknownColor(pub String);

#[derive(Debug, Parser)]
#[command(version, about = "Evaluates cube game records against the bag limits")]
pub struct CliArgs {
    /// Path to the game records.
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            other => Err(UnknownColor(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub count: u32,
    pub color: Color,
}

/// The draws revealed together in one sampling, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handful(pub Vec<Draw>);

impl Handful {
    /// How many cubes of `color` were shown, zero when the color is absent.
    pub fn count_of(&self, color: Color) -> u32 {
        self.0
            .iter()
            .find(|draw| draw.color == color)
            .map_or(0, |draw| draw.count)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeCounts {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeCounts {
    pub fn limit(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Blue => self.blue,
        }
    }

    /// Product of the three counts, `None` when it overflows.
    pub fn power(&self) -> Option<u64> {
        u64::from(self.red)
            .checked_mul(u64::from(self.green))?
            .checked_mul(u64::from(self.blue))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub handfuls: Vec<Handful>,
}

impl Game {
    /// True when no single draw shows more cubes of a color than `limits` allow.
    pub fn is_possible(&self, limits: &CubeCounts) -> bool {
        self.handfuls
            .iter()
            .flat_map(|handful| handful.0.iter())
            .all(|draw| draw.count <= limits.limit(draw.color))
    }

    /// Fewest cubes of each color that make every handful of the game possible.
    pub fn minimum_bag(&self) -> CubeCounts {
        self.handfuls
            .iter()
            .fold(CubeCounts::default(), |bag, handful| CubeCounts {
                red: bag.red.max(handful.count_of(Color::Red)),
                green: bag.green.max(handful.count_of(Color::Green)),
                blue: bag.blue.max(handful.count_of(Color::Blue)),
            })
    }
}

fn parse_draw(text: &str, line_number: usize) -> Result<Draw, Error> {
    let invalid = || Error::InvalidDraw {
        line_number,
        text: text.to_string(),
    };
    let (count, color) = text.split_once(' ').ok_or_else(invalid)?;
    let count = count.parse::<u32>().map_err(|_| invalid())?;
    let color = color
        .parse::<Color>()
        .map_err(|source| Error::InvalidColor {
            line_number,
            source,
        })?;
    Ok(Draw { count, color })
}

fn parse_handful(text: &str, line_number: usize) -> Result<Handful, Error> {
    text.split(", ")
        .map(|draw| parse_draw(draw, line_number))
        .collect::<Result<Vec<_>, _>>()
        .map(Handful)
}

/// Parses one `Game <id>: <handful>; <handful>; ...` record.
pub fn parse_game(line: &str, line_number: usize) -> Result<Game, Error> {
    let captures = GAME_HEADER
        .captures(line)
        .ok_or_else(|| Error::InvalidGameHeader {
            line_number,
            line: line.to_string(),
        })?;
    let id = captures["id"]
        .parse::<u32>()
        .map_err(|_| Error::InvalidGameId {
            line_number,
            text: captures["id"].to_string(),
        })?;
    let handfuls = captures["handfuls"]
        .split("; ")
        .map(|handful| parse_handful(handful, line_number))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Game { id, handfuls })
}

pub fn parse_input(puzzle: &str) -> Result<Vec<Game>, Error> {
    let games = puzzle
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_game(line, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("parsed {} games", games.len());
    Ok(games)
}

pub fn solve_puzzle_part1(games: &[Game]) -> Result<u64, Error> {
    games
        .iter()
        .filter(|game| {
            let possible = game.is_possible(&BAG_LIMITS);
            if !possible {
                trace!("game {} is impossible", game.id);
            }
            possible
        })
        .try_fold(0u64, |total, game| {
            total
                .checked_add(u64::from(game.id))
                .ok_or(Error::TotalOverflow("sum of possible game ids"))
        })
}

pub fn solve_puzzle_part2(games: &[Game]) -> Result<u64, Error> {
    games.iter().try_fold(0u64, |total, game| {
        let power = game
            .minimum_bag()
            .power()
            .ok_or(Error::PowerOverflow { id: game.id })?;
        total
            .checked_add(power)
            .ok_or(Error::TotalOverflow("sum of game powers"))
    })
}
