use std::path::PathBuf;

use clap::Parser;
use log::{debug, trace};
use once_cell::sync::Lazy;

/// Digits as they may appear in a calibration line once spelled-out words count.
const DIGIT_TOKENS: [(&str, u32); 18] = [
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

static REVERSED_DIGIT_TOKENS: Lazy<Vec<(String, u32)>> = Lazy::new(|| {
    DIGIT_TOKENS
        .iter()
        .map(|(token, value)| (token.chars().rev().collect(), *value))
        .collect()
});

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line_number} has no digit: {line:?}")]
    NoDigit { line_number: usize, line: String },
    #[error("line {line_number} has no digit or spelled-out digit: {line:?}")]
    NoDigitToken { line_number: usize, line: String },
    #[error("the sum of calibration values does not fit in 64 bits")]
    TotalOverflow,
}

#[derive(Debug, Parser)]
#[command(version, about = "Sums the calibration values of a trebuchet calibration document")]
pub struct CliArgs {
    /// Path to the calibration document.
    pub input_path: PathBuf,
}

/// One line of the calibration document, remembered with its 1-based position
/// so failures can point at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

pub fn parse_input(puzzle: &str) -> Vec<CalibrationLine<'_>> {
    let lines = puzzle
        .lines()
        .enumerate()
        .map(|(idx, text)| CalibrationLine {
            number: idx + 1,
            text,
        })
        .collect::<Vec<_>>();
    debug!("read {} calibration lines", lines.len());
    lines
}

/// First and last numeral of the line, combined as a two-digit number.
pub fn digit_calibration_value(line: &CalibrationLine) -> Result<u32, Error> {
    let mut digits = line.text.chars().filter_map(|c| c.to_digit(10));
    let first = digits.next().ok_or_else(|| Error::NoDigit {
        line_number: line.number,
        line: line.text.to_string(),
    })?;
    let last = digits.next_back().unwrap_or(first);
    Ok(first * 10 + last)
}

/// Like [`digit_calibration_value`], but spelled-out digits count too.
///
/// The last digit is found by running the same leftmost search over the
/// reversed line with reversed spellings, so overlapping words such as
/// `twone` resolve independently on each side.
pub fn token_calibration_value(line: &CalibrationLine) -> Result<u32, Error> {
    let missing = || Error::NoDigitToken {
        line_number: line.number,
        line: line.text.to_string(),
    };
    let first = leftmost_token(line.text, DIGIT_TOKENS.as_slice()).ok_or_else(missing)?;
    let backward = line.text.chars().rev().collect::<String>();
    let last = leftmost_token(&backward, REVERSED_DIGIT_TOKENS.as_slice()).ok_or_else(missing)?;
    trace!("line {}: first {first}, last {last}", line.number);
    Ok(first * 10 + last)
}

fn leftmost_token<S: AsRef<str>>(haystack: &str, tokens: &[(S, u32)]) -> Option<u32> {
    tokens
        .iter()
        .filter_map(|(token, value)| haystack.find(token.as_ref()).map(|pos| (pos, *value)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, value)| value)
}

pub fn solve_puzzle_part1(lines: &[CalibrationLine]) -> Result<u64, Error> {
    lines.iter().try_fold(0u64, |sum, line| {
        sum.checked_add(u64::from(digit_calibration_value(line)?))
            .ok_or(Error::TotalOverflow)
    })
}

pub fn solve_puzzle_part2(lines: &[CalibrationLine]) -> Result<u64, Error> {
    lines.iter().try_fold(0u64, |sum, line| {
        sum.checked_add(u64::from(token_calibration_value(line)?))
            .ok_or(Error::TotalOverflow)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE_PART_ONE: &str = "1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

    const EXAMPLE_PART_TWO: &str = "two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    fn line(text: &str) -> CalibrationLine<'_> {
        CalibrationLine { number: 1, text }
    }

    #[test]
    fn solves_part_one_example() {
        let lines = parse_input(EXAMPLE_PART_ONE);
        assert_eq!(solve_puzzle_part1(&lines).unwrap(), 142);
    }

    #[test]
    fn solves_part_two_example() {
        let lines = parse_input(EXAMPLE_PART_TWO);
        assert_eq!(solve_puzzle_part2(&lines).unwrap(), 281);
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        assert_eq!(parse_input("1abc2\n").len(), 1);
        assert_eq!(parse_input("1abc2\ntreb7uchet").len(), 2);
    }

    #[test]
    fn single_digit_is_first_and_last() {
        assert_eq!(digit_calibration_value(&line("treb7uchet")).unwrap(), 77);
        assert_eq!(digit_calibration_value(&line("a1b2c3d4e5f")).unwrap(), 15);
    }

    #[test]
    fn line_without_digit_fails() {
        let lines = parse_input("1abc2\nnodigits\n");
        match solve_puzzle_part1(&lines) {
            Err(Error::NoDigit { line_number, line }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "nodigits");
            }
            other => panic!("expected NoDigit, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_words_resolve_per_side() {
        assert_eq!(token_calibration_value(&line("two1nine")).unwrap(), 29);
        assert_eq!(token_calibration_value(&line("eightwothree")).unwrap(), 83);
        assert_eq!(token_calibration_value(&line("zoneight234")).unwrap(), 14);
        assert_eq!(token_calibration_value(&line("twone")).unwrap(), 21);
        assert_eq!(token_calibration_value(&line("oneight")).unwrap(), 18);
    }

    #[test]
    fn zero_is_not_a_token() {
        assert_eq!(digit_calibration_value(&line("a0b")).unwrap(), 0);
        assert!(matches!(
            token_calibration_value(&line("zero0")),
            Err(Error::NoDigitToken { .. })
        ));
    }

    #[test]
    fn part_two_fails_without_any_token() {
        let lines = parse_input("two1nine\nxyz\n");
        assert!(matches!(
            solve_puzzle_part2(&lines),
            Err(Error::NoDigitToken { line_number: 2, .. })
        ));
    }

    proptest! {
        #[test]
        fn combines_first_and_last_digit(
            digits in prop::collection::vec(0u32..10, 1..8),
            filler in "[a-z]{0,3}",
        ) {
            let text = digits
                .iter()
                .map(|d| format!("{filler}{d}"))
                .collect::<String>();
            let expected = digits[0] * 10 + digits[digits.len() - 1];
            prop_assert_eq!(digit_calibration_value(&line(&text)).unwrap(), expected);
        }

        #[test]
        fn reversed_search_matches_rightmost_numeral(text in "[a-z1-9]{1,30}") {
            prop_assume!(text.chars().any(|c| c.is_ascii_digit()));
            let last_numeral = text.chars().rev().find_map(|c| c.to_digit(10)).unwrap();
            let value = token_calibration_value(&line(&text)).unwrap();
            let rightmost_word_end = DIGIT_TOKENS[9..]
                .iter()
                .filter_map(|(word, _)| text.rfind(word).map(|pos| pos + word.len()))
                .max();
            let rightmost_numeral_end = text.rfind(|c: char| c.is_ascii_digit()).unwrap() + 1;
            if rightmost_word_end.map_or(true, |end| end < rightmost_numeral_end) {
                prop_assert_eq!(value % 10, last_numeral);
            }
        }
    }
}
