use thiserror::Error;

const NEWLINE: u8 = b'\n';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("number starting at byte {start} does not fit in 64 bits")]
    Overflow { start: usize },
}

/// A maximal run of ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRun {
    /// Byte offset of the first digit.
    pub start: usize,
    /// Number of digits in the run.
    pub width: usize,
    pub value: u64,
}

impl DigitRun {
    /// Offset one past the last digit.
    pub fn end(&self) -> usize {
        self.start + self.width
    }
}

/// Iterator over the digit runs in a byte slice, left to right.
#[derive(Debug, Clone)]
pub struct DigitRuns<'a> {
    input: &'a [u8],
    cursor: usize,
}

pub fn digit_runs(input: &[u8]) -> DigitRuns<'_> {
    DigitRuns { input, cursor: 0 }
}

impl Iterator for DigitRuns<'_> {
    type Item = Result<DigitRun, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = extract_digits(&self.input[self.cursor..])?;
        let start = self.cursor + found.skipped;
        self.cursor = start + found.n_digits;
        let digits = &self.input[start..self.cursor];
        Some(
            convert_digits(digits)
                .map(|value| DigitRun {
                    start,
                    width: found.n_digits,
                    value,
                })
                .ok_or(Error::Overflow { start }),
        )
    }
}

/// Parses every number on the first line of `input_raw`, treating any
/// non-digit byte as a separator.
pub fn parse_until_newline(input_raw: &[u8]) -> Result<Vec<u64>, Error> {
    let line = match input_raw.iter().position(|byte| *byte == NEWLINE) {
        Some(newline) => &input_raw[..newline],
        None => input_raw,
    };
    digit_runs(line).map(|run| run.map(|run| run.value)).collect()
}

#[derive(Debug)]
struct FoundNumber {
    skipped: usize,
    n_digits: usize,
}

fn extract_digits(input: &[u8]) -> Option<FoundNumber> {
    let skipped = input.iter().position(u8::is_ascii_digit)?;
    let n_digits = input[skipped..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    Some(FoundNumber { skipped, n_digits })
}

fn convert_digits(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, byte| {
        acc.checked_mul(10)?.checked_add(u64::from(byte - b'0'))
    })
}
