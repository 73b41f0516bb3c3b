pub mod scalar;

pub use scalar::{digit_runs, parse_until_newline, DigitRun, DigitRuns, Error};
