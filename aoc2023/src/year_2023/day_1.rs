//! Day 1: Trebuchet?!

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".to_string()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration_sum(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration_sum(shared, true).to_string())
    }
}

fn calibration_sum(lines: &[&str], spelled: bool) -> u32 {
    lines
        .iter()
        .map(|line| {
            let value = calibration_value(line, spelled);
            debug!(line, value, "calibration");
            value
        })
        .sum()
}

/// Digit starting at byte `i`, either literal or (if `spelled`) as a word.
/// Words may overlap, so `oneight` has a 1 at 0 and an 8 at 2.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line[i..];
    let first = rest.chars().next()?;
    if let Some(d) = first.to_digit(10) {
        return Some(d);
    }
    if !spelled {
        return None;
    }
    DIGIT_WORDS
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|p| p as u32 + 1)
}

/// First and last digit as a two-digit number; 0 when the line has none.
fn calibration_value(line: &str, spelled: bool) -> u32 {
    let mut digits = line
        .char_indices()
        .filter_map(|(i, _)| digit_at(line, i, spelled));
    match digits.next() {
        Some(first) => first * 10 + digits.last().unwrap_or(first),
        None => 0,
    }
}
