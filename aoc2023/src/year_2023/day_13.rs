//! Day 13: Point of Incidence

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// One pattern, each row and each column packed into a bitmask of rocks.
#[derive(Debug)]
pub struct Pattern {
    rows: Vec<u32>,
    columns: Vec<u32>,
}

impl Pattern {
    fn parse(block: &str) -> Result<Pattern, ParseError> {
        let lines: Vec<&[u8]> = block.lines().map(|l| l.trim().as_bytes()).collect();
        let width = lines.first().map_or(0, |l| l.len());
        if width == 0 || width > 32 || lines.len() > 32 {
            return Err(ParseError::InvalidFormat(format!(
                "pattern must be 1..=32 wide and tall, got {}x{}",
                lines.len(),
                width
            )));
        }
        if lines.iter().any(|l| l.len() != width) {
            return Err(ParseError::InvalidFormat("ragged pattern".to_string()));
        }

        let mut rows = vec![0u32; lines.len()];
        let mut columns = vec![0u32; width];
        for (r, line) in lines.iter().enumerate() {
            for (c, &b) in line.iter().enumerate() {
                if b == b'#' {
                    rows[r] |= 1 << c;
                    columns[c] |= 1 << r;
                }
            }
        }
        Ok(Pattern { rows, columns })
    }

    fn summarize(&self, smudges: u32) -> Option<usize> {
        mirror(&self.columns, smudges)
            .or_else(|| mirror(&self.rows, smudges).map(|above| above * 100))
    }
}

/// Split point `k` (lines before the mirror) at which the mirrored lines
/// differ in exactly `smudges` cells.
fn mirror(lines: &[u32], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&k| {
        lines[..k]
            .iter()
            .rev()
            .zip(&lines[k..])
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>()
            == smudges
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pattern>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .replace("\r\n", "\n")
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(|block| Pattern::parse(block.trim()))
            .collect()
    }
}

fn summary(patterns: &[Pattern], smudges: u32) -> Result<String, SolveError> {
    let mut total = 0;
    for (i, pattern) in patterns.iter().enumerate() {
        let value = pattern.summarize(smudges).ok_or_else(|| {
            SolveError::NoSolution(format!("pattern {} has no reflection", i + 1))
        })?;
        debug!(pattern = i + 1, value, smudges, "reflection");
        total += value;
    }
    Ok(total.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        summary(shared, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        summary(shared, 1)
    }
}
