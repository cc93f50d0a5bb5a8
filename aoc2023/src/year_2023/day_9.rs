//! Day 9: Mirage Maintenance

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::trace;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                line.split_whitespace()
                    .map(|n| n.parse().map_err(|e| ParseError::at_line(i, e)))
                    .collect()
            })
            .collect()
    }
}

/// Next value of `history`: the sum of the last entry of every row of the
/// difference table.
fn extrapolate(history: &[i64]) -> i64 {
    let mut row = history.to_vec();
    let mut next = 0;
    while row.iter().any(|&v| v != 0) {
        trace!(?row, "difference row");
        next += row.last().copied().unwrap_or(0);
        row = row.windows(2).map(|w| w[1] - w[0]).collect();
    }
    next
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i64 = shared.iter().map(|h| extrapolate(h)).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Extrapolating backwards is extrapolating the reversed history.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i64 = shared
            .iter()
            .map(|h| {
                let reversed: Vec<i64> = h.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum();
        Ok(sum.to_string())
    }
}
