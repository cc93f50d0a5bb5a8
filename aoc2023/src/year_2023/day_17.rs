//! Day 17: Clumsy Crucible

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct City {
    heat_loss: Vec<Vec<u32>>,
    rows: usize,
    columns: usize,
}

impl City {
    /// Least heat loss from the top-left to the bottom-right block when the
    /// crucible moves `min_run..=max_run` blocks in a straight line between
    /// turns.
    ///
    /// Dijkstra over (block, axis of the last run): each state expands to
    /// every run length on the other axis, so "must turn" is implicit.
    pub fn least_heat_loss(&self, min_run: usize, max_run: usize) -> Option<u32> {
        // axis 0: last run was vertical, 1: horizontal
        let mut best = vec![[u32::MAX; 2]; self.rows * self.columns];
        let mut queue = BinaryHeap::new();
        for axis in 0..2 {
            best[0][axis] = 0;
            queue.push(Reverse((0u32, 0usize, 0usize, axis)));
        }

        while let Some(Reverse((cost, row, column, axis))) = queue.pop() {
            if (row, column) == (self.rows - 1, self.columns - 1) {
                return Some(cost);
            }
            if cost > best[row * self.columns + column][axis] {
                continue;
            }
            let next_axis = 1 - axis;
            for sign in [-1i64, 1] {
                let mut total = cost;
                for run in 1..=max_run as i64 {
                    let (r, c) = if next_axis == 0 {
                        (row as i64 + sign * run, column as i64)
                    } else {
                        (row as i64, column as i64 + sign * run)
                    };
                    if r < 0 || c < 0 || r >= self.rows as i64 || c >= self.columns as i64 {
                        break;
                    }
                    let (r, c) = (r as usize, c as usize);
                    total += self.heat_loss[r][c];
                    if (run as usize) < min_run {
                        continue;
                    }
                    let slot = &mut best[r * self.columns + c][next_axis];
                    if total < *slot {
                        *slot = total;
                        queue.push(Reverse((total, r, c, next_axis)));
                    }
                }
            }
        }
        None
    }
}

impl AocParser for Solver {
    type SharedData<'a> = City;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let heat_loss = input
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| {
                l.trim()
                    .chars()
                    .map(|c| {
                        c.to_digit(10)
                            .ok_or_else(|| ParseError::at_line(i, format!("not a digit: {c:?}")))
                    })
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let columns = heat_loss.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(ParseError::MissingData("empty map".to_string()));
        }
        if heat_loss.iter().any(|r| r.len() != columns) {
            return Err(ParseError::InvalidFormat("ragged map".to_string()));
        }
        Ok(City {
            rows: heat_loss.len(),
            columns,
            heat_loss,
        })
    }
}

fn answer(city: &City, min_run: usize, max_run: usize) -> Result<String, SolveError> {
    let loss = city
        .least_heat_loss(min_run, max_run)
        .ok_or_else(|| SolveError::NoSolution("factory is unreachable".to_string()))?;
    debug!(min_run, max_run, loss, "least heat loss");
    Ok(loss.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, 4, 10)
    }
}
