//! Day 11: Cosmic Expansion

use crate::utils::coordinate::{map_coordinates, print_map, Coordinate};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::{debug, trace};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Image {
    galaxies: Vec<Coordinate>,
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        let galaxies = map_coordinates(lines.iter().copied(), '#');
        if galaxies.is_empty() {
            return Err(ParseError::MissingData("no galaxies".to_string()));
        }
        let columns = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        trace!("galaxies\n{}", print_map(&galaxies, lines.len(), columns, '#'));
        Ok(Image {
            galaxies: galaxies.into_iter().collect(),
        })
    }
}

/// Positions along one axis after every empty line between them has grown
/// to `factor` lines. `positions` must be sorted.
fn expand_axis(positions: &[i64], factor: i64) -> Vec<i64> {
    let mut expanded = Vec::with_capacity(positions.len());
    let mut shift = 0;
    for (i, &p) in positions.iter().enumerate() {
        if i > 0 {
            let gap = p - positions[i - 1] - 1;
            if gap > 0 {
                shift += gap * (factor - 1);
            }
        }
        expanded.push(p + shift);
    }
    expanded
}

/// Sum of |a - b| over all pairs of a sorted list, in one pass.
fn pairwise_distance(sorted: &[i64]) -> i64 {
    let mut prefix = 0;
    let mut total = 0;
    for (i, &v) in sorted.iter().enumerate() {
        total += v * i as i64 - prefix;
        prefix += v;
    }
    total
}

/// Sum of Manhattan distances between every pair of galaxies once empty
/// rows and columns are `factor` times as wide.
///
/// Manhattan distance separates by axis, so each axis is expanded and
/// summed on its own.
pub fn distance_sum(image: &Image, factor: i64) -> i64 {
    let mut rows: Vec<i64> = image.galaxies.iter().map(|g| g.row).collect();
    let mut columns: Vec<i64> = image.galaxies.iter().map(|g| g.column).collect();
    rows.sort_unstable();
    columns.sort_unstable();

    let total = pairwise_distance(&expand_axis(&rows, factor))
        + pairwise_distance(&expand_axis(&columns, factor));
    debug!(factor, galaxies = image.galaxies.len(), total, "expanded distances");
    total
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distance_sum(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distance_sum(shared, 1_000_000).to_string())
    }
}

/// Day 11 with the example's part 2 factor of 100
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct SampleSolver;

impl AocParser for SampleSolver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Solver::parse(input)
    }
}

impl PartSolver<1> for SampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        <Solver as PartSolver<1>>::solve(shared)
    }
}

impl PartSolver<2> for SampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distance_sum(shared, 100).to_string())
    }
}
