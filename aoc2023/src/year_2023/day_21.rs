//! Day 21: Step Counter

use std::collections::{HashMap, VecDeque};

use crate::utils::coordinate::Coordinate;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::{debug, trace};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Garden {
    rocks: Vec<Vec<bool>>,
    rows: usize,
    columns: usize,
    start: Coordinate,
}

impl Garden {
    fn is_rock(&self, at: Coordinate) -> bool {
        let row = at.row.rem_euclid(self.rows as i64) as usize;
        let column = at.column.rem_euclid(self.columns as i64) as usize;
        self.rocks[row][column]
    }

    /// Plots the elf can stand on after exactly `steps` steps.
    ///
    /// With `tiled` the map repeats in every direction, otherwise the elf
    /// stays inside the edges. A plot reached in `d <= steps` steps counts
    /// when `d` has the parity of `steps`, since the elf can step back and
    /// forth to burn the rest.
    pub fn reachable(&self, steps: u64, tiled: bool) -> u64 {
        let mut distance = HashMap::from([(self.start, 0u64)]);
        let mut queue = VecDeque::from([self.start]);

        while let Some(at) = queue.pop_front() {
            let d = distance[&at];
            if d == steps {
                continue;
            }
            for next in at.neighbours() {
                if !tiled && !next.in_bounds(self.rows, self.columns) {
                    continue;
                }
                if self.is_rock(next) || distance.contains_key(&next) {
                    continue;
                }
                distance.insert(next, d + 1);
                queue.push_back(next);
            }
        }

        distance.values().filter(|&&d| d % 2 == steps % 2).count() as u64
    }

    /// [`Garden::reachable`] on the tiled map for step counts too large to
    /// walk.
    ///
    /// On a square map the count sampled every `size` steps grows
    /// quadratically, so three samples at `steps % size` plus 0, 1 and 2
    /// map widths fix the curve.
    pub fn extrapolated_reachable(&self, steps: u64) -> Option<u64> {
        if self.rows != self.columns {
            return None;
        }
        let size = self.rows as u64;
        let (cycles, offset) = (steps / size, steps % size);
        if cycles < 3 {
            return Some(self.reachable(steps, true));
        }

        let [a0, a1, a2] =
            [0, 1, 2].map(|k| self.reachable(offset + k * size, true) as i128);
        trace!(a0, a1, a2, "quadratic samples");
        let n = i128::from(cycles);
        let total = a0 + n * (a1 - a0) + n * (n - 1) / 2 * (a2 - 2 * a1 + a0);
        u64::try_from(total).ok()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut start = None;
        let mut rocks = Vec::new();
        for (i, line) in input.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let row_index = rocks.len() as i64;
            let row = line
                .trim()
                .bytes()
                .enumerate()
                .map(|(j, b)| match b {
                    b'#' => Ok(true),
                    b'.' => Ok(false),
                    b'S' => {
                        start = Some(Coordinate::new(row_index, j as i64));
                        Ok(false)
                    }
                    _ => Err(ParseError::at_line(i, format!("unexpected tile {:?}", b as char))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rocks.push(row);
        }

        let columns = rocks.first().map_or(0, Vec::len);
        if rocks.iter().any(|r| r.len() != columns) {
            return Err(ParseError::InvalidFormat("ragged map".to_string()));
        }
        let start = start.ok_or_else(|| ParseError::MissingData("no starting plot".to_string()))?;
        Ok(Garden {
            rows: rocks.len(),
            columns,
            rocks,
            start,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.reachable(64, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let plots = shared
            .extrapolated_reachable(26_501_365)
            .ok_or_else(|| SolveError::NoSolution("map is not square".to_string()))?;
        debug!(plots, "reachable on the tiled map");
        Ok(plots.to_string())
    }
}

/// Day 21 with the example's step counts: 6 inside the map, 100 tiled
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct SampleSolver;

impl AocParser for SampleSolver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Solver::parse(input)
    }
}

impl PartSolver<1> for SampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.reachable(6, false).to_string())
    }
}

impl PartSolver<2> for SampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.reachable(100, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

    const OPEN: &str = "\
.....
.....
..S..
.....
.....
";

    #[test]
    fn sample_bounded() {
        let garden = Solver::parse(SAMPLE).unwrap();
        assert_eq!(garden.reachable(6, false), 16);
    }

    #[test]
    fn sample_tiled() {
        let garden = Solver::parse(SAMPLE).unwrap();
        for (steps, plots) in [(6, 16), (10, 50), (50, 1594), (100, 6536)] {
            assert_eq!(garden.reachable(steps, true), plots, "{steps} steps");
        }
    }

    #[test]
    fn open_field_is_a_diamond() {
        let garden = Solver::parse(OPEN).unwrap();
        assert_eq!(garden.reachable(4, true), 25);
        assert_eq!(garden.extrapolated_reachable(52), Some(53 * 53));
    }

    #[test]
    fn sample_parameters() {
        let mut shared = SampleSolver::parse(SAMPLE).unwrap();
        assert_eq!(SampleSolver::solve_part(&mut shared, 1).unwrap(), "16");
        assert_eq!(SampleSolver::solve_part(&mut shared, 2).unwrap(), "6536");
    }

    #[test]
    fn bad_tile_reports_its_line() {
        match Solver::parse("...\n\n.S.\n.x.\n") {
            Err(ParseError::InvalidLine { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_start() {
        assert!(matches!(
            Solver::parse("...\n.#.\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
