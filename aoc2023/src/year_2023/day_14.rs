//! Day 14: Parabolic Reflector Dish

use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::{debug, trace};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

/// Square-or-not grid of `O` (round rock), `#` (cube rock) and `.`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    cells: Vec<Vec<u8>>,
}

impl Platform {
    /// Slide every round rock as far north as it goes.
    fn tilt_north(&mut self) {
        let width = self.cells.first().map_or(0, |r| r.len());
        for column in 0..width {
            let mut free = 0;
            for row in 0..self.cells.len() {
                match self.cells[row][column] {
                    b'#' => free = row + 1,
                    b'O' => {
                        self.cells[row][column] = b'.';
                        self.cells[free][column] = b'O';
                        free += 1;
                    }
                    _ => {}
                }
            }
        }
    }

    /// Rotate a quarter turn clockwise.
    fn rotate_clockwise(&mut self) {
        let rows = self.cells.len();
        let width = self.cells.first().map_or(0, |r| r.len());
        self.cells = (0..width)
            .map(|c| (0..rows).rev().map(|r| self.cells[r][c]).collect())
            .collect();
    }

    /// Tilt north, west, south, then east.
    ///
    /// Rotating clockwise after each tilt brings the next direction to the
    /// top; four rotations restore the orientation.
    fn spin(&mut self) {
        for _ in 0..4 {
            self.tilt_north();
            self.rotate_clockwise();
        }
    }

    fn north_load(&self) -> usize {
        let rows = self.cells.len();
        self.cells
            .iter()
            .enumerate()
            .map(|(r, row)| (rows - r) * row.iter().filter(|&&b| b == b'O').count())
            .sum()
    }

    fn render(&self) -> String {
        self.cells
            .iter()
            .map(|r| String::from_utf8_lossy(r).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Load after `cycles` spins. The platform settles into a loop, so only
/// the spins up to the first repeated state are simulated.
pub fn load_after_spins(platform: &Platform, cycles: usize) -> usize {
    let mut seen: HashMap<Platform, usize> = HashMap::new();
    let mut history = vec![platform.clone()];
    let mut current = platform.clone();

    for i in 1..=cycles {
        current.spin();
        if let Some(&first) = seen.get(&current) {
            let period = i - first;
            let index = first + (cycles - first) % period;
            debug!(first, period, "spin cycle repeats");
            return history[index].north_load();
        }
        seen.insert(current.clone(), i);
        history.push(current.clone());
    }
    current.north_load()
}

impl AocParser for Solver {
    type SharedData<'a> = Platform;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cells: Vec<Vec<u8>> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().as_bytes().to_vec())
            .collect();
        let width = cells.first().map_or(0, |r| r.len());
        if width == 0 {
            return Err(ParseError::MissingData("empty platform".to_string()));
        }
        if let Some(row) = cells.iter().position(|r| r.len() != width) {
            return Err(ParseError::at_line(row, "row width differs from the first row"));
        }
        if let Some(row) = cells
            .iter()
            .position(|r| r.iter().any(|b| !matches!(b, b'O' | b'#' | b'.')))
        {
            return Err(ParseError::at_line(row, "unexpected character"));
        }
        Ok(Platform { cells })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut tilted = shared.clone();
        tilted.tilt_north();
        trace!("tilted north\n{}", tilted.render());
        Ok(tilted.north_load().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(load_after_spins(shared, SPIN_CYCLES).to_string())
    }
}
