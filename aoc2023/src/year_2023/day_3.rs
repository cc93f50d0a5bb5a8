//! Day 3: Gear Ratios

use std::collections::HashMap;

use crate::utils::coordinate::Coordinate;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// A number on the schematic, spanning `len` cells rightwards from `start`.
#[derive(Debug)]
struct PartNumber {
    value: u64,
    start: Coordinate,
    len: i64,
}

impl PartNumber {
    fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.len).map(|dc| Coordinate::new(self.start.row, self.start.column + dc))
    }

    /// Symbols touching any digit, each once.
    fn touching<'a>(&'a self, symbols: &'a HashMap<Coordinate, char>) -> Vec<(Coordinate, char)> {
        let mut found: Vec<(Coordinate, char)> = self
            .cells()
            .flat_map(Coordinate::adjacent)
            .filter_map(|c| symbols.get(&c).map(|&s| (c, s)))
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }
}

#[derive(Debug)]
pub struct Schematic {
    numbers: Vec<PartNumber>,
    symbols: HashMap<Coordinate, char>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut numbers = Vec::new();
        let mut symbols = HashMap::new();

        for (row, line) in input.lines().enumerate() {
            let row = row as i64;
            let mut current: Option<PartNumber> = None;
            for (column, ch) in line.chars().enumerate() {
                let column = column as i64;
                if let Some(d) = ch.to_digit(10) {
                    let number = current.get_or_insert(PartNumber {
                        value: 0,
                        start: Coordinate::new(row, column),
                        len: 0,
                    });
                    number.value = number.value * 10 + u64::from(d);
                    number.len += 1;
                    continue;
                }
                numbers.extend(current.take());
                if ch != '.' && !ch.is_whitespace() {
                    symbols.insert(Coordinate::new(row, column), ch);
                }
            }
            numbers.extend(current.take());
        }

        if numbers.is_empty() {
            return Err(ParseError::MissingData("schematic has no numbers".to_string()));
        }
        Ok(Schematic { numbers, symbols })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .numbers
            .iter()
            .filter(|n| !n.touching(&shared.symbols).is_empty())
            .map(|n| n.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<Coordinate, Vec<u64>> = HashMap::new();
        for number in &shared.numbers {
            for (at, symbol) in number.touching(&shared.symbols) {
                if symbol == '*' {
                    gears.entry(at).or_default().push(number.value);
                }
            }
        }

        let sum: u64 = gears
            .iter()
            .filter(|(_, parts)| parts.len() == 2)
            .map(|(at, parts)| {
                debug!(row = at.row, column = at.column, ?parts, "gear");
                parts[0] * parts[1]
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.numbers.len(), 10);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4361");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "467835");
    }

    #[test]
    fn number_at_line_end() {
        let mut shared = Solver::parse("..*\n.12").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "12");
    }
}
