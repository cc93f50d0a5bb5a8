//! Day 16: The Floor Will Be Lava

use crate::utils::coordinate::{Coordinate, Direction};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use rayon::prelude::*;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Contraption {
    tiles: Vec<Vec<u8>>,
    rows: usize,
    columns: usize,
}

fn direction_bit(direction: Direction) -> u8 {
    1 << direction as u8
}

impl Contraption {
    fn tile(&self, at: Coordinate) -> u8 {
        self.tiles[at.row as usize][at.column as usize]
    }

    /// Directions a beam leaves `tile` in when entering it heading `heading`.
    fn deflect(tile: u8, heading: Direction) -> ([Direction; 2], usize) {
        use Direction::*;
        match (tile, heading) {
            (b'/', Right) | (b'\\', Left) => ([Up, Up], 1),
            (b'/', Left) | (b'\\', Right) => ([Down, Down], 1),
            (b'/', Up) | (b'\\', Down) => ([Right, Right], 1),
            (b'/', Down) | (b'\\', Up) => ([Left, Left], 1),
            (b'|', Left | Right) => ([Up, Down], 2),
            (b'-', Up | Down) => ([Left, Right], 2),
            _ => ([heading, heading], 1),
        }
    }

    /// Tiles visited by a beam entering at `start` heading `heading`.
    pub fn energized(&self, start: Coordinate, heading: Direction) -> usize {
        let mut seen = vec![vec![0u8; self.columns]; self.rows];
        let mut beams = vec![(start, heading)];

        while let Some((at, heading)) = beams.pop() {
            if !at.in_bounds(self.rows, self.columns) {
                continue;
            }
            let cell = &mut seen[at.row as usize][at.column as usize];
            if *cell & direction_bit(heading) != 0 {
                continue;
            }
            *cell |= direction_bit(heading);

            let (out, count) = Self::deflect(self.tile(at), heading);
            beams.extend(out[..count].iter().map(|&d| (at.step(d), d)));
        }

        seen.iter().flatten().filter(|&&bits| bits != 0).count()
    }

    /// Every edge tile paired with the heading pointing into the grid.
    fn entries(&self) -> Vec<(Coordinate, Direction)> {
        let (rows, columns) = (self.rows as i64, self.columns as i64);
        let mut entries = Vec::with_capacity(2 * (self.rows + self.columns));
        for row in 0..rows {
            entries.push((Coordinate::new(row, 0), Direction::Right));
            entries.push((Coordinate::new(row, columns - 1), Direction::Left));
        }
        for column in 0..columns {
            entries.push((Coordinate::new(0, column), Direction::Down));
            entries.push((Coordinate::new(rows - 1, column), Direction::Up));
        }
        entries
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Contraption;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let tiles: Vec<Vec<u8>> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().as_bytes().to_vec())
            .collect();
        let columns = tiles.first().map_or(0, |r| r.len());
        if columns == 0 {
            return Err(ParseError::MissingData("empty contraption".to_string()));
        }
        for (i, row) in tiles.iter().enumerate() {
            if row.len() != columns {
                return Err(ParseError::at_line(i, "row width differs from the first row"));
            }
            if let Some(&bad) = row.iter().find(|b| !b"./\\|-".contains(b)) {
                return Err(ParseError::at_line(i, format!("unknown tile {:?}", bad as char)));
            }
        }
        Ok(Contraption {
            rows: tiles.len(),
            columns,
            tiles,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .energized(Coordinate::new(0, 0), Direction::Right)
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let contraption = &*shared;
        let best = contraption
            .entries()
            .into_par_iter()
            .map(|(start, heading)| contraption.energized(start, heading))
            .max()
            .unwrap_or(0);
        debug!(best, "best entry");
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "46");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "51");
    }

    #[test]
    fn best_entry_is_top_row_heading_down() {
        let contraption = Solver::parse(SAMPLE).unwrap();
        assert_eq!(contraption.energized(Coordinate::new(0, 3), Direction::Down), 51);
    }

    #[test]
    fn splitter_sends_both_ways() {
        let contraption = Solver::parse("...\n.|.\n...").unwrap();
        assert_eq!(contraption.energized(Coordinate::new(1, 0), Direction::Right), 4);
    }
}
