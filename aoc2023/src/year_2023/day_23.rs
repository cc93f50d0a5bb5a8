//! Day 23: A Long Walk

use crate::utils::coordinate::{Coordinate, Direction};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Trails {
    grid: Vec<Vec<u8>>,
    rows: usize,
    columns: usize,
    start: Coordinate,
    end: Coordinate,
}

/// Junctions with weighted edges, `0` is the start and `1` the end.
type Graph = Vec<Vec<(usize, u32)>>;

impl Trails {
    fn tile(&self, at: Coordinate) -> u8 {
        if at.in_bounds(self.rows, self.columns) {
            self.grid[at.row as usize][at.column as usize]
        } else {
            b'#'
        }
    }

    fn open_neighbours(&self, at: Coordinate) -> usize {
        at.neighbours().filter(|&n| self.tile(n) != b'#').count()
    }

    /// Moves allowed out of `at`; slopes force their direction when `icy`.
    fn moves(&self, at: Coordinate, icy: bool) -> impl Iterator<Item = Coordinate> + '_ {
        let forced = match (icy, self.tile(at)) {
            (true, b'^') => Some(Direction::Up),
            (true, b'>') => Some(Direction::Right),
            (true, b'v') => Some(Direction::Down),
            (true, b'<') => Some(Direction::Left),
            _ => None,
        };
        Direction::ALL
            .into_iter()
            .filter(move |&d| forced.is_none() || forced == Some(d))
            .map(move |d| at.step(d))
            .filter(|&n| self.tile(n) != b'#')
    }

    /// Contract corridors into edges between junctions.
    fn graph(&self, icy: bool) -> Graph {
        let mut junctions = vec![self.start, self.end];
        for row in 0..self.rows as i64 {
            for column in 0..self.columns as i64 {
                let at = Coordinate::new(row, column);
                if self.tile(at) != b'#' && self.open_neighbours(at) > 2 {
                    junctions.push(at);
                }
            }
        }

        let mut graph = vec![Vec::new(); junctions.len()];
        for (from, &junction) in junctions.iter().enumerate() {
            for first in self.moves(junction, icy) {
                let (mut previous, mut at, mut length) = (junction, first, 1);
                let target = loop {
                    if let Some(to) = junctions.iter().position(|&j| j == at) {
                        break Some(to);
                    }
                    let Some(next) = self.moves(at, icy).find(|&n| n != previous) else {
                        break None;
                    };
                    (previous, at, length) = (at, next, length + 1);
                };
                if let Some(to) = target {
                    graph[from].push((to, length));
                }
            }
        }
        graph
    }

    /// Longest path from the start to the end that never revisits a tile.
    pub fn longest_hike(&self, icy: bool) -> Result<Option<u32>, SolveError> {
        let graph = self.graph(icy);
        if graph.len() > 64 {
            return Err(SolveError::NoSolution(format!(
                "{} junctions do not fit the visited mask",
                graph.len()
            )));
        }
        debug!(junctions = graph.len(), icy, "trail graph");
        Ok(longest(&graph, 0, 1 << 0, 0))
    }
}

fn longest(graph: &Graph, at: usize, visited: u64, walked: u32) -> Option<u32> {
    if at == 1 {
        return Some(walked);
    }
    graph[at]
        .iter()
        .filter(|&&(to, _)| visited & (1 << to) == 0)
        .filter_map(|&(to, length)| longest(graph, to, visited | (1 << to), walked + length))
        .max()
}

impl AocParser for Solver {
    type SharedData<'a> = Trails;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Vec<Vec<u8>> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.bytes().collect())
            .collect();
        let columns = grid.first().map_or(0, Vec::len);
        if grid.iter().any(|r| r.len() != columns) {
            return Err(ParseError::InvalidFormat("ragged map".to_string()));
        }
        let gap = |row: &[u8], which: &str| {
            row.iter()
                .position(|&b| b == b'.')
                .map(|column| column as i64)
                .ok_or_else(|| ParseError::MissingData(format!("no {which} tile")))
        };
        let (first, last) = match (grid.first(), grid.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ParseError::MissingData("empty map".to_string())),
        };
        let start = Coordinate::new(0, gap(first.as_slice(), "start")?);
        let end = Coordinate::new(grid.len() as i64 - 1, gap(last.as_slice(), "end")?);
        Ok(Trails {
            rows: grid.len(),
            columns,
            grid,
            start,
            end,
        })
    }
}

fn answer(trails: &Trails, icy: bool) -> Result<String, SolveError> {
    trails
        .longest_hike(icy)?
        .map(|steps| steps.to_string())
        .ok_or_else(|| SolveError::NoSolution("no path to the end".to_string()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, true)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "94");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "154");
    }

    #[test]
    fn straight_corridor() {
        let mut shared = Solver::parse("#.#\n#v#\n#.#\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn uphill_slope_blocks_the_way() {
        let mut shared = Solver::parse("#.#\n#^#\n#.#\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }
}
