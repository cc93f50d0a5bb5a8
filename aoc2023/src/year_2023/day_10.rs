//! Day 10: Pipe Maze

use crate::utils::coordinate::{Coordinate, Direction};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Directions a pipe tile opens towards.
fn openings(tile: u8) -> &'static [Direction] {
    use Direction::*;
    match tile {
        b'|' => &[Up, Down],
        b'-' => &[Left, Right],
        b'L' => &[Up, Right],
        b'J' => &[Up, Left],
        b'7' => &[Down, Left],
        b'F' => &[Down, Right],
        _ => &[],
    }
}

#[derive(Debug)]
pub struct Maze {
    grid: Vec<Vec<u8>>,
    start: Coordinate,
    /// The two directions the start tile connects, deduced from its
    /// neighbours
    start_openings: [Direction; 2],
    /// Loop tiles in walking order, from and excluding the return to `S`
    pipe_loop: Option<Vec<Coordinate>>,
}

impl Maze {
    fn tile(&self, at: Coordinate) -> Option<u8> {
        let row = self.grid.get(usize::try_from(at.row).ok()?)?;
        row.get(usize::try_from(at.column).ok()?).copied()
    }

    fn openings_at(&self, at: Coordinate) -> &[Direction] {
        if at == self.start {
            &self.start_openings
        } else {
            self.tile(at).map_or(&[] as &[Direction], openings)
        }
    }

    fn walk_loop(&self) -> Result<Vec<Coordinate>, SolveError> {
        let mut path = vec![self.start];
        let mut heading = self.start_openings[0];
        let mut at = self.start.step(heading);
        while at != self.start {
            path.push(at);
            let came_from = heading.opposite();
            heading = self
                .openings_at(at)
                .iter()
                .copied()
                .find(|&d| d != came_from)
                .filter(|_| self.openings_at(at).contains(&came_from))
                .ok_or_else(|| {
                    SolveError::NoSolution(format!(
                        "loop breaks at row {} column {}",
                        at.row, at.column
                    ))
                })?;
            at = at.step(heading);
        }
        Ok(path)
    }

    fn pipe_loop(&mut self) -> Result<&[Coordinate], SolveError> {
        if self.pipe_loop.is_none() {
            let path = self.walk_loop()?;
            debug!(length = path.len(), "found loop");
            self.pipe_loop = Some(path);
        }
        Ok(self.pipe_loop.as_deref().unwrap_or_default())
    }
}

/// Twice the signed area of the polygon through `vertices` (shoelace).
fn double_area(vertices: &[Coordinate]) -> i64 {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.row * b.column - b.row * a.column)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Vec<Vec<u8>> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().as_bytes().to_vec())
            .collect();
        let start = grid
            .iter()
            .enumerate()
            .find_map(|(row, line)| {
                let column = line.iter().position(|&b| b == b'S')?;
                Some(Coordinate::new(row as i64, column as i64))
            })
            .ok_or_else(|| ParseError::MissingData("no start tile 'S'".to_string()))?;

        let mut maze = Maze {
            grid,
            start,
            start_openings: [Direction::Up; 2],
            pipe_loop: None,
        };
        let connected: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| {
                maze.tile(start.step(d))
                    .is_some_and(|t| openings(t).contains(&d.opposite()))
            })
            .collect();
        maze.start_openings = match connected[..] {
            [a, b] => [a, b],
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "start tile connects to {} pipes, expected 2",
                    connected.len()
                )));
            }
        };
        Ok(maze)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((shared.pipe_loop()?.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Pick's theorem: `A = i + b/2 - 1`, with the area `A` from the
    /// shoelace formula and `b` the loop length.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let path = shared.pipe_loop()?;
        let area2 = double_area(path).abs();
        let boundary = path.len() as i64;
        let interior = (area2 - boundary) / 2 + 1;
        Ok(interior.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SQUARE: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....
";

    const COMPLEX: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

    const ENCLOSED: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    const LARGER: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn farthest_point() {
        assert_eq!(solve(SQUARE, 1), "4");
        assert_eq!(solve(COMPLEX, 1), "8");
    }

    #[test]
    fn enclosed_tiles() {
        assert_eq!(solve(SQUARE, 2), "1");
        assert_eq!(solve(COMPLEX, 2), "1");
        assert_eq!(solve(ENCLOSED, 2), "4");
        assert_eq!(solve(LARGER, 2), "8");
    }

    #[test]
    fn start_pipe_is_deduced() {
        let maze = Solver::parse(COMPLEX).unwrap();
        assert_eq!(maze.start_openings, [Direction::Right, Direction::Down]);
    }

    #[test]
    fn missing_start() {
        assert!(matches!(
            Solver::parse("F7\nLJ"),
            Err(ParseError::MissingData(_))
        ));
    }
}
