//! Grid positions and compass directions shared by the grid puzzles
//!
//! Rows grow downwards and columns to the right, so [`Direction::Up`] is a
//! row delta of -1.

use std::collections::BTreeSet;

/// A (row, column) grid position, ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub row: i64,
    pub column: i64,
}

impl Coordinate {
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    /// The 8 surrounding positions, diagonals included.
    pub fn adjacent(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1)
            .flat_map(move |dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&d| d != (0, 0))
            .map(move |(dr, dc)| Coordinate::new(self.row + dr, self.column + dc))
    }

    /// The 4 orthogonal neighbours, in [`Direction::ALL`] order.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        Direction::ALL.into_iter().map(move |d| self.step(d))
    }

    pub fn step(self, direction: Direction) -> Coordinate {
        self.step_by(direction, 1)
    }

    pub fn step_by(self, direction: Direction, n: i64) -> Coordinate {
        let (dr, dc) = direction.delta();
        Coordinate::new(self.row + dr * n, self.column + dc * n)
    }

    pub fn manhattan_distance(self, other: Coordinate) -> u64 {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Whether the position lies inside a `rows` x `columns` grid at the origin.
    pub fn in_bounds(self, rows: usize, columns: usize) -> bool {
        (0..rows as i64).contains(&self.row) && (0..columns as i64).contains(&self.column)
    }
}

/// Compass direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn opposite(self) -> Direction {
        self.turn_left().turn_left()
    }

    /// (row, column) offset of one step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Every position in `lines` holding `ch`.
pub fn map_coordinates<'a>(lines: impl IntoIterator<Item = &'a str>, ch: char) -> BTreeSet<Coordinate> {
    lines
        .into_iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(move |&(_, c)| c == ch)
                .map(move |(column, _)| Coordinate::new(row as i64, column as i64))
        })
        .collect()
}

/// Render a `rows` x `columns` map: `marker` where `coords` has a
/// position, `.` elsewhere, one line per row.
pub fn print_map(coords: &BTreeSet<Coordinate>, rows: usize, columns: usize, marker: char) -> String {
    let mut out = String::with_capacity(rows * (columns + 1));
    for row in 0..rows as i64 {
        for column in 0..columns as i64 {
            if coords.contains(&Coordinate::new(row, column)) {
                out.push(marker);
            } else {
                out.push('.');
            }
        }
        out.push('\n');
    }
    out
}
