//! Day 22: Sand Slabs

use std::collections::HashMap;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use rayon::prelude::*;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
struct Brick {
    low: [u32; 3],
    high: [u32; 3],
}

impl Brick {
    fn footprint(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.low[0]..=self.high[0])
            .flat_map(move |x| (self.low[1]..=self.high[1]).map(move |y| (x, y)))
    }

    fn height(&self) -> u32 {
        self.high[2] - self.low[2] + 1
    }
}

/// Settled bricks, indexed in the order they came to rest.
#[derive(Debug)]
pub struct Stack {
    /// Bricks each brick rests on
    supported_by: Vec<Vec<usize>>,
    /// Bricks resting on each brick
    supports: Vec<Vec<usize>>,
}

impl Stack {
    /// Drop every brick as far as it goes, lowest first.
    fn settle(mut bricks: Vec<Brick>) -> Self {
        bricks.sort_by_key(|b| b.low[2]);
        let mut top: HashMap<(u32, u32), (u32, usize)> = HashMap::new();
        let mut supported_by = vec![Vec::new(); bricks.len()];
        let mut supports = vec![Vec::new(); bricks.len()];

        for (i, brick) in bricks.iter().enumerate() {
            let base = brick
                .footprint()
                .filter_map(|cell| top.get(&cell).map(|&(z, _)| z))
                .max()
                .unwrap_or(0);
            for cell in brick.footprint() {
                if let Some(&(z, below)) = top.get(&cell) {
                    if z == base && !supported_by[i].contains(&below) {
                        supported_by[i].push(below);
                        supports[below].push(i);
                    }
                }
                top.insert(cell, (base + brick.height(), i));
            }
        }

        Stack {
            supported_by,
            supports,
        }
    }

    /// Whether removing `brick` leaves every brick above it still held up.
    pub fn is_safe(&self, brick: usize) -> bool {
        self.supports[brick]
            .iter()
            .all(|&above| self.supported_by[above].len() > 1)
    }

    /// How many other bricks fall when `brick` is removed.
    ///
    /// Bricks are settled in ascending order, so one forward sweep sees
    /// every supporter before the bricks it holds.
    pub fn chain_reaction(&self, brick: usize) -> usize {
        let mut fallen = vec![false; self.supports.len()];
        fallen[brick] = true;
        let mut count = 0;
        for i in brick + 1..self.supports.len() {
            let below = &self.supported_by[i];
            if !below.is_empty() && below.iter().all(|&b| fallen[b]) {
                fallen[i] = true;
                count += 1;
            }
        }
        count
    }

    pub fn brick_count(&self) -> usize {
        self.supports.len()
    }
}

fn parse_brick(line: &str) -> anyhow::Result<Brick> {
    let (a, b) = line.split_once('~').context("missing '~'")?;
    let corner = |s: &str| -> anyhow::Result<[u32; 3]> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<u32>().with_context(|| format!("bad coordinate {v:?}")))
            .collect::<anyhow::Result<Vec<_>>>()?;
        values
            .try_into()
            .map_err(|v: Vec<u32>| anyhow::anyhow!("expected 3 coordinates, got {}", v.len()))
    };
    let (a, b) = (corner(a)?, corner(b)?);
    Ok(Brick {
        low: [0, 1, 2].map(|k| a[k].min(b[k])),
        high: [0, 1, 2].map(|k| a[k].max(b[k])),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Stack;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bricks = input
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| parse_brick(l).map_err(|e| ParseError::at_line(i, format!("{e:#}"))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Stack::settle(bricks))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = (0..shared.brick_count()).filter(|&i| shared.is_safe(i)).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let stack = &*shared;
        let total: usize = (0..stack.brick_count())
            .into_par_iter()
            .map(|i| stack.chain_reaction(i))
            .sum();
        debug!(bricks = stack.brick_count(), total, "chain reactions");
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "7");
    }

    #[test]
    fn brick_a_topples_everything() {
        let stack = Solver::parse(SAMPLE).unwrap();
        assert_eq!(stack.chain_reaction(0), 6);
        assert!(!stack.is_safe(0));
        assert!(stack.is_safe(6));
    }

    #[test]
    fn corners_in_any_order() {
        let stack = Solver::parse("1,2,1~1,0,1\n1,1,5~1,1,3").unwrap();
        assert_eq!(stack.supported_by[1], vec![0]);
        assert_eq!(stack.chain_reaction(0), 1);
    }

    #[test]
    fn rejects_two_dimensional_corner() {
        assert!(matches!(
            Solver::parse("1,0~1,2,1"),
            Err(ParseError::InvalidLine { line: 1, .. })
        ));
    }
}
