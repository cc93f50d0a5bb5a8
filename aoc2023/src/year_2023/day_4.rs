//! Day 4: Scratchcards

use std::collections::HashSet;

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Winning-number matches per card, in card order.
#[derive(Debug)]
pub struct Cards {
    matches: Vec<usize>,
}

fn numbers(text: &str) -> anyhow::Result<Vec<u32>> {
    text.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
        .collect()
}

fn parse_card(line: &str) -> anyhow::Result<usize> {
    let (_, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':'"))?;
    let (winning, have) = body
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|'"))?;
    let winning: HashSet<u32> = numbers(winning)?.into_iter().collect();
    Ok(numbers(have)?
        .iter()
        .filter(|n| winning.contains(n))
        .count())
}

impl AocParser for Solver {
    type SharedData<'a> = Cards;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let matches = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                parse_card(line).map_err(|e| ParseError::at_line(i, format!("{e:#}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Cards { matches })
    }
}

/// Instances of card `i` held at the end: itself plus the copies won
/// by every card it was won from.
struct CardCopies<'a> {
    matches: &'a [usize],
}

impl DpProblem<usize, u64> for CardCopies<'_> {
    fn deps(&self, i: &usize) -> Vec<usize> {
        let last = (i + self.matches[*i]).min(self.matches.len() - 1);
        (i + 1..=last).collect()
    }

    fn compute(&self, _i: &usize, deps: Vec<u64>) -> u64 {
        1 + deps.iter().sum::<u64>()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points: u64 = shared
            .matches
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| 1u64 << (m - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // card i's count depends on later cards, so resolve from the back
        // to keep the recursion shallow
        let cache = DpCache::new(
            VecBackend::with_capacity(shared.matches.len()),
            CardCopies {
                matches: &shared.matches,
            },
        );
        let total: u64 = (0..shared.matches.len())
            .rev()
            .map(|i| {
                let copies = cache.get(&i);
                debug!(card = i + 1, copies, "scratchcard copies");
                copies
            })
            .sum();
        Ok(total.to_string())
    }
}
