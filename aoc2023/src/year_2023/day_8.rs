//! Day 8: Haunted Wasteland

use std::collections::HashMap;

use crate::utils::math::lcm_all;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Map<'a> {
    /// `true` for `L`
    instructions: Vec<bool>,
    network: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Map<'a> {
    /// Steps from `start` until `is_end` holds, following the
    /// instructions cyclically. `None` if the walk can never finish.
    fn steps(&self, start: &'a str, is_end: impl Fn(&str) -> bool) -> Option<u64> {
        // every (node, instruction index) pair visited without finishing
        // means the walk loops forever
        let limit = (self.instructions.len() * self.network.len()) as u64;
        let mut node = start;
        let mut steps = 0u64;
        for &left in self.instructions.iter().cycle() {
            if is_end(node) {
                return Some(steps);
            }
            if steps > limit {
                return None;
            }
            let &(l, r) = self.network.get(node)?;
            node = if left { l } else { r };
            steps += 1;
        }
        None
    }
}

fn parse_node(line: &str) -> anyhow::Result<(&str, (&str, &str))> {
    let (name, targets) = line
        .split_once(" = ")
        .ok_or_else(|| anyhow!("expected '<node> = (<left>, <right>)'"))?;
    let (left, right) = targets
        .trim()
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .and_then(|t| t.split_once(", "))
        .ok_or_else(|| anyhow!("expected '(<left>, <right>)'"))?;
    Ok((name.trim(), (left, right)))
}

fn parse_map(input: &str) -> anyhow::Result<Map<'_>> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let instructions = lines
        .next()
        .ok_or_else(|| anyhow!("missing instructions"))?
        .trim()
        .chars()
        .map(|c| -> anyhow::Result<bool> {
            match c {
                'L' => Ok(true),
                'R' => Ok(false),
                other => bail!("unknown instruction {other:?}"),
            }
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if instructions.is_empty() {
        bail!("empty instruction line");
    }
    let network = lines.map(parse_node).collect::<anyhow::Result<_>>()?;
    Ok(Map {
        instructions,
        network,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Map<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_map(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.network.contains_key("AAA") {
            return Err(SolveError::NoSolution("no node AAA".to_string()));
        }
        shared
            .steps("AAA", |node| node == "ZZZ")
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("ZZZ is unreachable from AAA".to_string()))
    }
}

impl PartSolver<2> for Solver {
    /// Each ghost's path reaches a `..Z` node periodically, so all of them
    /// meet at the LCM of the first arrival times.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut starts: Vec<&str> = shared
            .network
            .keys()
            .copied()
            .filter(|n| n.ends_with('A'))
            .collect();
        starts.sort_unstable();
        if starts.is_empty() {
            return Err(SolveError::NoSolution("no start nodes".to_string()));
        }

        let cycles = starts
            .iter()
            .map(|&start| {
                let steps = shared.steps(start, |node| node.ends_with('Z'));
                debug!(start, ?steps, "ghost cycle");
                steps.ok_or_else(|| {
                    SolveError::NoSolution(format!("no Z node reachable from {start}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lcm_all(cycles).to_string())
    }
}
