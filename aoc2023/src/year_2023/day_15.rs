//! Day 15: Lens Library

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use indexmap::IndexMap;
use tracing::trace;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// The HASH algorithm: for each byte, add it, multiply by 17, mod 256.
pub fn hash(text: &str) -> u8 {
    text.bytes()
        .fold(0u8, |acc, b| acc.wrapping_add(b).wrapping_mul(17))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone, Copy)]
struct Step<'a> {
    label: &'a str,
    operation: Operation,
}

impl<'a> Step<'a> {
    fn parse(text: &'a str) -> anyhow::Result<Step<'a>> {
        if let Some(label) = text.strip_suffix('-') {
            return Ok(Step {
                label,
                operation: Operation::Remove,
            });
        }
        let (label, focal) = text
            .split_once('=')
            .ok_or_else(|| anyhow!("expected '<label>=<focal>' or '<label>-', got {text:?}"))?;
        let focal = focal
            .parse()
            .with_context(|| format!("bad focal length in {text:?}"))?;
        Ok(Step {
            label,
            operation: Operation::Insert(focal),
        })
    }
}

#[derive(Debug)]
pub struct Sequence<'a> {
    raw: Vec<&'a str>,
    steps: Vec<Step<'a>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Sequence<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let raw: Vec<&str> = input
            .trim()
            .split(',')
            .map(|s| s.trim_matches(['\n', '\r']))
            .filter(|s| !s.is_empty())
            .collect();
        if raw.is_empty() {
            return Err(ParseError::MissingData("empty initialization sequence".to_string()));
        }
        let steps = raw
            .iter()
            .map(|s| Step::parse(s))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        Ok(Sequence { raw, steps })
    }
}

/// Run the HASHMAP procedure and sum the focusing power of every lens.
fn focusing_power(steps: &[Step<'_>]) -> usize {
    let mut boxes: Vec<IndexMap<&str, u8>> = vec![IndexMap::new(); 256];
    for step in steps {
        let lenses = &mut boxes[usize::from(hash(step.label))];
        match step.operation {
            Operation::Remove => {
                lenses.shift_remove(step.label);
            }
            Operation::Insert(focal) => {
                lenses.insert(step.label, focal);
            }
        }
        trace!(label = step.label, operation = ?step.operation, "step");
    }

    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .values()
                .enumerate()
                .map(move |(slot, &focal)| (b + 1) * (slot + 1) * usize::from(focal))
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared.raw.iter().map(|s| u64::from(hash(s))).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(focusing_power(&shared.steps).to_string())
    }
}
