//! Day 5: If You Give A Seed A Fertilizer

use std::ops::Range;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// One `destination source length` line
#[derive(Debug, Clone, Copy)]
struct MapRange {
    source: u64,
    destination: u64,
    len: u64,
}

impl MapRange {
    fn source_end(&self) -> u64 {
        self.source + self.len
    }

    fn shift(&self, value: u64) -> u64 {
        value - self.source + self.destination
    }
}

/// A `x-to-y map:` block, ranges sorted by source start
#[derive(Debug)]
struct CategoryMap {
    name: String,
    ranges: Vec<MapRange>,
}

impl CategoryMap {
    fn map(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find(|r| (r.source..r.source_end()).contains(&value))
            .map_or(value, |r| r.shift(value))
    }

    /// Image of `input` as a set of intervals. Parts not covered by any
    /// range map to themselves.
    fn map_range(&self, input: Range<u64>) -> Vec<Range<u64>> {
        let mut out = Vec::new();
        let mut cursor = input.start;
        for r in &self.ranges {
            if cursor >= input.end {
                break;
            }
            if r.source_end() <= cursor {
                continue;
            }
            if r.source >= input.end {
                break;
            }
            if r.source > cursor {
                out.push(cursor..r.source);
                cursor = r.source;
            }
            let end = r.source_end().min(input.end);
            out.push(r.shift(cursor)..r.shift(end - 1) + 1);
            cursor = end;
        }
        if cursor < input.end {
            out.push(cursor..input.end);
        }
        out
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<CategoryMap>,
}

fn parse_numbers(text: &str) -> anyhow::Result<Vec<u64>> {
    text.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
        .collect()
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = input.split("\n\n");
    let seeds = blocks
        .next()
        .and_then(|b| b.trim().strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("expected 'seeds:' first"))?;
    let seeds = parse_numbers(seeds)?;
    if seeds.len() % 2 != 0 {
        bail!("seeds must pair up as start and length, got {} numbers", seeds.len());
    }
    if seeds.chunks_exact(2).any(|pair| pair[0].checked_add(pair[1]).is_none()) {
        bail!("seed range runs past {}", u64::MAX);
    }

    let maps = blocks
        .filter(|b| !b.trim().is_empty())
        .map(|block| -> anyhow::Result<CategoryMap> {
            let mut lines = block.trim().lines();
            let name = lines
                .next()
                .and_then(|l| l.strip_suffix(" map:"))
                .ok_or_else(|| anyhow!("expected '<name> map:' header"))?
                .to_string();
            let mut ranges = lines
                .map(|line| -> anyhow::Result<MapRange> {
                    match parse_numbers(line)?[..] {
                        [destination, source, len]
                            if source.checked_add(len).is_none()
                                || destination.checked_add(len).is_none() =>
                        {
                            bail!("range runs past {} in {line:?}", u64::MAX)
                        }
                        [destination, source, len] => Ok(MapRange {
                            source,
                            destination,
                            len,
                        }),
                        _ => bail!("expected three numbers in {line:?}"),
                    }
                })
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("in {name}"))?;
            // empty ranges map nothing
            ranges.retain(|r| r.len > 0);
            ranges.sort_unstable_by_key(|r| r.source);
            Ok(CategoryMap { name, ranges })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Almanac { seeds, maps })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let almanac =
            parse_almanac(&input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if almanac.maps.is_empty() {
            return Err(ParseError::MissingData("no category maps".to_string()));
        }
        Ok(almanac)
    }
}

fn lowest(values: impl Iterator<Item = u64>) -> Result<String, SolveError> {
    values
        .min()
        .map(|v| v.to_string())
        .ok_or_else(|| SolveError::NoSolution("no seeds".to_string()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest(
            shared
                .seeds
                .iter()
                .map(|&seed| shared.maps.iter().fold(seed, |v, m| m.map(v))),
        )
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut ranges: Vec<Range<u64>> = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .collect();

        for map in &shared.maps {
            ranges = ranges
                .into_iter()
                .flat_map(|r| map.map_range(r))
                .collect();
            debug!(map = map.name, intervals = ranges.len(), "mapped seed ranges");
        }

        lowest(ranges.iter().map(|r| r.start))
    }
}
