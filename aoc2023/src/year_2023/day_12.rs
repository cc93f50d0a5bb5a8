//! Day 12: Hot Springs

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Record {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Record {
    /// Five copies: springs joined by `?`, groups repeated.
    fn unfold(&self) -> Record {
        let springs = std::iter::repeat_n(self.springs.as_slice(), 5)
            .collect::<Vec<_>>()
            .join(&b'?');
        Record {
            springs,
            groups: self.groups.repeat(5),
        }
    }

    fn arrangements(&self) -> u64 {
        let cache = DpCache::new(HashMapBackend::new(), Arrangements { record: self });
        cache.get(&(0, 0))
    }
}

/// Ways to fill `springs[i..]` so that it holds exactly `groups[j..]`.
/// Index is `(i, j)`.
struct Arrangements<'a> {
    record: &'a Record,
}

impl Arrangements<'_> {
    /// Whether group `j` can start at position `i`: enough room, no
    /// operational spring inside and no damaged one right after.
    fn fits(&self, i: usize, j: usize) -> bool {
        let springs = &self.record.springs;
        let Some(&len) = self.record.groups.get(j) else {
            return false;
        };
        i + len <= springs.len()
            && !springs[i..i + len].contains(&b'.')
            && springs.get(i + len) != Some(&b'#')
    }
}

impl DpProblem<(usize, usize), u64> for Arrangements<'_> {
    fn deps(&self, &(i, j): &(usize, usize)) -> Vec<(usize, usize)> {
        let springs = &self.record.springs;
        let Some(&spring) = springs.get(i) else {
            return vec![];
        };
        let mut deps = Vec::with_capacity(2);
        if spring != b'#' {
            deps.push((i + 1, j));
        }
        if spring != b'.' && self.fits(i, j) {
            let after = (i + self.record.groups[j] + 1).min(springs.len());
            deps.push((after, j + 1));
        }
        deps
    }

    fn compute(&self, &(i, j): &(usize, usize), deps: Vec<u64>) -> u64 {
        if i >= self.record.springs.len() {
            u64::from(j == self.record.groups.len())
        } else {
            deps.iter().sum()
        }
    }
}

fn parse_record(line: &str) -> anyhow::Result<Record> {
    let (springs, groups) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<springs> <groups>'"))?;
    if let Some(bad) = springs.chars().find(|c| !matches!(c, '.' | '#' | '?')) {
        return Err(anyhow!("unknown spring {bad:?}"));
    }
    let groups = groups
        .trim()
        .split(',')
        .map(|g| g.parse().with_context(|| format!("bad group size {g:?}")))
        .collect::<anyhow::Result<Vec<usize>>>()?;
    Ok(Record {
        springs: springs.as_bytes().to_vec(),
        groups,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Record>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                parse_record(line).map_err(|e| ParseError::at_line(i, format!("{e:#}")))
            })
            .collect()
    }
}

fn total(records: impl Iterator<Item = Record>) -> u64 {
    records
        .map(|record| {
            let count = record.arrangements();
            let springs = String::from_utf8_lossy(&record.springs);
            debug!(%springs, count, "record");
            count
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total(shared.iter().cloned()).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total(shared.iter().map(Record::unfold)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "525152");
    }

    #[test]
    fn per_line_counts() {
        let records = Solver::parse(SAMPLE).unwrap();
        let counts: Vec<u64> = records.iter().map(Record::arrangements).collect();
        assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
        let unfolded: Vec<u64> = records.iter().map(|r| r.unfold().arrangements()).collect();
        assert_eq!(unfolded, vec![1, 16384, 1, 16, 2500, 506250]);
    }

    #[test]
    fn unfold_joins_with_unknown() {
        let record = parse_record(".# 1").unwrap().unfold();
        assert_eq!(record.springs, b".#?.#?.#?.#?.#".to_vec());
        assert_eq!(record.groups, vec![1; 5]);
    }
}
