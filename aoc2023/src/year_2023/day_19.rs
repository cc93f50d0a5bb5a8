//! Day 19: Aplenty

use std::collections::HashMap;
use std::ops::Range;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use regex::Regex;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

const START: &str = "in";

/// Ratings for `x`, `m`, `a`, `s`, in that order
type Part = [u64; 4];

fn category(name: &str) -> anyhow::Result<usize> {
    "xmas"
        .find(name)
        .filter(|_| name.len() == 1)
        .ok_or_else(|| anyhow!("unknown category {name:?}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'a> {
    Accept,
    Reject,
    Workflow(&'a str),
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(name: &'a str) -> Self {
        match name {
            "A" => Target::Accept,
            "R" => Target::Reject,
            other => Target::Workflow(other),
        }
    }
}

#[derive(Debug)]
struct Condition {
    category: usize,
    less_than: bool,
    value: u64,
}

impl Condition {
    fn matches(&self, part: &Part) -> bool {
        let rating = part[self.category];
        if self.less_than {
            rating < self.value
        } else {
            rating > self.value
        }
    }

    /// Split `range` into the part that matches and the part that doesn't.
    fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
        let clamp = |v: u64| v.clamp(range.start, range.end);
        if self.less_than {
            let cut = clamp(self.value);
            (range.start..cut, cut..range.end)
        } else {
            let cut = clamp(self.value + 1);
            (cut..range.end, range.start..cut)
        }
    }
}

#[derive(Debug)]
struct Rule<'a> {
    /// `None` for the final, unconditional rule
    condition: Option<Condition>,
    target: Target<'a>,
}

#[derive(Debug)]
pub struct System<'a> {
    workflows: HashMap<&'a str, Vec<Rule<'a>>>,
    parts: Vec<Part>,
}

impl<'a> System<'a> {
    fn rules(&self, name: &str) -> Result<&[Rule<'a>], SolveError> {
        self.workflows
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SolveError::NoSolution(format!("no workflow named {name:?}")))
    }

    fn accepts(&self, part: &Part) -> Result<bool, SolveError> {
        let mut name = START;
        // a workflow chain longer than the number of workflows loops
        for _ in 0..=self.workflows.len() {
            let rules = self.rules(name)?;
            let target = rules
                .iter()
                .find(|r| r.condition.as_ref().is_none_or(|c| c.matches(part)))
                .map(|r| r.target)
                .unwrap_or(Target::Reject);
            match target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => name = next,
            }
        }
        Err(SolveError::NoSolution("workflows loop".to_string()))
    }

    /// Number of rating combinations within `ranges` that `target` accepts.
    fn accepted_combinations(
        &self,
        target: Target<'a>,
        mut ranges: [Range<u64>; 4],
        depth: usize,
    ) -> Result<u64, SolveError> {
        if ranges.iter().any(|r| r.is_empty()) {
            return Ok(0);
        }
        let name = match target {
            Target::Accept => return Ok(ranges.iter().map(|r| r.end - r.start).product()),
            Target::Reject => return Ok(0),
            Target::Workflow(name) => name,
        };
        if depth > self.workflows.len() {
            return Err(SolveError::NoSolution("workflows loop".to_string()));
        }

        let mut total = 0;
        for rule in self.rules(name)? {
            match &rule.condition {
                None => {
                    return Ok(total + self.accepted_combinations(rule.target, ranges, depth + 1)?);
                }
                Some(condition) => {
                    let (matched, rest) = condition.split(&ranges[condition.category]);
                    let mut branch = ranges.clone();
                    branch[condition.category] = matched;
                    total += self.accepted_combinations(rule.target, branch, depth + 1)?;
                    ranges[condition.category] = rest;
                }
            }
        }
        Ok(total)
    }
}

fn parse_system<'a>(input: &'a str) -> anyhow::Result<System<'a>> {
    let workflow_re = Regex::new(r"^(\w+)\{(.*)\}$")?;
    let rule_re = Regex::new(r"^([xmas])([<>])(\d+):(\w+)$")?;
    let part_re = Regex::new(r"^\{x=(\d+),m=(\d+),a=(\d+),s=(\d+)\}$")?;

    let mut workflows = HashMap::new();
    let mut parts = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let context = || format!("line {}", i + 1);

        if let Some(caps) = part_re.captures(line) {
            let mut part = [0; 4];
            for (slot, rating) in part.iter_mut().zip(caps.iter().skip(1).flatten()) {
                *slot = rating.as_str().parse().with_context(context)?;
            }
            parts.push(part);
            continue;
        }

        let (_, [name, body]) = workflow_re
            .captures(line)
            .map(|c| c.extract())
            .ok_or_else(|| anyhow!("unrecognised line {line:?}"))
            .with_context(context)?;
        let rules = body
            .split(',')
            .map(|rule| -> anyhow::Result<Rule<'a>> {
                let Some(caps) = rule_re.captures(rule) else {
                    return Ok(Rule {
                        condition: None,
                        target: Target::from(rule),
                    });
                };
                let (_, [cat, op, value, target]) = caps.extract();
                Ok(Rule {
                    condition: Some(Condition {
                        category: category(cat)?,
                        less_than: op == "<",
                        value: value.parse()?,
                    }),
                    target: Target::from(target),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(context)?;
        if workflows.insert(name, rules).is_some() {
            bail!("workflow {name:?} defined twice");
        }
    }

    if !workflows.contains_key(START) {
        bail!("no '{START}' workflow");
    }
    Ok(System { workflows, parts })
}

impl AocParser for Solver {
    type SharedData<'a> = System<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_system(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sum = 0;
        for part in &shared.parts {
            if shared.accepts(part)? {
                sum += part.iter().sum::<u64>();
            }
        }
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let full = 1..4001;
        let count = shared.accepted_combinations(
            Target::Workflow(START),
            [full.clone(), full.clone(), full.clone(), full],
            0,
        )?;
        debug!(count, "accepted combinations");
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.workflows.len(), 11);
        assert_eq!(shared.parts.len(), 5);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "19114");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "167409079868000");
    }

    #[test]
    fn condition_split() {
        let less = Condition {
            category: 0,
            less_than: true,
            value: 10,
        };
        assert_eq!(less.split(&(1..20)), (1..10, 10..20));
        let greater = Condition {
            category: 0,
            less_than: false,
            value: 10,
        };
        assert_eq!(greater.split(&(1..20)), (11..20, 1..11));
        assert_eq!(greater.split(&(1..5)), (5..5, 1..5));
    }

    #[test]
    fn missing_start_workflow() {
        assert!(Solver::parse("ab{A}\n\n{x=1,m=1,a=1,s=1}").is_err());
    }
}
