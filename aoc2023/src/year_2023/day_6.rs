//! Day 6: Wait For It

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Race {
    time: u64,
    record: u64,
}

impl Race {
    fn beats(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.record)
    }

    /// Hold times in `0..=time` that travel further than the record.
    ///
    /// `hold * (time - hold) > record` is a downward parabola symmetric
    /// around `time / 2`, so only the smallest winning hold is needed.
    /// The float root is a starting point, corrected with exact checks.
    fn ways_to_win(&self) -> u64 {
        let t = self.time as f64;
        let discriminant = t * t - 4.0 * self.record as f64;
        if discriminant < 0.0 {
            return 0;
        }
        let half = self.time / 2;
        let mut lo = (((t - discriminant.sqrt()) / 2.0).floor().max(0.0) as u64).min(half);
        while lo > 0 && self.beats(lo - 1) {
            lo -= 1;
        }
        while lo <= half && !self.beats(lo) {
            lo += 1;
        }
        if lo > half {
            return 0;
        }
        self.time - 2 * lo + 1
    }
}

#[derive(Debug)]
pub struct Races {
    races: Vec<Race>,
    /// All digits of each row read as one number (part 2's kerning)
    single: Race,
}

fn row<'a>(line: Option<&'a str>, label: &str) -> anyhow::Result<Vec<&'a str>> {
    let line = line.ok_or_else(|| anyhow!("missing {label} line"))?;
    let values = line
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| anyhow!("expected '{label}:'"))?;
    Ok(values.split_whitespace().collect())
}

fn number(text: &str) -> anyhow::Result<u64> {
    text.parse().with_context(|| format!("bad number {text:?}"))
}

fn parse_races(input: &str) -> anyhow::Result<Races> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let times = row(lines.next(), "Time")?;
    let records = row(lines.next(), "Distance")?;
    if times.len() != records.len() {
        return Err(anyhow!(
            "{} times but {} distances",
            times.len(),
            records.len()
        ));
    }

    let races = times
        .iter()
        .zip(&records)
        .map(|(t, d)| -> anyhow::Result<Race> {
            Ok(Race {
                time: number(t)?,
                record: number(d)?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let single = Race {
        time: number(&times.concat())?,
        record: number(&records.concat())?,
    };
    Ok(Races { races, single })
}

impl AocParser for Solver {
    type SharedData<'a> = Races;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_races(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .races
            .iter()
            .map(|race| {
                let ways = race.ways_to_win();
                debug!(time = race.time, record = race.record, ways, "race");
                ways
            })
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.single.ways_to_win().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const SAMPLE: &str = "\
Time:      7  15   30
Distance:  9  40  200
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            shared.single,
            Race {
                time: 71530,
                record: 940200
            }
        );
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "288");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "71503");
    }

    #[test]
    fn exact_roots_do_not_count() {
        // 10 * 20 == 200 ties the record
        assert_eq!(Race { time: 30, record: 200 }.ways_to_win(), 9);
        assert_eq!(Race { time: 4, record: 4 }.ways_to_win(), 0);
        assert_eq!(Race { time: 3, record: 100 }.ways_to_win(), 0);
    }

    proptest! {
        #[test]
        fn matches_brute_force(time in 0u64..300, record in 0u64..20_000) {
            let race = Race { time, record };
            let brute = (0..=time).filter(|&h| race.beats(h)).count() as u64;
            prop_assert_eq!(race.ways_to_win(), brute);
        }
    }
}
