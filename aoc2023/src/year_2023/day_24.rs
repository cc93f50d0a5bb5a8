//! Day 24: Never Tell Me The Odds

use std::ops::RangeInclusive;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use itertools::Itertools;
use tracing::{debug, trace};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Test area for part 1 on real input
const TEST_AREA: RangeInclusive<i64> = 200_000_000_000_000..=400_000_000_000_000;

/// Test area the example input uses
const SAMPLE_TEST_AREA: RangeInclusive<i64> = 7..=27;

/// Largest rock speed per axis tried in part 2
const MAX_ROCK_SPEED: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hailstone {
    position: [i128; 3],
    velocity: [i128; 3],
}

/// Whether the xy paths of `a` and `b` cross inside `area`, both in the future.
///
/// Works on the intersection scaled by the determinant so everything stays
/// integral.
fn paths_cross(a: &Hailstone, b: &Hailstone, area: &RangeInclusive<i64>) -> bool {
    let [x1, y1, _] = a.position;
    let [vx1, vy1, _] = a.velocity;
    let [x2, y2, _] = b.position;
    let [vx2, vy2, _] = b.velocity;

    let mut det = vx1 * vy2 - vy1 * vx2;
    if det == 0 {
        return false;
    }
    let (dx, dy) = (x2 - x1, y2 - y1);
    let mut t = dx * vy2 - dy * vx2;
    let mut s = dx * vy1 - dy * vx1;
    if det < 0 {
        (det, t, s) = (-det, -t, -s);
    }
    if t < 0 || s < 0 {
        return false;
    }

    let (low, high) = (i128::from(*area.start()) * det, i128::from(*area.end()) * det);
    let x = x1 * det + vx1 * t;
    let y = y1 * det + vy1 * t;
    (low..=high).contains(&x) && (low..=high).contains(&y)
}

/// Pairs of hailstones whose future xy paths cross inside `area`.
pub fn crossings_within(hail: &[Hailstone], area: RangeInclusive<i64>) -> usize {
    hail.iter()
        .tuple_combinations()
        .filter(|(a, b)| paths_cross(a, b, &area))
        .count()
}

/// Starting position and velocity of a rock that hits every hailstone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rock {
    pub position: [i128; 3],
    pub velocity: [i128; 3],
}

impl Rock {
    /// Whether the rock and `h` share a point at one whole, non-negative time.
    fn hits(&self, h: &Hailstone) -> bool {
        let Some(axis) = (0..3).find(|&a| h.velocity[a] != self.velocity[a]) else {
            return h.position == self.position;
        };
        let gap = self.position[axis] - h.position[axis];
        let closing = h.velocity[axis] - self.velocity[axis];
        if gap % closing != 0 || gap / closing < 0 {
            return false;
        }
        let t = gap / closing;
        (0..3).all(|a| {
            h.position[a] + t * h.velocity[a] == self.position[a] + t * self.velocity[a]
        })
    }
}

/// Search for the rock by trying xy velocities up to `max_speed`.
///
/// In the rock's frame every hailstone passes through the rock's start, so
/// the first two hailstones pin that point down and the rest must be
/// collinear with it. The z velocity then follows from the two hit times,
/// and every hailstone must still be hit in all three axes.
pub fn throw_rock(hail: &[Hailstone], max_speed: i64) -> Option<Rock> {
    let (first, second) = match hail {
        [first, second, ..] => (first, second),
        _ => return None,
    };
    let speeds = || (-max_speed..=max_speed).map(i128::from);

    for (vx, vy) in speeds().cartesian_product(speeds()) {
        let (ax0, ay0) = (first.velocity[0] - vx, first.velocity[1] - vy);
        let (ax1, ay1) = (second.velocity[0] - vx, second.velocity[1] - vy);
        let det = ax1 * ay0 - ax0 * ay1;
        if det == 0 {
            continue;
        }
        let dx = second.position[0] - first.position[0];
        let dy = second.position[1] - first.position[1];
        let (t0, t1) = (ax1 * dy - ay1 * dx, ax0 * dy - ay0 * dx);
        if t0 % det != 0 || t1 % det != 0 {
            continue;
        }
        let (t0, t1) = (t0 / det, t1 / det);
        if t0 < 0 || t1 < 0 || t0 == t1 {
            continue;
        }

        let x = first.position[0] + t0 * ax0;
        let y = first.position[1] + t0 * ay0;
        let collinear = hail.iter().all(|h| {
            let (rx, ry) = (h.velocity[0] - vx, h.velocity[1] - vy);
            (x - h.position[0]) * ry == (y - h.position[1]) * rx
        });
        if !collinear {
            continue;
        }

        let (z0, z1) = (first.position[2], second.position[2]);
        let (c0, c1) = (first.velocity[2], second.velocity[2]);
        let numerator = z0 - z1 + t0 * c0 - t1 * c1;
        if numerator % (t0 - t1) != 0 {
            continue;
        }
        let vz = numerator / (t0 - t1);
        let rock = Rock {
            position: [x, y, z0 + t0 * (c0 - vz)],
            velocity: [vx, vy, vz],
        };
        if !hail.iter().all(|h| rock.hits(h)) {
            continue;
        }
        trace!(t0, t1, "first two hits");
        return Some(rock);
    }
    None
}

fn parse_hailstone(line: &str) -> anyhow::Result<Hailstone> {
    let (position, velocity) = line.split_once('@').context("missing '@'")?;
    let triple = |s: &str| -> anyhow::Result<[i128; 3]> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<i128>().with_context(|| format!("bad number {v:?}")))
            .collect::<anyhow::Result<Vec<_>>>()?;
        values
            .try_into()
            .map_err(|v: Vec<i128>| anyhow::anyhow!("expected 3 values, got {}", v.len()))
    };
    Ok(Hailstone {
        position: triple(position)?,
        velocity: triple(velocity)?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hailstone>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| parse_hailstone(l).map_err(|e| ParseError::at_line(i, format!("{e:#}"))))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(crossings_within(shared, TEST_AREA).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rock = throw_rock(shared, MAX_ROCK_SPEED).ok_or_else(|| {
            SolveError::NoSolution("no rock trajectory hits every hailstone".to_string())
        })?;
        debug!(?rock.position, ?rock.velocity, "rock thrown");
        Ok(rock.position.iter().sum::<i128>().to_string())
    }
}

/// Day 24 on the example input, whose hail is tested over 7..=27
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct SampleSolver;

impl AocParser for SampleSolver {
    type SharedData<'a> = Vec<Hailstone>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Solver::parse(input)
    }
}

impl PartSolver<1> for SampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(crossings_within(shared, SAMPLE_TEST_AREA).to_string())
    }
}

impl PartSolver<2> for SampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        <Solver as PartSolver<2>>::solve(shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

    #[test]
    fn sample_crossings() {
        let hail = Solver::parse(SAMPLE).unwrap();
        assert_eq!(crossings_within(&hail, 7..=27), 2);
    }

    #[test]
    fn sample_rock() {
        let hail = Solver::parse(SAMPLE).unwrap();
        let rock = throw_rock(&hail, 10).unwrap();
        assert_eq!(rock.position, [24, 13, 10]);
        assert_eq!(rock.velocity, [-3, 1, 2]);

        let mut shared = hail;
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "47");
    }

    #[test]
    fn rock_must_line_up_in_z() {
        let bent = SAMPLE.replace("20, 25, 34", "20, 25, 35");
        let hail = Solver::parse(&bent).unwrap();
        assert_eq!(throw_rock(&hail, 10), None);
    }

    #[test]
    fn sample_parameters() {
        let mut shared = SampleSolver::parse(SAMPLE).unwrap();
        assert_eq!(SampleSolver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(SampleSolver::solve_part(&mut shared, 2).unwrap(), "47");
    }

    #[test]
    fn parallel_paths_never_cross() {
        let hail = Solver::parse("0, 0, 0 @ 1, 1, 0\n0, 5, 0 @ 2, 2, 0").unwrap();
        assert_eq!(crossings_within(&hail, 0..=100), 0);
    }

    #[test]
    fn crossing_in_the_past() {
        let hail = Solver::parse("19, 13, 30 @ -2, 1, -2\n20, 19, 15 @ 1, -5, -3").unwrap();
        assert_eq!(crossings_within(&hail, 7..=27), 0);
    }
}
