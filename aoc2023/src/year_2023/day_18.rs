//! Day 18: Lavaduct Lagoon

use crate::utils::coordinate::{Coordinate, Direction};
use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dig {
    direction: Direction,
    meters: i64,
}

/// Each plan line read both ways: as written, and decoded from the colour.
#[derive(Debug)]
pub struct DigPlan {
    written: Vec<Dig>,
    from_colour: Vec<Dig>,
}

fn parse_direction(text: &str) -> anyhow::Result<Direction> {
    Ok(match text {
        "U" => Direction::Up,
        "R" => Direction::Right,
        "D" => Direction::Down,
        "L" => Direction::Left,
        other => bail!("unknown direction {other:?}"),
    })
}

/// `#70c710`: five hex digits of distance, then the direction
/// (0 = R, 1 = D, 2 = L, 3 = U).
fn decode_colour(colour: &str) -> anyhow::Result<Dig> {
    let hex = colour
        .strip_prefix("(#")
        .and_then(|c| c.strip_suffix(')'))
        .filter(|h| h.len() == 6)
        .ok_or_else(|| anyhow!("expected '(#rrggbb)', got {colour:?}"))?;
    let meters = i64::from_str_radix(&hex[..5], 16).context("colour distance")?;
    let direction = match &hex[5..] {
        "0" => Direction::Right,
        "1" => Direction::Down,
        "2" => Direction::Left,
        "3" => Direction::Up,
        other => bail!("unknown colour direction {other:?}"),
    };
    Ok(Dig { direction, meters })
}

fn parse_line(line: &str) -> anyhow::Result<(Dig, Dig)> {
    let mut fields = line.split_whitespace();
    let (Some(direction), Some(meters), Some(colour), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        bail!("expected '<dir> <meters> (#colour)'");
    };
    let written = Dig {
        direction: parse_direction(direction)?,
        meters: meters.parse().context("meters")?,
    };
    Ok((written, decode_colour(colour)?))
}

/// Cubic meters of lava the lagoon holds: the interior from the shoelace
/// area (via Pick's theorem) plus the trench itself.
fn lagoon_volume(plan: &[Dig]) -> i64 {
    let mut at = Coordinate::default();
    let mut double_area = 0;
    let mut perimeter = 0;
    for dig in plan {
        let next = at.step_by(dig.direction, dig.meters);
        double_area += at.row * next.column - next.row * at.column;
        perimeter += dig.meters;
        at = next;
    }
    debug!(double_area, perimeter, "lagoon outline");
    double_area.abs() / 2 + perimeter / 2 + 1
}

impl AocParser for Solver {
    type SharedData<'a> = DigPlan;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (written, from_colour) = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                parse_line(line).map_err(|e| ParseError::at_line(i, format!("{e:#}")))
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();
        Ok(DigPlan {
            written,
            from_colour,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon_volume(&shared.written).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon_volume(&shared.from_colour).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "62");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "952408144115");
    }

    #[test]
    fn colour_decoding() {
        assert_eq!(
            decode_colour("(#70c710)").unwrap(),
            Dig {
                direction: Direction::Right,
                meters: 461937
            }
        );
        assert!(decode_colour("(#70c714)").is_err());
    }
}
