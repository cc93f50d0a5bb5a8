//! Day 2: Cube Conundrum

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::AocSolver;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Cubes of each colour shown in one handful.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    /// Per-colour maximum over every handful
    minimum_bag: Cubes,
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

fn parse_handful(text: &str) -> anyhow::Result<Cubes> {
    let mut cubes = Cubes::default();
    for entry in text.split(',') {
        let (count, colour) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<count> <colour>', got {entry:?}"))?;
        let count: u32 = count.parse().context("cube count")?;
        match colour {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            "blue" => cubes.blue += count,
            other => bail!("unknown colour {other:?}"),
        }
    }
    Ok(cubes)
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (header, handfuls) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':'"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected 'Game <id>'"))?
        .parse()
        .context("game id")?;
    let minimum_bag = handfuls
        .split(';')
        .map(parse_handful)
        .try_fold(Cubes::default(), |acc, cubes| cubes.map(|c| acc.max(c)))?;
    Ok(Game { id, minimum_bag })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                parse_game(line).map_err(|e| ParseError::at_line(i, format!("{e:#}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|game| game.minimum_bag.fits_in(BAG))
            .inspect(|game| debug!(id = game.id, "possible game"))
            .map(|game| game.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared.iter().map(|game| game.minimum_bag.power()).sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn minimum_bag_of_first_game() {
        let game = parse_game("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
        assert_eq!(
            game.minimum_bag,
            Cubes {
                red: 4,
                green: 2,
                blue: 6
            }
        );
    }

    #[test]
    fn unknown_colour_is_a_line_error() {
        let err = Solver::parse("Game 1: 3 blue\nGame 2: 1 purple").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
    }
}
