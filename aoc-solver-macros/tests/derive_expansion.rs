//! Expansion checks for `#[derive(AocSolver)]`

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use std::marker::PhantomData;

/// Four parts over borrowed input; part 3 fails on purpose
#[derive(AocSolver)]
#[aoc_solver(max_parts = 4)]
struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sort_unstable();
        Ok(shared.join(","))
    }
}

impl PartSolver<3> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let n: u32 = shared
            .first()
            .ok_or_else(|| SolveError::NoSolution("no words".to_string()))?
            .parse()
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        Ok(n.to_string())
    }
}

impl PartSolver<4> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.concat())
    }
}

#[test]
fn every_declared_part_dispatches() {
    let mut shared = Words::parse("pear fig apple").unwrap();
    assert_eq!(Words::PARTS, 4);
    assert_eq!(Words::solve_part(&mut shared, 1).unwrap(), "3");
    assert_eq!(Words::solve_part(&mut shared, 2).unwrap(), "apple,fig,pear");
    // part 2 sorted in place
    assert_eq!(Words::solve_part(&mut shared, 4).unwrap(), "applefigpear");
}

#[test]
fn part_errors_propagate_unchanged() {
    let mut shared = Words::parse("seven").unwrap();
    assert!(matches!(
        Words::solve_part(&mut shared, 3),
        Err(SolveError::SolveFailed(_))
    ));

    let mut empty = Words::parse("").unwrap();
    assert!(matches!(
        Words::solve_part(&mut empty, 3),
        Err(SolveError::NoSolution(_))
    ));
}

#[test]
fn parts_past_max_are_not_implemented() {
    let mut shared = Words::parse("a").unwrap();
    assert!(matches!(
        Words::solve_part(&mut shared, 5),
        Err(SolveError::PartNotImplemented(5))
    ));
    assert!(matches!(
        Words::solve_part_checked_range(&mut shared, 5),
        Err(SolveError::PartOutOfRange(5))
    ));
}

/// Integer types the generic solver below accepts
trait Number: std::str::FromStr<Err = std::num::ParseIntError> + std::fmt::Display {}

impl Number for u64 {}
impl Number for i8 {}

/// Generic solver: the derive must carry the type parameters through
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Parsed<T: Number>(PhantomData<T>);

impl<T: Number> AocParser for Parsed<T> {
    type SharedData<'a> = Vec<T>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(i, l)| l.trim().parse().map_err(|e| ParseError::at_line(i, e)))
            .collect()
    }
}

impl<T: Number> PartSolver<1> for Parsed<T> {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .last()
            .map(ToString::to_string)
            .ok_or_else(|| SolveError::NoSolution("empty".to_string()))
    }
}

#[test]
fn generic_solver_derives() {
    let mut shared = Parsed::<u64>::parse("4\n8\n15").unwrap();
    assert_eq!(Parsed::<u64>::solve_part(&mut shared, 1).unwrap(), "15");

    let err = Parsed::<i8>::parse("1\n300").unwrap_err();
    assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
}
