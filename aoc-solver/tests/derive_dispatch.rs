//! Property tests for `#[derive(AocSolver)]` part dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Sums and multiplies a column of numbers, one per line
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Column;

impl AocParser for Column {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.is_empty())
            .map(|(i, l)| l.parse().map_err(|e| ParseError::at_line(i, e)))
            .collect()
    }
}

impl PartSolver<1> for Column {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Column {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Part 2 reads what part 1 left behind in the shared data
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Memo;

#[derive(Debug)]
struct MemoData<'a> {
    words: Vec<&'a str>,
    longest: Option<usize>,
}

impl AocParser for Memo {
    type SharedData<'a> = MemoData<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(MemoData {
            words: input.split_whitespace().collect(),
            longest: None,
        })
    }
}

impl PartSolver<1> for Memo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared.words.iter().map(|w| w.len()).max().unwrap_or(0);
        shared.longest = Some(longest);
        Ok(longest.to_string())
    }
}

impl PartSolver<2> for Memo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared
            .longest
            .ok_or_else(|| SolveError::NoSolution("part 1 has not run".to_string()))?;
        Ok(shared
            .words
            .iter()
            .filter(|w| w.len() == longest)
            .count()
            .to_string())
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<Column as Solver>::PARTS, 2);
}

#[test]
fn bad_line_reports_line_number() {
    let err = Column::parse("1\n2\nx\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidLine { line: 3, .. }));
}

#[test]
fn dependent_part_sees_part_one_state() {
    let mut shared = Memo::parse("ab abc xyz q").unwrap();
    assert!(matches!(
        Memo::solve_part(&mut shared, 2),
        Err(SolveError::NoSolution(_))
    ));
    assert_eq!(Memo::solve_part(&mut shared, 1).unwrap(), "3");
    assert_eq!(shared.longest, Some(3));
    assert_eq!(Memo::solve_part(&mut shared, 2).unwrap(), "2");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn solve_part_matches_direct_part_solver(
        numbers in prop::collection::vec(1i64..10, 1..6),
        part in 1u8..=2,
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let mut via_dispatch = Column::parse(&input).unwrap();
        let mut direct = Column::parse(&input).unwrap();

        let dispatched = Column::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <Column as PartSolver<1>>::solve(&mut direct),
            _ => <Column as PartSolver<2>>::solve(&mut direct),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn unknown_parts_are_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = Column::parse("1\n2\n3").unwrap();
        match Column::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }
}
