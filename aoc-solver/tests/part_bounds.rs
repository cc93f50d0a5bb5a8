//! Range checking in `SolverExt::solve_part_checked_range`

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Echoes the part number for any `N`-part day
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut (), part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => Echo::<1>::solve_part_checked_range(&mut (), part),
        2 => Echo::<2>::solve_part_checked_range(&mut (), part),
        _ => Echo::<3>::solve_part_checked_range(&mut (), part),
    }
}

#[test]
fn part_zero_is_rejected() {
    assert!(matches!(checked(2, 0), Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn single_part_day_rejects_part_two() {
    assert!(matches!(checked(1, 2), Err(SolveError::PartOutOfRange(2))));
    assert_eq!(checked(1, 1).unwrap(), "part1");
}

proptest! {
    #[test]
    fn out_of_range_parts_never_dispatch(parts in 1u8..=3, part in any::<u8>()) {
        let result = checked(parts, part);
        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }
}
