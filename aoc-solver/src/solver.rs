//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses a day's puzzle input once, into the data both parts work on.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Calibration;
///
/// impl AocParser for Calibration {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// assert_eq!(Calibration::parse("1abc2\ntreb7uchet").unwrap().len(), 2);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to memoize between them.
    ///
    /// Owned structs are the common case; borrow from the input (`&'a str`)
    /// when no transformation is needed.
    type SharedData<'a>;

    /// Parse the raw puzzle input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a day.
///
/// Implement `PartSolver<1>` and `PartSolver<2>` and derive [`Solver`] with
/// `#[derive(AocSolver)]` to get the part-number dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Mirage;
///
/// impl AocParser for Mirage {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .enumerate()
///             .map(|(i, n)| n.parse().map_err(|e| ParseError::at_line(i, e)))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Mirage {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Mirage::parse("0 3 6 9").unwrap();
/// assert_eq!(<Mirage as PartSolver<1>>::solve(&mut shared).unwrap(), "18");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part, returning the answer as it would be submitted.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete day: parser plus numbered parts.
///
/// Normally generated by `#[derive(AocSolver)]`; hand-written impls are
/// fine when a day needs unusual dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Snowverload;
///
/// impl AocParser for Snowverload {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// impl Solver for Snowverload {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut usize, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Snowverload::parse("jqt: rhn\nrsh: frs").unwrap();
/// assert_eq!(Snowverload::solve_part(&mut shared, 1).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this day has (2, except the last day of the event)
    const PARTS: u8;

    /// Solve a specific part.
    ///
    /// Returns `PartNotImplemented` for part numbers without a
    /// [`PartSolver`] impl.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked access to [`Solver::solve_part`].
pub trait SolverExt: Solver {
    /// Like `solve_part`, but rejects `part` outside `1..=PARTS` with
    /// `PartOutOfRange` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
