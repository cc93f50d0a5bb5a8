//! Parsed, timed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval of one parse or solve step (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f`, recording when it started and finished.
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Timing) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Timing { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer for one part with the time it took
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// One day's parsed input, ready to solve any of its parts
///
/// The input is parsed exactly once in [`SolverInstance::new`]; parts then
/// run against the same shared data, so a part may leave memoized results
/// for the next one.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_timing: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for the given day.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_timing) = Timing::measure(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_timing,
        })
    }
}

/// Type-erased interface over [`SolverInstance`]s of different days
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("parse took {}", solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {part}: {} ({})", result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part` (range checked) and time it
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When and how long parsing took
    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this day supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) =
            Timing::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            timing,
        })
    }

    fn parse_timing(&self) -> Timing {
        self.parse_timing
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
