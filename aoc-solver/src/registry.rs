//! Per-event registry mapping day numbers to solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Days in one Advent of Code event
pub const DAYS_PER_YEAR: u8 = 25;

/// Factory turning raw input into a parsed, type-erased solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the day's solver supports
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

#[inline]
fn day_index(day: u8) -> Option<usize> {
    (1..=DAYS_PER_YEAR)
        .contains(&day)
        .then(|| usize::from(day - 1))
}

/// Builder for a [`SolverRegistry`]
///
/// Registration is explicit: each day is added by type, and adding the
/// same day twice is an error.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Lens;
///
/// impl AocParser for Lens {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Lens {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut &str, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.split(',').count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let registry = RegistryBuilder::new(2023)
///     .register_solver::<Lens>(15)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(15, "rn=1,cm-,qp=3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// assert!(!registry.contains(16));
/// ```
pub struct RegistryBuilder {
    year: u16,
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    /// Empty builder for the given event year
    pub fn new(year: u16) -> Self {
        Self {
            year,
            entries: (0..DAYS_PER_YEAR).map(|_| None).collect(),
        }
    }

    /// Register a raw factory for `day`.
    ///
    /// Fails with `InvalidDay` outside 1..=25 and `DuplicateSolver` if the
    /// day already has a solver.
    pub fn register_factory<F>(
        mut self,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = day_index(day).ok_or(RegistrationError::InvalidDay(self.year, day))?;
        let slot = &mut self.entries[index];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(self.year, day));
        }
        *slot = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register solver type `S` for `day`.
    pub fn register_solver<S>(self, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        let year = self.year;
        self.register_factory(day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    /// Finish registration
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            year: self.year,
            entries: self.entries,
        }
    }
}

/// Immutable table of one event's solvers
pub struct SolverRegistry {
    year: u16,
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Parse `input` with the solver registered for `day`.
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = day_index(day)
            .and_then(|i| self.entries[i].as_ref())
            .ok_or(SolverError::NotFound(self.year, day))?;
        Ok((entry.factory)(input)?)
    }

    pub fn info(&self, day: u8) -> Option<FactoryInfo> {
        let entry = self.entries[day_index(day)?].as_ref()?;
        Some(FactoryInfo {
            year: self.year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, day: u8) -> bool {
        self.info(day).is_some()
    }

    /// Registered days in ascending order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        (1..=DAYS_PER_YEAR).filter_map(|day| self.info(day))
    }

    /// Number of registered days
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
