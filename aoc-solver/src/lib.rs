//! Framework for Advent of Code solvers
//!
//! A day is a type implementing [`AocParser`] (how to read the input) and
//! one [`PartSolver<N>`] per part. `#[derive(AocSolver)]` turns those into a
//! [`Solver`], which a [`SolverRegistry`] can construct from raw input and
//! hand out as a type-erased [`DynSolver`].
//!
//! # Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sonar;
//!
//! impl AocParser for Sonar {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .enumerate()
//!             .map(|(i, l)| l.parse().map_err(|e| ParseError::at_line(i, e)))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sonar {
//!     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sonar {
//!     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(depths.windows(4).filter(|w| w[3] > w[0]).count().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new(2021)
//!     .register_solver::<Sonar>(1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(1, "199\n200\n208\n210\n200").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "1");
//! ```
//!
//! Parts share one mutable `SharedData`, so part 2 can reuse what part 1
//! computed; see the `Memo` solver in the crate tests.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{DAYS_PER_YEAR, FactoryInfo, RegistryBuilder, SolverFactory, SolverRegistry};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

pub use aoc_solver_macros::AocSolver;
