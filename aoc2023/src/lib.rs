//! Advent of Code 2023 solutions
//!
//! Every day lives in [`year_2023`] as a `Solver` built on the
//! `aoc-solver` traits. [`registry`] collects all of them for the runner.
//!
//! ```
//! let registry = aoc2023::registry().unwrap();
//! assert_eq!(registry.len(), 25);
//!
//! let mut solver = registry.create_solver(9, "0 3 6 9 12 15").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "18");
//! assert_eq!(solver.solve(2).unwrap().answer, "-3");
//! ```

use aoc_solver::{RegistrationError, RegistryBuilder, Solver, SolverRegistry};

pub mod utils;
pub mod year_2023;

/// Event year served by this crate
pub const YEAR: u16 = 2023;

/// Registry with a solver for every day of the event.
pub fn registry() -> Result<SolverRegistry, RegistrationError> {
    build(false)
}

/// Like [`registry`], but days whose answers depend on puzzle parameters
/// (11, 21 and 24) use the values from the published examples.
pub fn sample_registry() -> Result<SolverRegistry, RegistrationError> {
    build(true)
}

/// Register `S` for `day` on sample runs, `P` otherwise.
fn register_either<P, S>(
    builder: RegistryBuilder,
    day: u8,
    sample: bool,
) -> Result<RegistryBuilder, RegistrationError>
where
    P: Solver + 'static,
    S: Solver + 'static,
{
    if sample {
        builder.register_solver::<S>(day)
    } else {
        builder.register_solver::<P>(day)
    }
}

fn build(sample: bool) -> Result<SolverRegistry, RegistrationError> {
    use year_2023::*;

    let builder = RegistryBuilder::new(YEAR)
        .register_solver::<day_1::Solver>(1)?
        .register_solver::<day_2::Solver>(2)?
        .register_solver::<day_3::Solver>(3)?
        .register_solver::<day_4::Solver>(4)?
        .register_solver::<day_5::Solver>(5)?
        .register_solver::<day_6::Solver>(6)?
        .register_solver::<day_7::Solver>(7)?
        .register_solver::<day_8::Solver>(8)?
        .register_solver::<day_9::Solver>(9)?
        .register_solver::<day_10::Solver>(10)?;
    let builder = register_either::<day_11::Solver, day_11::SampleSolver>(builder, 11, sample)?
        .register_solver::<day_12::Solver>(12)?
        .register_solver::<day_13::Solver>(13)?
        .register_solver::<day_14::Solver>(14)?
        .register_solver::<day_15::Solver>(15)?
        .register_solver::<day_16::Solver>(16)?
        .register_solver::<day_17::Solver>(17)?
        .register_solver::<day_18::Solver>(18)?
        .register_solver::<day_19::Solver>(19)?
        .register_solver::<day_20::Solver>(20)?;
    let builder = register_either::<day_21::Solver, day_21::SampleSolver>(builder, 21, sample)?
        .register_solver::<day_22::Solver>(22)?
        .register_solver::<day_23::Solver>(23)?;
    let builder = register_either::<day_24::Solver, day_24::SampleSolver>(builder, 24, sample)?
        .register_solver::<day_25::Solver>(25)?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_day_is_registered() {
        let registry = registry().unwrap();
        assert_eq!(registry.year(), YEAR);
        let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
        assert_eq!(days, (1..=25).collect::<Vec<u8>>());
        assert_eq!(registry.info(25).map(|info| info.parts), Some(1));
        assert_eq!(registry.info(24).map(|info| info.parts), Some(2));
    }

    #[test]
    fn sample_registry_uses_example_parameters() {
        let input = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";
        let sample = sample_registry().unwrap();
        assert_eq!(sample.len(), 25);
        let mut solver = sample.create_solver(24, input).unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "2");

        let mut solver = registry().unwrap().create_solver(24, input).unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "0");
    }
}
