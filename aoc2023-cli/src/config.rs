//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_solver::{RegistrationError, SolverRegistry};
use std::path::PathBuf;

/// Environment variable overriding the default input directory
pub const INPUT_DIR_ENV: &str = "AOC2023_INPUT_DIR";

const DEFAULT_INPUT_DIR: &str = "input";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Day filter (None = all registered days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Directory inputs are read from (sample directory with --sample)
    pub input_dir: PathBuf,
    /// Run days with the parameters of the published examples
    pub sample: bool,
    pub variant: Option<String>,
    pub expect: Option<String>,
    /// 0 = info, 1 = debug, 2+ = trace
    pub verbosity: u8,
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from))
    }

    /// Build config from CLI args, with `env_input_dir` standing in for
    /// [`INPUT_DIR_ENV`]
    pub fn resolve(args: Args, env_input_dir: Option<PathBuf>) -> Result<Self, CliError> {
        if args.expect.is_some() && (args.day.is_none() || args.part.is_none()) {
            return Err(CliError::Config(
                "--expect needs a single --day and --part".to_string(),
            ));
        }

        let input_dir = if args.sample {
            args.sample_dir
        } else {
            args.input_dir
                .or(env_input_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
        };

        Ok(Config {
            day_filter: args.day,
            part_filter: args.part,
            input_dir,
            sample: args.sample,
            variant: args.variant,
            expect: args.expect,
            verbosity: args.verbose,
            quiet: args.quiet,
        })
    }

    /// Solver table for this run: sample runs get the example parameters
    pub fn registry(&self) -> Result<SolverRegistry, RegistrationError> {
        if self.sample {
            aoc2023::sample_registry()
        } else {
            aoc2023::registry()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str], env: Option<&str>) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc2023").chain(argv.iter().copied()))
            .unwrap();
        Config::resolve(args, env.map(PathBuf::from))
    }

    #[test]
    fn input_dir_precedence() {
        assert_eq!(config(&[], None).unwrap().input_dir, PathBuf::from("input"));
        assert_eq!(
            config(&[], Some("/data/aoc")).unwrap().input_dir,
            PathBuf::from("/data/aoc")
        );
        assert_eq!(
            config(&["--input-dir", "mine"], Some("/data/aoc"))
                .unwrap()
                .input_dir,
            PathBuf::from("mine")
        );
        assert_eq!(
            config(&["--sample", "--input-dir", "mine"], None)
                .unwrap()
                .input_dir,
            PathBuf::from("testInput")
        );
        assert!(config(&["--sample"], None).unwrap().sample);
        assert!(!config(&[], None).unwrap().sample);
    }

    #[test]
    fn expect_requires_day_and_part() {
        assert!(matches!(
            config(&["--expect", "42"], None),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            config(&["--expect", "42", "-d", "1"], None),
            Err(CliError::Config(_))
        ));
        let cfg = config(&["--expect", "42", "-d", "1", "-p", "2"], None).unwrap();
        assert_eq!(cfg.expect.as_deref(), Some("42"));
    }
}
