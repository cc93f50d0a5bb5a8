//! Command-line arguments

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code 2023 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc2023", about = "Run Advent of Code 2023 solvers", version)]
pub struct Args {
    /// Day to run (runs every registered day if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Directory holding `DayN.txt` puzzle inputs [default: $AOC2023_INPUT_DIR or `input`]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Read example inputs from the sample directory instead
    #[arg(long)]
    pub sample: bool,

    /// Directory holding example inputs
    #[arg(long, default_value = "testInput")]
    pub sample_dir: PathBuf,

    /// Input variant, reads `DayN_<VARIANT>.txt`
    #[arg(long)]
    pub variant: Option<String>,

    /// Expected answer; requires a single --day and --part
    #[arg(long)]
    pub expect: Option<String>,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
