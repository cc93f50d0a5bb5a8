//! aoc2023 - run the Advent of Code 2023 solvers against input files

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_tracing(config.verbosity);
    tracing::debug!(?config, "resolved configuration");

    let executor = Executor::new(config.registry()?, &config);
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
    }
    if !config.quiet {
        println!(
            "Running {} day(s) from {}...",
            work_items.len(),
            config.input_dir.display()
        );
    }

    let formatter = OutputFormatter::new(config.quiet);
    let (tx, rx) = std::sync::mpsc::channel();
    let results = std::thread::scope(|s| {
        let handle = s.spawn(|| executor.execute(tx));
        let mut results = Vec::new();
        for result in rx {
            formatter.print_result(&result);
            results.push(result);
        }
        handle
            .join()
            .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
            .map_err(CliError::Executor)?;
        Ok::<_, CliError>(results)
    })?;

    formatter.print_summary(&results);

    if let (Some(expected), [result]) = (&config.expect, results.as_slice())
        && !formatter.check_expected(expected, result)
        && let Ok(actual) = &result.answer
    {
        return Err(CliError::Mismatch {
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::Failed(failed)),
    }
}
