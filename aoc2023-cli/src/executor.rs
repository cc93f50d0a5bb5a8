//! Runs the selected days and parts

use crate::config::Config;
use crate::error::ExecutorError;
use crate::input::InputStore;
use aoc_solver::SolverRegistry;
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tracing::{debug, info_span};

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Day-level failures (missing input, parse error) are shared by every part
    pub answer: Result<String, Arc<ExecutorError>>,
    /// Set on the first part reported for a day, which paid for parsing
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: Arc<ExecutorError>) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// One registered day and the parts to run for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Sequential executor over the registry
pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    variant: Option<String>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            store: InputStore::new(config.input_dir.clone()),
            variant: config.variant.clone(),
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Input files the given work items would read but cannot find
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<PathBuf> {
        let variant = self.variant.as_deref();
        work_items
            .iter()
            .filter(|w| !self.store.contains(w.day, variant))
            .map(|w| self.store.path(w.day, variant))
            .collect()
    }

    /// Parts to run given the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item in order, sending one result per part.
    ///
    /// Failures are reported as results; only a closed channel stops the run.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ExecutorError> {
        for work in self.collect_work_items() {
            let _span = info_span!("day", day = work.day).entered();
            for result in self.run_day(&work) {
                tx.send(result).map_err(|_| ExecutorError::ChannelSend)?;
            }
        }
        Ok(())
    }

    /// Read, parse once, then solve each requested part.
    fn run_day(&self, work: &WorkItem) -> Vec<SolverResult> {
        let (year, day) = (work.year, work.day);
        let fail_all = |error: ExecutorError| -> Vec<SolverResult> {
            let error = Arc::new(error);
            work.parts
                .clone()
                .map(|part| SolverResult::failed(year, day, part, Arc::clone(&error)))
                .collect()
        };

        let variant = self.variant.as_deref();
        let input = match self.store.read(day, variant) {
            Ok(Some(input)) => input,
            Ok(None) => {
                return fail_all(ExecutorError::MissingInput(self.store.path(day, variant)));
            }
            Err(e) => return fail_all(e.into()),
        };

        let mut solver = match self.registry.create_solver(day, &input) {
            Ok(solver) => solver,
            Err(e) => return fail_all(e.into()),
        };
        debug!(parse = %solver.parse_duration(), "parsed");

        let mut parse_duration = Some(solver.parse_duration());
        work.parts
            .clone()
            .map(|part| match solver.solve(part) {
                Ok(result) => SolverResult {
                    year,
                    day,
                    part,
                    solve_duration: result.duration(),
                    answer: Ok(result.answer),
                    parse_duration: parse_duration.take(),
                },
                Err(e) => {
                    let error = ExecutorError::Solver(e.into());
                    SolverResult::failed(year, day, part, Arc::new(error))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn config(dir: &Path, day: Option<u8>, part: Option<u8>) -> Config {
        Config {
            day_filter: day,
            part_filter: part,
            input_dir: dir.to_path_buf(),
            sample: false,
            variant: None,
            expect: None,
            verbosity: 0,
            quiet: true,
        }
    }

    fn error(result: &SolverResult) -> Option<&ExecutorError> {
        result.answer.as_ref().err().map(|e| e.as_ref())
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = mpsc::channel();
        executor.execute(tx).unwrap();
        rx.into_iter().collect()
    }

    #[test]
    fn work_items_follow_filters() {
        let temp = TempDir::new().unwrap();
        let registry = aoc2023::registry().unwrap();

        let all = Executor::new(registry, &config(temp.path(), None, None));
        let items = all.collect_work_items();
        assert_eq!(items.len(), 25);
        assert_eq!(items[24].parts, 1..=1);

        let registry = aoc2023::registry().unwrap();
        let only_part_two = Executor::new(registry, &config(temp.path(), None, Some(2)));
        let items = only_part_two.collect_work_items();
        assert_eq!(items.len(), 24);
        assert!(items.iter().all(|w| w.parts == (2..=2)));
    }

    #[test]
    fn solves_each_part_once_parsed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Day9.txt"), "0 3 6 9 12 15\n1 3 6 10 15 21\n").unwrap();
        let registry = aoc2023::registry().unwrap();
        let executor = Executor::new(registry, &config(temp.path(), Some(9), None));

        let results = run(&executor);
        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.day, r.part, r.answer.as_deref().ok()))
            .collect();
        assert_eq!(answers, vec![(9, 1, Some("46")), (9, 2, Some("-3"))]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn sample_run_uses_example_parameters() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Day24.txt"),
            "19, 13, 30 @ -2,  1, -2\n\
             18, 19, 22 @ -1, -1, -2\n\
             20, 25, 34 @ -2, -2, -4\n\
             12, 31, 28 @ -1, -2, -1\n\
             20, 19, 15 @  1, -5, -3\n",
        )
        .unwrap();
        let mut cfg = config(temp.path(), Some(24), Some(1));
        cfg.sample = true;
        let executor = Executor::new(cfg.registry().unwrap(), &cfg);

        let results = run(&executor);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].answer.as_deref().ok(), Some("2"));
    }

    #[test]
    fn missing_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let registry = aoc2023::registry().unwrap();
        let executor = Executor::new(registry, &config(temp.path(), Some(3), None));

        let items = executor.collect_work_items();
        assert_eq!(executor.missing_inputs(&items), vec![temp.path().join("Day3.txt")]);

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(
            error(r),
            Some(ExecutorError::MissingInput(path)) if path.ends_with("Day3.txt")
        )));
    }

    #[test]
    fn parse_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Day9.txt"), "1 2 x\n").unwrap();
        let registry = aoc2023::registry().unwrap();
        let executor = Executor::new(registry, &config(temp.path(), Some(9), Some(1)));

        let results = run(&executor);
        assert!(matches!(
            error(&results[0]),
            Some(ExecutorError::Solver(aoc_solver::SolverError::ParseError(_)))
        ));
    }
}
