//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print one result: the bare answer in quiet mode, otherwise the full line
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {e}"),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Compare `result` with the answer given by `--expect`; true on a match
    pub fn check_expected(&self, expected: &str, result: &SolverResult) -> bool {
        match &result.answer {
            Ok(answer) if answer == expected => {
                if !self.quiet {
                    println!("{}: matches expected answer", prefix(result));
                }
                true
            }
            Ok(answer) => {
                eprintln!(
                    "{}: MISMATCH expected {expected}, got {answer}",
                    prefix(result)
                );
                false
            }
            Err(_) => false,
        }
    }

    /// Solved/failed counts plus total parse, solve and wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let elapsed = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);

        println!();
        println!("--- Summary ---");
        println!("Parts: {successes} solved, {failures} failed");
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed));
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `2023/05 Part 1: 35 (parse: 120µs, solve: 40µs)` or `2023/05 Part 1: Error - ...`
pub fn format_result(result: &SolverResult) -> String {
    match &result.answer {
        Ok(answer) => {
            let parse = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {answer} ({parse}solve: {})",
                prefix(result),
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {e}", prefix(result)),
    }
}

/// Microseconds below a millisecond, then ms and s with two decimals
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    match micros {
        m if m < 0 => format!("-{}", format_duration(-d)),
        m if m < 1_000 => format!("{m}µs"),
        m if m < 1_000_000 => format!("{:.2}ms", m as f64 / 1e3),
        m => format!("{:.2}s", m as f64 / 1e6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn solved(answer: &str) -> SolverResult {
        SolverResult {
            year: 2023,
            day: 5,
            part: 1,
            answer: Ok(answer.to_string()),
            parse_duration: Some(TimeDelta::microseconds(120)),
            solve_duration: TimeDelta::microseconds(40),
        }
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
        assert_eq!(format_duration(TimeDelta::MAX), "N/A");
    }

    #[test]
    fn result_lines() {
        assert_eq!(
            format_result(&solved("35")),
            "2023/05 Part 1: 35 (parse: 120µs, solve: 40µs)"
        );

        let mut second = solved("46");
        second.part = 2;
        second.parse_duration = None;
        assert_eq!(format_result(&second), "2023/05 Part 2: 46 (solve: 40µs)");

        let missing = SolverResult {
            answer: Err(Arc::new(ExecutorError::MissingInput(PathBuf::from("input/Day5.txt")))),
            ..solved("")
        };
        assert_eq!(
            format_result(&missing),
            "2023/05 Part 1: Error - No input file at input/Day5.txt"
        );
    }

    #[test]
    fn expectation() {
        let formatter = OutputFormatter::new(true);
        assert!(formatter.check_expected("35", &solved("35")));
        assert!(!formatter.check_expected("35", &solved("46")));
    }
}
