use crate::formats::diff;
use crate::test_case::{self, RunError, TestCase};
use crate::test_result::{OutputComparison, TestResult};
use colored::Colorize;

pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

pub struct RunResult {
    pub test_case: TestCase,
    pub result: Result<TestResult, RunError>,
}

impl RunResult {
    pub fn is_pass(&self) -> bool {
        match &self.result {
            Ok(test_result) => test_result.is_pass(),
            Err(_) => false,
        }
    }
}

// RUN TEST CASES

/// Run every test case in order and return the pass/fail counts.
///
/// Cases run sequentially and the run never stops early; a case that fails
/// to execute counts as a failure like any other. Unless `silent` is set,
/// each failure is reported as it happens and a one-line summary is
/// printed at the end.
pub fn run_test_cases(test_cases: &[TestCase], silent: bool) -> RunSummary {
    let run = |test_case: &TestCase| -> Vec<RunResult> {
        let result = test_case::run(test_case);

        if !silent {
            report_test_case(test_case, &result);
        }

        vec![RunResult {
            test_case: test_case.clone(),
            result,
        }]
    };

    let run_results = test_cases
        .iter()
        .map(run)
        .fold(vec![], |x, y| itertools::concat([x, y]));

    let summary = summarize(&run_results);

    if !silent {
        report_summary(&summary);
    }

    summary
}

fn summarize(run_results: &[RunResult]) -> RunSummary {
    let passed = run_results.iter().filter(|r| r.is_pass()).count();

    RunSummary {
        total: run_results.len(),
        passed,
        failed: run_results.len() - passed,
    }
}

// REPORTING

fn report_test_case(test_case: &TestCase, result: &Result<TestResult, RunError>) {
    match result {
        Ok(test_result) => {
            if let OutputComparison::Diff { expected, got } = &test_result.stdout {
                print_failure_header(&test_case.command, "failed. See diff below:");
                print_diff(&diff::render_line_diff(expected, got));
                println!();
            }
        }
        Err(run_error) => {
            let reason = match run_error {
                RunError::FailedToDecodeUtf8 => "produced output that is not valid UTF-8.",
                RunError::IOError(_) => "could not be run.",
            };
            print_failure_header(&test_case.command, reason);
            println!();
        }
    }
}

fn report_summary(summary: &RunSummary) {
    println!("Passed {}/{} tests", summary.passed, summary.total);
}

fn print_failure_header(command: &str, reason: &str) {
    println!("*** \"{}\" {} ***", command.red(), reason);
}

fn print_diff(rendered: &str) {
    for line in rendered.lines() {
        match line.as_bytes().first() {
            Some(b'-') => println!("{}", line.red()),
            Some(b'+') => println!("{}", line.green()),
            _ => println!("{}", line),
        }
    }
}
