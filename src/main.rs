use std::process::ExitCode;
use tinytest::test_file::{self, ReadError};
use tinytest::test_runner;

mod cli;

/// Reserved for "the test file could not be read".
const READ_ERROR_EXIT_CODE: u8 = 255;

/// Largest failure count representable in the exit code; 255 is reserved.
const MAX_FAILURE_EXIT_CODE: u8 = 254;

fn main() -> ExitCode {
    let args = cli::parse();

    let test_cases = match test_file::read_test_file(&args.testfile) {
        Ok(test_cases) => test_cases,
        Err(ReadError::FailedToReadFile(err)) => {
            eprintln!(
                "*** an error occurred reading \"{}\": {} ***",
                args.testfile.display(),
                err
            );
            return ExitCode::from(READ_ERROR_EXIT_CODE);
        }
    };

    let summary = test_runner::run_test_cases(&test_cases, false);

    ExitCode::from(failure_exit_code(summary.failed))
}

fn failure_exit_code(failed: usize) -> u8 {
    failed.min(MAX_FAILURE_EXIT_CODE as usize) as u8
}
