use crate::test_case::TestCase;
use std::fs;
use std::io;
use std::path::Path;

/// Marker that opens a new test case. Must appear at the very start of a
/// line; indented markers are treated as expected output.
pub const TEST_MARKER: &str = ">>>";

#[derive(Debug)]
pub enum ReadError {
    FailedToReadFile(io::Error),
}

pub fn read_test_file<P>(path: P) -> Result<Vec<TestCase>, ReadError>
where
    P: AsRef<Path>,
{
    let contents = fs::read_to_string(path).map_err(ReadError::FailedToReadFile)?;
    Ok(parse(&contents))
}

/// Parse test file contents into an ordered list of test cases.
///
/// Lines before the first marker are ignored. A marker line opens a new
/// test case whose command is the rest of the line, trimmed. Every other
/// line is appended verbatim, terminator included, to the expected output
/// of the most recently opened case.
pub fn parse(contents: &str) -> Vec<TestCase> {
    let mut test_cases: Vec<TestCase> = vec![];

    for line in contents.split_inclusive('\n') {
        if let Some(rest) = line.strip_prefix(TEST_MARKER) {
            test_cases.push(TestCase {
                command: rest.trim().to_owned(),
                expected_output: String::new(),
            });
        } else if let Some(current) = test_cases.last_mut() {
            current.expected_output.push_str(line);
        }
    }

    test_cases
}
