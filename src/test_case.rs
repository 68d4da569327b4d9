use crate::test_result::{OutputComparison, TestResult};
use std::io::{self, Read};
use std::process::{Command, Stdio};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub command: String,
    pub expected_output: String,
}

#[derive(Debug)]
pub enum RunError {
    FailedToDecodeUtf8,
    IOError(io::Error),
}

/// Run a single test case.
///
/// The command line is handed to the host shell as-is, so pipes,
/// redirection and globbing work the same as in an interactive session.
/// Only standard output is captured; standard error is suppressed and the
/// exit status of the command is ignored. Pass/fail is decided solely by
/// comparing the decoded standard output to `expected_output`.
pub fn run(test_case: &TestCase) -> Result<TestResult, RunError> {
    let mut cmd = shell_command(&test_case.command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::null());

    let mut child = cmd.spawn().map_err(RunError::IOError)?;

    let stdout = read_pipe_to_string(
        &mut child
            .stdout
            .take()
            .expect("Stdout should be configured to pipe"),
    );

    // Reap the child before surfacing any capture error, so a failed
    // decode never leaks a process.
    child.wait().map_err(RunError::IOError)?;
    let stdout = stdout?;

    Ok(TestResult {
        stdout: OutputComparison::compare(&test_case.expected_output, stdout),
    })
}

fn shell_command(command_line: &str) -> Command {
    let (shell, flag) = if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };

    let mut cmd = Command::new(shell);
    cmd.arg(flag);
    cmd.arg(command_line);
    cmd
}

fn read_pipe_to_string<T>(pipe: &mut T) -> Result<String, RunError>
where
    T: Read,
{
    let mut buf: Vec<u8> = vec![];
    pipe.read_to_end(&mut buf).map_err(RunError::IOError)?;
    String::from_utf8(buf).map_or(Err(RunError::FailedToDecodeUtf8), Ok)
}
