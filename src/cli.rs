use clap::Parser;
use std::path::PathBuf;

pub fn parse() -> Args {
    Args::parse()
}

/// Minimal shell-command test runner
#[derive(Parser)]
#[clap(bin_name = "tinytest")]
pub struct Args {
    /// Path to the test file
    #[arg(default_value = "Testfile")]
    pub testfile: PathBuf,
}
