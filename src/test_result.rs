pub struct TestResult {
    pub stdout: OutputComparison,
}

impl TestResult {
    pub fn is_pass(&self) -> bool {
        self.stdout.is_match()
    }
}

pub enum OutputComparison {
    Match(String),
    Diff { expected: String, got: String },
}

impl OutputComparison {
    /// Compare expected against actual output using exact string equality.
    /// No trimming, no line-ending normalization.
    pub fn compare(expected: &str, got: String) -> OutputComparison {
        if expected == got {
            Self::Match(got)
        } else {
            Self::Diff {
                expected: expected.to_owned(),
                got,
            }
        }
    }

    pub fn is_match(&self) -> bool {
        match self {
            Self::Match(_) => true,
            Self::Diff {
                expected: _,
                got: _,
            } => false,
        }
    }
}
