use crate::failure::Failure;

/// The outcome of a test.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// The test passed.
    Passed,
    /// The test failed, recording the first failing assertion.
    Failed(Failure),
    /// The test was excluded from the run.
    Skipped,
}

impl Outcome {
    #[cfg(any(test, feature = "log"))]
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Passed => "ok",
            Self::Failed(_) => "FAILED",
            Self::Skipped => "skipped",
        }
    }
}
