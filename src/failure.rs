//! The failure record produced by a failing assertion.

use core::fmt;
use core::panic::Location;

/// The result of evaluating a single assertion.
///
/// Test bodies propagate this with `?`, so the first failing assertion
/// returns early from the body. The failure is recovered by the test runner;
/// it never escapes the enclosing test.
pub type Check = Result<(), Failure>;

/// A single recorded assertion failure.
///
/// Carries the call site of the failing assertion and the rendered detail:
/// the failing expression, the caller's label, or an expected/actual pair.
/// At most one of these exists per test, because the first failure terminates
/// the test body.
#[derive(Debug)]
pub struct Failure {
    file: &'static str,
    line: u32,
    detail: String,
}

impl Failure {
    /// Creates a failure attributed to the caller's location.
    ///
    /// Every assertion primitive is `#[track_caller]`, so the recorded
    /// location is the call site inside the test body.
    #[track_caller]
    pub(crate) fn new(detail: String) -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            detail,
        }
    }

    /// The file containing the failing assertion.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The line of the failing assertion.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The rendered failure detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.detail)
    }
}
