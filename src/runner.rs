//! The test runner, suite runner, and reporter.
//!
//! A [`Harness`] owns the run state for one test program: the aggregate
//! counters, the output stream the textual protocol is written to, and the
//! console used for interactive confirmation. Multiple independent harnesses
//! may coexist; nothing here is process-global.

use crate::assert::Assert;
use crate::console::{Console, Stdin};
use crate::log;
use crate::outcome::Outcome;
use crate::suite::{Suite, TestCase};
use std::io::{self, Write};

/// Output verbosity for the textual protocol.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Verbosity {
    /// Emit `. <testName>` for every passing assertion.
    #[default]
    Chatty,
    /// Emit a single `OK` per passing test instead.
    Quiet,
}

/// Aggregate counters for one test run.
///
/// All counters increase monotonically; `tests_failed() <= tests_run()`
/// always holds. The per-test failed flag of the original design does not
/// exist here: that state travels in each body's [`Check`](crate::Check)
/// return value, so it cannot leak between tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunContext {
    pub(crate) tests_run: usize,
    pub(crate) assertions_evaluated: usize,
    pub(crate) tests_failed: usize,
}

impl RunContext {
    /// Total tests run. Skipped tests are not counted.
    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    /// Total assertions evaluated, including each test's failing one.
    pub fn assertions_evaluated(&self) -> usize {
        self.assertions_evaluated
    }

    /// Total tests that failed.
    pub fn tests_failed(&self) -> usize {
        self.tests_failed
    }
}

/// Runs suites sequentially and reports the final tallies.
///
/// The defaults write the protocol to standard output and confirm on
/// standard input; [`with_io`](Harness::with_io) injects replacements for
/// automated runs.
pub struct Harness<W = io::Stdout, C = Stdin> {
    context: RunContext,
    out: W,
    console: C,
    verbosity: Verbosity,
}

impl Harness {
    /// Creates a harness on the real standard streams.
    pub fn new() -> Self {
        Self::with_io(io::stdout(), Stdin)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, C> Harness<W, C>
where
    W: Write,
    C: Console,
{
    /// Creates a harness with an injected output stream and console.
    pub fn with_io(out: W, console: C) -> Self {
        Self {
            context: RunContext::default(),
            out,
            console,
            verbosity: Verbosity::default(),
        }
    }

    /// Sets the output verbosity.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Runs every test in the suite, in registration order.
    pub fn run(&mut self, suite: &Suite) {
        let _ = writeln!(self.out, "Suite: {}", suite.name());
        log::info!("running suite: {}", suite.name());
        for test in suite.tests() {
            self.run_test(test.as_ref(), suite.setup, suite.teardown);
        }
    }

    /// Runs one test: setup, body, bookkeeping, teardown.
    ///
    /// A failing assertion is recovered here, at the test boundary. Teardown
    /// runs even when the body short-circuited on a failure.
    fn run_test(&mut self, test: &dyn TestCase, setup: Option<fn()>, teardown: Option<fn()>) {
        let outcome = self.execute(test, setup);
        log::info!("test {}: {}", test.name(), outcome.as_str());
        match outcome {
            Outcome::Skipped => return,
            Outcome::Passed => {
                self.context.tests_run += 1;
                if self.verbosity == Verbosity::Quiet {
                    let _ = writeln!(self.out, "OK");
                }
            }
            Outcome::Failed(failure) => {
                self.context.tests_run += 1;
                self.context.tests_failed += 1;
                let _ = writeln!(self.out, "F {}\n    {}", test.name(), failure);
            }
        }
        let _ = self.out.flush();
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    fn execute(&mut self, test: &dyn TestCase, setup: Option<fn()>) -> Outcome {
        if !test.enabled() {
            return Outcome::Skipped;
        }

        if let Some(setup) = setup {
            setup();
        }
        let _ = writeln!(self.out, "Test: {}", test.name());

        let mut assert = Assert::new(
            test.name(),
            &mut self.context,
            &mut self.out,
            &mut self.console,
            self.verbosity,
        );
        match test.run(&mut assert) {
            Ok(()) => Outcome::Passed,
            Err(failure) => Outcome::Failed(failure),
        }
    }

    /// Prints the final tallies from the accumulated counters.
    pub fn report(&mut self) {
        let _ = writeln!(
            self.out,
            "\nTotal: {} tests, {} assertions, {} failures",
            self.context.tests_run, self.context.assertions_evaluated, self.context.tests_failed
        );
        let _ = self.out.flush();
        log::info!(
            "totals: {} tests, {} assertions, {} failures",
            self.context.tests_run,
            self.context.assertions_evaluated,
            self.context.tests_failed
        );
    }

    /// The accumulated counters.
    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Whether any test has failed so far.
    pub fn failed(&self) -> bool {
        self.context.tests_failed > 0
    }

    /// A process exit code for CI-friendly callers: nonzero iff a test
    /// failed.
    ///
    /// The harness never exits the process itself. Note that using this
    /// deviates from the classic behavior of always exiting zero.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.failed())
    }

    /// Consumes the harness, returning the output stream.
    pub fn into_writer(self) -> W {
        self.out
    }
}
