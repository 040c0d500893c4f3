//! Test registration: the [`TestCase`] trait, [`Test`] entries, and
//! [`Suite`]s.
//!
//! There is no discovery: a suite is an explicit, ordered registry of tests,
//! run in registration order. The optional setup/teardown pair is owned by
//! the suite value itself, so it can never leak into a later suite.

use crate::assert::Assert;
use crate::failure::Check;

/// Defines a test executable by the harness.
///
/// For most cases the stock [`Test`] entry is sufficient; implement this
/// trait directly when a test needs state of its own.
pub trait TestCase {
    /// The name of the test, used in the report.
    fn name(&self) -> &str;

    /// Whether the test is included in the run.
    ///
    /// A disabled test is skipped entirely: it runs no setup or teardown and
    /// contributes to no counter.
    fn enabled(&self) -> bool {
        true
    }

    /// The test body.
    ///
    /// A body is a sequence of assertions on the given handle, propagated
    /// with `?`; the first failure returns early and fails the test.
    fn run(&self, assert: &mut Assert<'_>) -> Check;
}

/// A standard test: a named body with an enabled flag.
pub struct Test {
    name: &'static str,
    body: fn(&mut Assert<'_>) -> Check,
    enabled: bool,
}

impl Test {
    /// Creates an enabled test.
    pub const fn new(name: &'static str, body: fn(&mut Assert<'_>) -> Check) -> Self {
        Self {
            name,
            body,
            enabled: true,
        }
    }

    /// Gates the test on a condition evaluated at registration time.
    pub const fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl TestCase for Test {
    fn name(&self) -> &str {
        self.name
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn run(&self, assert: &mut Assert<'_>) -> Check {
        (self.body)(assert)
    }
}

/// An ordered group of tests sharing one optional setup/teardown pair.
pub struct Suite {
    name: &'static str,
    pub(crate) setup: Option<fn()>,
    pub(crate) teardown: Option<fn()>,
    tests: Vec<Box<dyn TestCase>>,
}

impl Suite {
    /// Creates an empty suite.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            setup: None,
            teardown: None,
            tests: Vec::new(),
        }
    }

    /// Configures a function run immediately before each test body.
    ///
    /// Setup has no way to signal failure; a test's preconditions are assumed
    /// to hold if it returns.
    pub fn setup(mut self, setup: fn()) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Configures a function run immediately after each test body, even when
    /// the body failed.
    pub fn teardown(mut self, teardown: fn()) -> Self {
        self.teardown = Some(teardown);
        self
    }

    /// Registers a test at the end of the suite.
    pub fn test(self, name: &'static str, body: fn(&mut Assert<'_>) -> Check) -> Self {
        self.case(Test::new(name, body))
    }

    /// Registers a test that only runs when `enabled` is true.
    pub fn test_if(
        self,
        enabled: bool,
        name: &'static str,
        body: fn(&mut Assert<'_>) -> Check,
    ) -> Self {
        self.case(Test::new(name, body).enabled_if(enabled))
    }

    /// Registers any [`TestCase`] implementer.
    pub fn case(mut self, case: impl TestCase + 'static) -> Self {
        self.tests.push(Box::new(case));
        self
    }

    /// The name of the suite.
    pub fn name(&self) -> &str {
        self.name
    }

    pub(crate) fn tests(&self) -> &[Box<dyn TestCase>] {
        &self.tests
    }
}
