//! A minimal, embeddable unit-testing harness.
//!
//! `miniunit` is for environments where a full test framework is unavailable
//! or undesirable: no discovery, no reflection, no parallelism. Tests are
//! plain functions registered explicitly on a [`Suite`], run sequentially
//! with an optional per-test setup/teardown pair, and tallied into a final
//! one-line report.
//!
//! A test body receives an [`Assert`] handle and returns a [`Check`]; the
//! first failing assertion returns early via `?` and fails that test only.
//!
//! ```
//! use miniunit::{check, Assert, Check, Harness, Suite};
//!
//! fn test_arithmetic(t: &mut Assert<'_>) -> Check {
//!     check!(t, 2 + 2 == 4)?;
//!     t.int_eq(4, 2 + 2)
//! }
//!
//! let mut harness = Harness::new();
//! harness.run(&Suite::new("arithmetic").test("test_arithmetic", test_arithmetic));
//! harness.report();
//! assert!(!harness.failed());
//! ```
//!
//! Output is written to standard output by default, and interactive
//! [`confirm`](Assert::confirm) assertions read from standard input; both are
//! injectable through [`Harness::with_io`], so automated runs can capture the
//! report and script the operator's answers.

mod assert;
mod console;
mod failure;
mod log;
mod outcome;
mod runner;
mod suite;

pub use assert::{Assert, DOUBLE_EPSILON, FLOAT_EPSILON};
pub use console::{Console, Scripted, Stdin};
pub use failure::{Check, Failure};
pub use runner::{Harness, RunContext, Verbosity};
pub use suite::{Suite, Test, TestCase};
