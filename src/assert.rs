//! The assertion primitives available inside a test body.
//!
//! This module provides the [`Assert`] handle passed to every test body. Each
//! primitive increments the assertion counter exactly once and, on failure,
//! returns an `Err` carrying the call site, which the body propagates with
//! `?`. `testsFailed`-style bookkeeping happens once per failing *test* in
//! the runner, never here.

use crate::console::Console;
use crate::failure::{Check, Failure};
use crate::runner::{RunContext, Verbosity};
use std::io::Write;

/// Default tolerance used by [`Assert::float_eq`].
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Default tolerance used by [`Assert::double_eq`].
pub const DOUBLE_EPSILON: f64 = 1e-12;

/// Checks a boolean condition, recording the literal source text on failure.
///
/// This is the spelled-out-expression form of [`Assert::check`]:
/// `check!(t, foo == 7)` fails with the text `foo == 7`.
#[macro_export]
macro_rules! check {
    ($assert:expr, $condition:expr $(,)?) => {
        $assert.check($condition, ::core::stringify!($condition))
    };
}

/// The per-test assertion handle.
///
/// Borrowed from the harness for the duration of one test body. Holds the
/// assertion counter, the output stream (for per-assertion trace lines), and
/// the console used by [`confirm`](Assert::confirm).
pub struct Assert<'a> {
    name: &'a str,
    context: &'a mut RunContext,
    out: &'a mut dyn Write,
    console: &'a mut dyn Console,
    verbosity: Verbosity,
}

impl<'a> Assert<'a> {
    pub(crate) fn new(
        name: &'a str,
        context: &'a mut RunContext,
        out: &'a mut dyn Write,
        console: &'a mut dyn Console,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            name,
            context,
            out,
            console,
            verbosity,
        }
    }

    /// Counts the assertion, emits the chatty trace line on success, and
    /// renders the failure detail on failure.
    #[track_caller]
    fn evaluate(&mut self, passed: bool, detail: impl FnOnce() -> String) -> Check {
        self.context.assertions_evaluated += 1;
        if passed {
            if self.verbosity == Verbosity::Chatty {
                let _ = writeln!(self.out, ". {}", self.name);
            }
            Ok(())
        } else {
            Err(Failure::new(detail()))
        }
    }

    /// Checks that `condition` holds, reporting `expression` on failure.
    ///
    /// Usually invoked through the [`check!`] macro, which stringifies the
    /// condition for you.
    #[track_caller]
    pub fn check(&mut self, condition: bool, expression: &str) -> Check {
        self.evaluate(condition, || expression.to_owned())
    }

    /// Checks that `condition` holds, reporting `message` on failure.
    #[track_caller]
    pub fn assert(&mut self, condition: bool, message: &str) -> Check {
        self.evaluate(condition, || message.to_owned())
    }

    /// Fails unconditionally with `message`.
    #[track_caller]
    pub fn fail(&mut self, message: &str) -> Check {
        self.evaluate(false, || message.to_owned())
    }

    /// Checks integer equality.
    #[track_caller]
    pub fn int_eq(&mut self, expected: i32, actual: i32) -> Check {
        self.evaluate(expected == actual, || {
            format!("{expected} expected but was {actual}")
        })
    }

    /// Checks wide-integer equality.
    #[track_caller]
    pub fn long_eq(&mut self, expected: i64, actual: i64) -> Check {
        self.evaluate(expected == actual, || {
            format!("{expected} expected but was {actual}")
        })
    }

    /// Checks that `actual` is within `epsilon` of `expected` at single
    /// precision.
    ///
    /// The comparison is strict: a difference exactly equal to `epsilon` is a
    /// failure.
    #[track_caller]
    pub fn float_close(&mut self, expected: f32, actual: f32, epsilon: f32) -> Check {
        let difference = (expected - actual).abs();
        self.evaluate(difference < epsilon, || {
            format!("{expected} expected but was {actual} (difference {difference} is not within {epsilon})")
        })
    }

    /// Checks that `actual` is within `epsilon` of `expected` at double
    /// precision.
    ///
    /// The comparison is strict, as in [`float_close`](Assert::float_close).
    #[track_caller]
    pub fn double_close(&mut self, expected: f64, actual: f64, epsilon: f64) -> Check {
        let difference = (expected - actual).abs();
        self.evaluate(difference < epsilon, || {
            format!("{expected} expected but was {actual} (difference {difference} is not within {epsilon})")
        })
    }

    /// [`float_close`](Assert::float_close) with the default
    /// [`FLOAT_EPSILON`] tolerance.
    #[track_caller]
    pub fn float_eq(&mut self, expected: f32, actual: f32) -> Check {
        self.evaluate((expected - actual).abs() < FLOAT_EPSILON, || {
            format!("{expected} expected but was {actual}")
        })
    }

    /// [`double_close`](Assert::double_close) with the default
    /// [`DOUBLE_EPSILON`] tolerance.
    #[track_caller]
    pub fn double_eq(&mut self, expected: f64, actual: f64) -> Check {
        self.evaluate((expected - actual).abs() < DOUBLE_EPSILON, || {
            format!("{expected} expected but was {actual}")
        })
    }

    /// Checks that the bit at `bit` of `register` (0 = least significant)
    /// equals `expected` (0 or 1).
    #[track_caller]
    pub fn bit_eq(&mut self, expected: u32, register: u32, bit: u32) -> Check {
        let expected = expected & 1;
        let actual = (register >> bit) & 1;
        self.evaluate(expected == actual, || {
            format!("{expected} expected but was {actual}")
        })
    }

    /// Asks the operator to confirm, passing iff the answer is `y`.
    ///
    /// Prints the prompt, then reads keystrokes from the console until one is
    /// `y` or `n`, discarding everything in between. Exactly one accepted
    /// keystroke is consumed per invocation. Exhausted input counts as a
    /// decline.
    #[track_caller]
    pub fn confirm(&mut self, prompt: &str) -> Check {
        let _ = write!(self.out, "{prompt} y for yes, any key for no: ");
        let _ = self.out.flush();
        let confirmed = loop {
            match self.console.read_key() {
                Some(b'y') => break true,
                Some(b'n') | None => break false,
                Some(_) => {}
            }
        };
        self.evaluate(confirmed, || format!("declined: {prompt}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{Assert, DOUBLE_EPSILON, FLOAT_EPSILON};
    use crate::console::Scripted;
    use crate::runner::{RunContext, Verbosity};
    use claims::{assert_err, assert_ok};

    fn with_assert<R>(
        keys: &[u8],
        verbosity: Verbosity,
        f: impl FnOnce(&mut Assert<'_>) -> R,
    ) -> (R, RunContext, String) {
        let mut context = RunContext::default();
        let mut out = Vec::new();
        let mut console = Scripted::new(keys);
        let result = {
            let mut assert = Assert::new(
                "example",
                &mut context,
                &mut out,
                &mut console,
                verbosity,
            );
            f(&mut assert)
        };
        (result, context, String::from_utf8(out).unwrap())
    }

    #[test]
    fn check_pass() {
        let (result, context, out) = with_assert(b"", Verbosity::Chatty, |t| {
            t.check(1 + 1 == 2, "1 + 1 == 2")
        });

        assert_ok!(result);
        assert_eq!(context.assertions_evaluated(), 1);
        assert_eq!(out, ". example\n");
    }

    #[test]
    fn check_pass_quiet_emits_nothing() {
        let (result, _, out) = with_assert(b"", Verbosity::Quiet, |t| {
            t.check(true, "true")
        });

        assert_ok!(result);
        assert_eq!(out, "");
    }

    #[test]
    fn check_fail_records_expression() {
        let (result, context, out) = with_assert(b"", Verbosity::Chatty, |t| {
            t.check(false, "foo != 7")
        });

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "foo != 7");
        assert_eq!(failure.file(), file!());
        assert_eq!(context.assertions_evaluated(), 1);
        assert_eq!(out, "");
    }

    #[test]
    fn check_macro_stringifies() {
        let foo = 7;
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| check!(t, foo != 7));

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "foo != 7");
    }

    #[test]
    fn assert_fail_records_message() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.assert(false, "foo should be 7")
        });

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "foo should be 7");
    }

    #[test]
    fn fail_always_fails() {
        let (result, context, _) =
            with_assert(b"", Verbosity::Chatty, |t| t.fail("Fail now!"));

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "Fail now!");
        assert_eq!(context.assertions_evaluated(), 1);
    }

    #[test]
    fn int_eq_pass() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| t.int_eq(4, 4));

        assert_ok!(result);
    }

    #[test]
    fn int_eq_fail() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| t.int_eq(5, 4));

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "5 expected but was 4");
    }

    #[test]
    fn long_eq_fail() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.long_eq(5_000_000_000, 4_000_000_000)
        });

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "5000000000 expected but was 4000000000");
    }

    #[test]
    fn float_close_pass() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.float_close(4.30, 4.3003, 0.1)
        });

        assert_ok!(result);
    }

    #[test]
    fn double_close_fail() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.double_close(4.32, 4.3003, 0.01)
        });

        assert_err!(result);
    }

    #[test]
    fn double_close_boundary_fails() {
        // A difference exactly equal to epsilon is a failure.
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.double_close(1.5, 1.0, 0.5)
        });

        assert_err!(result);
    }

    #[test]
    fn float_eq_default_epsilon() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.float_eq(4.3, 4.3 + FLOAT_EPSILON / 2.0)
        });

        assert_ok!(result);
    }

    #[test]
    fn double_eq_fail() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.double_eq(5.0, 5.3)
        });

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "5 expected but was 5.3");
    }

    #[test]
    fn double_eq_within_default_epsilon() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.double_eq(4.3, 4.3 + DOUBLE_EPSILON / 2.0)
        });

        assert_ok!(result);
    }

    #[test]
    fn bit_eq_pass() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.bit_eq(1, 0b0100, 2)
        });

        assert_ok!(result);
    }

    #[test]
    fn bit_eq_fail() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.bit_eq(1, 0b0100, 3)
        });

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "1 expected but was 0");
    }

    #[test]
    fn confirm_accepts_y() {
        let (result, context, out) = with_assert(b"y", Verbosity::Chatty, |t| {
            t.confirm("Everything ok?")
        });

        assert_ok!(result);
        assert_eq!(context.assertions_evaluated(), 1);
        assert_eq!(
            out,
            "Everything ok? y for yes, any key for no: . example\n"
        );
    }

    #[test]
    fn confirm_declines_n() {
        let (result, _, _) = with_assert(b"n", Verbosity::Chatty, |t| {
            t.confirm("Everything ok?")
        });

        let failure = assert_err!(result);
        assert_eq!(failure.detail(), "declined: Everything ok?");
    }

    #[test]
    fn confirm_discards_intervening_input() {
        let (result, _, _) = with_assert(b"zx\ny", Verbosity::Chatty, |t| {
            t.confirm("Everything ok?")
        });

        assert_ok!(result);
    }

    #[test]
    fn confirm_consumes_one_answer_per_invocation() {
        let (results, _, _) = with_assert(b"yn", Verbosity::Chatty, |t| {
            (t.confirm("first?"), t.confirm("second?"))
        });

        assert_ok!(results.0);
        assert_err!(results.1);
    }

    #[test]
    fn confirm_exhausted_input_declines() {
        let (result, _, _) = with_assert(b"", Verbosity::Chatty, |t| {
            t.confirm("Everything ok?")
        });

        assert_err!(result);
    }
}
