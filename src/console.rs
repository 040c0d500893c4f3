//! Interactive input for the `confirm` assertion.
//!
//! The console is an injected capability: the harness blocks on whatever
//! implementation it was built with. Automated runs supply [`Scripted`]
//! instead of the real [`Stdin`] so that `confirm` never blocks on an
//! operator.

use std::collections::VecDeque;
use std::io::{self, Read};

/// A source of operator keystrokes.
pub trait Console {
    /// Reads the next keystroke, or `None` when input is exhausted.
    fn read_key(&mut self) -> Option<u8>;
}

/// The real console, reading from standard input.
///
/// Blocks until a byte is available. On a line-buffered terminal the operator
/// types an answer followed by enter; the trailing newline is discarded by
/// the `confirm` loop like any other non-answer key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdin;

impl Console for Stdin {
    fn read_key(&mut self) -> Option<u8> {
        let mut byte = [0];
        match io::stdin().read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

/// A scripted console for automated runs.
///
/// Yields the given keystrokes in order, then reports exhaustion.
#[derive(Clone, Debug)]
pub struct Scripted {
    keys: VecDeque<u8>,
}

impl Scripted {
    /// Creates a console that will answer with the given keystrokes.
    pub fn new(keys: &[u8]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
        }
    }
}

impl Console for Scripted {
    fn read_key(&mut self) -> Option<u8> {
        self.keys.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::{Console, Scripted};
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn scripted_yields_keys_in_order() {
        let mut console = Scripted::new(b"yn");

        assert_some_eq!(console.read_key(), b'y');
        assert_some_eq!(console.read_key(), b'n');
    }

    #[test]
    fn scripted_exhausts() {
        let mut console = Scripted::new(b"y");

        console.read_key();

        assert_none!(console.read_key());
    }

    #[test]
    fn scripted_empty() {
        let mut console = Scripted::new(b"");

        assert_none!(console.read_key());
    }
}
