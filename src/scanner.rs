use std::fmt::Debug;

use log::debug;

use crate::{Rule, ScanSession};

/// A scanner built from an ordered list of token rules and an ordered list of ignore rules.
///
/// The scanner is immutable and can be used to scan any number of inputs, also from several
/// threads at once. Each call to [Scanner::lex] creates an independent [ScanSession] that holds
/// the mutable scanning state.
///
/// Rules can be restricted to lexer states. The states form a stack that is owned by the scan
/// session, the top of the stack is the current state. This is the same concept as Flex's
/// *Start conditions*, combined with a stack like Flex's `yy_push_state`.
/// See <https://www.cs.princeton.edu/~appel/modern/c/software/flex/flex.html#SEC11>
/// for more information.
///
/// To create a scanner, use the [crate::ScannerBuilder].
#[derive(Debug, Clone)]
pub struct Scanner<S = String> {
    rules: Vec<Rule<S>>,
    ignore_rules: Vec<Rule<S>>,
}

impl<S> Scanner<S>
where
    S: Clone + PartialEq + Debug,
{
    pub(crate) fn new(rules: Vec<Rule<S>>, ignore_rules: Vec<Rule<S>>) -> Self {
        Self {
            rules,
            ignore_rules,
        }
    }

    /// The token rules in the order they are tried.
    #[inline]
    pub fn rules(&self) -> &[Rule<S>] {
        &self.rules
    }

    /// The ignore rules in the order they are tried.
    #[inline]
    pub fn ignore_rules(&self) -> &[Rule<S>] {
        &self.ignore_rules
    }

    /// Creates a scan session over the given input.
    /// The session starts at offset 0, line 1, column 1 with an empty state stack.
    pub fn lex<'a>(&'a self, input: &'a str) -> ScanSession<'a, S> {
        debug!("Starting scan session over {} bytes", input.len());
        ScanSession::new(self, input)
    }
}
