//! Module with the pattern flags and the compiled pattern type.
use bitflags::bitflags;
use log::trace;
use regex_automata::{meta, Anchored, Input};
use regex_syntax::ParserBuilder;
use serde::{Deserialize, Serialize};

use crate::{LexerError, LexerErrorKind, Result, Span};

bitflags! {
    /// Options that change how a pattern is interpreted.
    ///
    /// In serialized form the flags are written as names joined by `|`, e.g.
    /// `"CASE_INSENSITIVE | DOT_MATCHES_NEW_LINE"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PatternFlags: u8 {
        /// Letters match both upper and lower case.
        const CASE_INSENSITIVE = 0b0000_0001;
        /// `.` also matches `\n`.
        const DOT_MATCHES_NEW_LINE = 0b0000_0010;
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE = 0b0000_0100;
        /// Whitespace and `#` comments in the pattern are ignored.
        const IGNORE_WHITESPACE = 0b0000_1000;
        /// Greedy and lazy repetitions swap their meaning.
        const SWAP_GREED = 0b0001_0000;
    }
}

/// A pattern compiled from its textual form.
///
/// Matching is always anchored: a match has to start exactly at the offset it is attempted at.
/// The semantics are leftmost-first, i.e. alternatives are preferred in the order they are
/// written, not by length.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    flags: PatternFlags,
    regex: meta::Regex,
}

impl CompiledPattern {
    /// Compiles the given pattern with the given flags.
    ///
    /// Fails if the pattern is syntactically invalid.
    pub fn new(pattern: &str, flags: PatternFlags) -> Result<Self> {
        let hir = ParserBuilder::new()
            .case_insensitive(flags.contains(PatternFlags::CASE_INSENSITIVE))
            .dot_matches_new_line(flags.contains(PatternFlags::DOT_MATCHES_NEW_LINE))
            .multi_line(flags.contains(PatternFlags::MULTI_LINE))
            .ignore_whitespace(flags.contains(PatternFlags::IGNORE_WHITESPACE))
            .swap_greed(flags.contains(PatternFlags::SWAP_GREED))
            .build()
            .parse(pattern)
            .map_err(|e| {
                LexerError::new(LexerErrorKind::RegexSyntaxError(e, pattern.to_string()))
            })?;
        let regex = meta::Builder::new().build_from_hir(&hir)?;
        trace!("Compiled pattern '{}' with flags {:?}", pattern.escape_default(), flags);
        Ok(Self {
            pattern: pattern.to_string(),
            flags,
            regex,
        })
    }

    /// Get the pattern text.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the flags the pattern was compiled with.
    #[inline]
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Attempts a match that starts exactly at `offset`. The returned span may be empty.
    ///
    /// Assertions like `^` or `\b` see the whole haystack, so `^` does not match at a non-zero
    /// offset unless the pattern is compiled with [PatternFlags::MULTI_LINE] and the offset
    /// follows a line break.
    pub fn match_at(&self, haystack: &str, offset: usize) -> Option<Span> {
        if offset > haystack.len() {
            return None;
        }
        let input = Input::new(haystack).range(offset..).anchored(Anchored::Yes);
        self.regex
            .find(input)
            .map(|m| Span::new(m.start(), m.end()))
    }
}

impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern.escape_default())
    }
}
