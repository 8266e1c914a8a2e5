use thiserror::Error;

use crate::SourcePosition;

/// The result type for the `rulelex` crate.
pub type Result<T> = std::result::Result<T, LexerError>;

/// The error type for the `rulelex` crate.
#[derive(Error, Debug, Clone)]
pub struct LexerError {
    /// The source of the error.
    pub source: Box<LexerErrorKind>,
}

impl LexerError {
    /// Create a new `LexerError`.
    pub fn new(kind: LexerErrorKind) -> Self {
        LexerError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &LexerErrorKind {
        &self.source
    }

    /// Returns the position in the input at which scanning failed.
    /// Errors raised while building a scanner carry no position.
    pub fn position(&self) -> Option<SourcePosition> {
        match *self.source {
            LexerErrorKind::LexingError(position) => Some(position),
            LexerErrorKind::StateStackUnderflow { position, .. } => Some(position),
            _ => None,
        }
    }
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug, Clone)]
pub enum LexerErrorKind {
    /// An error occurred during the parsing of the regex syntax.
    #[error("'{1}' {0}")]
    RegexSyntaxError(regex_syntax::Error, String),

    /// The regex engine could not be built from a parsed pattern.
    #[error(transparent)]
    RegexBuildError(regex_automata::meta::BuildError),

    /// No ignore rule and no token rule matched at the given position.
    #[error("No rule matches at {0}")]
    LexingError(SourcePosition),

    /// A rule with the pop flag fired while the state stack was empty.
    #[error("Rule '{rule}' pops an empty state stack at {position}")]
    StateStackUnderflow {
        /// The name of the offending rule, empty for ignore rules.
        rule: String,
        /// The position at which the rule matched.
        position: SourcePosition,
    },
}

impl From<LexerErrorKind> for LexerError {
    fn from(kind: LexerErrorKind) -> Self {
        LexerError::new(kind)
    }
}

impl From<regex_automata::meta::BuildError> for LexerError {
    fn from(error: regex_automata::meta::BuildError) -> Self {
        LexerError::new(LexerErrorKind::RegexBuildError(error))
    }
}
