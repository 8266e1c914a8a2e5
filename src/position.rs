//! Module with the source position type.
//! A source position is a byte offset together with a line and column number.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in the input.
/// The offset is a byte offset, the line and column numbers are 1-based.
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    /// The byte offset of the position.
    pub offset: usize,
    /// The line number of the position.
    pub line: usize,
    /// The column number of the position.
    pub column: usize,
}

impl SourcePosition {
    /// Create a new position.
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(column > 0, "column number must be greater than 0");
        Self {
            offset,
            line,
            column,
        }
    }

    /// Get the byte offset of the position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset {}, line {}, column {}",
            self.offset, self.line, self.column
        )
    }
}
