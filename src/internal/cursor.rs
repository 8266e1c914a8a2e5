use log::trace;

use crate::{SourcePosition, Span};

/// The read position of a scan session.
///
/// `line` and `column` always describe the character at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn position(&self) -> SourcePosition {
        SourcePosition::new(self.offset, self.line, self.column)
    }

    /// Moves the cursor to the end of the consumed span.
    ///
    /// If the span contains line breaks the column is counted from the last line break in the
    /// span up to its end. Otherwise the column advances from the span start by the number of
    /// consumed characters.
    pub(crate) fn advance(&mut self, input: &str, span: Span) {
        debug_assert_eq!(span.start, self.offset, "span must start at the cursor");
        let consumed = &input[span.range()];
        if let Some(last_newline) = consumed.rfind('\n') {
            self.line += consumed.bytes().filter(|b| *b == b'\n').count();
            self.column = consumed[last_newline + 1..].chars().count() + 1;
        } else {
            self.column += consumed.chars().count();
        }
        self.offset = span.end;
        trace!(
            "Advanced over {} to line {}, column {}",
            span,
            self.line,
            self.column
        );
    }
}
