use serde::Serialize;

use crate::{SourcePosition, Span};

/// A token produced by a scan session.
///
/// * `'a` is the lifetime of both the scanner that owns the rule names and the scanned input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Token<'a> {
    /// The name of the rule that produced the token.
    name: &'a str,
    /// The matched text.
    text: &'a str,
    /// The position of the first character of the token.
    position: SourcePosition,
}

impl<'a> Token<'a> {
    /// Create a new token.
    pub fn new(name: &'a str, text: &'a str, position: SourcePosition) -> Self {
        Self {
            name,
            text,
            position,
        }
    }

    /// Get the name of the rule that produced the token.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Get the matched text.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get the position of the first character of the token.
    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Get the byte span of the token in the input.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.position.offset, self.position.offset + self.text.len())
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token('{}', '{}')",
            self.name,
            self.text.escape_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        let token = Token::new("NUMBER", "42", SourcePosition::new(3, 1, 4));
        assert_eq!(token.span(), Span::new(3, 5));
        assert_eq!(token.to_string(), "Token('NUMBER', '42')");
    }
}
