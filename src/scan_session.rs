use std::{fmt::Debug, iter::FusedIterator};

use log::trace;

use crate::{internal::Cursor, LexerError, LexerErrorKind, Result, Scanner, SourcePosition, Token};

/// The scanning state over one input.
///
/// The session yields one [Token] per call to [ScanSession::next_token] until the input is
/// exhausted.
///
/// * `'a` represents the lifetime of the scanner and of the input being scanned.
///
/// A session is created with the [crate::Scanner::lex] method.
#[derive(Debug)]
pub struct ScanSession<'a, S = String> {
    scanner: &'a Scanner<S>,
    input: &'a str,
    cursor: Cursor,
    states: Vec<S>,
    // Set once scanning failed. The session does not resume past an error.
    failure: Option<LexerError>,
    // Set once the iterator returned its last item.
    finished: bool,
}

impl<'a, S> ScanSession<'a, S>
where
    S: Clone + PartialEq + Debug,
{
    pub(crate) fn new(scanner: &'a Scanner<S>, input: &'a str) -> Self {
        Self {
            scanner,
            input,
            cursor: Cursor::new(),
            states: Vec::new(),
            failure: None,
            finished: false,
        }
    }

    /// The scanned input.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The byte offset at which the next token is searched.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// The position at which the next token is searched.
    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.cursor.position()
    }

    /// The state stack, bottom first.
    #[inline]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The state on top of the state stack, if any.
    #[inline]
    pub fn current_state(&self) -> Option<&S> {
        self.states.last()
    }

    /// Returns the next token.
    ///
    /// Matches of ignore rules are skipped first. Then the token rules that are eligible in the
    /// current state are tried in their declared order and the first match is returned.
    ///
    /// `Ok(None)` signals the end of the input. It is returned again on every further call.
    ///
    /// If no rule matches at a position before the end of the input a
    /// [LexerErrorKind::LexingError] with the exact position is returned. The session keeps
    /// returning this error on further calls.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        let result = self.scan_token();
        if let Err(err) = &result {
            self.failure = Some(err.clone());
        }
        result
    }

    fn scan_token(&mut self) -> Result<Option<Token<'a>>> {
        self.skip_ignored()?;
        if self.cursor.offset() >= self.input.len() {
            trace!("End of input reached");
            return Ok(None);
        }

        let (scanner, input) = (self.scanner, self.input);
        let position = self.cursor.position();
        for rule in scanner.rules() {
            if !rule.is_eligible(&self.states) {
                continue;
            }
            if let Some(span) = rule.attempt_match(input, position.offset) {
                rule.apply_transition(&mut self.states, position)?;
                self.cursor.advance(input, span);
                let token = Token::new(rule.name(), &input[span.range()], position);
                trace!("Matched {} at {}", token, position);
                return Ok(Some(token));
            }
        }
        Err(LexerError::new(LexerErrorKind::LexingError(position)))
    }

    // Skips consecutive matches of ignore rules. After each match the ignore rules are tried
    // again from the first one.
    fn skip_ignored(&mut self) -> Result<()> {
        let scanner = self.scanner;
        'restart: while self.cursor.offset() < self.input.len() {
            for rule in scanner.ignore_rules() {
                if !rule.is_eligible(&self.states) {
                    continue;
                }
                if let Some(span) = rule.attempt_match(self.input, self.cursor.offset()) {
                    rule.apply_transition(&mut self.states, self.cursor.position())?;
                    trace!("Skipped {:?} at {}", &self.input[span.range()], span);
                    self.cursor.advance(self.input, span);
                    continue 'restart;
                }
            }
            break;
        }
        Ok(())
    }
}

impl<'a, S> Iterator for ScanSession<'a, S>
where
    S: Clone + PartialEq + Debug,
{
    type Item = Result<Token<'a>>;

    /// Yields tokens until the end of the input. A scanning error is yielded once, after that
    /// the iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<S> FusedIterator for ScanSession<'_, S> where S: Clone + PartialEq + Debug {}
