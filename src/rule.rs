//! Module with the rule type and its options.
use std::fmt::Debug;

use log::trace;

use crate::{
    CompiledPattern, LexerError, LexerErrorKind, PatternFlags, Result, SourcePosition, Span,
};

/// The optional parts of a rule declaration.
///
/// The default value has no pattern flags, no required state, does not pop and pushes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOptions<S> {
    /// The flags the pattern is compiled with.
    pub flags: PatternFlags,
    /// The state that has to be on top of the state stack for the rule to be tried.
    pub state: Option<S>,
    /// Whether the rule pops the current state when it matches.
    pub pop: bool,
    /// The states pushed, in order, when the rule matches. The last one becomes the current
    /// state.
    pub push: Vec<S>,
}

impl<S> Default for RuleOptions<S> {
    fn default() -> Self {
        Self {
            flags: PatternFlags::empty(),
            state: None,
            pop: false,
            push: Vec::new(),
        }
    }
}

impl<S> RuleOptions<S> {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pattern flags.
    pub fn flags(mut self, flags: PatternFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Restricts the rule to the given state.
    pub fn state(mut self, state: impl Into<S>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Lets the rule pop the current state.
    pub fn pop(mut self) -> Self {
        self.pop = true;
        self
    }

    /// Lets the rule push the given states.
    pub fn push<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        self.push.extend(states.into_iter().map(Into::into));
        self
    }
}

/// A compiled pattern together with its lexing metadata.
///
/// Ignore rules have an empty name. A rule is immutable once created.
#[derive(Debug, Clone)]
pub struct Rule<S> {
    name: String,
    pattern: CompiledPattern,
    state: Option<S>,
    pop: bool,
    push: Vec<S>,
}

impl<S> Rule<S>
where
    S: Clone + PartialEq + Debug,
{
    /// Compiles the pattern and creates a new rule.
    pub fn new(name: &str, pattern: &str, options: RuleOptions<S>) -> Result<Self> {
        let RuleOptions {
            flags,
            state,
            pop,
            push,
        } = options;
        Ok(Self {
            name: name.to_string(),
            pattern: CompiledPattern::new(pattern, flags)?,
            state,
            pop,
            push,
        })
    }

    /// Get the token name. Empty for ignore rules.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the compiled pattern.
    #[inline]
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Get the required state.
    #[inline]
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Check if the rule pops the current state.
    #[inline]
    pub fn pops(&self) -> bool {
        self.pop
    }

    /// Get the states the rule pushes.
    #[inline]
    pub fn pushes(&self) -> &[S] {
        &self.push
    }

    /// Attempts to match the rule's pattern starting exactly at `offset`.
    ///
    /// An empty match counts as no match, so a matching rule always advances the cursor.
    #[inline]
    pub fn attempt_match(&self, haystack: &str, offset: usize) -> Option<Span> {
        self.pattern
            .match_at(haystack, offset)
            .filter(|span| !span.is_empty())
    }

    /// A rule is eligible if it requires no state or if its state is the top of the stack.
    /// On an empty stack only rules without a required state are eligible.
    pub fn is_eligible(&self, states: &[S]) -> bool {
        match &self.state {
            None => true,
            Some(state) => states.last() == Some(state),
        }
    }

    /// Pops the current state if the rule demands it and then pushes the rule's states.
    ///
    /// The stack is left untouched if the rule pops an empty stack. The given position is only
    /// used to report this error.
    pub(crate) fn apply_transition(
        &self,
        states: &mut Vec<S>,
        position: SourcePosition,
    ) -> Result<()> {
        if self.pop && states.pop().is_none() {
            return Err(LexerError::new(LexerErrorKind::StateStackUnderflow {
                rule: self.name.clone(),
                position,
            }));
        }
        states.extend(self.push.iter().cloned());
        if self.pop || !self.push.is_empty() {
            trace!("Rule '{}' changed the state stack to {:?}", self.name, states);
        }
        Ok(())
    }
}

impl<S> std::fmt::Display for Rule<S>
where
    S: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.pattern)?;
        if let Some(state) = &self.state {
            write!(f, " in {:?}", state)?;
        }
        Ok(())
    }
}
