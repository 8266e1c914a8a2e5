//! Module with serializable descriptions of rules.
use serde::{Deserialize, Serialize};

use crate::{PatternFlags, RuleOptions};

/// The description of a single rule.
/// All fields except the pattern are optional in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec<S> {
    /// The token name. It is not used for ignore rules.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// The regular expression.
    pub pattern: String,
    /// The flags the pattern is compiled with.
    #[serde(default, skip_serializing_if = "PatternFlags::is_empty")]
    pub flags: PatternFlags,
    /// The state the rule is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<S>,
    /// Whether the rule pops the current state.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pop: bool,
    /// The states the rule pushes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub push: Vec<S>,
}

impl<S> RuleSpec<S> {
    /// Creates a rule description without flags and state handling.
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            flags: PatternFlags::empty(),
            state: None,
            pop: false,
            push: Vec::new(),
        }
    }
}

impl<S: Clone> RuleSpec<S> {
    /// The options of the described rule.
    pub fn options(&self) -> RuleOptions<S> {
        RuleOptions {
            flags: self.flags,
            state: self.state.clone(),
            pop: self.pop,
            push: self.push.clone(),
        }
    }
}

/// An ordered set of token rules and ignore rules.
///
/// Rule sets can be stored as JSON and added to a [crate::ScannerBuilder] with
/// [crate::ScannerBuilder::add_rule_set].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet<S = String> {
    /// The token rules in their priority order.
    #[serde(default)]
    pub rules: Vec<RuleSpec<S>>,
    /// The ignore rules in their priority order.
    #[serde(default)]
    pub ignore: Vec<RuleSpec<S>>,
}

impl<S> RuleSet<S> {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            ignore: Vec::new(),
        }
    }
}

impl<S> Default for RuleSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
