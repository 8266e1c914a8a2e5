use std::fmt::Debug;

use log::debug;

use crate::{Result, Rule, RuleOptions, RuleSet, Scanner};

/// A builder for creating a scanner.
///
/// Rules are tried in the order they are added, the first rule that matches wins. Ignore rules
/// are tried before any token rule at each position.
///
/// Patterns are compiled when a rule is added, so an invalid pattern is reported by the call that
/// adds it.
///
/// ```rust
/// use rulelex::ScannerBuilder;
///
/// let mut builder = ScannerBuilder::new();
/// builder.add("NUMBER", r"\d+")?.add("ADD", r"\+")?.ignore(r"\s+")?;
/// let scanner = builder.build();
///
/// let names = scanner
///     .lex("1 + 1")
///     .map(|t| t.map(|t| t.name()))
///     .collect::<rulelex::Result<Vec<_>>>()?;
/// assert_eq!(names, ["NUMBER", "ADD", "NUMBER"]);
/// # Ok::<(), rulelex::LexerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScannerBuilder<S = String> {
    rules: Vec<Rule<S>>,
    ignore_rules: Vec<Rule<S>>,
}

impl<S> Default for ScannerBuilder<S> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            ignore_rules: Vec::new(),
        }
    }
}

impl ScannerBuilder<String> {
    /// Creates a new scanner builder whose states are strings.
    /// Use [ScannerBuilder::default] with an explicit type for other state types.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> ScannerBuilder<S>
where
    S: Clone + PartialEq + Debug,
{
    /// Adds a token rule without flags and state handling.
    pub fn add(&mut self, name: &str, pattern: &str) -> Result<&mut Self> {
        self.add_with(name, pattern, RuleOptions::default())
    }

    /// Adds a token rule with the given options.
    pub fn add_with(
        &mut self,
        name: &str,
        pattern: &str,
        options: RuleOptions<S>,
    ) -> Result<&mut Self> {
        let rule = Rule::new(name, pattern, options)?;
        debug!("Added rule #{} {}", self.rules.len(), rule);
        self.rules.push(rule);
        Ok(self)
    }

    /// Adds a rule whose matches are skipped.
    pub fn ignore(&mut self, pattern: &str) -> Result<&mut Self> {
        self.ignore_with(pattern, RuleOptions::default())
    }

    /// Adds a rule whose matches are skipped, with the given options.
    pub fn ignore_with(&mut self, pattern: &str, options: RuleOptions<S>) -> Result<&mut Self> {
        let rule = Rule::new("", pattern, options)?;
        debug!("Added ignore rule #{} {}", self.ignore_rules.len(), rule);
        self.ignore_rules.push(rule);
        Ok(self)
    }

    /// Adds all rules of the given rule set, token rules and ignore rules in their declared
    /// order.
    pub fn add_rule_set(&mut self, rule_set: &RuleSet<S>) -> Result<&mut Self> {
        for spec in &rule_set.rules {
            self.add_with(&spec.name, &spec.pattern, spec.options())?;
        }
        for spec in &rule_set.ignore {
            self.ignore_with(&spec.pattern, spec.options())?;
        }
        Ok(self)
    }

    /// Builds the scanner from the scanner builder.
    pub fn build(self) -> Scanner<S> {
        debug!(
            "Building scanner with {} rules and {} ignore rules",
            self.rules.len(),
            self.ignore_rules.len()
        );
        Scanner::new(self.rules, self.ignore_rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LexerErrorKind, PatternFlags};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_scanner_builder() {
        init();
        let mut builder = ScannerBuilder::new();
        builder
            .add("STRING_START", r#"""#)
            .unwrap()
            .add_with(
                "CHARS",
                r#"[^"]+"#,
                RuleOptions::new().state("STRING").push(["X"]),
            )
            .unwrap()
            .ignore_with(r"\s+", RuleOptions::new().flags(PatternFlags::MULTI_LINE))
            .unwrap();
        let scanner = builder.build();
        assert_eq!(scanner.rules().len(), 2);
        assert_eq!(scanner.ignore_rules().len(), 1);
        assert_eq!(scanner.rules()[0].name(), "STRING_START");
        assert_eq!(scanner.rules()[1].state().map(String::as_str), Some("STRING"));
        assert_eq!(scanner.rules()[1].pushes(), ["X".to_string()]);
        assert_eq!(scanner.ignore_rules()[0].name(), "");
        assert_eq!(
            scanner.ignore_rules()[0].pattern().flags(),
            PatternFlags::MULTI_LINE
        );
    }

    #[test]
    fn test_invalid_pattern_fails_on_add() {
        init();
        let mut builder = ScannerBuilder::new();
        builder.add("A", r"a").unwrap();
        let err = builder.add("B", r"[b").unwrap_err();
        assert!(matches!(err.kind(), LexerErrorKind::RegexSyntaxError(_, p) if p == "[b"));
        let err = builder.ignore(r"(\s").unwrap_err();
        assert!(matches!(err.kind(), LexerErrorKind::RegexSyntaxError(_, p) if p == "(\\s"));
        // The failed additions leave the builder untouched.
        let scanner = builder.build();
        assert_eq!(scanner.rules().len(), 1);
        assert!(scanner.ignore_rules().is_empty());
    }
}
