#![deny(missing_docs)]
//! # `rulelex`
//! The `rulelex` crate builds lexical scanners from an ordered list of named regex rules.
//! It is meant as the front end of a hand-written or generated parser.
//!
//! A scanner consists of token rules and ignore rules. At each position the ignore rules are tried
//! first and their matches are skipped. Then the token rules are tried in the order they were
//! added and the first one that matches produces the next token. There is no longest-match
//! resolution, the declaration order alone decides.
//!
//! Rules can be restricted to lexer states. The states are kept on a stack, a rule may pop the
//! current state and push new ones when it matches. Each token carries its byte offset and the
//! line and column of its first character.
//!
//! To compile the regular expressions, the crate uses the `regex-syntax` and `regex-automata`
//! crates.
//!
//! # Example
//! ```rust
//! use rulelex::{RuleOptions, ScannerBuilder};
//!
//! const INPUT: &str = r#"
//! // A comment
//! a = "text";
//! "#;
//!
//! fn main() -> rulelex::Result<()> {
//!     let mut builder = ScannerBuilder::new();
//!     builder
//!         .add_with("CHARS", r#"[^"]+"#, RuleOptions::new().state("STRING"))?
//!         .add_with("QUOTE", r#"""#, RuleOptions::new().state("STRING").pop())?
//!         .add_with("QUOTE", r#"""#, RuleOptions::new().push(["STRING"]))?
//!         .add("IDENT", r"[a-zA-Z_]\w*")?
//!         .add("ASSIGN", r"=")?
//!         .add("SEMICOLON", r";")?
//!         .ignore(r"\s+")?
//!         .ignore(r"//.*")?;
//!     let scanner = builder.build();
//!     for token in scanner.lex(INPUT) {
//!         let token = token?;
//!         println!("{} at {}", token, token.position());
//!     }
//!     Ok(())
//! }
//! ```
//! The output of the example is:
//! ```text
//! Token('IDENT', 'a') at offset 14, line 3, column 1
//! Token('ASSIGN', '=') at offset 16, line 3, column 3
//! Token('QUOTE', '\"') at offset 18, line 3, column 5
//! Token('CHARS', 'text') at offset 19, line 3, column 6
//! Token('QUOTE', '\"') at offset 23, line 3, column 10
//! Token('SEMICOLON', ';') at offset 24, line 3, column 11
//! ```

/// Module with error definitions
mod errors;
pub use errors::{LexerError, LexerErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// Module that provides the pattern flags and the compiled pattern type
mod pattern;
pub use pattern::{CompiledPattern, PatternFlags};

/// Module that provides a source position type
mod position;
pub use position::SourcePosition;

/// The module with the rule type.
mod rule;
pub use rule::{Rule, RuleOptions};

/// Module with serializable rule descriptions
mod rule_set;
pub use rule_set::{RuleSet, RuleSpec};

/// The module with the scan session.
mod scan_session;
pub use scan_session::ScanSession;

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides a Token type
mod token;
pub use token::Token;
