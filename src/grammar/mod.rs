//! Hebrew grammar parsing.
//!
//! This is a best-effort parser: it encodes many sequentially dependent
//! rules and empirical exceptions, and some clusters may still come out
//! under-specified (e.g. `qamats` rather than `qamats-qatan`).
//!
//! # Modules
//!
//! - [`cluster`] - [`Cluster`], the initial [`guess`], [`flatten`] and [`rule_trace`]
//! - [`context`] - [`RuleContext`], what a rule may read and write
//! - [`pattern`] - [`Constraint`]s and the window matchers used by ending rules
//! - [`config`] - [`ParserConfig`], which rules are enabled
//! - [`parser`] - [`Parser`], the staged rule engine
//! - [`syllable`] - syllable breaking
//!
//! # Example
//!
//! ```
//! use hebphonics::grammar::{flatten, rule_trace, Parser};
//! use hebphonics::symbols::Symbol::*;
//!
//! let parser = Parser::default();
//! let mut parsed = parser.parse("שָׁרְצוּ").unwrap();
//! assert_eq!(flatten(&parsed), vec![Shin, QamatsGadol, Resh, ShevaNa, Tsadi, Shuruq]);
//!
//! let syllables = parser.syllabify(&mut parsed, false);
//! assert_eq!(syllables.len(), 3);
//! assert!(rule_trace(&parsed).contains(&"syllable-around-sheva-na"));
//! ```

pub mod cluster;
pub mod config;
pub mod context;
pub mod parser;
pub mod pattern;
pub mod syllable;

pub use cluster::{flatten, guess, rule_trace, Cluster};
pub use config::ParserConfig;
pub use context::RuleContext;
pub use parser::Parser;
pub use pattern::{has_ending, has_pattern, has_sequence, Constraint, Want};
pub use syllable::{Syllable, SYLLABLE_RULES};
