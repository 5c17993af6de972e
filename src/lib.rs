//! # hebphonics
//!
//! Best-effort grammatical parser for vowel-pointed Hebrew.
//!
//! Unicode encodes Hebrew as letters followed by combining points, but one
//! point can stand for several grammatical categories: a U+05B0 may be a
//! vocal `sheva-na` or a silent `sheva-nah`, a U+05BC may be a `dagesh-qal`,
//! a `dagesh-hazaq` or a `mapiq`, a U+05B8 may be a long `qamats-gadol` or a
//! short `qamats-qatan`. This library resolves each point to its category
//! with a staged set of rules drawn from traditional grammars, then splits
//! the word into syllables.
//!
//! ## Example
//!
//! ```rust
//! use hebphonics::prelude::*;
//!
//! let parser = Parser::default();
//! let mut parsed = parser.parse("בְּלִי").unwrap();
//! assert_eq!(
//!     flatten(&parsed),
//!     vec![Symbol::Bet, Symbol::DageshQal, Symbol::ShevaNa, Symbol::Lamed, Symbol::HiriqMaleYod, Symbol::EimQriaYod]
//! );
//!
//! let syllables = parser.syllabify(&mut parsed, false);
//! assert_eq!(syllables.len(), 2);
//! assert_eq!(rule_trace(&parsed)[0], "dagesh-qal-bgdkft");
//! ```
//!
//! ## Layout
//!
//! - [`symbols`] - the closed symbol catalog and letter classes
//! - [`lexer`] - Unicode text to per-letter [`Token`](lexer::Token)s
//! - [`grammar`] - clusters, the staged [`Parser`](grammar::Parser), syllables
//! - [`rules`] - the rule tables, one module per concern
//! - [`gematria`], [`shemot`] - auxiliary classifiers over raw text
//! - [`word`] - the per-word analysis record

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod gematria;
pub mod grammar;
pub mod lexer;
pub mod rules;
pub mod shemot;
pub mod symbols;
pub mod word;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{LexError, Result};
    pub use crate::gematria::gematria;
    pub use crate::grammar::{flatten, guess, rule_trace, Cluster, Parser, ParserConfig, Syllable};
    pub use crate::lexer::{lex, normalize, strip, Token};
    pub use crate::rules::{Rule, Stage};
    pub use crate::shemot::is_sacred_name;
    pub use crate::symbols::{from_names, render, Symbol};
    pub use crate::word::Word;
}
