//! The analysis record for a single word.
//!
//! [`Word`] bundles everything downstream consumers (a display layer, a
//! word database) need about one word: the cleaned text, its parse, its
//! syllables, the rules that produced them, and the two auxiliary
//! classifications.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gematria::gematria;
use crate::grammar::{flatten, rule_trace, Parser};
use crate::lexer::strip;
use crate::shemot::is_sacred_name;

/// A fully analyzed word.
///
/// Symbols are stored by name so the record serializes as plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The word with only letters and points.
    pub hebrew: String,
    /// True if the word is one of the names of God.
    pub shemot: bool,
    /// Numerical value of the word.
    pub gematria: u32,
    /// Flattened parse.
    pub parsed: Vec<String>,
    /// Flattened symbols of each syllable.
    pub syllables: Vec<Vec<String>>,
    /// Number of syllables.
    pub syllen: usize,
    /// Names of the rules that fired, in cluster order.
    pub rules: Vec<String>,
}

impl Word {
    /// Parse and syllabify `raw`.
    ///
    /// Returns `Ok(None)` for a word with no letters or no vowels at all
    /// (e.g. punctuation, or unpointed text), since there is nothing to
    /// analyze. Syllables are broken in lax mode.
    ///
    /// # Errors
    ///
    /// Propagates the [`LexError`](crate::error::LexError) if `raw` cannot
    /// be lexed.
    ///
    /// ```
    /// use hebphonics::grammar::Parser;
    /// use hebphonics::word::Word;
    ///
    /// let word = Word::analyze(&Parser::default(), "שָׁלוֹם").unwrap().unwrap();
    /// assert_eq!(word.gematria, 376);
    /// assert_eq!(word.syllen, 2);
    /// assert!(!word.shemot);
    /// ```
    pub fn analyze(parser: &Parser, raw: &str) -> Result<Option<Word>> {
        let mut clusters = parser.parse(raw)?;
        let has_letters = clusters.iter().any(|c| c.letter.is_some());
        let has_vowels = clusters.iter().any(|c| c.vowel.is_some());
        if !has_letters || !has_vowels {
            return Ok(None);
        }

        let syllables = parser.syllabify(&mut clusters, false);
        let hebrew = strip(raw);
        Ok(Some(Word {
            shemot: is_sacred_name(&hebrew),
            gematria: gematria(&hebrew),
            parsed: names(flatten(&clusters)),
            syllen: syllables.len(),
            syllables: syllables.into_iter().map(names).collect(),
            rules: rule_trace(&clusters).into_iter().map(String::from).collect(),
            hebrew,
        }))
    }
}

fn names(symbols: impl IntoIterator<Item = crate::symbols::Symbol>) -> Vec<String> {
    symbols.into_iter().map(|s| s.name().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_bara() {
        let word = Word::analyze(&Parser::default(), "בָּרָא").unwrap().unwrap();
        assert_eq!(word.hebrew, "בָּרָא");
        assert_eq!(
            word.parsed,
            ["bet", "dagesh-qal", "qamats-gadol", "resh", "qamats-gadol", "eim-qria-alef"]
        );
        assert_eq!(word.syllen, word.syllables.len());
        assert_eq!(word.syllables.concat(), word.parsed);
        assert_eq!(word.gematria, 203);
    }

    #[test]
    fn test_unpointed_is_skipped() {
        assert_eq!(Word::analyze(&Parser::default(), "שלום").unwrap(), None);
    }

    #[test]
    fn test_empty_is_skipped() {
        assert_eq!(Word::analyze(&Parser::default(), "").unwrap(), None);
    }

    #[test]
    fn test_lex_error_propagates() {
        assert!(Word::analyze(&Parser::default(), "\u{05B8}").is_err());
    }

    #[test]
    fn test_json_fields() {
        let word = Word::analyze(&Parser::default(), "אֵל").unwrap().unwrap();
        assert!(word.shemot);
        let json = serde_json::to_value(&word).unwrap();
        for key in ["hebrew", "shemot", "gematria", "parsed", "syllables", "syllen", "rules"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        let back: Word = serde_json::from_value(json).unwrap();
        assert_eq!(back, word);
    }
}
