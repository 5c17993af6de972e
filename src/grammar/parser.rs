//! The best-effort parser.
//!
//! Parsing a word runs these steps:
//!
//! 1. **Normalize** to NFKD so presentation forms split into base letter and points.
//! 2. **Lex** code points into one [`Token`] per letter.
//! 3. **Guess** a [`Cluster`] per token from Unicode names.
//! 4. **Refine** the clusters stage by stage with the rule tables in [`crate::rules`].
//!
//! Within a stage the positions are scanned left to right, and at each
//! position the first rule that fires wins. Clusters that were reset by an
//! earlier rule are skipped but keep their index.
//!
//! The parser holds only its configuration, so one instance can be shared
//! across threads.

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::cluster::{guess, Cluster};
use super::config::ParserConfig;
use super::context::RuleContext;
use super::syllable::{syllabify_with, Syllable};
use crate::error::Result;
use crate::lexer::{any_accents, any_maqaf, lex, normalize, Token};
use crate::rules::{all_rules, Rule, StageRules, STAGES};

/// Best-effort Hebrew parser.
///
/// ```
/// use hebphonics::grammar::{flatten, Parser};
/// use hebphonics::symbols::Symbol;
///
/// let parser = Parser::default();
/// let parsed = parser.parse("בָּרָא").unwrap();
/// assert_eq!(
///     flatten(&parsed),
///     vec![
///         Symbol::Bet,
///         Symbol::DageshQal,
///         Symbol::QamatsGadol,
///         Symbol::Resh,
///         Symbol::QamatsGadol,
///         Symbol::EimQriaAlef,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    allowed: FxHashSet<&'static str>,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(ParserConfig::default())
    }
}

impl Parser {
    /// Build a parser with the given rules enabled or disabled.
    ///
    /// Names that match no rule are ignored with a warning.
    pub fn new(config: ParserConfig) -> Self {
        for name in config.unknown_rules() {
            warn!(rule = name, "configuration names an unknown rule");
        }
        let allowed = all_rules()
            .map(|(_, rule)| rule)
            .filter(|rule| config.allows(rule.name, rule.default_enabled))
            .map(|rule| rule.name)
            .collect();
        Parser { config, allowed }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// True if `rule` runs under this parser's configuration.
    #[inline]
    pub fn allows(&self, rule: &Rule) -> bool {
        self.allowed.contains(rule.name)
    }

    /// Normalize and lex a word.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`](crate::error::LexError) if the word contains an
    /// unknown code point or a token without a letter.
    pub fn lex(&self, word: &str) -> Result<Vec<Token>> {
        lex(&normalize(word))
    }

    /// Parse a word into clusters, one per token.
    ///
    /// # Errors
    ///
    /// Fails only if the word cannot be lexed; the rules themselves never fail.
    pub fn parse(&self, word: &str) -> Result<Vec<Cluster>> {
        let tokens = self.lex(word)?;
        let mut guesses: Vec<Cluster> = tokens.iter().map(guess).collect();
        self.apply_stages(&tokens, &mut guesses);
        trace!(word, clusters = guesses.len(), "parsed");
        Ok(guesses)
    }

    /// Run every stage over already-guessed clusters.
    ///
    /// `guesses` must have one cluster per token.
    pub fn apply_stages(&self, tokens: &[Token], guesses: &mut [Cluster]) {
        debug_assert_eq!(tokens.len(), guesses.len());
        let has_maqaf = any_maqaf(tokens);
        let has_accents = any_accents(tokens);
        for stage in STAGES {
            self.apply_stage(stage, tokens, guesses, has_maqaf, has_accents);
        }
    }

    fn apply_stage(
        &self,
        stage: &StageRules,
        tokens: &[Token],
        guesses: &mut [Cluster],
        has_maqaf: bool,
        has_accents: bool,
    ) {
        let Some(last_idx) = guesses.len().checked_sub(1) else {
            return;
        };
        let mut prev: Option<usize> = None;
        let mut prev2: Option<usize> = None;

        for idx in 0..guesses.len() {
            if guesses[idx].is_empty() {
                continue;
            }

            let last_vowel = prev
                .and_then(|p| guesses[p].vowel)
                .or_else(|| prev2.and_then(|p| guesses[p].vowel));

            let mut ctx = RuleContext {
                idx,
                neg_idx: last_idx - idx,
                isfirst: idx == 0,
                islast: idx == last_idx,
                has_maqaf,
                has_accents,
                prev,
                last_vowel,
                tokens,
                guesses: &mut *guesses,
            };

            for rule in stage.rules() {
                let Some(apply) = rule.apply else {
                    continue;
                };
                if !self.allows(rule) {
                    continue;
                }
                if let Some(target) = apply(&mut ctx) {
                    debug!(stage = %stage.stage, rule = rule.name, idx, target, "rule fired");
                    ctx.guesses[target].rules.push(rule.name);
                    break;
                }
            }

            prev2 = prev;
            prev = Some(idx);
        }
    }

    /// Split parsed clusters into syllables.
    ///
    /// Syllable rules that fire are appended to the trace of the cluster
    /// that triggered them. `strict` forbids a break right after a hataf
    /// vowel.
    ///
    /// ```
    /// use hebphonics::grammar::Parser;
    /// use hebphonics::symbols::Symbol::*;
    ///
    /// let parser = Parser::default();
    /// let mut parsed = parser.parse("בְּלִי").unwrap();
    /// assert_eq!(
    ///     parser.syllabify(&mut parsed, false),
    ///     vec![vec![Bet, DageshQal, ShevaNa], vec![Lamed, HiriqMaleYod, EimQriaYod]]
    /// );
    /// ```
    pub fn syllabify(&self, clusters: &mut [Cluster], strict: bool) -> Vec<Syllable> {
        syllabify_with(clusters, strict, |rule| self.allows(rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{flatten, rule_trace};
    use crate::symbols::Symbol::*;

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }

    #[test]
    fn test_parse_empty() {
        assert!(Parser::default().parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keeps_alignment() {
        let parser = Parser::default();
        for word in ["שָׁרְצוּ", "אוֹר", "וַיְהִי", "תֹהוּ"] {
            let tokens = parser.lex(word).unwrap();
            let parsed = parser.parse(word).unwrap();
            assert_eq!(tokens.len(), parsed.len(), "{}", word);
        }
    }

    #[test]
    fn test_reset_vav_is_skipped() {
        let parser = Parser::default();
        let parsed = parser.parse("אוֹר").unwrap();
        assert!(parsed[1].is_empty());
        assert_eq!(flatten(&parsed), vec![Alef, HolamMaleVav, Resh]);
        assert_eq!(
            rule_trace(&parsed),
            vec!["eim-qria-vav-is-holam-male"]
        );
    }

    #[test]
    fn test_disabled_rule_keeps_guess() {
        let config = ParserConfig::default().disable("vowel-holam-haser-default");
        let parser = Parser::new(config);
        let parsed = parser.parse("לֹא").unwrap();
        assert_eq!(parsed[0].vowel, Some(Holam));
    }

    #[test]
    fn test_unknown_config_names_are_ignored() {
        let parser = Parser::new(ParserConfig::new(["no-such-rule"], Vec::<String>::new()));
        let parsed = parser.parse("מַת").unwrap();
        assert_eq!(flatten(&parsed), vec![Mem, Patah, Sav]);
    }
}
