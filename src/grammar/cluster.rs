//! Grammatical clusters and the initial guess.
//!
//! A [`Cluster`] is what the parser believes one [`Token`] means: a letter
//! name, an optional dagesh name and an optional vowel name. Rules refine
//! clusters in place; a cluster absorbed into its neighbor (a `vav` that
//! became part of a shuruq, for example) is reset to empty but keeps its
//! index, so clusters and tokens stay aligned.

use serde::Serialize;
use smallvec::SmallVec;

use crate::lexer::Token;
use crate::symbols::codepoints::{letter_symbol, vowel_symbol};
use crate::symbols::Symbol;

/// Grammatical cluster of a letter, dagesh, and vowel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// Letter name (`None` once reset).
    pub letter: Option<Symbol>,
    /// Dagesh or mapiq name.
    pub dagesh: Option<Symbol>,
    /// Vowel or sheva name.
    pub vowel: Option<Symbol>,
    /// True while the cluster is believed to end an open syllable.
    pub isopen: bool,
    /// Names of the rules that modified this cluster, in firing order.
    pub rules: SmallVec<[&'static str; 4]>,
}

/// Read-only empty cluster for out-of-range neighbors.
pub(crate) static EMPTY_CLUSTER: Cluster = Cluster::EMPTY;

impl Cluster {
    /// A cluster with nothing in it.
    pub const EMPTY: Cluster = Cluster {
        letter: None,
        dagesh: None,
        vowel: None,
        isopen: false,
        rules: SmallVec::new_const(),
    };

    /// Construct a cluster from its three slots.
    ///
    /// `isopen` starts true iff there is a vowel.
    pub fn new(letter: Option<Symbol>, dagesh: Option<Symbol>, vowel: Option<Symbol>) -> Self {
        Cluster {
            letter,
            dagesh,
            vowel,
            isopen: vowel.is_some(),
            rules: SmallVec::new(),
        }
    }

    /// True if letter, dagesh and vowel are all empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none() && self.dagesh.is_none() && self.vowel.is_none()
    }

    /// Empty every slot, including the rule trace.
    pub fn reset(&mut self) -> &mut Self {
        *self = Cluster::default();
        self
    }

    /// The non-empty slots in letter, dagesh, vowel order.
    pub fn items(&self) -> impl Iterator<Item = Symbol> {
        self.letter.into_iter().chain(self.dagesh).chain(self.vowel)
    }

    /// True if the letter is `letter`.
    #[inline]
    pub fn letter_is(&self, letter: Symbol) -> bool {
        self.letter == Some(letter)
    }

    /// True if the letter is one of `letters`.
    #[inline]
    pub fn letter_in(&self, letters: &[Symbol]) -> bool {
        self.letter.is_some_and(|l| letters.contains(&l))
    }

    /// True if the vowel is `vowel`.
    #[inline]
    pub fn vowel_is(&self, vowel: Symbol) -> bool {
        self.vowel == Some(vowel)
    }

    /// True if the vowel is one of `vowels`.
    #[inline]
    pub fn vowel_in(&self, vowels: &[Symbol]) -> bool {
        self.vowel.is_some_and(|v| vowels.contains(&v))
    }

    /// True if the dagesh is `dagesh`.
    #[inline]
    pub fn dagesh_is(&self, dagesh: Symbol) -> bool {
        self.dagesh == Some(dagesh)
    }

    /// True if the vowel belongs to the `sheva` family.
    #[inline]
    pub fn has_sheva(&self) -> bool {
        self.vowel.is_some_and(Symbol::is_sheva)
    }

    /// True if the cluster is `letter` with neither dagesh nor vowel.
    #[inline]
    pub fn is_bare(&self, letter: Symbol) -> bool {
        self.letter_is(letter) && self.dagesh.is_none() && self.vowel.is_none()
    }

    /// True if the letter is one of `letters` with neither dagesh nor vowel.
    #[inline]
    pub fn is_bare_in(&self, letters: &[Symbol]) -> bool {
        self.letter_in(letters) && self.dagesh.is_none() && self.vowel.is_none()
    }
}

/// Make the initial guess for a token from its Unicode names.
///
/// - Final letters become `{x}-sofit`.
/// - Shin is `shin` only with the shin dot; otherwise it is `sin`.
/// - Any dagesh is the unclassified `dagesh`.
/// - `isopen` is true iff there is a vowel.
///
/// ```
/// use hebphonics::grammar::guess;
/// use hebphonics::lexer::{lex, normalize};
/// use hebphonics::symbols::Symbol;
///
/// let tokens = lex(&normalize("שָׁ")).unwrap();
/// let cluster = guess(&tokens[0]);
/// assert_eq!(cluster.letter, Some(Symbol::Shin));
/// assert_eq!(cluster.vowel, Some(Symbol::Qamats));
/// assert!(cluster.isopen);
/// ```
pub fn guess(token: &Token) -> Cluster {
    let mut letter = token.letter.and_then(letter_symbol);
    if letter == Some(Symbol::Sin) && token.has_shin_dot() {
        letter = Some(Symbol::Shin);
    }
    let dagesh = token.dagesh.map(|_| Symbol::Dagesh);
    let vowel = token.vowel.and_then(vowel_symbol);
    Cluster::new(letter, dagesh, vowel)
}

/// Concatenate the symbols of every non-empty cluster.
pub fn flatten(clusters: &[Cluster]) -> Vec<Symbol> {
    clusters.iter().flat_map(Cluster::items).collect()
}

/// The names of all rules that fired, in cluster order.
pub fn rule_trace(clusters: &[Cluster]) -> Vec<&'static str> {
    clusters
        .iter()
        .flat_map(|c| c.rules.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{lex, normalize};

    fn guesses(word: &str) -> Vec<Cluster> {
        lex(&normalize(word)).unwrap().iter().map(guess).collect()
    }

    #[test]
    fn test_guess_shin_and_sin() {
        let shin = guesses("\u{05E9}\u{05C1}");
        assert_eq!(shin[0].letter, Some(Symbol::Shin));

        let sin = guesses("\u{05E9}\u{05C2}");
        assert_eq!(sin[0].letter, Some(Symbol::Sin));

        let undotted = guesses("\u{05E9}");
        assert_eq!(undotted[0].letter, Some(Symbol::Sin));
    }

    #[test]
    fn test_guess_final_letters_and_dagesh() {
        let clusters = guesses("\u{05DA}\u{05BC}\u{05B8}");
        assert_eq!(clusters[0].letter, Some(Symbol::KafSofit));
        assert_eq!(clusters[0].dagesh, Some(Symbol::Dagesh));
        assert_eq!(clusters[0].vowel, Some(Symbol::Qamats));
    }

    #[test]
    fn test_guess_holam_variants() {
        assert_eq!(guesses("\u{05D5}\u{05BA}")[0].vowel, Some(Symbol::HolamHaser));
        assert_eq!(guesses("\u{05DC}\u{05B9}")[0].vowel, Some(Symbol::Holam));
    }

    #[test]
    fn test_guess_isopen_follows_vowel() {
        let clusters = guesses("\u{05DE}\u{05B7}\u{05EA}");
        assert!(clusters[0].isopen);
        assert!(!clusters[1].isopen);
        assert_eq!(clusters[1].letter, Some(Symbol::Tav));
    }

    #[test]
    fn test_reset_keeps_nothing() {
        let mut cluster = Cluster::new(Some(Symbol::Vav), Some(Symbol::Dagesh), None);
        cluster.rules.push("some-rule");
        cluster.reset();
        assert!(cluster.is_empty());
        assert!(cluster.rules.is_empty());
        assert_eq!(cluster, Cluster::EMPTY);
    }

    #[test]
    fn test_flatten_skips_empty() {
        let clusters = vec![
            Cluster::new(Some(Symbol::Tav), None, Some(Symbol::HolamHaser)),
            Cluster::EMPTY,
            Cluster::new(Some(Symbol::He), None, None),
        ];
        assert_eq!(
            flatten(&clusters),
            vec![Symbol::Tav, Symbol::HolamHaser, Symbol::He]
        );
    }

    #[test]
    fn test_bare() {
        let yod = Cluster::new(Some(Symbol::Yod), None, None);
        assert!(yod.is_bare(Symbol::Yod));
        assert!(yod.is_bare_in(&[Symbol::Alef, Symbol::Yod]));
        assert!(!yod.is_bare(Symbol::Alef));

        let pointed = Cluster::new(Some(Symbol::Yod), None, Some(Symbol::Hiriq));
        assert!(!pointed.is_bare(Symbol::Yod));
    }
}
