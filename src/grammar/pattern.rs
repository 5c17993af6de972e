//! Fixed-window pattern matching over clusters.
//!
//! Many sheva decisions are empirical exceptions keyed on how a word ends
//! ("`sheva` before `qamats`, `he` at the end of a word is `sheva-nah`").
//! They are written as a sequence of [`Constraint`]s, one per cluster, and
//! tested with [`has_sequence`] (anchored at an index) or [`has_ending`]
//! (anchored at the end of the word).
//!
//! # Example
//!
//! ```
//! use hebphonics::grammar::{has_pattern, Cluster, Constraint};
//! use hebphonics::symbols::Symbol;
//!
//! let window = [
//!     Cluster::new(Some(Symbol::Lamed), None, Some(Symbol::Sheva)),
//!     Cluster::new(Some(Symbol::He), None, None),
//! ];
//! let pattern = [Constraint::vowel(Symbol::Sheva), Constraint::letter(Symbol::He)];
//! assert!(has_pattern(&window, &pattern));
//! ```

use super::cluster::Cluster;
use crate::symbols::Symbol;

/// What a single slot of a cluster must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Want {
    /// No restriction.
    #[default]
    Any,
    /// The slot must be empty.
    Absent,
    /// The slot must hold something.
    Present,
    /// The slot must hold exactly this symbol.
    Is(Symbol),
    /// The slot must hold one of these symbols.
    OneOf(&'static [Symbol]),
}

impl Want {
    /// True if `have` satisfies this want.
    pub fn matches(&self, have: Option<Symbol>) -> bool {
        match *self {
            Want::Any => true,
            Want::Absent => have.is_none(),
            Want::Present => have.is_some(),
            Want::Is(want) => have == Some(want),
            Want::OneOf(wants) => have.is_some_and(|h| wants.contains(&h)),
        }
    }
}

/// Per-cluster restriction on letter, dagesh and vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraint {
    /// Letter restriction.
    pub letter: Want,
    /// Dagesh restriction.
    pub dagesh: Want,
    /// Vowel restriction.
    pub vowel: Want,
}

impl Constraint {
    /// Matches any cluster, including an empty one.
    pub const ANY: Constraint = Constraint {
        letter: Want::Any,
        dagesh: Want::Any,
        vowel: Want::Any,
    };

    /// Vowel must be `vowel`.
    pub const fn vowel(vowel: Symbol) -> Self {
        Constraint {
            vowel: Want::Is(vowel),
            ..Self::ANY
        }
    }

    /// Vowel must be one of `vowels`.
    pub const fn vowels(vowels: &'static [Symbol]) -> Self {
        Constraint {
            vowel: Want::OneOf(vowels),
            ..Self::ANY
        }
    }

    /// Letter must be `letter`.
    pub const fn letter(letter: Symbol) -> Self {
        Constraint {
            letter: Want::Is(letter),
            ..Self::ANY
        }
    }

    /// Letter must be one of `letters`.
    pub const fn letters(letters: &'static [Symbol]) -> Self {
        Constraint {
            letter: Want::OneOf(letters),
            ..Self::ANY
        }
    }

    /// Additionally require the vowel to be `vowel`.
    pub const fn with_vowel(self, vowel: Symbol) -> Self {
        Constraint {
            vowel: Want::Is(vowel),
            ..self
        }
    }

    /// Additionally require the vowel to be one of `vowels`.
    pub const fn with_vowels(self, vowels: &'static [Symbol]) -> Self {
        Constraint {
            vowel: Want::OneOf(vowels),
            ..self
        }
    }

    /// Additionally restrict the dagesh.
    pub const fn with_dagesh(self, dagesh: Want) -> Self {
        Constraint { dagesh, ..self }
    }

    /// True if `cluster` satisfies every slot restriction.
    #[inline]
    pub fn matches(&self, cluster: &Cluster) -> bool {
        self.letter.matches(cluster.letter)
            && self.dagesh.matches(cluster.dagesh)
            && self.vowel.matches(cluster.vowel)
    }
}

/// True if `window` is at least as long as `pattern` and its prefix matches.
pub fn has_pattern(window: &[Cluster], pattern: &[Constraint]) -> bool {
    window.len() >= pattern.len()
        && window
            .iter()
            .zip(pattern)
            .all(|(cluster, constraint)| constraint.matches(cluster))
}

/// True if the clusters starting at `idx` match `pattern`.
///
/// The window is `pattern.len() + extra` clusters long, clamped to the end
/// of `guesses`.
pub fn has_sequence(guesses: &[Cluster], idx: usize, pattern: &[Constraint], extra: usize) -> bool {
    let start = idx.min(guesses.len());
    let end = (idx + pattern.len() + extra).min(guesses.len());
    has_pattern(&guesses[start..end], pattern)
}

/// True if the word ends in `pattern` followed by `extra` clusters and the
/// current position is the start of that ending.
///
/// `neg_idx` is the distance of the current position from the last cluster.
pub fn has_ending(guesses: &[Cluster], neg_idx: usize, pattern: &[Constraint], extra: usize) -> bool {
    let num = pattern.len() + extra;
    let at_position = num > 0 && neg_idx == num - 1;
    at_position && has_pattern(&guesses[guesses.len().saturating_sub(num)..], pattern)
}
