//! Letter classes and niqqud categories used by the rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::Symbol;
use super::codepoints::*;

// ============================================================================
// Letter classes
// ============================================================================

/// Letters that may be a one-letter prefix morpheme.
pub const PREFIX_MORPHEMES: &[Symbol] = &[
    Symbol::Bet,
    Symbol::Vet,
    Symbol::Vav,
    Symbol::Kaf,
    Symbol::Khaf,
    Symbol::Lamed,
    Symbol::Tav,
    Symbol::Sav,
];

/// Sonorant letters in modern pronunciation.
pub const SONORANT_LETTERS: &[Symbol] = &[
    Symbol::Yod,
    Symbol::Lamed,
    Symbol::Mem,
    Symbol::Nun,
    Symbol::Resh,
];

/// Letters pronounced deep in the throat.
pub const GUTTURAL_LETTERS: &[Symbol] = &[Symbol::Alef, Symbol::He, Symbol::Het, Symbol::Ayin];

/// Letters which cannot take a `dagesh-hazaq`: the gutturals and `resh`.
pub const NON_DAGESH_LETTERS: &[Symbol] = &[
    Symbol::Alef,
    Symbol::He,
    Symbol::Het,
    Symbol::Ayin,
    Symbol::Resh,
];

/// Unicode letters that are glottal consonants.
pub const GLOTTAL_LETTERS: &[char] = &[LETTER_ALEF, LETTER_HE, LETTER_AYIN];

/// Letters with the same sound or manner of articulation.
pub const SIMILAR_LETTERS: &[&[Symbol]] = &[
    &[Symbol::Alef, Symbol::MapiqAlef, Symbol::Ayin],
    &[Symbol::Vet, Symbol::Vav],
    &[Symbol::Dalet, Symbol::Tet, Symbol::Tav],
    &[Symbol::He, Symbol::MapiqHe],
    &[Symbol::Het, Symbol::Khaf, Symbol::KhafSofit],
    &[Symbol::Kaf, Symbol::KafSofit, Symbol::Qof],
    &[Symbol::Mem, Symbol::MemSofit],
    &[Symbol::Nun, Symbol::NunSofit],
    &[Symbol::Samekh, Symbol::Sin, Symbol::Sav],
    &[Symbol::Pe, Symbol::PeSofit],
    &[Symbol::Fe, Symbol::FeSofit],
    &[Symbol::Tsadi, Symbol::TsadiSofit],
];

/// The BGDKFT names of a Unicode letter: `(without dagesh, with dagesh)`.
pub fn begedkefet(letter: char) -> Option<(Symbol, Symbol)> {
    let names = match letter {
        LETTER_BET => (Symbol::Vet, Symbol::Bet),
        LETTER_GIMEL => (Symbol::Gimel, Symbol::Gimel),
        LETTER_DALET => (Symbol::Dalet, Symbol::Dalet),
        LETTER_KAF => (Symbol::Khaf, Symbol::Kaf),
        LETTER_FINAL_KAF => (Symbol::KhafSofit, Symbol::KafSofit),
        LETTER_PE => (Symbol::Fe, Symbol::Pe),
        LETTER_FINAL_PE => (Symbol::FeSofit, Symbol::PeSofit),
        LETTER_TAV => (Symbol::Sav, Symbol::Tav),
        _ => return None,
    };
    Some(names)
}

/// True if the Unicode letter is one of the BGDKFT letters.
#[inline]
pub fn is_begedkefet(letter: char) -> bool {
    begedkefet(letter).is_some()
}

/// True for `alef`, `he`, `het`, `ayin`.
#[inline]
pub fn is_guttural(letter: Symbol) -> bool {
    GUTTURAL_LETTERS.contains(&letter)
}

/// True for the gutturals and `resh`.
#[inline]
pub fn is_non_dagesh(letter: Symbol) -> bool {
    NON_DAGESH_LETTERS.contains(&letter)
}

/// True for `yod`, `lamed`, `mem`, `nun`, `resh`.
#[inline]
pub fn is_sonorant(letter: Symbol) -> bool {
    SONORANT_LETTERS.contains(&letter)
}

/// True if the letter may be a prefix morpheme.
#[inline]
pub fn is_prefix_morpheme(letter: Symbol) -> bool {
    PREFIX_MORPHEMES.contains(&letter)
}

/// True for the Unicode letters `alef`, `he`, `ayin`.
#[inline]
pub fn is_glottal(letter: char) -> bool {
    GLOTTAL_LETTERS.contains(&letter)
}

/// True if the two letters are equal or share a sound group.
///
/// ```
/// use hebphonics::symbols::{is_similar_sound, Symbol};
///
/// assert!(is_similar_sound(Symbol::Vet, Symbol::Vav));
/// assert!(!is_similar_sound(Symbol::Dalet, Symbol::Resh));
/// ```
pub fn is_similar_sound(a: Symbol, b: Symbol) -> bool {
    a == b
        || SIMILAR_LETTERS
            .iter()
            .any(|group| group.contains(&a) && group.contains(&b))
}

// ============================================================================
// Niqqud categories
// ============================================================================

/// Category of a niqqud symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NiqqudCategory {
    /// Any dagesh or mapiq.
    Dagesh,
    /// Any sheva.
    Sheva,
    /// A compound sheva with a short vowel quality.
    Hataf,
    /// A short vowel.
    Short,
    /// A long vowel.
    Long,
}

impl fmt::Display for NiqqudCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NiqqudCategory::Dagesh => "dagesh",
            NiqqudCategory::Sheva => "sheva",
            NiqqudCategory::Hataf => "hataf",
            NiqqudCategory::Short => "short",
            NiqqudCategory::Long => "long",
        };
        f.write_str(name)
    }
}

/// The niqqud category of a symbol.
///
/// The `-male-` spellings of tsere, segol, patah, qamats and holam are left
/// uncategorized.
pub fn category_of(symbol: Symbol) -> Option<NiqqudCategory> {
    use NiqqudCategory::*;
    use Symbol as S;
    let category = match symbol {
        S::Mapiq | S::Dagesh | S::DageshQal | S::DageshHazaq => Dagesh,

        S::Sheva
        | S::ShevaNa
        | S::ShevaNaMute
        | S::ShevaNah
        | S::ShevaNahVoiced
        | S::ShevaGaya
        | S::ShevaMerahef => Sheva,

        S::HatafSegol | S::HatafPatah | S::HatafQamats => Hataf,

        S::Hiriq | S::Segol | S::Patah | S::PatahGenuvah | S::QamatsQatan | S::Qubuts => Short,

        S::HiriqMaleYod
        | S::Tsere
        | S::Qamats
        | S::QamatsGadol
        | S::Holam
        | S::HolamHaser
        | S::HolamMaleVav
        | S::Shuruq => Long,

        _ => return None,
    };
    Some(category)
}

/// True if the symbol is a genuine vowel (hataf, short, or long).
///
/// Sheva is not a vowel.
#[inline]
pub fn is_vowel(symbol: Symbol) -> bool {
    matches!(
        category_of(symbol),
        Some(NiqqudCategory::Hataf | NiqqudCategory::Short | NiqqudCategory::Long)
    )
}

/// [`is_vowel`] over an optional vowel slot.
#[inline]
pub fn is_vowel_opt(symbol: Option<Symbol>) -> bool {
    symbol.is_some_and(is_vowel)
}

/// True if the optional vowel is short or hataf.
#[inline]
pub fn is_short_or_hataf(symbol: Option<Symbol>) -> bool {
    matches!(
        symbol.and_then(category_of),
        Some(NiqqudCategory::Short | NiqqudCategory::Hataf)
    )
}
