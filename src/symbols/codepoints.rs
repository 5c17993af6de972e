//! Unicode code points the lexer recognizes and their lexical roles.
//!
//! Recognized input is the Hebrew block (U+0590..U+05F3), the Hebrew
//! presentation forms (U+FB1D..U+FB4E), and a handful of characters that
//! occur in published texts: space, solidus (a morphological divider),
//! the combining grapheme joiner and the zero-width/directional marks.

use super::catalog::Symbol;

// ============================================================================
// Code point constants
// ============================================================================

/// HEBREW POINT SHEVA
pub const POINT_SHEVA: char = '\u{05B0}';
/// HEBREW POINT HATAF SEGOL
pub const POINT_HATAF_SEGOL: char = '\u{05B1}';
/// HEBREW POINT HATAF PATAH
pub const POINT_HATAF_PATAH: char = '\u{05B2}';
/// HEBREW POINT HATAF QAMATS
pub const POINT_HATAF_QAMATS: char = '\u{05B3}';
/// HEBREW POINT HIRIQ
pub const POINT_HIRIQ: char = '\u{05B4}';
/// HEBREW POINT TSERE
pub const POINT_TSERE: char = '\u{05B5}';
/// HEBREW POINT SEGOL
pub const POINT_SEGOL: char = '\u{05B6}';
/// HEBREW POINT PATAH
pub const POINT_PATAH: char = '\u{05B7}';
/// HEBREW POINT QAMATS
pub const POINT_QAMATS: char = '\u{05B8}';
/// HEBREW POINT HOLAM
pub const POINT_HOLAM: char = '\u{05B9}';
/// HEBREW POINT HOLAM HASER FOR VAV
pub const POINT_HOLAM_HASER_FOR_VAV: char = '\u{05BA}';
/// HEBREW POINT QUBUTS
pub const POINT_QUBUTS: char = '\u{05BB}';
/// HEBREW POINT DAGESH OR MAPIQ
pub const POINT_DAGESH_OR_MAPIQ: char = '\u{05BC}';
/// HEBREW POINT METEG
pub const POINT_METEG: char = '\u{05BD}';
/// HEBREW POINT RAFE
pub const POINT_RAFE: char = '\u{05BF}';
/// HEBREW POINT SHIN DOT
pub const POINT_SHIN_DOT: char = '\u{05C1}';
/// HEBREW POINT SIN DOT
pub const POINT_SIN_DOT: char = '\u{05C2}';
/// HEBREW POINT QAMATS QATAN
pub const POINT_QAMATS_QATAN: char = '\u{05C7}';
/// HEBREW POINT JUDEO-SPANISH VARIKA
pub const POINT_VARIKA: char = '\u{FB1E}';

/// HEBREW PUNCTUATION MAQAF
pub const PUNCTUATION_MAQAF: char = '\u{05BE}';
/// HEBREW PUNCTUATION SOF PASUQ
pub const PUNCTUATION_SOF_PASUQ: char = '\u{05C3}';

/// HEBREW ACCENT TELISHA GEDOLA
pub const ACCENT_TELISHA_GEDOLA: char = '\u{05A0}';
/// HEBREW ACCENT MUNAH
pub const ACCENT_MUNAH: char = '\u{05A3}';
/// HEBREW ACCENT MAHAPAKH
pub const ACCENT_MAHAPAKH: char = '\u{05A4}';

/// HEBREW LETTER ALEF
pub const LETTER_ALEF: char = '\u{05D0}';
/// HEBREW LETTER BET
pub const LETTER_BET: char = '\u{05D1}';
/// HEBREW LETTER GIMEL
pub const LETTER_GIMEL: char = '\u{05D2}';
/// HEBREW LETTER DALET
pub const LETTER_DALET: char = '\u{05D3}';
/// HEBREW LETTER HE
pub const LETTER_HE: char = '\u{05D4}';
/// HEBREW LETTER VAV
pub const LETTER_VAV: char = '\u{05D5}';
/// HEBREW LETTER YOD
pub const LETTER_YOD: char = '\u{05D9}';
/// HEBREW LETTER FINAL KAF
pub const LETTER_FINAL_KAF: char = '\u{05DA}';
/// HEBREW LETTER KAF
pub const LETTER_KAF: char = '\u{05DB}';
/// HEBREW LETTER AYIN
pub const LETTER_AYIN: char = '\u{05E2}';
/// HEBREW LETTER FINAL PE
pub const LETTER_FINAL_PE: char = '\u{05E3}';
/// HEBREW LETTER PE
pub const LETTER_PE: char = '\u{05E4}';
/// HEBREW LETTER SHIN
pub const LETTER_SHIN: char = '\u{05E9}';
/// HEBREW LETTER TAV
pub const LETTER_TAV: char = '\u{05EA}';

// ============================================================================
// Lexical roles
// ============================================================================

/// The lexical role of a recognized code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A base letter; starts a new token.
    Letter,
    /// Shin or sin dot; part of the letter's identity.
    LetterDot,
    /// Dagesh or mapiq.
    Dagesh,
    /// A vowel point (including sheva and the hataf vowels).
    Vowel,
    /// Any other point (meteg, rafe, varika).
    Point,
    /// A cantillation accent.
    Accent,
    /// Punctuation, marks, and formatting characters.
    Punctuation,
}

/// Classify a code point, or `None` if it is not recognized.
pub fn classify(ch: char) -> Option<CharClass> {
    use CharClass::*;
    let class = match ch {
        '\u{05D0}'..='\u{05EA}' => Letter,
        POINT_SHIN_DOT | POINT_SIN_DOT => LetterDot,
        POINT_DAGESH_OR_MAPIQ => Dagesh,
        '\u{05B0}'..='\u{05BB}' | POINT_QAMATS_QATAN => Vowel,
        POINT_METEG | POINT_RAFE | POINT_VARIKA => Point,
        '\u{0591}'..='\u{05AE}' => Accent,
        // masora circle, maqaf, paseq, sof pasuq, upper/lower dot, nun hafukha
        '\u{05AF}' | '\u{05BE}' | '\u{05C0}' | '\u{05C3}'..='\u{05C6}' => Punctuation,
        // yod triangle, yiddish ligatures, geresh
        '\u{05EF}'..='\u{05F3}' => Punctuation,
        // presentation forms that were not decomposed
        '\u{FB1D}' | '\u{FB1F}'..='\u{FB36}' | '\u{FB38}'..='\u{FB3C}' | '\u{FB3E}'
        | '\u{FB40}' | '\u{FB41}' | '\u{FB43}' | '\u{FB44}' | '\u{FB46}'..='\u{FB4E}' => {
            Punctuation
        }
        ' ' | '/' | '\u{034F}' | '\u{200C}'..='\u{200F}' => Punctuation,
        _ => return None,
    };
    Some(class)
}

/// The grammatical name of a base letter as Unicode names it.
///
/// Final forms are named `{x}-sofit`. `LETTER SHIN` maps to [`Symbol::Sin`];
/// the shin dot is resolved by the initial guess.
pub fn letter_symbol(ch: char) -> Option<Symbol> {
    use Symbol::*;
    let sym = match ch {
        '\u{05D0}' => Alef,
        '\u{05D1}' => Bet,
        '\u{05D2}' => Gimel,
        '\u{05D3}' => Dalet,
        '\u{05D4}' => He,
        '\u{05D5}' => Vav,
        '\u{05D6}' => Zayin,
        '\u{05D7}' => Het,
        '\u{05D8}' => Tet,
        '\u{05D9}' => Yod,
        '\u{05DA}' => KafSofit,
        '\u{05DB}' => Kaf,
        '\u{05DC}' => Lamed,
        '\u{05DD}' => MemSofit,
        '\u{05DE}' => Mem,
        '\u{05DF}' => NunSofit,
        '\u{05E0}' => Nun,
        '\u{05E1}' => Samekh,
        '\u{05E2}' => Ayin,
        '\u{05E3}' => PeSofit,
        '\u{05E4}' => Pe,
        '\u{05E5}' => TsadiSofit,
        '\u{05E6}' => Tsadi,
        '\u{05E7}' => Qof,
        '\u{05E8}' => Resh,
        '\u{05E9}' => Sin,
        '\u{05EA}' => Tav,
        _ => return None,
    };
    Some(sym)
}

/// The grammatical name of a vowel point as Unicode names it.
///
/// `HOLAM HASER FOR VAV` is unambiguous and maps straight to
/// [`Symbol::HolamHaser`]; a plain holam stays [`Symbol::Holam`].
pub fn vowel_symbol(ch: char) -> Option<Symbol> {
    use Symbol::*;
    let sym = match ch {
        POINT_SHEVA => Sheva,
        POINT_HATAF_SEGOL => HatafSegol,
        POINT_HATAF_PATAH => HatafPatah,
        POINT_HATAF_QAMATS => HatafQamats,
        POINT_HIRIQ => Hiriq,
        POINT_TSERE => Tsere,
        POINT_SEGOL => Segol,
        POINT_PATAH => Patah,
        POINT_QAMATS => Qamats,
        POINT_HOLAM => Holam,
        POINT_HOLAM_HASER_FOR_VAV => HolamHaser,
        POINT_QUBUTS => Qubuts,
        POINT_QAMATS_QATAN => QamatsQatan,
        _ => return None,
    };
    Some(sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_block() {
        assert_eq!(classify(LETTER_ALEF), Some(CharClass::Letter));
        assert_eq!(classify(POINT_SIN_DOT), Some(CharClass::LetterDot));
        assert_eq!(classify(POINT_DAGESH_OR_MAPIQ), Some(CharClass::Dagesh));
        assert_eq!(classify(POINT_QAMATS_QATAN), Some(CharClass::Vowel));
        assert_eq!(classify(POINT_HOLAM_HASER_FOR_VAV), Some(CharClass::Vowel));
        assert_eq!(classify(POINT_METEG), Some(CharClass::Point));
        assert_eq!(classify(ACCENT_MUNAH), Some(CharClass::Accent));
        assert_eq!(classify(PUNCTUATION_MAQAF), Some(CharClass::Punctuation));
        assert_eq!(classify('\u{200E}'), Some(CharClass::Punctuation));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify('a'), None);
        assert_eq!(classify('+'), None);
        assert_eq!(classify('\u{0590}'), None);
        assert_eq!(classify('\u{05EB}'), None);
        assert_eq!(classify('\u{FB37}'), None);
    }

    #[test]
    fn test_letter_names() {
        assert_eq!(letter_symbol(LETTER_FINAL_KAF), Some(Symbol::KafSofit));
        assert_eq!(letter_symbol(LETTER_SHIN), Some(Symbol::Sin));
        assert_eq!(letter_symbol(POINT_SHEVA), None);
    }

    #[test]
    fn test_vowel_names() {
        assert_eq!(vowel_symbol(POINT_HATAF_PATAH), Some(Symbol::HatafPatah));
        assert_eq!(vowel_symbol(POINT_HOLAM), Some(Symbol::Holam));
        assert_eq!(vowel_symbol(POINT_HOLAM_HASER_FOR_VAV), Some(Symbol::HolamHaser));
        assert_eq!(vowel_symbol(POINT_DAGESH_OR_MAPIQ), None);
    }
}
