//! Numerical value of Hebrew text.
//!
//! Each letter has a fixed value: the units `alef` through `tet`, the tens
//! `yod` through `tsadi`, and the hundreds `qof` through `tav`. Final forms
//! count the same as their base letter. Anything that is not a letter
//! counts zero.

use unicode_normalization::UnicodeNormalization;

/// The value of a single Unicode letter, or 0.
pub fn letter_value(ch: char) -> u32 {
    match ch {
        '\u{05D0}' => 1,         // alef
        '\u{05D1}' => 2,         // bet
        '\u{05D2}' => 3,         // gimel
        '\u{05D3}' => 4,         // dalet
        '\u{05D4}' => 5,         // he
        '\u{05D5}' => 6,         // vav
        '\u{05D6}' => 7,         // zayin
        '\u{05D7}' => 8,         // het
        '\u{05D8}' => 9,         // tet
        '\u{05D9}' => 10,        // yod
        '\u{05DA}' | '\u{05DB}' => 20, // kaf
        '\u{05DC}' => 30,        // lamed
        '\u{05DD}' | '\u{05DE}' => 40, // mem
        '\u{05DF}' | '\u{05E0}' => 50, // nun
        '\u{05E1}' => 60,        // samekh
        '\u{05E2}' => 70,        // ayin
        '\u{05E3}' | '\u{05E4}' => 80, // pe
        '\u{05E5}' | '\u{05E6}' => 90, // tsadi
        '\u{05E7}' => 100,       // qof
        '\u{05E8}' => 200,       // resh
        '\u{05E9}' => 300,       // shin
        '\u{05EA}' => 400,       // tav
        _ => 0,
    }
}

/// Sum of the letter values in `text`.
///
/// Presentation forms (e.g. U+FB2A shin with shin dot) are decomposed first
/// so they count as their base letter.
///
/// ```
/// use hebphonics::gematria::gematria;
///
/// assert_eq!(gematria("שָׁלוֹם"), 376);
/// assert_eq!(gematria("hello"), 0);
/// ```
pub fn gematria(text: &str) -> u32 {
    text.nfkd().map(letter_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finals_equal_base() {
        assert_eq!(letter_value('\u{05DA}'), letter_value('\u{05DB}'));
        assert_eq!(letter_value('\u{05DD}'), letter_value('\u{05DE}'));
        assert_eq!(letter_value('\u{05DF}'), letter_value('\u{05E0}'));
        assert_eq!(letter_value('\u{05E3}'), letter_value('\u{05E4}'));
        assert_eq!(letter_value('\u{05E5}'), letter_value('\u{05E6}'));
    }

    #[test]
    fn test_points_are_zero() {
        assert_eq!(gematria("\u{05B8}\u{05BC}\u{0591}"), 0);
        assert_eq!(gematria("\u{05D0}\u{05B8}"), 1);
    }

    #[test]
    fn test_presentation_form() {
        // U+FB2A is shin with shin dot
        assert_eq!(gematria("\u{FB2A}"), 300);
    }

    #[test]
    fn test_words() {
        assert_eq!(gematria("שָׁלוֹם"), 376);
        assert_eq!(gematria("אֱמֶת"), 441);
    }
}
