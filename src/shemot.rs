//! Detecting the seven names of God.
//!
//! Writing one of these names carries religious obligations, so a display
//! layer will often want to hide them. Detection is a single regular
//! expression over the pointed text, one alternative per name.
//!
//! Several alternatives use character classes like `[ָ|ַ]`. Inside a
//! class the `|` is a literal, so these also match a pipe character. They
//! are kept as they have always been written.
//!
//! Text is normalized before matching, so the patterns list marks in
//! canonical order: a vowel before `dagesh`, and `dagesh` before the shin
//! dot.

use lazy_static::lazy_static;
use regex::Regex;

use crate::lexer::normalize;

/// Patterns for the seven names, in the order they are tried.
pub const PATTERNS: &[(&str, &str)] = &[
    ("elokah", r"\x{05D0}(\x{05B1})?\x{05DC}(\x{05D5})?\x{05B9}\x{05D4}"),
    (
        "adnuth",
        r"\x{05D0}(.)?\x{05D3}(\x{05D5})?\x{05B9}\x{05E0}[\x{05B8}|\x{05B7}]\x{05D9}$",
    ),
    (
        "havayah",
        r"\x{05D9}(\x{05B0}|\x{05B1}|\x{05B2})?(\x{05BC})?\x{05D4}(\x{05B9})?\x{05D5}[\x{05B8}|\x{05B4}]\x{05D4}",
    ),
    (
        "shakai",
        r"([^\x{05D9}]|^)\x{05E9}[\x{05B7}|\x{05B8}]\x{05C1}\x{05D3}[\x{05B8}|\x{05B7}](\x{05BC})?\x{05D9}$",
    ),
    ("kel", r"^\x{05D0}\x{05B5}\x{05DC}(.)?$"),
    ("kah", r"^\x{05D9}\x{05B8}\x{05D4}\x{05BC}$"),
    ("tzvakot", r"^\x{05E6}\x{05B0}\x{05D1}\x{05B8}\x{05D0}\x{05D5}\x{05B9}\x{05EA}$"),
];

lazy_static! {
    static ref RE_SHEMOT: Regex = {
        let alternatives: Vec<String> = PATTERNS
            .iter()
            .map(|(name, pattern)| format!("(?P<{name}>{pattern})"))
            .collect();
        Regex::new(&format!("(?i){}", alternatives.join("|")))
            .expect("sacred-name patterns are valid")
    };
}

/// True if `text` contains one of the seven names.
///
/// `text` should be stripped of accents (see [`crate::lexer::strip`]). Marks
/// may come in any order.
///
/// ```
/// use hebphonics::shemot::is_sacred_name;
///
/// assert!(is_sacred_name("אֵל"));
/// assert!(!is_sacred_name("אֵלַי"));
/// ```
pub fn is_sacred_name(text: &str) -> bool {
    RE_SHEMOT.is_match(&normalize(text))
}

/// The name matched in `text`, if any.
///
/// ```
/// use hebphonics::shemot::sacred_name;
///
/// assert_eq!(sacred_name("אֵל"), Some("kel"));
/// assert_eq!(sacred_name("אֵלַי"), None);
/// ```
pub fn sacred_name(text: &str) -> Option<&'static str> {
    let text = normalize(text);
    let captures = RE_SHEMOT.captures(&text)?;
    PATTERNS
        .iter()
        .map(|&(name, _)| name)
        .find(|name| captures.name(name).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kel() {
        assert!(is_sacred_name("אֵל"));
        assert!(!is_sacred_name("אֵלַי"));
        assert_eq!(sacred_name("אֵל"), Some("kel"));
    }

    #[test]
    fn test_elokim() {
        assert!(is_sacred_name("אֱלֹהִים"));
        assert_eq!(sacred_name("אֱלֹהִים"), Some("elokah"));
    }

    #[test]
    fn test_tzvakot() {
        assert!(is_sacred_name("צְבָאוֹת"));
        assert_eq!(sacred_name("צְבָאוֹת"), Some("tzvakot"));
    }

    #[test]
    fn test_pipe_in_class_is_literal() {
        // adnuth with a pipe where the vowel under nun would be
        let adnuth = "\u{05D0}\u{05D3}\u{05B9}\u{05E0}|\u{05D9}";
        assert!(is_sacred_name(adnuth));
    }

    #[test]
    fn test_ordinary_words() {
        assert!(!is_sacred_name("שָׁלוֹם"));
        assert!(!is_sacred_name("בָּרָא"));
        assert_eq!(sacred_name("בָּרָא"), None);
    }

    #[test]
    fn test_mark_order_does_not_matter() {
        // as typed: shin, shin dot, patah, dalet, dagesh, qamats, yod
        let typed = "\u{05E9}\u{05C1}\u{05B7}\u{05D3}\u{05BC}\u{05B8}\u{05D9}";
        assert_eq!(sacred_name(typed), Some("shakai"));
        assert_eq!(sacred_name(&normalize(typed)), Some("shakai"));

        // yod with dagesh and sheva, in both orders
        assert!(is_sacred_name("\u{05D9}\u{05BC}\u{05B0}\u{05D4}\u{05D5}\u{05B8}\u{05D4}"));
        assert!(is_sacred_name("\u{05D9}\u{05B0}\u{05BC}\u{05D4}\u{05D5}\u{05B8}\u{05D4}"));
    }

    #[test]
    fn test_every_name_is_reported() {
        let cases = [
            ("\u{05D0}\u{05B1}\u{05DC}\u{05B9}\u{05D4}\u{05B4}\u{05D9}\u{05DD}", "elokah"),
            ("\u{05D0}\u{05B2}\u{05D3}\u{05B9}\u{05E0}\u{05B8}\u{05D9}", "adnuth"),
            ("\u{05D9}\u{05B0}\u{05D4}\u{05D5}\u{05B8}\u{05D4}", "havayah"),
            ("\u{05E9}\u{05C1}\u{05B7}\u{05D3}\u{05BC}\u{05B8}\u{05D9}", "shakai"),
            ("\u{05D0}\u{05B5}\u{05DC}", "kel"),
            ("\u{05D9}\u{05B8}\u{05D4}\u{05BC}", "kah"),
            ("\u{05E6}\u{05B0}\u{05D1}\u{05B8}\u{05D0}\u{05D5}\u{05B9}\u{05EA}", "tzvakot"),
        ];
        for (text, name) in cases {
            assert_eq!(sacred_name(text), Some(name), "{}", text);
        }
    }
}
