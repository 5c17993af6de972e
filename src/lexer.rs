//! Grouping Unicode text into per-letter tokens.
//!
//! A [`Token`] is the raw input belonging to one letter: the letter itself,
//! its shin/sin dot, its dagesh, its vowel, and any other points, accents and
//! punctuation that follow it. Tokens are never modified after lexing; the
//! rule engine reads them as context.
//!
//! # Example
//!
//! ```
//! use hebphonics::lexer::{lex, normalize};
//!
//! let tokens = lex(&normalize("בָּרָא")).unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].dagesh, Some('\u{05BC}'));
//! assert_eq!(tokens[2].vowel, None);
//! ```

use std::fmt;

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

use crate::error::{LexError, Result};
use crate::symbols::classes::is_begedkefet;
use crate::symbols::codepoints::{
    classify, CharClass, POINT_METEG, POINT_RAFE, POINT_SHIN_DOT, PUNCTUATION_MAQAF,
};

/// Unicode code points grouped by role around a single letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    /// The base letter.
    pub letter: Option<char>,
    /// Shin or sin dot attached to the letter.
    pub letter_dot: Option<char>,
    /// Dagesh or mapiq.
    pub dagesh: Option<char>,
    /// Vowel point (including sheva and hataf vowels).
    pub vowel: Option<char>,
    /// Other points (meteg, rafe).
    pub points: SmallVec<[char; 2]>,
    /// Cantillation accents.
    pub accents: SmallVec<[char; 2]>,
    /// Punctuation and formatting marks.
    pub puncta: SmallVec<[char; 2]>,
}

impl Token {
    /// A token with nothing in it.
    pub const EMPTY: Token = Token {
        letter: None,
        letter_dot: None,
        dagesh: None,
        vowel: None,
        points: SmallVec::new_const(),
        accents: SmallVec::new_const(),
        puncta: SmallVec::new_const(),
    };

    /// Token for a bare letter.
    pub fn with_letter(letter: char) -> Self {
        Token {
            letter: Some(letter),
            ..Token::default()
        }
    }

    /// True if nothing has been attached to this token.
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
            && self.letter_dot.is_none()
            && self.dagesh.is_none()
            && self.vowel.is_none()
            && self.points.is_empty()
            && self.accents.is_empty()
            && self.puncta.is_empty()
    }

    /// True if the token has a dagesh or mapiq.
    #[inline]
    pub fn has_dagesh(&self) -> bool {
        self.dagesh.is_some()
    }

    /// True if the token carries a meteg.
    #[inline]
    pub fn has_meteg(&self) -> bool {
        self.points.contains(&POINT_METEG)
    }

    /// True if the token carries any cantillation accent.
    #[inline]
    pub fn has_accents(&self) -> bool {
        !self.accents.is_empty()
    }

    /// True if the token carries the given accent.
    #[inline]
    pub fn has_accent(&self, accent: char) -> bool {
        self.accents.contains(&accent)
    }

    /// True if the base letter is one of the BGDKFT letters.
    #[inline]
    pub fn is_begedkefet(&self) -> bool {
        self.letter.is_some_and(is_begedkefet)
    }

    /// True if the base letter is `letter`.
    #[inline]
    pub fn letter_is(&self, letter: char) -> bool {
        self.letter == Some(letter)
    }

    /// True if the letter is a shin carrying the shin dot.
    #[inline]
    pub fn has_shin_dot(&self) -> bool {
        self.letter_dot == Some(POINT_SHIN_DOT)
    }

    /// All code points in this token, in canonical order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letter
            .into_iter()
            .chain(self.letter_dot)
            .chain(self.dagesh)
            .chain(self.vowel)
            .chain(self.points.iter().copied())
            .chain(self.accents.iter().copied())
            .chain(self.puncta.iter().copied())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// Normalize to fully decomposed form (NFKD).
///
/// Presentation forms such as U+FB2A (shin with shin dot) split into a base
/// letter and its points, and combining marks are put in canonical order.
pub fn normalize(text: &str) -> String {
    text.nfkd().collect()
}

/// Group a normalized word into tokens.
///
/// # Errors
///
/// - [`LexError::UnknownCodePoint`] if a code point is not recognized.
/// - [`LexError::MissingLetter`] if points, accents or punctuation are not
///   preceded by a base letter.
pub fn lex(word: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut token = Token::default();

    for (position, ch) in word.chars().enumerate() {
        let class = classify(ch).ok_or_else(|| LexError::UnknownCodePoint {
            word: word.to_string(),
            position,
            code: ch as u32,
        })?;

        match class {
            CharClass::Letter => {
                if !token.is_empty() {
                    tokens.push(close(token, word, position)?);
                }
                token = Token::with_letter(ch);
            }
            CharClass::LetterDot => token.letter_dot = Some(ch),
            CharClass::Dagesh => token.dagesh = Some(ch),
            CharClass::Vowel => token.vowel = Some(ch),
            CharClass::Point => token.points.push(ch),
            CharClass::Accent => token.accents.push(ch),
            CharClass::Punctuation => token.puncta.push(ch),
        }
    }

    if !token.is_empty() {
        tokens.push(close(token, word, word.chars().count())?);
    }
    Ok(tokens)
}

fn close(token: Token, word: &str, position: usize) -> Result<Token> {
    if token.letter.is_none() {
        return Err(LexError::MissingLetter {
            word: word.to_string(),
            position,
        });
    }
    Ok(token)
}

/// True if any token carries an accent or a meteg.
pub fn any_accents(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.has_accents() || t.has_meteg())
}

/// True if any token carries a maqaf.
pub fn any_maqaf(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.puncta.contains(&PUNCTUATION_MAQAF))
}

/// Keep only letters and points, dropping meteg and rafe.
///
/// The text is normalized first, so presentation forms keep their letter
/// and the output is in canonical order.
///
/// ```
/// use hebphonics::lexer::strip;
///
/// assert_eq!(strip("\u{05D0}\u{05B7}"), "\u{05D0}\u{05B7}");
/// assert_eq!(strip("\u{05D0}/"), "\u{05D0}");
/// assert_eq!(strip("\u{FB2A}\u{05B8}"), "\u{05E9}\u{05B8}\u{05C1}");
/// ```
pub fn strip(text: &str) -> String {
    text.nfkd()
        .filter(|&ch| {
            !matches!(ch, POINT_METEG | POINT_RAFE)
                && matches!(
                    classify(ch),
                    Some(
                        CharClass::Letter
                            | CharClass::LetterDot
                            | CharClass::Dagesh
                            | CharClass::Vowel
                            | CharClass::Point
                    )
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::codepoints::*;

    #[test]
    fn test_lex_empty() {
        assert_eq!(lex("").unwrap(), vec![]);
    }

    #[test]
    fn test_lex_accents() {
        // וְיִקָּרֵ֤א
        let word = normalize("\u{05D5}\u{05B0}\u{05D9}\u{05B4}\u{05E7}\u{05BC}\u{05B8}\u{05E8}\u{05B5}\u{05A4}\u{05D0}");
        let tokens = lex(&word).unwrap();

        let expected = vec![
            Token { vowel: Some(POINT_SHEVA), ..Token::with_letter(LETTER_VAV) },
            Token { vowel: Some(POINT_HIRIQ), ..Token::with_letter(LETTER_YOD) },
            Token {
                dagesh: Some(POINT_DAGESH_OR_MAPIQ),
                vowel: Some(POINT_QAMATS),
                ..Token::with_letter('\u{05E7}')
            },
            Token {
                vowel: Some(POINT_TSERE),
                accents: smallvec::smallvec![ACCENT_MAHAPAKH],
                ..Token::with_letter('\u{05E8}')
            },
            Token::with_letter(LETTER_ALEF),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_lex_shin_dot_stays_with_letter() {
        let tokens = lex(&normalize("\u{FB2C}\u{05B8}")).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].letter, Some(LETTER_SHIN));
        assert!(tokens[0].has_shin_dot());
        assert!(tokens[0].has_dagesh());
        assert_eq!(tokens[0].vowel, Some(POINT_QAMATS));
    }

    #[test]
    fn test_lex_points_and_puncta() {
        let tokens = lex("\u{05D1}\u{05BD}\u{05B0}\u{05BE}").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].has_meteg());
        assert_eq!(tokens[0].vowel, Some(POINT_SHEVA));
        assert_eq!(tokens[0].puncta.as_slice(), &[PUNCTUATION_MAQAF]);
        assert!(any_maqaf(&tokens));
        assert!(any_accents(&tokens));
    }

    #[test]
    fn test_lex_unknown_code_point() {
        let err = lex("\u{05D0}x").unwrap_err();
        assert_eq!(
            err,
            LexError::UnknownCodePoint {
                word: "\u{05D0}x".to_string(),
                position: 1,
                code: 'x' as u32,
            }
        );
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn test_lex_missing_letter() {
        let err = lex("\u{0591}\u{05D0}").unwrap_err();
        assert!(matches!(err, LexError::MissingLetter { position: 1, .. }));

        let err = lex("\u{05B8}").unwrap_err();
        assert!(matches!(err, LexError::MissingLetter { position: 1, .. }));
        assert_eq!(err.word(), "\u{05B8}");
    }

    #[test]
    fn test_token_display_roundtrip() {
        let word = normalize("\u{FB2A}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}");
        let tokens = lex(&word).unwrap();
        let joined: String = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(normalize(&joined), word);
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("\u{FB2C}\u{05B8}\u{05D1}\u{05BC}");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("\u{05D0}\u{05BD}\u{05B8}\u{0591}"), "\u{05D0}\u{05B8}");
        assert_eq!(strip("\u{05D1}\u{05BF} \u{05D2}"), "\u{05D1}\u{05D2}");
    }

    #[test]
    fn test_strip_keeps_presentation_form_letters() {
        // U+FB2A shin with shin dot, U+FB4B vav with holam
        let stripped = strip("\u{FB2A}\u{05B8}\u{05DC}\u{FB4B}\u{05DD}");
        assert_eq!(stripped, normalize("\u{05E9}\u{05C1}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}"));
        assert!(stripped.chars().all(|ch| classify(ch) != Some(CharClass::Punctuation)));
    }
}
