//! Error types for lexing Hebrew words.
//!
//! The rule engine itself never fails: an unmatched position keeps its
//! initial guess. The only fatal conditions are at the lexer boundary.

use thiserror::Error;

/// Errors that can occur while grouping a word into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The word contains a code point the symbol table does not recognize.
    ///
    /// `position` is the character index within the normalized word.
    #[error("unrecognized code point U+{code:04X} at position {position} in {word:?}")]
    UnknownCodePoint {
        /// The word being lexed.
        word: String,
        /// Character index of the offending code point.
        position: usize,
        /// The offending code point.
        code: u32,
    },

    /// A token carries points, accents or punctuation but no base letter
    /// (e.g. a stray leading accent).
    #[error("token ending at position {position} in {word:?} has no base letter")]
    MissingLetter {
        /// The word being lexed.
        word: String,
        /// Character index where the letterless token was closed.
        position: usize,
    },
}

impl LexError {
    /// The word that failed to lex.
    pub fn word(&self) -> &str {
        match self {
            LexError::UnknownCodePoint { word, .. } | LexError::MissingLetter { word, .. } => word,
        }
    }

    /// Character position of the failure within the word.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnknownCodePoint { position, .. } | LexError::MissingLetter { position, .. } => {
                *position
            }
        }
    }
}

/// A specialized `Result` type for lexing and parsing.
pub type Result<T> = std::result::Result<T, LexError>;
