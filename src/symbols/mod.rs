//! Symbol table: grammatical names, their Unicode forms, and letter classes.
//!
//! # Modules
//!
//! - [`catalog`] - The closed [`Symbol`] catalog with [`render`] and [`from_names`]
//! - [`codepoints`] - Recognized code points and their lexical roles
//! - [`classes`] - BGDKFT, guttural, sonorant and similar-sound classes; niqqud categories
//! - [`names`] - Spelling-variant lookup via [`normalize_name`]

pub mod catalog;
pub mod classes;
pub mod codepoints;
pub mod names;

pub use catalog::{from_names, render, Symbol, UnknownSymbol};
pub use classes::{
    begedkefet, category_of, is_begedkefet, is_glottal, is_guttural, is_non_dagesh,
    is_prefix_morpheme, is_short_or_hataf, is_similar_sound, is_sonorant, is_vowel, is_vowel_opt,
    NiqqudCategory,
};
pub use names::normalize_name;
