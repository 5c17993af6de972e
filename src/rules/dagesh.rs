//! Rules for `dagesh` and `mapiq`.
//!
//! Unicode has a single code point for every dot inside a letter. These
//! rules decide which one it is:
//!
//! - In a BGDKFT letter it is `dagesh-qal` unless a vowel precedes it, in
//!   which case it doubles the letter (`dagesh-hazaq`).
//! - In a word-final `he` (and, rarely, an `alef`) it is a `mapiq`.
//! - Anywhere else it is `dagesh-hazaq`.
//!
//! A `dagesh-hazaq` doubles its letter, so the syllable before it is closed.

use super::Rule;
use crate::grammar::RuleContext;
use crate::symbols::codepoints::{LETTER_ALEF, LETTER_HE};
use crate::symbols::Symbol::*;
use crate::symbols::{begedkefet, is_non_dagesh, is_vowel_opt};

/// Rules of the `dagesh` stage.
pub const RULES: &[Rule] = &[
    Rule::new("dagesh-none-bgdkft", dagesh_none_bgdkft),
    Rule::new("dagesh-qal-bgdkft", dagesh_qal_bgdkft),
    Rule::new("dagesh-hazaq-bgdkft", dagesh_hazaq_bgdkft),
    Rule::new("dagesh-is-mapiq-alef", dagesh_is_mapiq_alef),
    Rule::new("dagesh-is-mapiq-he", dagesh_is_mapiq_he),
    Rule::new("dagesh-in-guttural", dagesh_in_guttural),
    Rule::new("dagesh-hazaq-default", dagesh_hazaq_default),
];

/// BGDKFT letter without a dagesh takes its soft name (`vet`, `khaf`, ...).
///
/// Source: _Simanim_ 1.3.
fn dagesh_none_bgdkft(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let token = ctx.token();
    if token.has_dagesh() {
        return None;
    }
    let (soft, _) = begedkefet(token.letter?)?;
    ctx.guess_mut().letter = Some(soft);
    Some(ctx.idx)
}

/// `dagesh` in BGDKFT **not** after a vowel is `dagesh-qal`.
///
/// This covers the start of a word and a dagesh after `sheva-nah`.
///
/// Source: _Simanim_ 1.3; Gesenius 13.2 note (a `dagesh-hazaq` is always
/// immediately preceded by a vowel, a `dagesh-qal` never is).
fn dagesh_qal_bgdkft(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let token = ctx.token();
    if !token.has_dagesh() || is_vowel_opt(ctx.prev_guess().vowel) {
        return None;
    }
    let (_, hard) = begedkefet(token.letter?)?;
    let guess = ctx.guess_mut();
    guess.letter = Some(hard);
    guess.dagesh = Some(DageshQal);
    Some(ctx.idx)
}

/// `dagesh` in BGDKFT after a vowel is `dagesh-hazaq`.
///
/// Source: _Simanim_ 1.3; Gesenius 13.2 note.
fn dagesh_hazaq_bgdkft(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let token = ctx.token();
    if !token.has_dagesh() || !is_vowel_opt(ctx.prev_guess().vowel) {
        return None;
    }
    let (_, hard) = begedkefet(token.letter?)?;
    ctx.close_prev();
    let guess = ctx.guess_mut();
    guess.letter = Some(hard);
    guess.dagesh = Some(DageshHazaq);
    Some(ctx.idx)
}

/// `dagesh` in `alef` is `mapiq-alef`, a rare exception to the rule that
/// gutturals take no dagesh.
fn dagesh_is_mapiq_alef(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let token = ctx.token();
    if !(token.letter_is(LETTER_ALEF) && token.has_dagesh()) {
        return None;
    }
    let guess = ctx.guess_mut();
    guess.letter = Some(MapiqAlef);
    guess.dagesh = Some(Mapiq);
    Some(ctx.idx)
}

/// `dagesh` in a word-final `he` is `mapiq-he`: the `he` is pronounced and
/// is not an `eim-qria`.
///
/// Source: _Simanim_ 2.2; _HaMillon_ 1.6.3.
fn dagesh_is_mapiq_he(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let token = ctx.token();
    if !(ctx.islast && token.letter_is(LETTER_HE) && token.has_dagesh()) {
        return None;
    }
    let guess = ctx.guess_mut();
    guess.letter = Some(MapiqHe);
    guess.dagesh = Some(Mapiq);
    Some(ctx.idx)
}

/// `dagesh` in a guttural or `resh` is a non-standard `dagesh-hazaq`.
///
/// Source: _Simanim_ 1.3; Khan I.3.1.1. Treated as marking gemination, so
/// the previous syllable is closed.
fn dagesh_in_guttural(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let guess = ctx.guess();
    if !(guess.letter.is_some_and(is_non_dagesh) && guess.dagesh.is_some()) {
        return None;
    }
    ctx.close_prev();
    ctx.guess_mut().dagesh = Some(DageshHazaq);
    Some(ctx.idx)
}

/// Any remaining `dagesh` is `dagesh-hazaq`; only BGDKFT can take `dagesh-qal`.
fn dagesh_hazaq_default(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !ctx.guess().dagesh_is(Dagesh) {
        return None;
    }
    ctx.close_prev();
    ctx.guess_mut().dagesh = Some(DageshHazaq);
    Some(ctx.idx)
}
