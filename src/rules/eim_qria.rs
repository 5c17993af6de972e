//! Letters that are not voiced as consonants.
//!
//! The `vav` stage runs first: a `vav` carrying only a dagesh or a holam is
//! really the vowel of the letter before it, so that letter takes the vowel
//! and the `vav` cluster is reset. The `eim-qria` stage then marks bare
//! `alef`, `he` and `yod` after a matching vowel as silent vowel letters.

use super::Rule;
use crate::grammar::RuleContext;
use crate::symbols::Symbol::{self, *};

/// Rules of the `vav` stage.
pub const VAV_RULES: &[Rule] = &[
    Rule::new("eim-qria-vav-is-shuruq-start", vav_is_shuruq_start),
    Rule::new("eim-qria-vav-is-shuruq-middle", vav_is_shuruq_middle),
    Rule::new("eim-qria-vav-is-holam-male", vav_is_holam_male),
];

/// Rules of the `eim-qria` stage.
pub const RULES: &[Rule] = &[
    Rule::new("eim-qria-yod-is-hiriq-male", hiriq_male),
    Rule::new("eim-qria-alef", eim_qria_alef),
    Rule::new("eim-qria-he", eim_qria_he),
    Rule::new("eim-qria-yod", eim_qria_yod),
];

// ============================================================================
// vav: shuruq, holam-male
// ============================================================================

/// `vav` with `dagesh` and no vowel at the start of a word is `shuruq`.
///
/// Source: _Simanim_ 5.1 (the word-initial shuruq, read as if an `alef`
/// preceded it).
fn vav_is_shuruq_start(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let guess = ctx.guess();
    if !(ctx.isfirst && guess.letter_is(Vav) && guess.dagesh.is_some() && guess.vowel.is_none()) {
        return None;
    }
    let guess = ctx.guess_mut();
    guess.reset();
    guess.vowel = Some(Shuruq);
    guess.isopen = true;
    Some(ctx.idx)
}

/// A letter without a vowel followed by `vav` + `dagesh` (no vowel) takes
/// `shuruq`; the `vav` is absorbed.
///
/// Source: _Simanim_ 2.1; _HaMillon_ 1.3; Gesenius 12.1 note.
fn vav_is_shuruq_middle(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let next = ctx.next_guess();
    let is_shuruq = next.letter_is(Vav) && next.dagesh.is_some() && next.vowel.is_none();
    absorb_vav(ctx, is_shuruq, Shuruq)
}

/// A letter without a vowel followed by `vav` + `holam` (no dagesh) takes
/// `holam-male-vav`; the `vav` is absorbed.
///
/// Source: _Simanim_ 2.1; _HaMillon_ 1.3.
fn vav_is_holam_male(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let next = ctx.next_guess();
    let is_holam = next.letter_is(Vav) && next.vowel_is(Holam) && next.dagesh.is_none();
    absorb_vav(ctx, is_holam, HolamMaleVav)
}

fn absorb_vav(ctx: &mut RuleContext<'_>, next_matches: bool, vowel: Symbol) -> Option<usize> {
    if ctx.guess().vowel.is_some() || !next_matches {
        return None;
    }
    let next = ctx.next_idx()?;
    ctx.guesses[next].reset();
    let guess = ctx.guess_mut();
    guess.vowel = Some(vowel);
    guess.isopen = true;
    Some(ctx.idx)
}

// ============================================================================
// eim-qria
// ============================================================================

const ALEF_VOWELS: &[Symbol] = &[
    Qamats,
    QamatsGadol,
    Patah,
    Segol,
    Tsere,
    Holam,
    HolamHaser,
    Shuruq,
];

const HE_VOWELS: &[Symbol] = &[Qamats, QamatsGadol, Patah, Segol, Tsere, Holam, HolamHaser];

const YOD_VOWELS: &[Symbol] = &[Hiriq, Segol, Tsere];

/// `hiriq` before a bare `yod` is `hiriq-male-yod`.
///
/// Source: _Simanim_ 1.1. With a `yod` the hiriq is long; without one it is short.
fn hiriq_male(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(ctx.guess().vowel_is(Hiriq) && ctx.next_guess().is_bare(Yod)) {
        return None;
    }
    let next = ctx.next_idx()?;
    let yod = &mut ctx.guesses[next];
    yod.letter = Some(EimQriaYod);
    yod.isopen = true;
    ctx.guess_mut().vowel = Some(HiriqMaleYod);
    Some(ctx.idx)
}

/// Bare `alef` after `qamats`, `patah`, `segol`, `tsere`, `holam` or
/// `shuruq` is `eim-qria-alef`.
///
/// Source: _HaMillon_ 1.3.
fn eim_qria_alef(ctx: &mut RuleContext<'_>) -> Option<usize> {
    mark_silent(ctx, Alef, ALEF_VOWELS, EimQriaAlef)
}

/// Bare `he` after `qamats`, `patah`, `segol`, `tsere` or `holam` is
/// `eim-qria-he`.
///
/// Source: _HaMillon_ 1.3.
fn eim_qria_he(ctx: &mut RuleContext<'_>) -> Option<usize> {
    mark_silent(ctx, He, HE_VOWELS, EimQriaHe)
}

/// Bare `yod` after `hiriq`, `segol` or `tsere` is `eim-qria-yod`.
///
/// Source: _HaMillon_ 1.3.
fn eim_qria_yod(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !ctx.guess().vowel_in(YOD_VOWELS) {
        return None;
    }
    let next = ctx.next_idx()?;
    if !ctx.guesses[next].is_bare(Yod) {
        return None;
    }
    let yod = &mut ctx.guesses[next];
    yod.letter = Some(EimQriaYod);
    yod.isopen = true;
    Some(next)
}

/// The letter after an absorbed `vav` sits two positions on.
fn mark_silent(
    ctx: &mut RuleContext<'_>,
    letter: Symbol,
    vowels: &[Symbol],
    silent: Symbol,
) -> Option<usize> {
    if !ctx.guess().vowel_in(vowels) {
        return None;
    }
    let target = if ctx.next_guess().is_empty() {
        ctx.idx + 2
    } else {
        ctx.idx + 1
    };
    let cluster = ctx.at_mut(target)?;
    if !cluster.is_bare(letter) {
        return None;
    }
    cluster.letter = Some(silent);
    cluster.isopen = true;
    Some(target)
}
