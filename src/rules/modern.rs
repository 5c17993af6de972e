//! Modern pronunciation of `sheva`.
//!
//! Modern Hebrew voices a word-initial `sheva-na` only under certain
//! conditions and mutes it otherwise. These rules run after the
//! traditional classification and only record which condition holds: the
//! cluster is left unchanged, so the trace carries the modern reading
//! without disturbing the traditional one.

use super::Rule;
use crate::grammar::RuleContext;
use crate::symbols::Symbol::ShevaNa;
use crate::symbols::{is_glottal, is_prefix_morpheme, is_similar_sound, is_sonorant};

/// Rules of the `sheva2` stage.
pub const RULES: &[Rule] = &[
    Rule::new("sheva-modern-double-sound", double_sound),
    Rule::new("sheva-modern-voiced-sonorant", voiced_sonorant),
    Rule::new("sheva-modern-voiced-before-glottal", voiced_before_glottal),
    Rule::new("sheva-modern-voiced-prefix", voiced_prefix),
    Rule::new("sheva-modern-muted", muted),
];

fn initial_sheva_na(ctx: &RuleContext<'_>) -> bool {
    ctx.isfirst && ctx.guess().vowel_is(ShevaNa)
}

/// Any `sheva` before a letter with the same sound is voiced (`שָׁדַדְתְּ`).
///
/// This would take precedence over `sheva-double-end`.
fn double_sound(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let guess = ctx.guess();
    let (letter, next) = (guess.letter?, ctx.next_guess().letter?);
    (guess.has_sheva() && is_similar_sound(letter, next)).then_some(ctx.idx)
}

/// Initial `sheva-na` on a sonorant is voiced.
fn voiced_sonorant(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let sonorant = ctx.guess().letter.is_some_and(is_sonorant);
    (initial_sheva_na(ctx) && sonorant).then_some(ctx.idx)
}

/// Initial `sheva-na` before `alef`, `he` or `ayin` is voiced.
fn voiced_before_glottal(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let glottal = ctx.next_token().letter.is_some_and(is_glottal);
    (initial_sheva_na(ctx) && glottal).then_some(ctx.idx)
}

/// Initial `sheva-na` on a letter that may be a prefix is voiced.
///
/// Whether the letter really is a prefix or part of the root is not known.
fn voiced_prefix(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let prefix = ctx.guess().letter.is_some_and(is_prefix_morpheme);
    (initial_sheva_na(ctx) && prefix).then_some(ctx.idx)
}

/// Any other initial `sheva-na` is muted.
fn muted(ctx: &mut RuleContext<'_>) -> Option<usize> {
    initial_sheva_na(ctx).then_some(ctx.idx)
}
