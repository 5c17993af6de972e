//! General vowel rules: `holam-haser`, `patah-genuvah`, and glides.
//!
//! A glide is a bare `yod` that forms a diphthong with the vowel before it
//! (`ai`, `av`, `oy`, `uy`). The glide rules are unrolled one per vowel so
//! each gets its own trace entry.

use super::Rule;
use crate::grammar::RuleContext;
use crate::symbols::Symbol::*;

/// Rules of the `vowel` stage.
pub const RULES: &[Rule] = &[
    Rule::new("vowel-holam-haser-default", holam_haser_default),
    Rule::new("vowel-patah-genuvah", patah_genuvah),
    Rule::new("glide-av", glide_av),
    Rule::new("glide-ai-qamats", glide_ai_qamats),
    Rule::new("glide-ai-patah", glide_ai_patah),
    Rule::new("glide-aiy", glide_aiy),
    Rule::new("glide-oy", glide_oy),
    Rule::new("glide-uy", glide_uy),
];

/// Any `holam` that is not a `holam-male` is `holam-haser`.
fn holam_haser_default(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !ctx.guess().vowel_is(Holam) {
        return None;
    }
    let guess = ctx.guess_mut();
    guess.vowel = Some(HolamHaser);
    guess.isopen = true;
    Some(ctx.idx)
}

/// `patah` under a word-final `het`, `ayin` or `mapiq-he` is `patah-genuvah`.
///
/// Source: _Simanim_ 5.1. It is read as though an `alef` with `patah` came
/// before the letter, so the letter itself closes the syllable.
fn patah_genuvah(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let guess = ctx.guess();
    if !(ctx.islast && guess.letter_in(&[Het, Ayin, MapiqHe]) && guess.vowel_is(Patah)) {
        return None;
    }
    let guess = ctx.guess_mut();
    guess.vowel = Some(PatahGenuvah);
    guess.isopen = false;
    Some(ctx.idx)
}

/// Bare `yod` after `qamats` and before a bare `vav` is `yod-glide`.
fn glide_av(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.guess().vowel_in(&[Qamats, QamatsGadol])
        && ctx.next_guess().is_bare(Yod)
        && ctx.next_guess2().is_bare(Vav);
    glide(ctx, fires, 1)
}

/// Bare `yod` after `qamats` is `yod-glide`.
fn glide_ai_qamats(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.guess().vowel_is(Qamats) && ctx.next_guess().is_bare(Yod);
    glide(ctx, fires, 1)
}

/// Bare `yod` after `patah` is `yod-glide`.
fn glide_ai_patah(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.guess().vowel_is(Patah) && ctx.next_guess().is_bare(Yod);
    glide(ctx, fires, 1)
}

/// `yod` with `hiriq` after `patah` is `yod-glide`.
fn glide_aiy(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let next = ctx.next_guess();
    let fires = ctx.guess().vowel_is(Patah) && next.letter_is(Yod) && next.vowel_is(Hiriq);
    glide(ctx, fires, 1)
}

/// Bare `yod` after `holam-male-vav` is `yod-glide`.
///
/// The `vav` was absorbed, so the `yod` is two positions on.
fn glide_oy(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.guess().vowel_is(HolamMaleVav) && ctx.next_guess2().is_bare(Yod);
    glide(ctx, fires, 2)
}

/// Bare `yod` after a mid-word `shuruq` is `yod-glide`.
fn glide_uy(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.idx >= 1 && ctx.guess().vowel_is(Shuruq) && ctx.next_guess2().is_bare(Yod);
    glide(ctx, fires, 2)
}

fn glide(ctx: &mut RuleContext<'_>, fires: bool, offset: usize) -> Option<usize> {
    if !fires {
        return None;
    }
    let target = ctx.idx + offset;
    let yod = ctx.at_mut(target)?;
    yod.letter = Some(YodGlide);
    yod.isopen = true;
    Some(target)
}
