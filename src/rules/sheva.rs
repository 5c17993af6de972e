//! Rules for `sheva-na` (vocal) vs. `sheva-nah` (silent).
//!
//! A `sheva` opens a new syllable when it is vocal and closes the current
//! one when it is silent. The rules below are tried in order; the first
//! one that fires decides. Word-ending exceptions live in
//! [`sheva_endings`](super::sheva_endings) and run after these.
//!
//! Source: _Simanim_ 4; Gesenius 10.2; _HaMillon_ 1.5.

use super::Rule;
use crate::grammar::RuleContext;
use crate::symbols::codepoints::{ACCENT_MUNAH, POINT_SHEVA};
use crate::symbols::Symbol::{self, *};
use crate::symbols::{category_of, is_short_or_hataf, NiqqudCategory};

/// Rules of the `sheva` stage that do not depend on the word ending.
pub const RULES: &[Rule] = &[
    Rule::new("sheva-gaya", sheva_gaya),
    Rule::new("sheva-merahef", sheva_merahef),
    Rule::off("sheva-na-after-meteg", sheva_na_after_meteg),
    Rule::new("sheva-na-start", sheva_na_start),
    Rule::new("sheva-nah-end", sheva_nah_end),
    Rule::new("sheva-nah-alef-end", sheva_nah_alef_end),
    Rule::new("sheva-double-end", sheva_double_end),
    Rule::new("sheva-na-double-letter", sheva_na_double_letter),
    Rule::new("sheva-double-middle", sheva_double_middle),
    Rule::new("sheva-na-dagesh-hazaq", sheva_na_dagesh_hazaq),
    Rule::off("sheva-nah-yod-after-he", sheva_nah_yod_after_he),
    Rule::new("sheva-nah-after-shuruq-start", sheva_nah_after_shuruq_start),
    Rule::new("sheva-nah-after-short-vowel", sheva_nah_after_short_vowel),
    Rule::new("sheva-nah-after-accent", sheva_nah_after_accent),
    Rule::new("sheva-nah-before-bgdkft-dagesh", sheva_nah_before_bgdkft_dagesh),
    Rule::new("sheva-na-after-long-vowel", sheva_na_after_long_vowel),
];

fn is_plain_sheva(ctx: &RuleContext<'_>) -> bool {
    ctx.guess().vowel_is(Sheva)
}

fn set_sheva(ctx: &mut RuleContext<'_>, vowel: Symbol, close: bool) -> Option<usize> {
    let guess = ctx.guess_mut();
    guess.vowel = Some(vowel);
    if close {
        guess.isopen = false;
    }
    Some(ctx.idx)
}

// ============================================================================
// Marked or positional
// ============================================================================

/// `sheva` with `meteg` is `sheva-gaya`.
///
/// Found in the strict Yemenite reading.
fn sheva_gaya(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(is_plain_sheva(ctx) && ctx.token().has_meteg()) {
        return None;
    }
    set_sheva(ctx, ShevaGaya, false)
}

/// `sheva` without `dagesh` between a short vowel and a BGDKFT letter
/// without `dagesh` is `sheva-merahef`.
///
/// It stands in for a vowel the base form of the word had, which is why the
/// following BGDKFT keeps its soft sound.
fn sheva_merahef(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let next = ctx.next_token();
    let fires = is_plain_sheva(ctx)
        && ctx.guess().dagesh.is_none()
        && is_short_or_hataf(ctx.last_vowel)
        && next.is_begedkefet()
        && !next.has_dagesh()
        && next.vowel != Some(POINT_SHEVA);
    if !fires {
        return None;
    }
    set_sheva(ctx, ShevaMerahef, true)
}

/// `sheva` after a letter with `meteg` is `sheva-na`.
fn sheva_na_after_meteg(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !ctx.token().has_meteg() || !ctx.next_guess().vowel_is(Sheva) {
        return None;
    }
    let next = ctx.next_idx()?;
    ctx.guesses[next].vowel = Some(ShevaNa);
    Some(next)
}

/// `sheva` on the first letter is `sheva-na`.
///
/// Source: _Simanim_ 4.1; Gesenius 10.2.
fn sheva_na_start(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(ctx.isfirst && is_plain_sheva(ctx)) {
        return None;
    }
    set_sheva(ctx, ShevaNa, false)
}

/// `sheva` on the last letter is `sheva-nah`.
///
/// Source: _Simanim_ 4.2.
fn sheva_nah_end(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(ctx.islast && is_plain_sheva(ctx)) {
        return None;
    }
    set_sheva(ctx, ShevaNah, true)
}

/// `sheva` before a word-final bare `alef` is `sheva-nah`.
///
/// Source: _Simanim_ 4.2 (e.g. `חֵטְא`).
fn sheva_nah_alef_end(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(ctx.neg_idx == 1 && is_plain_sheva(ctx) && ctx.next_guess().is_bare(Alef)) {
        return None;
    }
    let next = ctx.next_idx()?;
    ctx.guesses[next].isopen = false;
    set_sheva(ctx, ShevaNah, false)
}

/// Two `sheva` on the last two letters are both `sheva-nah`.
///
/// Source: _Simanim_ 4.2.
fn sheva_double_end(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(ctx.neg_idx == 1 && is_plain_sheva(ctx) && ctx.next_guess().vowel_is(Sheva)) {
        return None;
    }
    let next = ctx.next_idx()?;
    let last = &mut ctx.guesses[next];
    last.vowel = Some(ShevaNah);
    last.isopen = false;
    set_sheva(ctx, ShevaNah, true)
}

/// `sheva` under the first of two identical letters is `sheva-na`, unless
/// the second one also has a `sheva`.
///
/// Source: _Simanim_ 4.1 (e.g. `הַלְלוּ`).
fn sheva_na_double_letter(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let guess = ctx.guess();
    let next = ctx.next_guess();
    let fires = is_plain_sheva(ctx)
        && next.letter.is_some()
        && guess.letter == next.letter
        && !next.has_sheva();
    if !fires {
        return None;
    }
    set_sheva(ctx, ShevaNa, false)
}

/// Of two `sheva` in the middle of a word, the first is `sheva-nah` and the
/// second `sheva-na`.
///
/// Source: _Simanim_ 4.1, 4.2.
fn sheva_double_middle(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.neg_idx > 1
        && ctx.guess().vowel_in(&[Sheva, ShevaMerahef])
        && ctx.next_guess().vowel_is(Sheva);
    if !fires {
        return None;
    }
    let next = ctx.next_idx()?;
    ctx.guesses[next].vowel = Some(ShevaNa);
    set_sheva(ctx, ShevaNah, true)
}

/// `sheva` under a `dagesh-hazaq` is `sheva-na`.
///
/// The doubled letter closes the previous syllable and opens this one.
/// Source: _Simanim_ 4.1.
fn sheva_na_dagesh_hazaq(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(is_plain_sheva(ctx) && ctx.guess().dagesh_is(DageshHazaq)) {
        return None;
    }
    set_sheva(ctx, ShevaNa, false)
}

/// `sheva` under a `yod` without `dagesh` right after a `he` is `sheva-nah`.
fn sheva_nah_yod_after_he(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let guess = ctx.guess();
    let fires = is_plain_sheva(ctx)
        && guess.letter_is(Yod)
        && guess.dagesh.is_none()
        && ctx.prev_guess().letter_is(He);
    if !fires {
        return None;
    }
    set_sheva(ctx, ShevaNah, false)
}

// ============================================================================
// After a vowel
// ============================================================================

/// `sheva` on the second letter after a word-initial `shuruq` is
/// `sheva-nah`, unless it has a `dagesh`.
///
/// Source: _Simanim_ 4.2 (e.g. `וּמְלֹא` has no dagesh, so `/um-lo/`).
fn sheva_nah_after_shuruq_start(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.idx == 1
        && is_plain_sheva(ctx)
        && ctx.guess().dagesh.is_none()
        && ctx.prev_guess().vowel_is(Shuruq);
    if !fires {
        return None;
    }
    set_sheva(ctx, ShevaNah, true)
}

/// `sheva` after a short vowel is `sheva-nah`.
///
/// Source: _Simanim_ 4.2; Gesenius 10.2.
fn sheva_nah_after_short_vowel(ctx: &mut RuleContext<'_>) -> Option<usize> {
    if !(is_plain_sheva(ctx) && is_short_or_hataf(ctx.last_vowel)) {
        return None;
    }
    set_sheva(ctx, ShevaNah, true)
}

/// `sheva` after an accented letter is `sheva-nah`; `munah` is the exception.
///
/// Requires accent information. Source: _Simanim_ 4.2.
fn sheva_nah_after_accent(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let prev = ctx.prev_token();
    let fires = ctx.has_accents
        && is_plain_sheva(ctx)
        && prev.has_accents()
        && !prev.has_accent(ACCENT_MUNAH);
    if !fires {
        return None;
    }
    set_sheva(ctx, ShevaNah, true)
}

/// `sheva` before a BGDKFT letter with `dagesh` is `sheva-nah`.
///
/// A `dagesh-qal` only follows a closed syllable. Source: _Simanim_ 1.3.
fn sheva_nah_before_bgdkft_dagesh(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let next = ctx.next_token();
    if !(is_plain_sheva(ctx) && next.is_begedkefet() && next.has_dagesh()) {
        return None;
    }
    set_sheva(ctx, ShevaNah, false)
}

/// `sheva` after a long vowel other than an undecided `qamats` is `sheva-na`.
///
/// Source: _Simanim_ 4.1; Gesenius 10.2.
fn sheva_na_after_long_vowel(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let long = ctx.last_vowel.and_then(category_of) == Some(NiqqudCategory::Long);
    if !(is_plain_sheva(ctx) && long && !ctx.prev_guess().vowel_is(Qamats)) {
        return None;
    }
    set_sheva(ctx, ShevaNa, false)
}
