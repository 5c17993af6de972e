//! Rules for `qamats-gadol` vs. `qamats-qatan`.
//!
//! The same sign is a long `/a/` (`qamats-gadol`) in an open or accented
//! syllable and a short `/o/` (`qamats-qatan`) in a closed, unaccented one.
//! Syllable structure is not known yet when the first pass runs, so it
//! leans on local evidence: dagesh, glides, silent letters, and accents
//! when the text has them. The second pass runs after sheva resolution.
//!
//! Source: Gesenius 9.1; _Simanim_ 7.2.

use super::Rule;
use crate::grammar::{has_sequence, Constraint, RuleContext, Want};
use crate::lexer::Token;
use crate::symbols::codepoints::ACCENT_TELISHA_GEDOLA;
use crate::symbols::is_vowel_opt;
use crate::symbols::Symbol::{self, *};

/// Rules of the first `qamats` stage.
pub const RULES: &[Rule] = &[
    // qamats-gadol
    Rule::new("qamats-gadol-dagesh-hazaq", qamats_gadol_dagesh_hazaq),
    Rule::new("qamats-gadol-yod-glide", qamats_gadol_yod_glide),
    Rule::new("qamats-gadol-mapiq-he", qamats_gadol_mapiq_he),
    Rule::new("qamats-gadol-eim-qria", qamats_gadol_eim_qria),
    Rule::new("qamats-gadol-vowel", qamats_gadol_vowel),
    Rule::new("qamats-gadol-meteg", qamats_gadol_meteg),
    Rule::new("qamats-gadol-accent", qamats_gadol_accent),
    Rule::new("qamats-gadol-next-accent", qamats_gadol_next_accent),
    Rule::new("qamats-gadol-telisha-gedola", qamats_gadol_telisha_gedola),
    // qamats-qatan
    Rule::new("qamats-qatan-in-maqaf", qamats_qatan_in_maqaf),
    Rule::new("qamats-qatan-closed-unaccented", qamats_qatan_closed_unaccented),
    Rule::new("qamats-qatan-before-dagesh-sheva", qamats_qatan_before_dagesh_sheva),
    Rule::off("qamats-qatan-before-hataf-qamats", qamats_qatan_before_hataf_qamats),
    // needs stress position
    Rule::open("qamats-qatan-unstressed-closed"),
    // needs the root of the word
    Rule::open("qamats-qatan-be-le-prefix"),
];

/// Rules of the `qamats2` stage, run once sheva is resolved.
pub const SECOND_PASS_RULES: &[Rule] = &[
    Rule::new("qamats-gadol-before-sheva-na", qamats_gadol_before_sheva_na),
    Rule::new("qamats-qatan-before-sheva-nah", qamats_qatan_before_sheva_nah),
];

const EIM_QRIA: &[Symbol] = &[EimQriaAlef, EimQriaHe, EimQriaYod];

fn set_vowel(ctx: &mut RuleContext<'_>, vowel: Symbol) -> Option<usize> {
    ctx.guess_mut().vowel = Some(vowel);
    Some(ctx.idx)
}

fn gadol_if(ctx: &mut RuleContext<'_>, fires: bool) -> Option<usize> {
    if fires && ctx.guess().vowel_is(Qamats) {
        set_vowel(ctx, QamatsGadol)
    } else {
        None
    }
}

fn qatan_if(ctx: &mut RuleContext<'_>, fires: bool) -> Option<usize> {
    if fires && ctx.guess().vowel_is(Qamats) {
        set_vowel(ctx, QamatsQatan)
    } else {
        None
    }
}

/// True if any token before the current one carries `accent`.
fn earlier_accent(tokens: &[Token], accent: char) -> bool {
    tokens.iter().any(|t| t.has_accent(accent))
}

// ============================================================================
// qamats-gadol
// ============================================================================

/// `qamats` under `dagesh-hazaq` is `qamats-gadol`.
fn qamats_gadol_dagesh_hazaq(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.guess().dagesh_is(DageshHazaq);
    gadol_if(ctx, fires)
}

/// `qamats` before `yod-glide` is `qamats-gadol`.
fn qamats_gadol_yod_glide(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.next_guess().letter_is(YodGlide);
    gadol_if(ctx, fires)
}

/// `qamats` before a pronounced final `he` is `qamats-gadol`.
///
/// Source: _HaMillon_ 1.6.3.
fn qamats_gadol_mapiq_he(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let next = ctx.next_guess();
    let fires = next.letter_is(MapiqHe) && next.vowel.is_none();
    gadol_if(ctx, fires)
}

/// `qamats` before an `eim-qria` is `qamats-gadol`.
fn qamats_gadol_eim_qria(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.next_guess().letter_in(EIM_QRIA);
    gadol_if(ctx, fires)
}

/// `qamats` on the last letter or right before another vowel is in an open
/// syllable, so it is `qamats-gadol`.
fn qamats_gadol_vowel(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.islast || is_vowel_opt(ctx.next_guess().vowel);
    gadol_if(ctx, fires)
}

/// `qamats` with `meteg` is `qamats-gadol`.
///
/// Requires accent information. Source: _Simanim_ 1.5, 7.2.
fn qamats_gadol_meteg(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.has_accents && ctx.token().has_meteg();
    gadol_if(ctx, fires)
}

/// `qamats` with an accent is `qamats-gadol`; a `qamats-qatan` is never
/// accented.
///
/// Requires accent information. Source: _Simanim_ 7.2.
fn qamats_gadol_accent(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.has_accents && ctx.token().has_accents();
    gadol_if(ctx, fires)
}

/// `qamats` whose syllable is closed by the word's first accented letter
/// is `qamats-gadol`.
///
/// Requires accent information.
fn qamats_gadol_next_accent(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.has_accents
        && !is_vowel_opt(ctx.next_guess().vowel)
        && ctx.next_token().has_accents()
        && ctx.tokens_before().iter().all(|t| !t.has_accents());
    gadol_if(ctx, fires)
}

/// `qamats` in a word marked with `telisha-gedola` is `qamats-gadol`.
///
/// `telisha-gedola` is prepositive: it sits on the first letter of the word
/// regardless of where the stress is, so some texts that mark it over the
/// stressed letter give us the stress for free.
///
/// Requires accent information. Source: Gesenius 15.3.
fn qamats_gadol_telisha_gedola(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.has_accents && earlier_accent(ctx.tokens_before(), ACCENT_TELISHA_GEDOLA);
    gadol_if(ctx, fires)
}

/// `qamats` before an unpointed `sheva-na` is `qamats-gadol`.
///
/// Second pass; the inverse of `sheva-na-after-long-vowel`.
fn qamats_gadol_before_sheva_na(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        Constraint::vowel(Qamats),
        Constraint::vowel(ShevaNa).with_dagesh(Want::Absent),
    ];
    if !has_sequence(ctx.clusters(), ctx.idx, PATTERN, 0) {
        return None;
    }
    set_vowel(ctx, QamatsGadol)
}

// ============================================================================
// qamats-qatan
// ============================================================================

/// `qamats` in a closed syllable of a word joined by `maqaf` is
/// `qamats-qatan`.
///
/// A word before a `maqaf` carries no accent of its own, so without a
/// `meteg` a closed syllable there is our best guess for `qamats-qatan`.
///
/// Source: _Simanim_ 1.6; Gesenius 9.1.
fn qamats_qatan_in_maqaf(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let closed = !ctx.guess().isopen || !ctx.next_guess().isopen;
    let fires = ctx.has_maqaf && closed && !ctx.token().has_meteg();
    qatan_if(ctx, fires)
}

/// `qamats` in a closed syllable with no accent and no `meteg` is
/// `qamats-qatan`.
///
/// Requires accent information. Source: _Simanim_ 7.2.
fn qamats_qatan_closed_unaccented(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let next = ctx.next_guess();
    let closed = !ctx.islast
        && !next.isopen
        && (next.vowel.is_none() || next.vowel_is(ShevaNah));

    let token = ctx.token();
    let unaccented = !token.has_meteg()
        && !token.has_accents()
        && !earlier_accent(ctx.tokens_before(), ACCENT_TELISHA_GEDOLA);

    let fires = ctx.has_accents && unaccented && closed;
    qatan_if(ctx, fires)
}

/// `qamats` with neither accent nor `meteg` before a letter with `dagesh`
/// and `sheva` is `qamats-qatan`.
///
/// The dagesh must be `dagesh-hazaq`, which doubles its letter: the first
/// copy closes this syllable. Source: _Simanim_ 1.3, 3.1.
fn qamats_qatan_before_dagesh_sheva(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let token = ctx.token();
    let next = ctx.next_guess();
    let fires = !token.has_meteg()
        && !token.has_accents()
        && next.dagesh.is_some()
        && next.vowel_is(Sheva);
    qatan_if(ctx, fires)
}

/// `qamats` without `meteg` right before `hataf-qamats` is `qamats-qatan`.
fn qamats_qatan_before_hataf_qamats(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = !ctx.token().has_meteg() && ctx.next_guess().vowel_is(HatafQamats);
    qatan_if(ctx, fires)
}

/// `qamats` before `sheva-nah` is `qamats-qatan`.
///
/// Second pass; the inverse of `sheva-nah-after-short-vowel`.
fn qamats_qatan_before_sheva_nah(ctx: &mut RuleContext<'_>) -> Option<usize> {
    let fires = ctx.next_guess().vowel.is_some_and(Symbol::is_sheva_nah);
    qatan_if(ctx, fires)
}
