//! Word-ending exceptions for `sheva`.
//!
//! These were checked empirically against the Pentateuch. Each names the
//! ending it recognizes, e.g. `sheva-nah-ending-ah` is a `sheva` followed by
//! `qamats-gadol` and a silent `he`. They run after the general rules in
//! [`sheva`](super::sheva), so only a `sheva` still undecided reaches them.
//!
//! A `sheva-na` ending implies the `qamats` before it is `qamats-gadol`; a
//! `sheva-nah` ending implies `qamats-qatan`. Both are left to the second
//! `qamats` pass, except where the ending itself fixes a later `qamats`.

use super::Rule;
use crate::grammar::{has_ending, has_sequence, Constraint, RuleContext};
use crate::symbols::classes::GUTTURAL_LETTERS;
use crate::symbols::Symbol::{self, *};

/// Word-ending rules of the `sheva` stage.
pub const RULES: &[Rule] = &[
    // sheva-na
    Rule::new("sheva-na-ending-sah", sheva_na_ending_sah),
    Rule::new("sheva-na-ending-a|kh|l|f-ah", sheva_na_ending_alkhf_ah),
    Rule::new("sheva-na-ending-u", sheva_na_ending_u),
    Rule::new("sheva-na-ending-l|sh|s-kha", sheva_na_ending_lshs_kha),
    Rule::new("sheva-na-ending-eim", sheva_na_ending_eim),
    // sheva-nah: he
    Rule::new("sheva-nah-ending-iyah", sheva_nah_ending_iyah),
    Rule::new("sheva-nah-ending-ah", sheva_nah_ending_ah),
    // vav
    Rule::new("sheva-nah-ending-o", sheva_nah_ending_o),
    Rule::new("sheva-nah-ending-av", sheva_nah_ending_av),
    Rule::new("sheva-nah-ending-a|ei-s|n-u|o", sheva_nah_ending_sn_vav),
    // yod
    Rule::new("sheva-nah-ending-iy|eiy|ay", sheva_nah_ending_yod),
    Rule::new("sheva-nah-ending-ei-i", sheva_nah_ending_ei_i),
    // khaf-sofit
    Rule::new("sheva-nah-ending-eikh", sheva_nah_ending_eikh),
    Rule::new("sheva-nah-ending-ekha", sheva_nah_ending_ekha),
    Rule::new("sheva-nah-ending-eykha", sheva_nah_ending_eykha),
    Rule::new("sheva-nah-ending-a-ekha", sheva_nah_ending_a_ekha),
    Rule::new("sheva-nah-ending-kha-after-hataf", sheva_nah_ending_kha_after_hataf),
    Rule::new("sheva-nah-ending-a|e-h|m|n", sheva_nah_ending_ae_hmn),
    // mem-sofit
    Rule::new("sheva-nah-ending-guttural-eim", sheva_nah_ending_guttural_eim),
    Rule::new("sheva-nah-ending-a-a-h|m|n", sheva_nah_ending_a_a_hmn),
    Rule::new("sheva-nah-ending-eiy-em", sheva_nah_ending_eiy_em),
    Rule::new("sheva-nah-ending-a-i-m|kh", sheva_nah_ending_ai_mkh),
    // tav / sav
    Rule::new("sheva-nah-ending-iy-m|s", sheva_nah_ending_iy_ms),
    Rule::new("sheva-nah-ending-os", sheva_nah_ending_os),
    Rule::new("sheva-nah-ending-a-d|n|r|s", sheva_nah_ending_a_dnrs),
];

const SHEVA: Constraint = Constraint::vowel(Sheva);
const QAMATS_ANY: &[Symbol] = &[Qamats, QamatsGadol];

fn ends_with(ctx: &RuleContext<'_>, pattern: &[Constraint], extra: usize) -> bool {
    has_ending(ctx.clusters(), ctx.neg_idx, pattern, extra)
}

fn set_vowel(ctx: &mut RuleContext<'_>, vowel: Symbol) -> Option<usize> {
    ctx.guess_mut().vowel = Some(vowel);
    Some(ctx.idx)
}

/// Promote the cluster `from_end` places before the end to `qamats-gadol`.
fn gadol_from_end(ctx: &mut RuleContext<'_>, from_end: usize, only_qamats: bool) {
    let Some(i) = ctx.guesses.len().checked_sub(from_end) else {
        return;
    };
    let cluster = &mut ctx.guesses[i];
    if !only_qamats || cluster.vowel_is(Qamats) {
        cluster.vowel = Some(QamatsGadol);
    }
}

// ============================================================================
// sheva-na
// ============================================================================

/// `sheva` before `sav` + `qamats` and a final `he` is `sheva-na`
/// (`פָשְׂתָה`).
fn sheva_na_ending_sah(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::letter(Sav).with_vowel(QamatsGadol),
        Constraint::letter(EimQriaHe),
    ];
    if !ends_with(ctx, PATTERN, 0) {
        return None;
    }
    set_vowel(ctx, ShevaNa)
}

/// `sheva` after `gimel`, `yod` or `mem` and before `alef`, `khaf`, `lamed`
/// or `fe` + `qamats` and a final `he` is `sheva-na`.
///
/// These are the exceptions to `sheva-nah-ending-ah` (`גָדְלָה`, `יָכְלָה`).
fn sheva_na_ending_alkhf_ah(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::letters(&[Alef, Khaf, Lamed, Fe]).with_vowels(QAMATS_ANY),
        Constraint::letter(EimQriaHe),
    ];
    let after = ctx.prev_guess().letter_in(&[Gimel, Yod, Mem]);
    if !(after && ends_with(ctx, PATTERN, 0)) {
        return None;
    }
    set_vowel(ctx, ShevaNa)
}

/// `sheva` before a final `shuruq` is `sheva-na` (`שָׁרְצוּ`).
fn sheva_na_ending_u(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[SHEVA, Constraint::vowel(Shuruq)];
    // the absorbed vav
    if !ends_with(ctx, PATTERN, 1) {
        return None;
    }
    set_vowel(ctx, ShevaNa)
}

/// `sheva` under `lamed`, `shin` or `tav` before a final `khaf-sofit` +
/// `qamats` is `sheva-na` (`יִשְׁאָלְךָ`, `בְּכֹרָתְךָ`).
fn sheva_na_ending_lshs_kha(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        Constraint::letters(&[Lamed, Shin, Tav, Sav]).with_vowel(Sheva),
        Constraint::letter(KhafSofit).with_vowel(QamatsGadol),
    ];
    if !(ctx.idx > 2 && ends_with(ctx, PATTERN, 0)) {
        return None;
    }
    set_vowel(ctx, ShevaNa)
}

/// `sheva` after a non-guttural and before `tsere` + final `mem-sofit` is
/// `sheva-na`.
fn sheva_na_ending_eim(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[SHEVA, Constraint::vowel(Tsere), Constraint::letter(MemSofit)];
    let after = !ctx.prev_guess().letter_in(GUTTURAL_LETTERS);
    if !(after && ends_with(ctx, PATTERN, 0)) {
        return None;
    }
    set_vowel(ctx, ShevaNa)
}

// ============================================================================
// sheva-nah: he
// ============================================================================

fn nah_if(ctx: &mut RuleContext<'_>, pattern: &[Constraint], extra: usize) -> Option<usize> {
    if !ends_with(ctx, pattern, extra) {
        return None;
    }
    set_vowel(ctx, ShevaNah)
}

/// `-iyah`: `sheva`, `hiriq`, `yod` + `qamats`, silent `he`.
fn sheva_nah_ending_iyah(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(Hiriq),
        Constraint::letter(Yod).with_vowel(QamatsGadol),
        Constraint::letter(EimQriaHe),
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `-ah`: `sheva`, `qamats-gadol`, silent `he` (`נָקְבָה`, `עָרְלָה`).
fn sheva_nah_ending_ah(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(QamatsGadol),
        Constraint::letter(EimQriaHe),
    ];
    nah_if(ctx, PATTERN, 0)
}

// ============================================================================
// vav
// ============================================================================

/// `-o`: `sheva` before a final `holam-male`.
fn sheva_nah_ending_o(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[SHEVA, Constraint::vowel(HolamMaleVav)];
    nah_if(ctx, PATTERN, 1)
}

/// `-av`: `sheva`, `qamats-gadol`, `yod-glide`, `vav`.
fn sheva_nah_ending_av(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(QamatsGadol),
        Constraint::letter(YodGlide),
        Constraint::letter(Vav),
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `-asu`, `-ano`, `-einu`, ...: `sheva`, `qamats-gadol` or `tsere`, then
/// `sav` or `nun` with a vav vowel (`חָכְמָתוֹ`, `קָרְבָּנוֹ`).
fn sheva_nah_ending_sn_vav(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowels(&[QamatsGadol, Tsere]),
        Constraint::letters(&[Sav, Nun]).with_vowels(&[HolamMaleVav, Shuruq]),
    ];
    nah_if(ctx, PATTERN, 1)
}

// ============================================================================
// yod
// ============================================================================

/// `-iy`, `-eiy`, `-ay`: `sheva`, a front or `a` vowel, final `yod`
/// (`קָדְשֵׁי`, `בְּאָזְנַי`).
fn sheva_nah_ending_yod(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowels(&[Hiriq, HiriqMaleYod, Tsere, Patah, Qamats, QamatsGadol]),
        Constraint::letters(&[EimQriaYod, YodGlide, Yod]),
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `-ei-i`: `sheva`, `tsere`, `hiriq-male`, silent `yod`.
fn sheva_nah_ending_ei_i(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(Tsere),
        Constraint::vowel(HiriqMaleYod),
        Constraint::letter(EimQriaYod),
    ];
    nah_if(ctx, PATTERN, 0)
}

// ============================================================================
// khaf-sofit
// ============================================================================

const KHA: Constraint = Constraint::letter(KhafSofit).with_vowel(QamatsGadol);

/// `-eikh`: `sheva`, `tsere`, `khaf-sofit`.
fn sheva_nah_ending_eikh(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[SHEVA, Constraint::vowel(Tsere), Constraint::letter(KhafSofit)];
    nah_if(ctx, PATTERN, 0)
}

/// `-ekha`: `sheva`, `segol`, `khaf-sofit` + `qamats`.
fn sheva_nah_ending_ekha(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[SHEVA, Constraint::vowel(Segol), KHA];
    nah_if(ctx, PATTERN, 0)
}

/// `-eykha`: `sheva`, `segol`, silent `yod`, `khaf-sofit` + `qamats`.
fn sheva_nah_ending_eykha(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(Segol),
        Constraint::letter(EimQriaYod),
        KHA,
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `-a-ekha`: `sheva`, `qamats-gadol`, `segol`, `khaf-sofit` + `qamats`.
fn sheva_nah_ending_a_ekha(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(QamatsGadol),
        Constraint::vowel(Segol),
        KHA,
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `sheva` between `hataf` + `qamats` and a final `khaf-sofit` + `qamats`
/// is `sheva-nah`.
fn sheva_nah_ending_kha_after_hataf(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        Constraint::vowels(&[HatafPatah, HatafQamats, HatafSegol]),
        Constraint::vowels(QAMATS_ANY),
        SHEVA,
        KHA,
    ];
    let fires = ctx.idx >= 2 && has_sequence(ctx.clusters(), ctx.idx - 2, PATTERN, 0);
    if !fires {
        return None;
    }
    set_vowel(ctx, ShevaNah)
}

/// `-ah`, `-am`, `-an`, `-em`: `sheva`, `qamats` or `segol`, and a final
/// pronounced consonant (`אָכְלָם`, `חָקְכֶם`).
///
/// The `qamats` of the ending is `qamats-gadol`.
fn sheva_nah_ending_ae_hmn(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowels(&[Qamats, QamatsGadol, Segol]),
        Constraint::letters(&[MapiqHe, MemSofit, NunSofit]),
    ];
    if !ends_with(ctx, PATTERN, 0) {
        return None;
    }
    gadol_from_end(ctx, 2, true);
    set_vowel(ctx, ShevaNah)
}

// ============================================================================
// mem-sofit
// ============================================================================

/// `sheva` after a guttural and before `tsere` + final `mem-sofit` is
/// `sheva-nah`; the counterpart of `sheva-na-ending-eim`.
fn sheva_nah_ending_guttural_eim(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        Constraint::letters(GUTTURAL_LETTERS),
        SHEVA,
        Constraint::vowel(Tsere),
        Constraint::letter(MemSofit),
    ];
    let fires = ctx.idx >= 1 && has_sequence(ctx.clusters(), ctx.idx - 1, PATTERN, 0);
    if !fires {
        return None;
    }
    set_vowel(ctx, ShevaNah)
}

/// `-a-ah`, `-a-am`, `-a-an`: `sheva`, two `qamats`, final `he`, `mem` or
/// `nun` (`בְּחָכְמָתָהּ`, `מָשְׁחָתָם`).
///
/// Both `qamats` of the ending are `qamats-gadol`.
fn sheva_nah_ending_a_a_hmn(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowels(QAMATS_ANY),
        Constraint::vowels(QAMATS_ANY),
        Constraint::letters(&[He, EimQriaHe, MapiqHe, MemSofit, NunSofit]),
    ];
    if !ends_with(ctx, PATTERN, 0) {
        return None;
    }
    gadol_from_end(ctx, 2, false);
    gadol_from_end(ctx, 3, false);
    set_vowel(ctx, ShevaNah)
}

/// `-eiy-em`: `sheva`, `tsere`, silent `yod`, `segol`, `mem-sofit`.
fn sheva_nah_ending_eiy_em(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(Tsere),
        Constraint::letter(EimQriaYod),
        Constraint::vowel(Segol),
        Constraint::letter(MemSofit),
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `-a-im`, `-a-ikh`: `sheva`, an `a` vowel, `hiriq`, final `mem` or `khaf`.
fn sheva_nah_ending_ai_mkh(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowels(&[Qamats, QamatsGadol, Patah]),
        Constraint::vowel(Hiriq),
        Constraint::letters(&[KhafSofit, MemSofit]),
    ];
    nah_if(ctx, PATTERN, 0)
}

// ============================================================================
// tav / sav
// ============================================================================

/// `-iym`, `-iys`: `sheva`, `hiriq`, `yod`, final `mem-sofit` or `sav`
/// (`בָּטְנִים`, `גָּפְרִית`).
fn sheva_nah_ending_iy_ms(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowels(&[Hiriq, HiriqMaleYod]),
        Constraint::letters(&[Yod, EimQriaYod]),
        Constraint::letters(&[MemSofit, Sav]),
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `-os`: `sheva`, `holam-male`, the absorbed `vav`, final `sav`.
fn sheva_nah_ending_os(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowel(HolamMaleVav),
        Constraint::ANY,
        Constraint::letter(Sav),
    ];
    nah_if(ctx, PATTERN, 0)
}

/// `-ad`, `-an`, `-a`, `-ar`, `-as`: `sheva`, an `a` vowel, and a final
/// `dalet`, `nun`, `ayin`, `resh` or `sav` (`מָשְׁזָר`, `חָכְמַת`).
///
/// The `qamats` of the ending is `qamats-gadol`.
fn sheva_nah_ending_a_dnrs(ctx: &mut RuleContext<'_>) -> Option<usize> {
    const PATTERN: &[Constraint] = &[
        SHEVA,
        Constraint::vowels(&[Patah, Qamats, QamatsGadol]),
        Constraint::letters(&[Dalet, NunSofit, Ayin, Resh, Sav]),
    ];
    if !ends_with(ctx, PATTERN, 0) {
        return None;
    }
    gadol_from_end(ctx, 2, true);
    set_vowel(ctx, ShevaNah)
}
