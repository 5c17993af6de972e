//! Spelling variants of grammatical names.
//!
//! Hebrew grammatical terms are transliterated many ways: `kamatz`,
//! `qamats`, `kametz`... [`normalize_name`] maps any known variant to the
//! catalog [`Symbol`]. Matching is case-insensitive and anchored; the first
//! matching pattern wins.

use lazy_static::lazy_static;
use regex::{RegexSet, RegexSetBuilder};

use super::catalog::Symbol;

const HATAF: &str = r"c?hataf-";
const MALE: &str = r"-malei?";
const MAPIQ: &str = r"mapi[kq]-";

const SHEVA: &str = r"sh?e?va";
const HIRIQ: &str = r"(ch|h)iri[kq]";
const TSERE: &str = r"t[sz]erei?";
const SEGOL: &str = r"segg?ol";
const PATAH: &str = r"patac?h";
const QAMATS: &str = r"[kq]am[ae]t[sz]";
const HOLAM: &str = r"c?hol[ao]m";

fn sofit(name: &str) -> String {
    format!(r"(final-{name}|{name}-sofit)")
}

/// Variant patterns, in priority order.
fn variant_table() -> Vec<(String, Symbol)> {
    use Symbol::*;
    vec![
        // dagesh
        (r"mapi[kq]".into(), Mapiq),
        (r"(dagesh|shuri[kq])".into(), Dagesh),
        (r"dagesh-([kq]al|lene)".into(), DageshQal),
        (r"dagesh-(c?haza[kq]|forte)".into(), DageshHazaq),
        // sheva
        (SHEVA.into(), Sheva),
        (format!("{SHEVA}-na"), ShevaNa),
        (format!("{SHEVA}-nac?h"), ShevaNah),
        (format!("{SHEVA}-(gaya|ga'ya)"), ShevaGaya),
        (format!("{SHEVA}-merac?hef"), ShevaMerahef),
        // hiriq
        (HIRIQ.into(), Hiriq),
        (format!("{HIRIQ}{MALE}(-yod)?"), HiriqMaleYod),
        // tsere
        (TSERE.into(), Tsere),
        (format!("{TSERE}{MALE}-ale(f|ph)"), TsereMaleAlef),
        (format!("{TSERE}{MALE}-hey?"), TsereMaleHe),
        (format!("{TSERE}{MALE}(-y[ou]d)?"), TsereMaleYod),
        // segol
        (SEGOL.into(), Segol),
        (format!("{SEGOL}{MALE}-ale(f|ph)"), SegolMaleAlef),
        (format!("{SEGOL}{MALE}-hey?"), SegolMaleHe),
        (format!("{SEGOL}{MALE}(-y[ou]d)?"), SegolMaleYod),
        (format!("{HATAF}{SEGOL}"), HatafSegol),
        // patah
        (PATAH.into(), Patah),
        (format!("{PATAH}{MALE}-ale(f|ph)"), PatahMaleAlef),
        (format!("{PATAH}{MALE}(-hey?)?"), PatahMaleHe),
        (format!("{PATAH}-y[ou]d"), PatahYod),
        (format!("(furtive-{PATAH}|{PATAH}-g[ae]nuv(ah|a)?)"), PatahGenuvah),
        (format!("{HATAF}{PATAH}"), HatafPatah),
        // qamats
        (QAMATS.into(), Qamats),
        (format!("{QAMATS}-gadol"), QamatsGadol),
        (format!("{QAMATS}{MALE}-ale(f|ph)"), QamatsMaleAlef),
        (format!("{QAMATS}{MALE}(-hey?)?"), QamatsMaleHe),
        (format!("{QAMATS}-y[ou]d"), QamatsYod),
        (format!("{QAMATS}-y[ou]d-vav"), QamatsYodVav),
        (format!("{HATAF}{QAMATS}"), HatafQamats),
        (format!("{QAMATS}-([kq]atan|c?hatuf)"), QamatsQatan),
        // holam
        (HOLAM.into(), Holam),
        (format!("{HOLAM}-c?haser"), HolamHaser),
        (format!("{HOLAM}{MALE}-ale(f|ph)"), HolamMaleAlef),
        (format!("{HOLAM}{MALE}-hey?"), HolamMaleHe),
        (format!("{HOLAM}{MALE}(-vav)?"), HolamMaleVav),
        // qubuts / shuruq
        (r"[kq]ubut[sz]".into(), Qubuts),
        (r"shur[eu][kq]".into(), Shuruq),
        // letters
        (r"ale(f|ph)".into(), Alef),
        (format!("{MAPIQ}ale(f|ph)"), MapiqAlef),
        (r"bet".into(), Bet),
        (r"vet".into(), Vet),
        (r"gimm?el".into(), Gimel),
        (r"dalet".into(), Dalet),
        (r"hey?".into(), He),
        (format!("{MAPIQ}hey?"), MapiqHe),
        (r"vav".into(), Vav),
        (r"zayin".into(), Zayin),
        (r"c?het".into(), Het),
        (r"tet".into(), Tet),
        (r"y[ou]d".into(), Yod),
        (r"kaf".into(), Kaf),
        (sofit("kaf"), KafSofit),
        (r"[kc]haf".into(), Khaf),
        (sofit("[kc]haf"), KhafSofit),
        (r"lamed".into(), Lamed),
        (r"mem".into(), Mem),
        (sofit("mem"), MemSofit),
        (r"nun".into(), Nun),
        (sofit("nun"), NunSofit),
        (r"same[ck]h".into(), Samekh),
        (r"ayin".into(), Ayin),
        (r"pey?".into(), Pe),
        (sofit("pey?"), PeSofit),
        (r"fey?".into(), Fe),
        (sofit("fey?"), FeSofit),
        (r"t[sz]adi".into(), Tsadi),
        (sofit("t[sz]adi"), TsadiSofit),
        (r"[kq][ou]f".into(), Qof),
        (r"rei?sh".into(), Resh),
        (r"shin".into(), Shin),
        (r"sin".into(), Sin),
        (r"ta[fv]".into(), Tav),
        (r"sa[fv]".into(), Sav),
        (r"eim-[kq]ria-ale(f|ph)".into(), EimQriaAlef),
        (r"eim-[kq]ria-hey?".into(), EimQriaHe),
        (r"eim-[kq]ria-y[ou]d".into(), EimQriaYod),
        (r"y[ou]d-glide".into(), YodGlide),
    ]
}

/// Anchored variant patterns and the symbol each one names, index-aligned.
struct Variants {
    patterns: RegexSet,
    symbols: Vec<Symbol>,
}

lazy_static! {
    static ref VARIANTS: Variants = {
        let (patterns, symbols): (Vec<String>, Vec<Symbol>) = variant_table()
            .into_iter()
            .map(|(pattern, symbol)| (format!("^{pattern}$"), symbol))
            .unzip();
        let patterns = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()
            .expect("name variant patterns are valid");
        Variants { patterns, symbols }
    };
}

/// Map a spelling variant of a grammatical name to its [`Symbol`].
///
/// Exact catalog names always resolve to themselves; other spellings go
/// through the variant table. Returns `None` for unknown or empty names.
///
/// ```
/// use hebphonics::symbols::{normalize_name, Symbol};
///
/// assert_eq!(normalize_name("kamatz"), Some(Symbol::Qamats));
/// assert_eq!(normalize_name("sHeVa"), Some(Symbol::Sheva));
/// assert_eq!(normalize_name("final-mem"), Some(Symbol::MemSofit));
/// assert_eq!(normalize_name("unknown-name"), None);
/// ```
pub fn normalize_name(input: &str) -> Option<Symbol> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    if let Some(symbol) = Symbol::from_name(&needle) {
        return Some(symbol);
    }
    // set matches iterate in table order, so the first is the highest priority
    let first = VARIANTS.patterns.matches(&needle).iter().next()?;
    VARIANTS.symbols.get(first).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(VARIANTS.patterns.len(), variant_table().len());
        assert_eq!(VARIANTS.symbols.len(), VARIANTS.patterns.len());
    }

    #[test]
    fn test_similar_spellings_stay_apart() {
        assert_eq!(normalize_name("mapik"), Some(Symbol::Mapiq));
        assert_eq!(normalize_name("shuruk"), Some(Symbol::Shuruq));
        assert_eq!(normalize_name("shurik"), Some(Symbol::Dagesh));
    }

    #[test]
    fn test_catalog_names_resolve_to_themselves() {
        for &sym in Symbol::ALL {
            assert_eq!(normalize_name(sym.name()), Some(sym), "{}", sym);
        }
    }

    #[test]
    fn test_common_variants() {
        let cases = [
            ("shva", Symbol::Sheva),
            ("aleph", Symbol::Alef),
            ("yud", Symbol::Yod),
            ("kuf", Symbol::Qof),
            ("kamatz", Symbol::Qamats),
            ("kamatz-katan", Symbol::QamatsQatan),
            ("qamats-hatuf", Symbol::QamatsQatan),
            ("final-mem", Symbol::MemSofit),
            ("kaf-sofit", Symbol::KafSofit),
            ("final-chaf", Symbol::KhafSofit),
            ("dagesh-chazak", Symbol::DageshHazaq),
            ("dagesh-lene", Symbol::DageshQal),
            ("shva-nach", Symbol::ShevaNah),
            ("patach-ganuvah", Symbol::PatahGenuvah),
            ("furtive-patach", Symbol::PatahGenuvah),
            ("chataf-patach", Symbol::HatafPatah),
            ("mapiq-hey", Symbol::MapiqHe),
            ("cholam-chaser", Symbol::HolamHaser),
            ("hiriq-malei", Symbol::HiriqMaleYod),
            ("shurek", Symbol::Shuruq),
            ("TZERE", Symbol::Tsere),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_name(input), Some(expected), "{}", input);
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name("unknown-name"), None);
        assert_eq!(normalize_name("final-alef"), None);
    }
}
