//! The closed catalog of grammatical symbols.
//!
//! Every letter, dagesh and vowel the parser can assign is a [`Symbol`].
//! Unicode cannot tell a `dagesh-qal` from a `dagesh-hazaq` (both are
//! U+05BC), so several symbols share a rendering; the catalog records the
//! Unicode form each symbol is written with.
//!
//! # Naming
//!
//! - Final letters are called `{x}-sofit` rather than `final-{x}`.
//! - BGDKFT letters without a dagesh get their soft name (`vet`, `khaf`, `fe`, `sav`).
//! - `eim-qria-*` and `yod-glide` are letters written but not pronounced as
//!   consonants; they render as their base letter.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! symbols {
    ($($(#[$doc:meta])* $variant:ident => $name:literal, $render:literal;)*) => {
        /// A grammatical symbol name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum Symbol {
            $($(#[$doc])* $variant,)*
        }

        impl Symbol {
            /// Every symbol, in catalog order.
            pub const ALL: &'static [Symbol] = &[$(Symbol::$variant,)*];

            /// The kebab-case grammatical name (e.g. `"sheva-na"`).
            pub const fn name(self) -> &'static str {
                match self {
                    $(Symbol::$variant => $name,)*
                }
            }

            /// The Unicode text this symbol is written with.
            pub const fn render(self) -> &'static str {
                match self {
                    $(Symbol::$variant => $render,)*
                }
            }
        }
    };
}

symbols! {
    // dagesh
    Mapiq => "mapiq", "\u{05BC}";
    /// Unclassified dagesh.
    Dagesh => "dagesh", "\u{05BC}";
    DageshQal => "dagesh-qal", "\u{05BC}";
    DageshHazaq => "dagesh-hazaq", "\u{05BC}";

    // sheva
    /// Unclassified sheva.
    Sheva => "sheva", "\u{05B0}";
    ShevaNa => "sheva-na", "\u{05B0}";
    ShevaNaMute => "sheva-na-mute", "\u{05B0}";
    ShevaNah => "sheva-nah", "\u{05B0}";
    ShevaNahVoiced => "sheva-nah-voiced", "\u{05B0}";
    ShevaGaya => "sheva-gaya", "\u{05B0}\u{05BD}";
    ShevaMerahef => "sheva-merahef", "\u{05B0}";

    // hiriq
    Hiriq => "hiriq", "\u{05B4}";
    HiriqMaleYod => "hiriq-male-yod", "\u{05B4}";

    // tsere
    Tsere => "tsere", "\u{05B5}";
    TsereMaleAlef => "tsere-male-alef", "\u{05B5}";
    TsereMaleHe => "tsere-male-he", "\u{05B5}";
    TsereMaleYod => "tsere-male-yod", "\u{05B5}";

    // segol
    Segol => "segol", "\u{05B6}";
    SegolMaleAlef => "segol-male-alef", "\u{05B6}";
    SegolMaleHe => "segol-male-he", "\u{05B6}";
    SegolMaleYod => "segol-male-yod", "\u{05B6}";
    HatafSegol => "hataf-segol", "\u{05B1}";

    // patah
    Patah => "patah", "\u{05B7}";
    PatahMaleAlef => "patah-male-alef", "\u{05B7}";
    PatahMaleHe => "patah-male-he", "\u{05B7}";
    PatahYod => "patah-yod", "\u{05B7}";
    PatahGenuvah => "patah-genuvah", "\u{05B7}";
    HatafPatah => "hataf-patah", "\u{05B2}";

    // qamats
    /// Unclassified qamats.
    Qamats => "qamats", "\u{05B8}";
    QamatsGadol => "qamats-gadol", "\u{05B8}";
    QamatsMaleAlef => "qamats-male-alef", "\u{05B8}";
    QamatsMaleHe => "qamats-male-he", "\u{05B8}";
    QamatsYod => "qamats-yod", "\u{05B8}";
    QamatsYodVav => "qamats-yod-vav", "\u{05B8}";
    HatafQamats => "hataf-qamats", "\u{05B3}";
    QamatsQatan => "qamats-qatan", "\u{05C7}";

    // holam
    /// Unclassified holam.
    Holam => "holam", "\u{05B9}";
    HolamHaser => "holam-haser", "\u{05B9}";
    HolamMaleAlef => "holam-male-alef", "\u{05B9}";
    HolamMaleHe => "holam-male-he", "\u{05B9}";
    HolamMaleVav => "holam-male-vav", "\u{05D5}\u{05B9}";

    // qubuts / shuruq
    Qubuts => "qubuts", "\u{05BB}";
    Shuruq => "shuruq", "\u{05D5}\u{05BC}";

    // letters
    Alef => "alef", "\u{05D0}";
    MapiqAlef => "mapiq-alef", "\u{05D0}";
    Bet => "bet", "\u{05D1}";
    Vet => "vet", "\u{05D1}";
    Gimel => "gimel", "\u{05D2}";
    Dalet => "dalet", "\u{05D3}";
    He => "he", "\u{05D4}";
    MapiqHe => "mapiq-he", "\u{05D4}";
    Vav => "vav", "\u{05D5}";
    Zayin => "zayin", "\u{05D6}";
    Het => "het", "\u{05D7}";
    Tet => "tet", "\u{05D8}";
    Yod => "yod", "\u{05D9}";
    Kaf => "kaf", "\u{05DB}";
    KafSofit => "kaf-sofit", "\u{05DA}";
    Khaf => "khaf", "\u{05DB}";
    KhafSofit => "khaf-sofit", "\u{05DA}";
    Lamed => "lamed", "\u{05DC}";
    Mem => "mem", "\u{05DE}";
    MemSofit => "mem-sofit", "\u{05DD}";
    Nun => "nun", "\u{05E0}";
    NunSofit => "nun-sofit", "\u{05DF}";
    Samekh => "samekh", "\u{05E1}";
    Ayin => "ayin", "\u{05E2}";
    Pe => "pe", "\u{05E4}";
    PeSofit => "pe-sofit", "\u{05E3}";
    Fe => "fe", "\u{05E4}";
    FeSofit => "fe-sofit", "\u{05E3}";
    Tsadi => "tsadi", "\u{05E6}";
    TsadiSofit => "tsadi-sofit", "\u{05E5}";
    Qof => "qof", "\u{05E7}";
    Resh => "resh", "\u{05E8}";
    Shin => "shin", "\u{05E9}\u{05C1}";
    Sin => "sin", "\u{05E9}\u{05C2}";
    Tav => "tav", "\u{05EA}";
    Sav => "sav", "\u{05EA}";

    // letters acting as vowel markers
    EimQriaAlef => "eim-qria-alef", "\u{05D0}";
    EimQriaHe => "eim-qria-he", "\u{05D4}";
    EimQriaYod => "eim-qria-yod", "\u{05D9}";
    YodGlide => "yod-glide", "\u{05D9}";
}

lazy_static! {
    static ref BY_NAME: FxHashMap<&'static str, Symbol> =
        Symbol::ALL.iter().map(|&s| (s.name(), s)).collect();
}

impl Symbol {
    /// Look up a symbol by its exact catalog name.
    ///
    /// Use [`normalize_name`](super::normalize_name) for spelling variants.
    pub fn from_name(name: &str) -> Option<Symbol> {
        BY_NAME.get(name).copied()
    }

    /// True for any member of the `sheva` family (`sheva`, `sheva-na`, ...).
    #[inline]
    pub fn is_sheva(self) -> bool {
        self.name().starts_with("sheva")
    }

    /// True for `sheva-nah` and its modern `sheva-nah-voiced` variant.
    #[inline]
    pub fn is_sheva_nah(self) -> bool {
        matches!(self, Symbol::ShevaNah | Symbol::ShevaNahVoiced)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown symbol name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symbol name: {0}")]
pub struct UnknownSymbol(pub String);

impl FromStr for Symbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::from_name(s).ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Symbol::from_name(&name).ok_or_else(|| serde::de::Error::custom(UnknownSymbol(name)))
    }
}

/// Concatenate the Unicode forms of `symbols`.
///
/// ```
/// use hebphonics::symbols::{render, Symbol};
///
/// let word = render(&[Symbol::Shin, Symbol::Qamats, Symbol::Lamed, Symbol::HolamMaleVav, Symbol::MemSofit]);
/// assert_eq!(word, "\u{05E9}\u{05C1}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}");
/// ```
pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.render()).collect()
}

/// Render a list of symbol names; unknown names render as nothing.
pub fn from_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .filter_map(|n| Symbol::from_name(n.as_ref()))
        .map(Symbol::render)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        assert_eq!(BY_NAME.len(), Symbol::ALL.len());
    }

    #[test]
    fn test_from_name_roundtrip() {
        for &sym in Symbol::ALL {
            assert_eq!(Symbol::from_name(sym.name()), Some(sym));
            assert_eq!(sym.to_string().parse::<Symbol>(), Ok(sym));
        }
        assert_eq!(Symbol::from_name("final-mem"), None);
    }

    #[test]
    fn test_sheva_family() {
        assert!(Symbol::ShevaGaya.is_sheva());
        assert!(Symbol::ShevaMerahef.is_sheva());
        assert!(!Symbol::HatafPatah.is_sheva());
        assert!(Symbol::ShevaNahVoiced.is_sheva_nah());
        assert!(!Symbol::ShevaNa.is_sheva_nah());
    }

    #[test]
    fn test_from_names_skips_unknown() {
        let rendered = from_names(&["shin", "qamats", "lamed", "holam-male-vav", "mem-sofit"]);
        assert_eq!(rendered, "\u{05E9}\u{05C1}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}");
        assert_eq!(from_names(&["alef", "no-such-name"]), "\u{05D0}");
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&Symbol::DageshHazaq).unwrap();
        assert_eq!(json, "\"dagesh-hazaq\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symbol::DageshHazaq);
        assert!(serde_json::from_str::<Symbol>("\"nope\"").is_err());
    }
}
