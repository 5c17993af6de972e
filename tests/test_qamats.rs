//! `qamats-gadol` vs. `qamats-qatan`, in both passes.

use hebphonics::prelude::*;

fn parse(word: &str) -> Vec<&'static str> {
    let parsed = Parser::default().parse(word).unwrap();
    flatten(&parsed).iter().map(|s| s.name()).collect()
}

// ============================================================================
// qamats-gadol
// ============================================================================

#[test]
fn test_gadol_dagesh_hazaq() {
    assert_eq!(
        parse("הַגָּן"),
        vec!["he", "patah", "gimel", "dagesh-hazaq", "qamats-gadol", "nun-sofit"]
    );
}

#[test]
fn test_gadol_yod_glide() {
    assert_eq!(parse("חָי"), vec!["het", "qamats-gadol", "yod-glide"]);
}

#[test]
fn test_gadol_mapiq_he() {
    assert_eq!(parse("בָהּ"), vec!["vet", "qamats-gadol", "mapiq-he", "mapiq"]);
}

#[test]
fn test_gadol_eim_qria() {
    assert_eq!(parse("נָא"), vec!["nun", "qamats-gadol", "eim-qria-alef"]);
}

#[test]
fn test_gadol_before_vowel() {
    assert_eq!(parse("עָקֵב"), vec!["ayin", "qamats-gadol", "qof", "tsere", "vet"]);
}

#[test]
fn test_gadol_meteg() {
    assert_eq!(parse("בָּֽם"), vec!["bet", "dagesh-qal", "qamats-gadol", "mem-sofit"]);
}

#[test]
fn test_gadol_accent() {
    assert_eq!(parse("נָ֤ע"), vec!["nun", "qamats-gadol", "ayin"]);
}

#[test]
fn test_gadol_before_sheva_na() {
    assert_eq!(
        parse("יָרְאוּ"),
        vec!["yod", "qamats-gadol", "resh", "sheva-na", "alef", "shuruq"]
    );
    let parsed = Parser::default().parse("יָרְאוּ").unwrap();
    assert_eq!(parsed[0].rules.as_slice(), &["qamats-gadol-before-sheva-na"]);
}

#[test]
fn test_undecided_qamats_stays_qamats() {
    assert_eq!(
        parse("דָּבָר"),
        vec!["dalet", "dagesh-qal", "qamats-gadol", "vet", "qamats", "resh"]
    );
}

// ============================================================================
// qamats-qatan
// ============================================================================

#[test]
fn test_qatan_code_point() {
    assert_eq!(
        parse("\u{05DB}\u{05BC}\u{05C7}\u{05DC}"),
        vec!["kaf", "dagesh-qal", "qamats-qatan", "lamed"]
    );
}

#[test]
fn test_qatan_in_maqaf() {
    assert_eq!(parse("מָר־"), vec!["mem", "qamats-qatan", "resh"]);
}

#[test]
fn test_qatan_before_sheva_nah() {
    assert_eq!(
        parse("מְלָךְ"),
        vec!["mem", "sheva-na", "lamed", "qamats-qatan", "khaf-sofit", "sheva-nah"]
    );
}

#[test]
fn test_second_pass_can_be_disabled() {
    let parser = Parser::new(ParserConfig::default().disable("qamats-qatan-before-sheva-nah"));
    let parsed = parser.parse("מְלָךְ").unwrap();
    assert_eq!(parsed[1].vowel, Some(Symbol::Qamats));
}
