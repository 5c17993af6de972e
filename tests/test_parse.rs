//! Parsing whole words: basic parses and the `dagesh` stage.

use hebphonics::prelude::*;

fn parse_with(parser: &Parser, word: &str) -> Vec<&'static str> {
    let parsed = parser.parse(word).unwrap();
    flatten(&parsed).iter().map(|s| s.name()).collect()
}

fn parse(word: &str) -> Vec<&'static str> {
    parse_with(&Parser::default(), word)
}

// ============================================================================
// Basic parses
// ============================================================================

#[test]
fn test_empty_word() {
    assert!(parse("").is_empty());
}

#[test]
fn test_simple_closed_syllable() {
    assert_eq!(parse("עַל"), vec!["ayin", "patah", "lamed"]);
}

#[test]
fn test_patah_genuvah_in_context() {
    assert_eq!(parse("נֹחַ"), vec!["nun", "holam-haser", "het", "patah-genuvah"]);
    assert_eq!(
        parse("הָרֵעַ"),
        vec!["he", "qamats-gadol", "resh", "tsere", "ayin", "patah-genuvah"]
    );
}

#[test]
fn test_holam_male_after_dagesh_hazaq() {
    assert_eq!(
        parse("מַצּוֹת"),
        vec!["mem", "patah", "tsadi", "dagesh-hazaq", "holam-male-vav", "sav"]
    );
}

#[test]
fn test_lex_errors_surface() {
    let parser = Parser::default();
    assert!(matches!(
        parser.parse("\u{05B8}"),
        Err(LexError::MissingLetter { .. })
    ));
    assert!(matches!(
        parser.parse("\u{05D0}a"),
        Err(LexError::UnknownCodePoint { code: 0x61, .. })
    ));
}

#[test]
fn test_parse_is_deterministic() {
    let parser = Parser::default();
    let word = "וְיִשְׁתַּחֲוּוּ";
    assert_eq!(parser.parse(word).unwrap(), parser.parse(word).unwrap());
}

// ============================================================================
// dagesh
// ============================================================================

#[test]
fn test_dagesh_qal_at_start() {
    assert_eq!(
        parse("דָּבָר"),
        vec!["dalet", "dagesh-qal", "qamats-gadol", "vet", "qamats", "resh"]
    );
    assert_eq!(parse("פֶּה"), vec!["pe", "dagesh-qal", "segol", "eim-qria-he"]);
}

#[test]
fn test_dagesh_qal_after_sheva_nah() {
    assert_eq!(
        parse("מִדְבָּר"),
        vec!["mem", "hiriq", "dalet", "sheva-nah", "bet", "dagesh-qal", "qamats", "resh"]
    );
}

#[test]
fn test_dagesh_hazaq_bgdkft() {
    assert_eq!(
        parse("שַׁבָּת"),
        vec!["shin", "patah", "bet", "dagesh-hazaq", "qamats-gadol", "sav"]
    );
}

#[test]
fn test_dagesh_hazaq_default() {
    assert_eq!(
        parse("הַמַּיִם"),
        vec![
            "he",
            "patah",
            "mem",
            "dagesh-hazaq",
            "patah",
            "yod-glide",
            "hiriq",
            "mem-sofit",
        ]
    );
}

#[test]
fn test_no_dagesh_bgdkft() {
    assert_eq!(parse("אֶת"), vec!["alef", "segol", "sav"]);
}

#[test]
fn test_mapiq_he() {
    assert_eq!(
        parse("בָּהּ"),
        vec!["bet", "dagesh-qal", "qamats-gadol", "mapiq-he", "mapiq"]
    );
}

#[test]
fn test_mapiq_alef() {
    assert_eq!(
        parse("רֻאּֽוּ"),
        vec!["resh", "qubuts", "mapiq-alef", "mapiq", "shuruq"]
    );
}

#[test]
fn test_mapiq_alef_disabled_falls_to_guttural() {
    let parser = Parser::new(ParserConfig::default().disable("dagesh-is-mapiq-alef"));
    assert_eq!(
        parse_with(&parser, "רֻאּֽוּ"),
        vec!["resh", "qubuts", "alef", "dagesh-hazaq", "shuruq"]
    );
}

#[test]
fn test_dagesh_hazaq_closes_previous() {
    let parsed = Parser::default().parse("שַׁבָּת").unwrap();
    assert!(!parsed[0].isopen);
    assert_eq!(parsed[1].rules.as_slice(), &["dagesh-hazaq-bgdkft", "qamats-gadol-dagesh-hazaq"]);
}
