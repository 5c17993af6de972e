//! The `vowel` stage: holam-haser, patah-genuvah and glides.

use hebphonics::prelude::*;

fn parse(word: &str) -> Vec<&'static str> {
    let parsed = Parser::default().parse(word).unwrap();
    flatten(&parsed).iter().map(|s| s.name()).collect()
}

#[test]
fn test_holam_haser_default() {
    assert_eq!(parse("צֹר"), vec!["tsadi", "holam-haser", "resh"]);
}

#[test]
fn test_patah_genuvah() {
    assert_eq!(parse("נֹחַ"), vec!["nun", "holam-haser", "het", "patah-genuvah"]);
    assert_eq!(parse("רֹעַ"), vec!["resh", "holam-haser", "ayin", "patah-genuvah"]);
    assert_eq!(
        parse("נֹהַּ"),
        vec!["nun", "holam-haser", "mapiq-he", "mapiq", "patah-genuvah"]
    );
}

#[test]
fn test_patah_genuvah_closes() {
    let parsed = Parser::default().parse("רֹעַ").unwrap();
    assert!(!parsed[1].isopen);
}

#[test]
fn test_patah_not_final_is_patah() {
    assert_eq!(parse("עַל"), vec!["ayin", "patah", "lamed"]);
}

#[test]
fn test_glide_av() {
    assert_eq!(
        parse("אֵלָיו"),
        vec!["alef", "tsere", "lamed", "qamats-gadol", "yod-glide", "vav"]
    );
}

#[test]
fn test_glide_ai() {
    assert_eq!(parse("חָי"), vec!["het", "qamats-gadol", "yod-glide"]);
    assert_eq!(parse("חַי"), vec!["het", "patah", "yod-glide"]);
}

#[test]
fn test_glide_aiy() {
    assert_eq!(parse("מַיִם"), vec!["mem", "patah", "yod-glide", "hiriq", "mem-sofit"]);
}

#[test]
fn test_glide_oy() {
    assert_eq!(parse("אוֹי"), vec!["alef", "holam-male-vav", "yod-glide"]);
}

#[test]
fn test_glide_uy() {
    assert_eq!(
        parse("צִפּוּי"),
        vec!["tsadi", "hiriq", "pe", "dagesh-hazaq", "shuruq", "yod-glide"]
    );
}

#[test]
fn test_initial_shuruq_is_not_glide() {
    assert_eq!(parse("וּמִי"), vec!["shuruq", "mem", "hiriq-male-yod", "eim-qria-yod"]);
}

#[test]
fn test_glide_rule_is_traced_on_yod() {
    let parsed = Parser::default().parse("חַי").unwrap();
    assert!(parsed[1].rules.contains(&"glide-ai-patah"));
    assert!(parsed[0].rules.is_empty());
}
