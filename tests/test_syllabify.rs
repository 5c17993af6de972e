//! Syllable breaking.

use hebphonics::prelude::*;

fn syllabify(word: &str, strict: bool) -> Vec<Vec<&'static str>> {
    let parser = Parser::default();
    let mut parsed = parser.parse(word).unwrap();
    parser
        .syllabify(&mut parsed, strict)
        .iter()
        .map(|syllable| syllable.iter().map(|s| s.name()).collect())
        .collect()
}

#[test]
fn test_empty() {
    assert!(syllabify("", false).is_empty());
}

#[test]
fn test_break_before_vowel() {
    assert_eq!(
        syllabify("בָּרָא", false),
        vec![
            vec!["bet", "dagesh-qal", "qamats-gadol"],
            vec!["resh", "qamats-gadol", "eim-qria-alef"],
        ]
    );
}

#[test]
fn test_break_around_sheva_na() {
    assert_eq!(
        syllabify("שָׁרְצוּ", false),
        vec![
            vec!["shin", "qamats-gadol"],
            vec!["resh", "sheva-na"],
            vec!["tsadi", "shuruq"],
        ]
    );
    assert_eq!(
        syllabify("בְּלִי", false),
        vec![
            vec!["bet", "dagesh-qal", "sheva-na"],
            vec!["lamed", "hiriq-male-yod", "eim-qria-yod"],
        ]
    );
}

#[test]
fn test_no_break_after_sheva_nah() {
    assert_eq!(
        syllabify("יִשְׁרְצוּ", false),
        vec![
            vec!["yod", "hiriq", "shin", "sheva-nah"],
            vec!["resh", "sheva-na"],
            vec!["tsadi", "shuruq"],
        ]
    );
    assert_eq!(
        syllabify("מִדְבָּר", false),
        vec![
            vec!["mem", "hiriq", "dalet", "sheva-nah"],
            vec!["bet", "dagesh-qal", "qamats", "resh"],
        ]
    );
}

#[test]
fn test_strict_no_break_after_hataf() {
    assert_eq!(
        syllabify("אֲשֶׁר", false),
        vec![vec!["alef", "hataf-patah"], vec!["shin", "segol", "resh"]]
    );
    assert_eq!(
        syllabify("אֲשֶׁר", true),
        vec![vec!["alef", "hataf-patah", "shin", "segol", "resh"]]
    );
}

#[test]
fn test_simple_syllables() {
    assert_eq!(syllabify("מַת", false), vec![vec!["mem", "patah", "sav"]]);
    assert_eq!(
        syllabify("מִי", false),
        vec![vec!["mem", "hiriq-male-yod", "eim-qria-yod"]]
    );
}

#[test]
fn test_syllables_cover_every_symbol() {
    let parser = Parser::default();
    for word in ["שָׁלוֹם", "וַיְהִי", "יֹאמְרוּ", "הַמַּיִם", "אֵלָיו"] {
        let mut parsed = parser.parse(word).unwrap();
        let flat = flatten(&parsed);
        let syllables = parser.syllabify(&mut parsed, false);
        assert_eq!(syllables.concat(), flat, "{}", word);
    }
}

#[test]
fn test_syllable_rules_are_traced() {
    let parser = Parser::default();
    let mut parsed = parser.parse("שָׁרְצוּ").unwrap();
    parser.syllabify(&mut parsed, false);
    let trace = rule_trace(&parsed);
    assert!(trace.contains(&"syllable-before-vowel"));
    assert!(trace.contains(&"syllable-around-sheva-na"));
    assert!(!trace.contains(&"no-syllable-after-hataf"));
}

#[test]
fn test_disabled_syllable_rule() {
    let parser = Parser::new(ParserConfig::default().disable("syllable-around-sheva-na"));
    let mut parsed = parser.parse("שָׁרְצוּ").unwrap();
    let syllables = parser.syllabify(&mut parsed, false);
    assert_eq!(syllables.len(), 2);
    assert!(!rule_trace(&parsed).contains(&"syllable-around-sheva-na"));
}
