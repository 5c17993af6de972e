//! Grouping parsed clusters into syllables.
//!
//! A syllable starts before every genuine vowel and on both sides of a
//! `sheva-na`. A `sheva-nah` never starts one; it closes the syllable
//! before it. Whether a hataf vowel may be followed by a break is a matter
//! of convention, so it is a switch: in strict mode the break is cancelled.

use tracing::trace;

use super::cluster::Cluster;
use crate::rules::Rule;
use crate::symbols::{category_of, is_vowel, NiqqudCategory, Symbol};

/// A syllable: its flattened symbols.
pub type Syllable = Vec<Symbol>;

/// Break before a genuine vowel.
pub const SYLLABLE_BEFORE_VOWEL: Rule = Rule::inline("syllable-before-vowel");
/// Break before and after `sheva-na`.
pub const SYLLABLE_AROUND_SHEVA_NA: Rule = Rule::inline("syllable-around-sheva-na");
/// (strict) No break right after a hataf vowel.
pub const NO_SYLLABLE_AFTER_HATAF: Rule = Rule::inline("no-syllable-after-hataf");

/// The syllable rules, in the order they are evaluated.
pub const SYLLABLE_RULES: &[Rule] = &[
    SYLLABLE_BEFORE_VOWEL,
    SYLLABLE_AROUND_SHEVA_NA,
    NO_SYLLABLE_AFTER_HATAF,
];

/// Split `clusters` into syllables, recording fired syllable rules on the
/// cluster that triggered them.
///
/// `allow` decides whether a rule is active.
pub(crate) fn syllabify_with<F>(clusters: &mut [Cluster], strict: bool, allow: F) -> Vec<Syllable>
where
    F: Fn(&Rule) -> bool,
{
    let mut result = Vec::new();
    let mut syllable = Syllable::new();
    let mut last_vowel: Option<Symbol> = None;

    for cluster in clusters.iter_mut() {
        let mut syllable_break = false;

        if cluster.vowel.is_some_and(is_vowel) {
            syllable_break = fire(cluster, &SYLLABLE_BEFORE_VOWEL, &allow);
        } else if cluster.vowel_is(Symbol::ShevaNa) || last_vowel == Some(Symbol::ShevaNa) {
            syllable_break = fire(cluster, &SYLLABLE_AROUND_SHEVA_NA, &allow);
        }

        if strict
            && last_vowel.and_then(category_of) == Some(NiqqudCategory::Hataf)
            && fire(cluster, &NO_SYLLABLE_AFTER_HATAF, &allow)
        {
            syllable_break = false;
        }

        if syllable_break && !syllable.is_empty() {
            result.push(std::mem::take(&mut syllable));
        }

        syllable.extend(cluster.items());
        last_vowel = cluster.vowel;
    }

    if !syllable.is_empty() {
        result.push(syllable);
    }

    trace!(syllables = result.len(), strict, "syllabified");
    result
}

fn fire<F>(cluster: &mut Cluster, rule: &Rule, allow: &F) -> bool
where
    F: Fn(&Rule) -> bool,
{
    let allowed = allow(rule);
    if allowed {
        cluster.rules.push(rule.name);
    }
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(letter: Symbol, vowel: Option<Symbol>) -> Cluster {
        Cluster::new(Some(letter), None, vowel)
    }

    #[test]
    fn test_closed_syllable() {
        let mut clusters = vec![c(Symbol::Mem, Some(Symbol::Patah)), c(Symbol::Sav, None)];
        let syllables = syllabify_with(&mut clusters, false, |_| true);
        assert_eq!(syllables, vec![vec![Symbol::Mem, Symbol::Patah, Symbol::Sav]]);
        assert_eq!(clusters[0].rules.as_slice(), &["syllable-before-vowel"]);
    }

    #[test]
    fn test_hataf_strict_and_lax() {
        let word = || {
            vec![
                c(Symbol::Alef, Some(Symbol::HatafPatah)),
                c(Symbol::Shin, Some(Symbol::Segol)),
                c(Symbol::Resh, None),
            ]
        };

        let mut lax = word();
        assert_eq!(syllabify_with(&mut lax, false, |_| true).len(), 2);

        let mut strict = word();
        assert_eq!(syllabify_with(&mut strict, true, |_| true).len(), 1);
        assert_eq!(
            strict[1].rules.as_slice(),
            &["syllable-before-vowel", "no-syllable-after-hataf"]
        );
    }

    #[test]
    fn test_disabled_rule_does_not_break() {
        let mut clusters = vec![c(Symbol::Mem, Some(Symbol::Hiriq)), c(Symbol::Yod, Some(Symbol::Patah))];
        let syllables = syllabify_with(&mut clusters, false, |r| r.name != "syllable-before-vowel");
        assert_eq!(syllables.len(), 1);
        assert!(clusters[1].rules.is_empty());
    }
}
