//! Rules of Hebrew grammar.
//!
//! The rules are grouped into stages which run in a fixed order. Each stage
//! settles something a later stage depends on:
//!
//! 1. `vav` - a `vav` absorbed into a shuruq or holam-male
//! 2. `dagesh` - dagesh-qal, dagesh-hazaq and mapiq
//! 3. `eim-qria` - silent letters marking a preceding long vowel
//! 4. `vowel` - patah-genuvah, glides and the default holam-haser
//! 5. `qamats` - qamats-gadol vs. qamats-qatan from local context and accents
//! 6. `sheva` - sheva-na vs. sheva-nah, then the word-ending exceptions
//! 7. `sheva2` - modern voicing; records a trace entry only
//! 8. `qamats2` - qamats decided by the now-resolved sheva after it
//!
//! # Sources
//!
//! - Even-Shoshan, Avraham. _HaMillon Hehadash_. Jerusalem, 1961.
//! - Riachi, Shmuel Meir, ed. _Tikkun Korim: Simanim_. Jerusalem, 1995.
//! - Khan, Geoffrey. _The Tiberian Pronunciation Tradition of Biblical Hebrew,
//!   Volume I_. Cambridge, UK, 2020.
//! - Gesenius, Wilhelm. _Gesenius' Hebrew Grammar_. Boston, 1839.
//!
//! # Writing a rule
//!
//! A rule is a plain function from [`RuleContext`] to the index of the
//! cluster it modified. Returning `None` means the rule did not fire.
//!
//! ```
//! use hebphonics::grammar::RuleContext;
//! use hebphonics::rules::Rule;
//! use hebphonics::symbols::Symbol;
//!
//! fn holam_default(ctx: &mut RuleContext<'_>) -> Option<usize> {
//!     if !ctx.guess().vowel_is(Symbol::Holam) {
//!         return None;
//!     }
//!     ctx.guess_mut().vowel = Some(Symbol::HolamHaser);
//!     Some(ctx.idx)
//! }
//!
//! const RULE: Rule = Rule::new("my-holam-default", holam_default);
//! assert!(RULE.default_enabled);
//! ```

use std::fmt;

use serde::Serialize;

use crate::grammar::syllable::SYLLABLE_RULES;
use crate::grammar::RuleContext;

pub mod dagesh;
pub mod eim_qria;
pub mod modern;
pub mod qamats;
pub mod sheva;
pub mod sheva_endings;
pub mod vowel;

/// A rule's rewrite: the index of the modified cluster if it fired.
pub type RuleFn = fn(&mut RuleContext<'_>) -> Option<usize>;

/// A named, individually configurable rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Unique kebab-case name, recorded in the cluster trace.
    pub name: &'static str,
    /// Whether the rule runs without being explicitly enabled.
    pub default_enabled: bool,
    /// The rewrite; `None` for rules that are named but not implemented.
    pub apply: Option<RuleFn>,
}

impl Rule {
    /// A default-enabled rule.
    pub const fn new(name: &'static str, apply: RuleFn) -> Self {
        Rule {
            name,
            default_enabled: true,
            apply: Some(apply),
        }
    }

    /// A rule that only runs when explicitly enabled.
    pub const fn off(name: &'static str, apply: RuleFn) -> Self {
        Rule {
            name,
            default_enabled: false,
            apply: Some(apply),
        }
    }

    /// A rule that is named but has no rewrite yet.
    pub const fn open(name: &'static str) -> Self {
        Rule {
            name,
            default_enabled: false,
            apply: None,
        }
    }

    /// A rule the engine evaluates inline (the syllable rules).
    pub(crate) const fn inline(name: &'static str) -> Self {
        Rule {
            name,
            default_enabled: true,
            apply: None,
        }
    }

    /// True if the rule has a rewrite.
    #[inline]
    pub fn is_implemented(&self) -> bool {
        self.apply.is_some()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("default_enabled", &self.default_enabled)
            .field("implemented", &self.is_implemented())
            .finish()
    }
}

/// A rule-engine stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// `vav` absorbed into shuruq / holam-male.
    Vav,
    /// Dagesh classification.
    Dagesh,
    /// Mater lectionis.
    EimQria,
    /// General vowel rules.
    Vowel,
    /// First qamats pass.
    Qamats,
    /// Sheva resolution and word-ending patterns.
    Sheva,
    /// Modern voicing (trace only).
    Sheva2,
    /// Second qamats pass.
    Qamats2,
}

impl Stage {
    /// The stage name (e.g. `"eim-qria"`).
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Vav => "vav",
            Stage::Dagesh => "dagesh",
            Stage::EimQria => "eim-qria",
            Stage::Vowel => "vowel",
            Stage::Qamats => "qamats",
            Stage::Sheva => "sheva",
            Stage::Sheva2 => "sheva2",
            Stage::Qamats2 => "qamats2",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stage and its rules, tried in order.
#[derive(Debug, Clone, Copy)]
pub struct StageRules {
    /// The stage.
    pub stage: Stage,
    groups: &'static [&'static [Rule]],
}

impl StageRules {
    /// The stage's rules in the order they are tried.
    pub fn rules(&self) -> impl Iterator<Item = &'static Rule> {
        self.groups.iter().flat_map(|group| group.iter())
    }
}

/// Every stage, in the order the engine runs them.
pub static STAGES: &[StageRules] = &[
    StageRules {
        stage: Stage::Vav,
        groups: &[eim_qria::VAV_RULES],
    },
    StageRules {
        stage: Stage::Dagesh,
        groups: &[dagesh::RULES],
    },
    StageRules {
        stage: Stage::EimQria,
        groups: &[eim_qria::RULES],
    },
    StageRules {
        stage: Stage::Vowel,
        groups: &[vowel::RULES],
    },
    StageRules {
        stage: Stage::Qamats,
        groups: &[qamats::RULES],
    },
    StageRules {
        stage: Stage::Sheva,
        groups: &[sheva::RULES, sheva_endings::RULES],
    },
    StageRules {
        stage: Stage::Sheva2,
        groups: &[modern::RULES],
    },
    StageRules {
        stage: Stage::Qamats2,
        groups: &[qamats::SECOND_PASS_RULES],
    },
];

/// Every rule, including the syllable rules, paired with its stage name.
pub fn all_rules() -> impl Iterator<Item = (&'static str, &'static Rule)> {
    STAGES
        .iter()
        .flat_map(|s| s.rules().map(move |r| (s.stage.name(), r)))
        .chain(SYLLABLE_RULES.iter().map(|r| ("syllable", r)))
}

/// Look up a rule by name.
pub fn find_rule(name: &str) -> Option<&'static Rule> {
    all_rules().map(|(_, r)| r).find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_rule_names_are_unique() {
        let mut seen = FxHashSet::default();
        for (_, rule) in all_rules() {
            assert!(seen.insert(rule.name), "duplicate rule {}", rule.name);
        }
    }

    #[test]
    fn test_stage_order() {
        let names: Vec<_> = STAGES.iter().map(|s| s.stage.name()).collect();
        assert_eq!(
            names,
            ["vav", "dagesh", "eim-qria", "vowel", "qamats", "sheva", "sheva2", "qamats2"]
        );
    }

    #[test]
    fn test_open_rules_are_off() {
        let open: Vec<_> = all_rules()
            .filter(|(stage, r)| *stage != "syllable" && !r.is_implemented())
            .map(|(_, r)| r)
            .collect();
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|r| !r.default_enabled));
    }

    #[test]
    fn test_find_rule() {
        let rule = find_rule("sheva-na-after-meteg").unwrap();
        assert!(!rule.default_enabled);
        assert!(find_rule("syllable-before-vowel").is_some());
        assert!(find_rule("no-such-rule").is_none());
    }
}
