//! Which rules the parser runs.
//!
//! Most rules are on by default. A few experimental ones must be listed in
//! `enabled`; any rule can be suppressed by listing it in `disabled`, which
//! always wins.
//!
//! ```
//! use hebphonics::grammar::ParserConfig;
//!
//! let config = ParserConfig::default()
//!     .enable("sheva-na-after-meteg")
//!     .disable("vowel-holam-haser-default");
//!
//! assert!(config.allows("sheva-na-after-meteg", false));
//! assert!(!config.allows("vowel-holam-haser-default", true));
//! assert!(config.allows("dagesh-qal-bgdkft", true));
//!
//! let json = serde_json::to_string(&config).unwrap();
//! let back: ParserConfig = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, config);
//! ```

use serde::{Deserialize, Serialize};

use crate::rules::{all_rules, find_rule};

/// Rule names to explicitly enable or disable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Rules to run even if they are off by default.
    pub enabled: Vec<String>,
    /// Rules never to run.
    pub disabled: Vec<String>,
}

impl ParserConfig {
    /// Build a configuration from two lists of names.
    pub fn new<I, J, S, T>(enabled: I, disabled: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        ParserConfig {
            enabled: enabled.into_iter().map(Into::into).collect(),
            disabled: disabled.into_iter().map(Into::into).collect(),
        }
    }

    /// Enable `name`, removing it from `disabled`.
    pub fn enable(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.disabled.retain(|n| *n != name);
        if !self.enabled.contains(&name) {
            self.enabled.push(name);
        }
        self
    }

    /// Disable `name`, removing it from `enabled`.
    pub fn disable(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.enabled.retain(|n| *n != name);
        if !self.disabled.contains(&name) {
            self.disabled.push(name);
        }
        self
    }

    /// True if a rule with this name and default runs under this config.
    pub fn allows(&self, name: &str, default_enabled: bool) -> bool {
        if self.disabled.iter().any(|n| n == name) {
            return false;
        }
        default_enabled || self.enabled.iter().any(|n| n == name)
    }

    /// Apply `overrides` on top of this config; the override wins for any
    /// name it mentions.
    pub fn merge(mut self, overrides: &ParserConfig) -> Self {
        for name in &overrides.enabled {
            self = self.enable(name.clone());
        }
        for name in &overrides.disabled {
            self = self.disable(name.clone());
        }
        self
    }

    /// Names in this config that match no known rule.
    pub fn unknown_rules(&self) -> Vec<&str> {
        self.enabled
            .iter()
            .chain(&self.disabled)
            .map(String::as_str)
            .filter(|name| find_rule(name).is_none())
            .collect()
    }

    /// The rule names that run under this config.
    pub fn effective_rules(&self) -> Vec<&'static str> {
        all_rules()
            .map(|(_, rule)| rule)
            .filter(|rule| self.allows(rule.name, rule.default_enabled))
            .map(|rule| rule.name)
            .collect()
    }
}
