//! Pattern-based classification of executable names.
//!
//! Classification is a pure function of a name and a [`PatternRuleSet`]: it
//! never touches the filesystem, so the rules can be tested in isolation from
//! the directory walk in [`crate::discovery`].

use std::collections::HashSet;

/// Rules for deciding whether an executable name looks like an AI tool.
///
/// Exclusion rules (`excluded_names` and `suffix_exclusions`) always take
/// precedence over every inclusion rule. All matching is case-insensitive;
/// rule entries are expected to be lowercase already.
#[derive(Debug, Clone, Default)]
pub struct PatternRuleSet {
    pub exact: HashSet<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub suffix_exclusions: Vec<String>,
    pub excluded_names: HashSet<String>,
}

impl PatternRuleSet {
    /// Returns true if the name is explicitly excluded. Exclusion wins over
    /// any inclusion rule, including custom opt-ins.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        let name = name.to_lowercase();

        self.excluded_names.contains(&name)
            || self
                .suffix_exclusions
                .iter()
                .any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Returns true if the name matches an inclusion rule and is not excluded.
    #[must_use]
    pub fn is_included(&self, name: &str) -> bool {
        if self.is_excluded(name) {
            return false;
        }

        let name = name.to_lowercase();

        self.exact.contains(&name)
            || self
                .prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
            || self
                .suffixes
                .iter()
                .any(|suffix| name.ends_with(suffix.as_str()))
    }
}
