//! Script-declared change permissions
//!
//! A lobby script may define `getAllowedChanges()` returning a table of
//! category name → boolean. The scripting adapter decodes whatever the script
//! returns into [`AllowedChanges`]; every query then resolves to a boolean,
//! falling back to the caller-supplied default.

use std::collections::HashMap;

/// Decoded permission table.
///
/// Entries whose value was not a boolean are kept as `None`, so that a
/// wrong-typed entry and a missing entry both resolve to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionTable {
    entries: HashMap<String, Option<bool>>,
}

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, name: impl Into<String>, allowed: bool) -> Self {
        self.entries.insert(name.into(), Some(allowed));
        self
    }

    /// Record an entry that is present but not boolean-typed.
    pub fn with_untyped(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), None);
        self
    }

    /// Boolean value for a category, if present and boolean-typed.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.entries.get(name).copied().flatten()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Option<bool>)> for PermissionTable {
    fn from_iter<I: IntoIterator<Item = (String, Option<bool>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Result of asking the script which changes it permits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AllowedChanges {
    /// No callback, not callable, failed, or returned a non-table.
    #[default]
    Undeclared,
    Declared(PermissionTable),
}

impl AllowedChanges {
    pub fn is_declared(&self) -> bool {
        matches!(self, Self::Declared(_))
    }

    /// Resolve a category to a boolean. Total: undeclared, missing and
    /// wrong-typed entries all yield `default`.
    pub fn is_change_allowed(&self, name: &str, default: bool) -> bool {
        match self {
            Self::Undeclared => default,
            Self::Declared(table) => table.flag(name).unwrap_or(default),
        }
    }
}

/// Setting categories the lobby UI asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeCategory {
    /// Global game settings (speed, objective, ...)
    General,
    /// Every addon
    AddonsAll,
    /// Only the addons returned by `getAllowedAddons()`
    AddonsSome,
    /// Swapping player slots
    Swapping,
    /// Opening/closing slots and adding AIs
    PlayerState,
    OwnNation,
    OwnColor,
    OwnTeam,
    AiNation,
    AiColor,
    AiTeam,
}

impl ChangeCategory {
    pub const ALL: [ChangeCategory; 11] = [
        Self::General,
        Self::AddonsAll,
        Self::AddonsSome,
        Self::Swapping,
        Self::PlayerState,
        Self::OwnNation,
        Self::OwnColor,
        Self::OwnTeam,
        Self::AiNation,
        Self::AiColor,
        Self::AiTeam,
    ];

    /// Key used in the script's permission table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::AddonsAll => "addonsAll",
            Self::AddonsSome => "addonsSome",
            Self::Swapping => "swapping",
            Self::PlayerState => "playerState",
            Self::OwnNation => "ownNation",
            Self::OwnColor => "ownColor",
            Self::OwnTeam => "ownTeam",
            Self::AiNation => "aiNation",
            Self::AiColor => "aiColor",
            Self::AiTeam => "aiTeam",
        }
    }
}

impl std::str::FromStr for ChangeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown change category: '{}'", s))
    }
}

impl std::fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_returns_default() {
        let changes = AllowedChanges::Undeclared;
        assert!(!changes.is_change_allowed("speed", false));
        assert!(changes.is_change_allowed("speed", true));
    }

    #[test]
    fn test_declared_boolean_entry_wins() {
        let changes = AllowedChanges::Declared(
            PermissionTable::new()
                .with_flag("general", false)
                .with_flag("swapping", true),
        );
        assert!(!changes.is_change_allowed("general", true));
        assert!(changes.is_change_allowed("swapping", false));
    }

    #[test]
    fn test_missing_or_untyped_entry_returns_default() {
        let changes = AllowedChanges::Declared(PermissionTable::new().with_untyped("ownTeam"));
        assert!(changes.is_change_allowed("ownTeam", true));
        assert!(!changes.is_change_allowed("ownTeam", false));
        assert!(changes.is_change_allowed("aiColor", true));
    }

    #[test]
    fn test_empty_declared_table_is_still_declared() {
        let changes = AllowedChanges::Declared(PermissionTable::new());
        assert!(changes.is_declared());
        assert!(!AllowedChanges::Undeclared.is_declared());
    }

    #[test]
    fn test_category_names_parse_back() {
        for category in ChangeCategory::ALL {
            assert_eq!(category.as_str().parse::<ChangeCategory>().unwrap(), category);
        }
        assert!("speed".parse::<ChangeCategory>().is_err());
    }
}
