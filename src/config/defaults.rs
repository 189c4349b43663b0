//! Built-in check-group defaults (layer 1)
//!
//! Every check group and integration is enabled until a config file
//! turns it off.

use serde::{Deserialize, Serialize};

/// Which check phases run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckGroups {
    /// Fast checks (default: true)
    pub fast: bool,

    /// Deep checks (default: true)
    pub deep: bool,
}

impl Default for CheckGroups {
    fn default() -> Self {
        Self {
            fast: true,
            deep: true,
        }
    }
}

/// Which optional integrations run.
///
/// Serialized field names match the JSON config files (camelCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIntegrations {
    /// npm-check-updates (default: true)
    pub npm_check_updates: bool,

    /// npm deprecation audit (default: true)
    pub npm_deprecated_check: bool,

    /// ESLint (default: true)
    pub eslint: bool,

    /// gh-slimify (default: true)
    pub gh_slimify: bool,
}

impl Default for CheckIntegrations {
    fn default() -> Self {
        Self {
            npm_check_updates: true,
            npm_deprecated_check: true,
            eslint: true,
            gh_slimify: true,
        }
    }
}

/// Fully-resolved check-group configuration.
///
/// After loading, every field is present and boolean; partial shapes only
/// exist as merge input. Each `default()` call returns an independent
/// value, so no caller ever holds a mutable alias to shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckGroupConfig {
    pub groups: CheckGroups,
    pub integrations: CheckIntegrations,
}
