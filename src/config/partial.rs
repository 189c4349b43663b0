//! Permissive extraction of recognized fields from raw JSON
//!
//! Not schema validation: a field is taken only when it is present and
//! boolean-typed. Missing sections, wrong-typed values, and unrecognized
//! keys contribute nothing and raise nothing.

use serde_json::Value;

/// Partial counterpart of [`CheckGroups`](super::CheckGroups).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialCheckGroups {
    pub fast: Option<bool>,
    pub deep: Option<bool>,
}

/// Partial counterpart of [`CheckIntegrations`](super::CheckIntegrations).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialCheckIntegrations {
    pub npm_check_updates: Option<bool>,
    pub npm_deprecated_check: Option<bool>,
    pub eslint: Option<bool>,
    pub gh_slimify: Option<bool>,
}

/// What a single configuration source contributed.
///
/// Merge input only; the resolved configuration handed to callers is
/// always the fully-populated [`CheckGroupConfig`](super::CheckGroupConfig).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialCheckGroupConfig {
    pub groups: PartialCheckGroups,
    pub integrations: PartialCheckIntegrations,
}

impl PartialCheckGroupConfig {
    /// Extract the six recognized boolean fields from a parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let groups = value.get("groups");
        let integrations = value.get("integrations");

        Self {
            groups: PartialCheckGroups {
                fast: bool_field(groups, "fast"),
                deep: bool_field(groups, "deep"),
            },
            integrations: PartialCheckIntegrations {
                npm_check_updates: bool_field(integrations, "npmCheckUpdates"),
                npm_deprecated_check: bool_field(integrations, "npmDeprecatedCheck"),
                eslint: bool_field(integrations, "eslint"),
                gh_slimify: bool_field(integrations, "ghSlimify"),
            },
        }
    }
}

/// Present-and-boolean check for one allow-listed key.
fn bool_field(section: Option<&Value>, key: &str) -> Option<bool> {
    section.and_then(|s| s.get(key)).and_then(Value::as_bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_object() {
        let partial = PartialCheckGroupConfig::from_value(&json!({
            "groups": {"fast": false, "deep": true},
            "integrations": {
                "npmCheckUpdates": false,
                "npmDeprecatedCheck": true,
                "eslint": false,
                "ghSlimify": true
            }
        }));

        assert_eq!(partial.groups.fast, Some(false));
        assert_eq!(partial.groups.deep, Some(true));
        assert_eq!(partial.integrations.npm_check_updates, Some(false));
        assert_eq!(partial.integrations.npm_deprecated_check, Some(true));
        assert_eq!(partial.integrations.eslint, Some(false));
        assert_eq!(partial.integrations.gh_slimify, Some(true));
    }

    #[test]
    fn test_non_object_values_contribute_nothing() {
        for value in [json!([1, 2, 3]), json!("fast"), json!(5), json!(null)] {
            let partial = PartialCheckGroupConfig::from_value(&value);
            assert_eq!(partial, PartialCheckGroupConfig::default());
        }
    }

    #[test]
    fn test_empty_object() {
        let partial = PartialCheckGroupConfig::from_value(&json!({}));
        assert_eq!(partial, PartialCheckGroupConfig::default());
    }

    #[test]
    fn test_wrong_typed_fields_ignored() {
        let partial = PartialCheckGroupConfig::from_value(&json!({
            "groups": {"fast": "yes", "deep": 1},
            "integrations": {"eslint": null, "ghSlimify": {}}
        }));

        assert_eq!(partial, PartialCheckGroupConfig::default());
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let partial = PartialCheckGroupConfig::from_value(&json!({
            "groups": {"fast": false, "slow": true},
            "integrations": {"prettier": false},
            "extra": {"anything": 42}
        }));

        assert_eq!(partial.groups.fast, Some(false));
        assert_eq!(partial.groups.deep, None);
        assert_eq!(
            partial.integrations,
            PartialCheckIntegrations::default()
        );
    }

    #[test]
    fn test_sections_of_wrong_type_ignored() {
        let partial = PartialCheckGroupConfig::from_value(&json!({
            "groups": [true, false],
            "integrations": "all"
        }));

        assert_eq!(partial, PartialCheckGroupConfig::default());
    }
}
