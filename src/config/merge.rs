//! Configuration merge logic
//!
//! Later sources override earlier ones per field; fields a source leaves
//! unset keep the previous value. Every setting is an independent boolean
//! flag, so values are overwritten wholesale and there is no deep or
//! array merge.

use super::defaults::CheckGroupConfig;
use super::partial::PartialCheckGroupConfig;

/// Apply every set field of `partial` onto `config`, overwriting the
/// previous value (last-applied-wins).
pub fn apply_partial(config: &mut CheckGroupConfig, partial: &PartialCheckGroupConfig) {
    if let Some(fast) = partial.groups.fast {
        config.groups.fast = fast;
    }
    if let Some(deep) = partial.groups.deep {
        config.groups.deep = deep;
    }

    if let Some(npm_check_updates) = partial.integrations.npm_check_updates {
        config.integrations.npm_check_updates = npm_check_updates;
    }
    if let Some(npm_deprecated_check) = partial.integrations.npm_deprecated_check {
        config.integrations.npm_deprecated_check = npm_deprecated_check;
    }
    if let Some(eslint) = partial.integrations.eslint {
        config.integrations.eslint = eslint;
    }
    if let Some(gh_slimify) = partial.integrations.gh_slimify {
        config.integrations.gh_slimify = gh_slimify;
    }
}
