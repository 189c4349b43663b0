//! Configuration merge system
//!
//! Implements the 3-layer configuration merge:
//! 1. Built-in defaults (all check groups and integrations enabled)
//! 2. Base file (scripts/check-modules/check-groups.config.json)
//! 3. Local override (scripts/check-modules/check-groups.config.local.json)
//!
//! Later layers win per field. Every attempted file is recorded as a
//! [`ConfigSource`]; files that fail to read or parse are collected as
//! [`ConfigError`]s without aborting the load.

mod defaults;
mod loader;
mod merge;
mod partial;

pub use defaults::{CheckGroupConfig, CheckGroups, CheckIntegrations};
pub use loader::{
    load_check_group_config, Candidate, CandidateKind, ConfigError, ConfigSource, LoadedConfig,
    SourceError, CONFIG_ROOT_ENV,
};
pub use merge::apply_partial;
pub use partial::{PartialCheckGroupConfig, PartialCheckGroups, PartialCheckIntegrations};
