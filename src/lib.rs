//! Check-modules configuration loading
//!
//! This crate implements the layered check-group configuration for the
//! check-modules tool: built-in defaults, a checked-in base file, and a
//! developer-local override, merged in that order with per-source
//! provenance, plus a shared typed-error classification helper.

pub mod config;
pub mod error;

pub use config::{
    load_check_group_config, Candidate, CandidateKind, CheckGroupConfig, CheckGroups,
    CheckIntegrations, ConfigError, ConfigSource, LoadedConfig, SourceError, CONFIG_ROOT_ENV,
};
pub use error::{error_code, is_error_with_code};
