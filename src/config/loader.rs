//! Candidate discovery and the load entry point
//!
//! Resolves the effective project root, attempts the two fixed candidate
//! files in order, and records a per-candidate outcome for each attempt.
//! A failing source never aborts the load: callers always receive a
//! usable configuration plus full diagnostics.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::defaults::CheckGroupConfig;
use super::merge::apply_partial;
use super::partial::PartialCheckGroupConfig;

/// Environment variable naming an override project root.
///
/// Takes precedence over an explicitly supplied root; ignored when empty.
pub const CONFIG_ROOT_ENV: &str = "CHECK_MODULES_CONFIG_ROOT";

/// Base configuration file, applied first.
const BASE_FILE: &str = "check-groups.config.json";

/// Developer-local override, applied last.
const LOCAL_FILE: &str = "check-groups.config.local.json";

/// Which layer a candidate file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Checked-in base file.
    Default,
    /// Developer-local override.
    Local,
}

impl CandidateKind {
    /// Returns the string representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::Default => "default",
            CandidateKind::Local => "local",
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One configuration file location considered during loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub path: PathBuf,
    pub kind: CandidateKind,
}

/// Outcome of attempting one candidate, in candidate order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub kind: CandidateKind,

    /// True when the file was successfully parsed and merged.
    pub applied: bool,

    /// True when the file did not exist. Never set for read or parse
    /// failures; those carry a [`ConfigError`] instead.
    pub missing: bool,
}

/// A candidate whose read or parse genuinely failed.
#[derive(Debug)]
pub struct ConfigError {
    pub path: PathBuf,
    pub kind: CandidateKind,
    pub error: SourceError,
}

/// Failure classes for a single configuration source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Reading the file failed (absence is classified by the loader and
    /// recorded on the source record, not here).
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// The file was read but is not valid JSON.
    #[error("invalid JSON in config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SourceError {
    /// Stable OS-style code for classifiable I/O failures.
    ///
    /// Lets callers distinguish "file not found" from other failures
    /// without matching on error kinds themselves.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            SourceError::Io(e) => match e.kind() {
                io::ErrorKind::NotFound => Some("ENOENT"),
                io::ErrorKind::PermissionDenied => Some("EACCES"),
                _ => None,
            },
            SourceError::Parse(_) => None,
        }
    }
}

/// Everything one load call produced.
///
/// `errors` is diagnostics only: `config` is always usable, falling back
/// to defaults for any source that could not be applied.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Merged configuration snapshot, independent of any shared state.
    pub config: CheckGroupConfig,

    /// One outcome per candidate, candidate order preserved.
    pub sources: Vec<ConfigSource>,

    /// Candidates that failed to read or parse (absence is not an error).
    pub errors: Vec<ConfigError>,
}

/// Load the check-group configuration for a project root.
///
/// The effective root is resolved in precedence order: the
/// [`CONFIG_ROOT_ENV`] environment variable, the `project_root` argument,
/// then the current working directory. Both candidate files under
/// `scripts/check-modules/` are attempted in a fixed order; each attempt
/// is recorded as a [`ConfigSource`], and read/parse failures are
/// collected into `errors` rather than propagated. Only root resolution
/// itself can fail. Nothing is cached: the environment and filesystem
/// are re-read on every call.
pub fn load_check_group_config(project_root: Option<&Path>) -> io::Result<LoadedConfig> {
    let root = resolve_root(project_root)?;

    let mut config = CheckGroupConfig::default();
    let mut sources = Vec::with_capacity(2);
    let mut errors = Vec::new();

    for candidate in candidate_paths(&root) {
        match read_candidate(&candidate.path) {
            Ok(partial) => {
                apply_partial(&mut config, &partial);
                sources.push(ConfigSource {
                    path: candidate.path,
                    kind: candidate.kind,
                    applied: true,
                    missing: false,
                });
            }
            Err(SourceError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    path = %candidate.path.display(),
                    kind = %candidate.kind,
                    "config candidate not present"
                );
                sources.push(ConfigSource {
                    path: candidate.path,
                    kind: candidate.kind,
                    applied: false,
                    missing: true,
                });
            }
            Err(error) => {
                warn!(
                    path = %candidate.path.display(),
                    kind = %candidate.kind,
                    %error,
                    "failed to load config candidate"
                );
                sources.push(ConfigSource {
                    path: candidate.path.clone(),
                    kind: candidate.kind,
                    applied: false,
                    missing: false,
                });
                errors.push(ConfigError {
                    path: candidate.path,
                    kind: candidate.kind,
                    error,
                });
            }
        }
    }

    Ok(LoadedConfig {
        config,
        sources,
        errors,
    })
}

/// Resolve the effective root: env override, explicit argument, cwd.
fn resolve_root(project_root: Option<&Path>) -> io::Result<PathBuf> {
    if let Ok(root) = std::env::var(CONFIG_ROOT_ENV) {
        if !root.is_empty() {
            return Ok(PathBuf::from(root));
        }
    }

    match project_root {
        Some(root) => Ok(root.to_path_buf()),
        None => std::env::current_dir(),
    }
}

/// The two fixed candidates, base file first.
fn candidate_paths(root: &Path) -> [Candidate; 2] {
    let config_dir = root.join("scripts").join("check-modules");

    [
        Candidate {
            path: config_dir.join(BASE_FILE),
            kind: CandidateKind::Default,
        },
        Candidate {
            path: config_dir.join(LOCAL_FILE),
            kind: CandidateKind::Local,
        },
    ]
}

/// Read and permissively decode one candidate file.
fn read_candidate(path: &Path) -> Result<PartialCheckGroupConfig, SourceError> {
    let contents = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&contents)?;
    Ok(PartialCheckGroupConfig::from_value(&parsed))
}
