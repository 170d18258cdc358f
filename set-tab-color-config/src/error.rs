//! Typed error variants for the set-tab-color-config crate.
//!
//! Loading failures (`ConfigError`) and resolution failures
//! (`ResolveError`) are kept apart: a config file that loads fine can
//! still fail to resolve a particular profile name. The binary wraps both
//! in `anyhow` with context.

use std::path::PathBuf;

/// Errors that can occur while locating or reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML, or `profiles` is not a table.
    #[error("error parsing config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Neither `$SET_TAB_COLOR_CONFIG`, a home directory nor a platform
    /// config directory is available.
    #[error("could not determine a configuration directory")]
    NoConfigDir,
}

/// Errors produced when resolving a named profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No top-level profile with this name.
    #[error("profile {0:?} not found")]
    ProfileNotFound(String),

    /// A top-level entry exists but cannot be read as a profile.
    #[error("profile {name:?} is not a valid profile: {reason}")]
    InvalidProfile { name: String, reason: String },
}

impl ResolveError {
    /// Name of the profile the error refers to.
    pub fn profile_name(&self) -> &str {
        match self {
            ResolveError::ProfileNotFound(name) => name,
            ResolveError::InvalidProfile { name, .. } => name,
        }
    }
}

/// A terminal or shell name that is not one of the recognized kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} name {value:?}")]
pub struct ParseKindError {
    kind: &'static str,
    value: String,
}

impl ParseKindError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
