//! Configuration and profile resolution for set-tab-color.
//!
//! This crate provides:
//!
//! - Terminal and shell kinds plus the `DetectionResult` the detector hands
//!   to the resolver
//! - The sparse `Profile` record and its overlay merge
//! - The typed `ProfileStore` tree loaded from `set-tab-color.toml`
//! - Layered resolution (base, shell sub-profile, terminal sub-profile)
//! - Config file path discovery

pub mod error;
pub mod paths;
pub mod profile;
pub mod resolve;
pub mod store;
pub mod types;

pub use error::{ConfigError, ParseKindError, ResolveError};
pub use paths::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, config_path};
pub use profile::Profile;
pub use resolve::{Resolution, resolve, resolve_layers};
pub use store::{ProfileEntry, ProfileNode, ProfileStore};
pub use types::{DetectionResult, ShellKind, TerminalKind};
