//! Typed profile tree built from the `[profiles]` table of the config file.
//!
//! The config file nests sub-profiles as TOML tables:
//!
//! ```toml
//! [profiles.work]
//! tab = "blue"
//! fg = "white"
//!
//! [profiles.work.etterminal]
//! tab = "green"
//! ```
//!
//! Whether a table "is a profile" is decided once here, while building the
//! tree, so the resolver only ever walks typed nodes. A table is a profile
//! fragment when it carries at least one of `tab`, `fg`, `bg` or `preset`.
//! Nested tables that are not fragments are dropped (they can never supply
//! an override); top-level entries that cannot be profiles are kept as
//! [`ProfileEntry::Invalid`] so resolution can report them by name.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use toml::{Table, Value};

use crate::error::ConfigError;
use crate::paths;
use crate::profile::Profile;

/// Keys that hold profile values rather than sub-profiles.
pub const PROFILE_KEYS: [&str; 4] = ["tab", "fg", "bg", "preset"];

/// A profile plus its named sub-profiles (keyed by shell or terminal name).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileNode {
    pub profile: Profile,
    children: BTreeMap<String, ProfileNode>,
}

impl ProfileNode {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            children: BTreeMap::new(),
        }
    }

    /// Attach a sub-profile under `key`.
    pub fn with_child(mut self, key: impl Into<String>, child: ProfileNode) -> Self {
        self.children.insert(key.into(), child);
        self
    }

    /// Sub-profile stored under `key`, if any. Keys are case-sensitive.
    pub fn child(&self, key: &str) -> Option<&ProfileNode> {
        self.children.get(key)
    }

    /// Sub-profile keys in sorted order
    pub fn child_keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    fn from_table(path: &str, table: &Table) -> Self {
        let mut node = ProfileNode::default();
        for (key, value) in table {
            let key_path = format!("{path}.{key}");
            match key.as_str() {
                "tab" => node.profile.tab = string_field(&key_path, value),
                "fg" => node.profile.foreground = string_field(&key_path, value),
                "bg" => node.profile.background = string_field(&key_path, value),
                "preset" => node.profile.preset = string_field(&key_path, value),
                _ => match value {
                    Value::Table(child) if is_profile_table(child) => {
                        node.children
                            .insert(key.clone(), ProfileNode::from_table(&key_path, child));
                    }
                    Value::Table(_) => {
                        log::debug!("Ignoring {key_path}: no tab, fg, bg or preset keys");
                    }
                    other => {
                        log::debug!("Ignoring {key_path}: unexpected {}", other.type_str());
                    }
                },
            }
        }
        node
    }
}

/// True when the table has at least one profile key.
pub fn is_profile_table(table: &Table) -> bool {
    table.keys().any(|key| PROFILE_KEYS.contains(&key.as_str()))
}

fn string_field(key_path: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => {
            log::warn!(
                "Ignoring {key_path}: expected a string, found {}",
                other.type_str()
            );
            None
        }
    }
}

/// A top-level `[profiles.<name>]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEntry {
    Node(ProfileNode),
    /// Present in the file but unusable; carries the reason.
    Invalid(String),
}

impl ProfileEntry {
    fn from_value(name: &str, value: &Value) -> Self {
        let Value::Table(table) = value else {
            return ProfileEntry::Invalid(format!("expected a table, found {}", value.type_str()));
        };

        let has_sub_profiles = table
            .values()
            .any(|v| matches!(v, Value::Table(child) if is_profile_table(child)));
        if is_profile_table(table) || has_sub_profiles {
            ProfileEntry::Node(ProfileNode::from_table(&format!("profiles.{name}"), table))
        } else {
            ProfileEntry::Invalid("no tab, fg, bg or preset keys and no sub-profiles".to_string())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    profiles: Table,
}

/// All profiles defined in the configuration, by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileStore {
    entries: BTreeMap<String, ProfileEntry>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile (builder style, for synthetic stores).
    pub fn with_profile(mut self, name: impl Into<String>, node: ProfileNode) -> Self {
        self.entries.insert(name.into(), ProfileEntry::Node(node));
        self
    }

    /// Build the tree from an already parsed `[profiles]` table.
    pub fn from_profiles_table(profiles: &Table) -> Self {
        let entries = profiles
            .iter()
            .map(|(name, value)| (name.clone(), ProfileEntry::from_value(name, value)))
            .collect();
        Self { entries }
    }

    /// Parse the full config file contents.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Self::from_profiles_table(&file.profiles))
    }

    /// Load from the default config location (see [`paths::config_path`]).
    pub fn load() -> Result<Self, ConfigError> {
        let path = paths::config_path()?;
        Self::load_from(&path)
    }

    /// Load from `path`. A missing file yields an empty store.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Config path: {:?}", path);

        if !path.exists() {
            log::debug!("Config file not found, using empty profile set");
            return Ok(Self::new());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded {} profile(s) from {:?}", store.len(), path);
        Ok(store)
    }

    pub fn get(&self, name: &str) -> Option<&ProfileEntry> {
        self.entries.get(name)
    }

    /// Profile names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
