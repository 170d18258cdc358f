//! Shared integration test helpers for set-tab-color.
//!
//! ```ignore
//! mod common;
//! use common::{store_from, RecordingSink};
//! ```

#![allow(dead_code)]

use std::fs;

use set_tab_color::apply::{ApplyError, ColorSink, ColorTarget};
use set_tab_color_config::ProfileStore;
use tempfile::TempDir;

/// Writes `contents` as `set-tab-color.toml` in a temp dir and loads it.
///
/// The `TempDir` is returned so the file outlives the store's use.
pub fn store_from(contents: &str) -> (ProfileStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("set-tab-color.toml");
    fs::write(&path, contents).expect("Failed to write config");
    let store = ProfileStore::load_from(&path).expect("Failed to load config");
    (store, temp_dir)
}

/// Sink recording `it2setcolor` argument lines instead of running anything.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<String>,
}

impl ColorSink for RecordingSink {
    fn set_preset(&mut self, name: &str) -> Result<(), ApplyError> {
        self.calls.push(format!("preset {name}"));
        Ok(())
    }

    fn set_color(&mut self, target: ColorTarget, hex: &str) -> Result<(), ApplyError> {
        self.calls.push(format!("{} {hex}", target.as_arg()));
        Ok(())
    }
}

/// Config used by the profile flow tests.
pub const SAMPLE_CONFIG: &str = r##"
[profiles.work]
tab = "blue"
fg = "white"

[profiles.work.zsh]
fg = "yellow"

[profiles.work.etterminal]
tab = "green"

[profiles.work.iterm2]
tab = "#f80"

[profiles.dev]
tab = "purple"
bg = "black"
preset = "Solarized Dark"

[profiles.dev.tmux]
bg = "darkgray"

[profiles.broken]
note = "no colors here"
"##;
