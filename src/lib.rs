//! set-tab-color: set iTerm2 tab, foreground and background colors from
//! profiles that adapt to the enclosing terminal and shell.
//!
//! Profile storage and resolution live in `set-tab-color-config`; terminal
//! and shell detection in `set-tab-color-detect`. This crate adds the
//! command-line surface, color normalization and the `it2setcolor` runner.

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod apply;
pub mod cli;
pub mod colors;
pub mod debug;
