//! Terminal and shell detection from the process ancestry.
//!
//! Detection is two steps with explicit collaborators:
//!
//! 1. [`AncestryWalker`] follows parent links through a [`ProcessSource`]
//!    and yields the [`AncestorChain`], nearest ancestor first.
//! 2. [`classify`] matches each name against known shells and terminals
//!    and produces a [`DetectionResult`].
//!
//! [`Detector`] runs both. Tests (and anyone needing synthetic detection)
//! pass a [`StaticProcessSource`] instead of the live [`SysinfoSource`].

pub mod classify;
pub mod detector;
pub mod error;
pub mod matching;
pub mod source;
pub mod walker;

pub use classify::{SHELL_CANDIDATES, TERMINAL_CANDIDATES, classify, classify_chain};
pub use detector::{Detection, Detector};
pub use error::ProcessLookupError;
pub use matching::matches;
pub use set_tab_color_config::{DetectionResult, ShellKind, TerminalKind};
pub use source::{ProcessDescriptor, ProcessSource, StaticProcessSource, SysinfoSource};
pub use walker::{AncestorChain, AncestorEntry, AncestryWalker, WalkEnd};
