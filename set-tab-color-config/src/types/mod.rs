//! Detection-facing types shared by the detector and the resolver.
//!
//! - `terminal`: `TerminalKind`
//! - `shell`: `ShellKind`
//! - `detection`: `DetectionResult`

pub mod detection;
pub mod shell;
pub mod terminal;

pub use detection::DetectionResult;
pub use shell::ShellKind;
pub use terminal::TerminalKind;
