//! Outcome of terminal and shell detection, consumed by the resolver.

use super::{ShellKind, TerminalKind};

/// Terminals and shell found in the process ancestry.
///
/// `terminals` keeps every match in proximity order (nearest ancestor
/// first, an explicit override ahead of all of them) and may contain
/// repeats. `valid` records whether the shell sat closer to this process
/// than any terminal; it is informational and never changes resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetectionResult {
    pub terminals: Vec<TerminalKind>,
    pub shell: ShellKind,
    pub valid: bool,
}

impl DetectionResult {
    /// Build a result by hand, e.g. for tests or an explicit override.
    pub fn new(terminals: Vec<TerminalKind>, shell: ShellKind, valid: bool) -> Self {
        Self {
            terminals,
            shell,
            valid,
        }
    }

    /// Put `kind` in front of the detected terminals.
    pub fn prepend_terminal(&mut self, kind: TerminalKind) {
        self.terminals.insert(0, kind);
    }

    /// Comma separated terminal names, `none` when empty.
    pub fn terminal_list(&self) -> String {
        if self.terminals.is_empty() {
            return "none".to_string();
        }
        self.terminals
            .iter()
            .map(TerminalKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
