//! Terminal and shell classification of an ancestor chain.

use set_tab_color_config::{DetectionResult, ShellKind, TerminalKind};

use crate::matching::matches;
use crate::walker::AncestorChain;

/// A process name that identifies a shell or terminal kind.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<K> {
    pub name: &'static str,
    pub kind: K,
    pub case_sensitive: bool,
}

const fn exact<K>(name: &'static str, kind: K) -> Candidate<K> {
    Candidate {
        name,
        kind,
        case_sensitive: true,
    }
}

const fn any_case<K>(name: &'static str, kind: K) -> Candidate<K> {
    Candidate {
        name,
        kind,
        case_sensitive: false,
    }
}

/// Shell candidates, tried in this order.
pub const SHELL_CANDIDATES: [Candidate<ShellKind>; 7] = [
    exact("zsh", ShellKind::Zsh),
    exact("bash", ShellKind::Bash),
    exact("fish", ShellKind::Fish),
    exact("tcsh", ShellKind::Tcsh),
    exact("csh", ShellKind::Csh),
    exact("ksh", ShellKind::Ksh),
    exact("sh", ShellKind::Sh),
];

/// Terminal candidates, tried in this order; the first hit wins for a
/// given process. iTerm2 and VS Code report their names with varying case
/// across versions.
pub const TERMINAL_CANDIDATES: [Candidate<TerminalKind>; 5] = [
    exact("sshd", TerminalKind::Ssh),
    exact("tmux", TerminalKind::Tmux),
    exact("etterminal", TerminalKind::ETTerminal),
    any_case("iterm2", TerminalKind::ITerm2),
    any_case("Code Helper", TerminalKind::VSCode),
];

fn first_match<K: Copy>(name: &str, candidates: &[Candidate<K>]) -> Option<K> {
    candidates
        .iter()
        .find(|c| matches(name, c.name, c.case_sensitive))
        .map(|c| c.kind)
}

/// Classify ancestor names (nearest first).
///
/// Every terminal match is kept, repeats included, in chain order. The
/// first shell match is kept. A usable `terminal_override` is put ahead of
/// the detected terminals; anything else is ignored.
pub fn classify<'a, I>(names: I, terminal_override: Option<&str>) -> DetectionResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut terminals = Vec::new();
    let mut shell = ShellKind::Unknown;
    let mut shell_found_first = false;

    for name in names {
        if !shell.is_known()
            && let Some(kind) = first_match(name, &SHELL_CANDIDATES)
        {
            shell = kind;
            shell_found_first = terminals.is_empty();
        }

        if let Some(kind) = first_match(name, &TERMINAL_CANDIDATES) {
            terminals.push(kind);
        }
    }

    let valid = shell_found_first || (shell.is_known() && terminals.is_empty());
    let mut result = DetectionResult::new(terminals, shell, valid);

    match terminal_override {
        Some(value) if !value.trim().is_empty() => match TerminalKind::parse_override(value) {
            Some(kind) => {
                log::debug!("Terminal override: {kind}");
                result.prepend_terminal(kind);
            }
            None => log::warn!(
                "Ignoring unrecognized terminal override {value:?} (expected one of: {})",
                TerminalKind::KNOWN.map(|kind| kind.as_str()).join(", ")
            ),
        },
        _ => {}
    }

    result
}

/// [`classify`] over the names of a walked chain.
pub fn classify_chain(chain: &AncestorChain, terminal_override: Option<&str>) -> DetectionResult {
    classify(chain.names(), terminal_override)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_then_terminals() {
        let result = classify(["zsh", "tmux: server", "sshd: user@pts/0"], None);
        assert_eq!(result.shell, ShellKind::Zsh);
        assert_eq!(result.terminals, vec![TerminalKind::Tmux, TerminalKind::Ssh]);
        assert!(result.valid);
    }

    #[test]
    fn test_terminal_before_shell_is_not_valid() {
        let result = classify(["tmux", "bash"], None);
        assert_eq!(result.shell, ShellKind::Bash);
        assert_eq!(result.terminals, vec![TerminalKind::Tmux]);
        assert!(!result.valid);
    }

    #[test]
    fn test_shell_without_terminal_is_valid() {
        let result = classify(["fish", "login"], None);
        assert_eq!(result.shell, ShellKind::Fish);
        assert!(result.terminals.is_empty());
        assert!(result.valid);
    }

    #[test]
    fn test_terminal_without_shell_is_not_valid() {
        let result = classify(["iTerm2"], None);
        assert_eq!(result.shell, ShellKind::Unknown);
        assert_eq!(result.terminals, vec![TerminalKind::ITerm2]);
        assert!(!result.valid);
    }

    #[test]
    fn test_empty_chain() {
        let result = classify(std::iter::empty::<&str>(), None);
        assert_eq!(result, DetectionResult::default());
        assert!(!result.valid);
    }

    #[test]
    fn test_only_first_shell_is_recorded() {
        let result = classify(["bash", "zsh", "sh"], None);
        assert_eq!(result.shell, ShellKind::Bash);
    }

    #[test]
    fn test_shell_matching_is_case_sensitive() {
        let result = classify(["ZSH", "Bash"], None);
        assert_eq!(result.shell, ShellKind::Unknown);
    }

    #[test]
    fn test_terminal_case_policy() {
        let result = classify(["ITERM2", "code helper", "TMUX", "Etterminal"], None);
        assert_eq!(result.terminals, vec![TerminalKind::ITerm2, TerminalKind::VSCode]);
    }

    #[test]
    fn test_terminal_repeats_are_kept() {
        let result = classify(["zsh", "tmux", "zsh", "tmux", "etterminal"], None);
        assert_eq!(
            result.terminals,
            vec![TerminalKind::Tmux, TerminalKind::Tmux, TerminalKind::ETTerminal]
        );
    }

    #[test]
    fn test_sh_prefix_does_not_match_sshd() {
        let result = classify(["sshd"], None);
        assert_eq!(result.shell, ShellKind::Unknown);
        assert_eq!(result.terminals, vec![TerminalKind::Ssh]);
    }

    #[test]
    fn test_override_is_prepended() {
        let result = classify(["zsh", "tmux"], Some("iterm2"));
        assert_eq!(result.terminals, vec![TerminalKind::ITerm2, TerminalKind::Tmux]);
        // Validity reflects the real chain only.
        assert!(result.valid);
    }

    #[test]
    fn test_override_may_repeat_a_detected_kind() {
        let result = classify(["tmux"], Some("TMUX"));
        assert_eq!(result.terminals, vec![TerminalKind::Tmux, TerminalKind::Tmux]);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        for value in ["", "   ", "kitty", "unknown"] {
            let result = classify(["zsh", "tmux"], Some(value));
            assert_eq!(result.terminals, vec![TerminalKind::Tmux], "override {value:?}");
        }
    }
}
