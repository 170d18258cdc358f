//! Terminal emulator kinds recognized in the process ancestry.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

/// Terminal (or terminal-like session host) found above the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalKind {
    #[default]
    Unknown,
    ITerm2,
    ETTerminal,
    Ssh,
    Tmux,
    VSCode,
}

impl TerminalKind {
    /// Every recognized kind, `Unknown` excluded.
    pub const KNOWN: [TerminalKind; 5] = [
        TerminalKind::ITerm2,
        TerminalKind::ETTerminal,
        TerminalKind::Ssh,
        TerminalKind::Tmux,
        TerminalKind::VSCode,
    ];

    /// Canonical name, also the sub-profile key in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::ITerm2 => "iterm2",
            Self::ETTerminal => "etterminal",
            Self::Ssh => "ssh",
            Self::Tmux => "tmux",
            Self::VSCode => "vscode",
        }
    }

    /// Parse a user supplied `--terminal` value.
    ///
    /// Returns `None` for empty input, unrecognized names and `unknown`,
    /// since none of those can select a sub-profile.
    pub fn parse_override(value: &str) -> Option<Self> {
        match value.parse::<Self>() {
            Ok(Self::Unknown) | Err(_) => None,
            Ok(kind) => Some(kind),
        }
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerminalKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "iterm2" => Ok(Self::ITerm2),
            "etterminal" => Ok(Self::ETTerminal),
            "ssh" => Ok(Self::Ssh),
            "tmux" => Ok(Self::Tmux),
            "vscode" => Ok(Self::VSCode),
            _ => Err(ParseKindError::new("terminal", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for kind in TerminalKind::KNOWN {
            assert_eq!(kind.as_str().parse::<TerminalKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ITerm2".parse::<TerminalKind>(), Ok(TerminalKind::ITerm2));
        assert_eq!(" TMUX ".parse::<TerminalKind>(), Ok(TerminalKind::Tmux));
    }

    #[test]
    fn test_parse_override_rejects_unusable_values() {
        assert_eq!(TerminalKind::parse_override(""), None);
        assert_eq!(TerminalKind::parse_override("unknown"), None);
        assert_eq!(TerminalKind::parse_override("kitty"), None);
        assert_eq!(
            TerminalKind::parse_override("vscode"),
            Some(TerminalKind::VSCode)
        );
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(TerminalKind::ETTerminal.to_string(), "etterminal");
        assert_eq!(TerminalKind::default(), TerminalKind::Unknown);
    }
}
