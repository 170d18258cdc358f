//! Interactive shell kinds recognized in the process ancestry.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

/// Detected shell type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellKind {
    #[default]
    Unknown,
    Bash,
    Zsh,
    Fish,
    Tcsh,
    Csh,
    Ksh,
    Sh,
}

impl ShellKind {
    /// Canonical name, also the sub-profile key in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::Tcsh => "tcsh",
            Self::Csh => "csh",
            Self::Ksh => "ksh",
            Self::Sh => "sh",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShellKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "tcsh" => Ok(Self::Tcsh),
            "csh" => Ok(Self::Csh),
            "ksh" => Ok(Self::Ksh),
            "sh" => Ok(Self::Sh),
            _ => Err(ParseKindError::new("shell", s)),
        }
    }
}
