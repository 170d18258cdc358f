//! Applying a resolved profile through iTerm2's `it2setcolor` helper.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use set_tab_color_config::Profile;

use crate::colors::normalize_color;

/// Which color `it2setcolor` should change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Tab,
    Foreground,
    Background,
}

impl ColorTarget {
    /// Argument `it2setcolor` expects for this target.
    pub fn as_arg(&self) -> &'static str {
        match self {
            ColorTarget::Tab => "tab",
            ColorTarget::Foreground => "fg",
            ColorTarget::Background => "bg",
        }
    }
}

impl fmt::Display for ColorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Errors raised while applying colors.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("it2setcolor not found at {}", path.display())]
    HelperMissing { path: PathBuf },

    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("failed to run {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("it2setcolor {args} failed: {status}")]
    HelperFailed { args: String, status: ExitStatus },
}

/// Destination for color changes.
pub trait ColorSink {
    /// Switch to a named color preset.
    fn set_preset(&mut self, name: &str) -> Result<(), ApplyError>;

    /// Set one color. `hex` is already normalized.
    fn set_color(&mut self, target: ColorTarget, hex: &str) -> Result<(), ApplyError>;
}

/// Runs `~/.iterm2/it2setcolor`, sharing this process's stdio.
#[derive(Debug, Clone)]
pub struct It2SetColor {
    path: PathBuf,
}

impl It2SetColor {
    /// Locate the helper under the user's home directory.
    pub fn locate() -> Result<Self, ApplyError> {
        let home = dirs::home_dir().ok_or(ApplyError::HomeDirUnavailable)?;
        Self::at(home.join(".iterm2").join("it2setcolor"))
    }

    /// Use the helper at `path`, which must exist.
    pub fn at(path: PathBuf) -> Result<Self, ApplyError> {
        if !path.exists() {
            return Err(ApplyError::HelperMissing { path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: [&str; 2]) -> Result<(), ApplyError> {
        log::debug!("Running {} {} {}", self.path.display(), args[0], args[1]);
        let status = Command::new(&self.path)
            .args(args)
            .status()
            .map_err(|source| ApplyError::Spawn {
                path: self.path.clone(),
                source,
            })?;
        if !status.success() {
            return Err(ApplyError::HelperFailed {
                args: args.join(" "),
                status,
            });
        }
        Ok(())
    }
}

impl ColorSink for It2SetColor {
    fn set_preset(&mut self, name: &str) -> Result<(), ApplyError> {
        self.run(["preset", name])
    }

    fn set_color(&mut self, target: ColorTarget, hex: &str) -> Result<(), ApplyError> {
        self.run([target.as_arg(), hex])
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Apply `profile` to `sink`: preset first so individual colors override
/// it, then tab, foreground and background. Empty fields are skipped.
///
/// Colors are normalized before anything runs, so an unknown color leaves
/// the terminal untouched.
pub fn apply_profile<S: ColorSink + ?Sized>(
    profile: &Profile,
    sink: &mut S,
) -> Result<(), ApplyError> {
    let mut colors = Vec::with_capacity(3);
    for (target, value) in [
        (ColorTarget::Tab, &profile.tab),
        (ColorTarget::Foreground, &profile.foreground),
        (ColorTarget::Background, &profile.background),
    ] {
        if let Some(value) = present(value) {
            let hex =
                normalize_color(value).ok_or_else(|| ApplyError::UnknownColor(value.to_string()))?;
            colors.push((target, hex));
        }
    }

    if let Some(preset) = present(&profile.preset) {
        log::debug!("Applying preset {preset:?}");
        sink.set_preset(preset)?;
    }
    for (target, hex) in colors {
        log::debug!("Setting {target} color to {hex}");
        sink.set_color(target, &hex)?;
    }
    Ok(())
}
