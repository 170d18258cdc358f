//! Sparse color profile and the overlay merge.

use std::fmt;

/// A color profile. `None` (or an empty string) leaves that setting alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    /// Tab color (`tab` in the config file)
    pub tab: Option<String>,
    /// Foreground color (`fg` in the config file)
    pub foreground: Option<String>,
    /// Background color (`bg` in the config file)
    pub background: Option<String>,
    /// iTerm2 color preset name
    pub preset: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }

    pub fn with_foreground(mut self, foreground: impl Into<String>) -> Self {
        self.foreground = Some(foreground.into());
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// True when no field carries a non-empty value.
    pub fn is_empty(&self) -> bool {
        [&self.tab, &self.foreground, &self.background, &self.preset]
            .into_iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }

    /// Field-wise merge: every non-empty field of `overlay` replaces the
    /// corresponding field of `self`.
    pub fn overlay(&self, overlay: &Profile) -> Profile {
        Profile {
            tab: pick(&self.tab, &overlay.tab),
            foreground: pick(&self.foreground, &overlay.foreground),
            background: pick(&self.background, &overlay.background),
            preset: pick(&self.preset, &overlay.preset),
        }
    }
}

fn pick(base: &Option<String>, overlay: &Option<String>) -> Option<String> {
    match overlay {
        Some(value) if !value.is_empty() => Some(value.clone()),
        _ => base.clone(),
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        write!(
            f,
            "tab={:?}, fg={:?}, bg={:?}, preset={:?}",
            field(&self.tab),
            field(&self.foreground),
            field(&self.background),
            field(&self.preset)
        )
    }
}
