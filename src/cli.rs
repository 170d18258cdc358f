//! Command-line interface for set-tab-color.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use set_tab_color_config::Profile;

const AFTER_HELP: &str = "\
Color formats supported:
  - Hex colors: #f80, #ff8800
  - CSS color names: red, blue, lightblue, etc.
  - default: restore default color

Configuration:
  Config file: ~/.config/set-tab-color.toml (or $SET_TAB_COLOR_CONFIG)

Examples:
  set-tab-color --tab red
  set-tab-color --fg white --bg black
  set-tab-color --preset 'Solarized Dark' --tab red
  set-tab-color --profile work
  set-tab-color --profile work --terminal iterm2";

/// set-tab-color - Set iTerm2 tab and text colors, per terminal and shell
#[derive(Parser, Debug, Default)]
#[command(name = "set-tab-color")]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Set tab color
    #[arg(long, value_name = "COLOR")]
    pub tab: Option<String>,

    /// Set foreground color
    #[arg(long, value_name = "COLOR")]
    pub fg: Option<String>,

    /// Set background color
    #[arg(long, value_name = "COLOR")]
    pub bg: Option<String>,

    /// Set iTerm2 color preset
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Use a profile from the config file
    #[arg(
        long,
        value_name = "NAME",
        conflicts_with_all = ["tab", "fg", "bg", "preset"]
    )]
    pub profile: Option<String>,

    /// Override the detected terminal for sub-profile selection
    /// (iterm2, vscode, ssh, tmux, etterminal)
    #[arg(long, value_name = "TERMINAL", requires = "profile")]
    pub terminal: Option<String>,

    /// List all available profiles
    #[arg(long)]
    pub list_profiles: bool,

    /// List all available CSS color names
    #[arg(long)]
    pub list_colors: bool,

    /// Log detection and resolution details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments; print usage and exit on any invalid
    /// combination, including ones clap's own rules let through.
    pub fn parse_checked() -> Self {
        let cli = Self::parse();
        if let Err(e) = cli.validate() {
            e.exit();
        }
        cli
    }

    /// [`Cli::try_parse_from`] followed by [`Cli::validate`].
    pub fn try_parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        cli.validate()?;
        Ok(cli)
    }

    /// Cross-flag rules. `requires = "profile"` is skipped by clap when
    /// `--profile` conflicts with a flag that is present, so `--terminal`
    /// without `--profile` is rejected here as well.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.terminal.is_some() && self.profile.is_none() {
            let mut cmd = Self::command();
            return Err(cmd.error(
                ErrorKind::MissingRequiredArgument,
                "--terminal can only be used with --profile",
            ));
        }
        Ok(())
    }

    /// Profile built from `--tab/--fg/--bg/--preset`. Empty when none of
    /// them were given.
    pub fn direct_profile(&self) -> Profile {
        Profile {
            tab: non_empty(&self.tab),
            foreground: non_empty(&self.fg),
            background: non_empty(&self.bg),
            preset: non_empty(&self.preset),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_direct_profile_skips_empty_values() {
        let cli = Cli::try_parse_from(["set-tab-color", "--tab", "red", "--fg", ""]).unwrap();
        let profile = cli.direct_profile();
        assert_eq!(profile.tab.as_deref(), Some("red"));
        assert_eq!(profile.foreground, None);
        assert_eq!(profile.background, None);
        assert_eq!(profile.preset, None);
    }

    #[test]
    fn test_validate_rejects_terminal_without_profile() {
        let cli = Cli {
            terminal: Some("tmux".to_string()),
            fg: Some("white".to_string()),
            ..Cli::default()
        };
        assert_eq!(
            cli.validate().unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }
}
