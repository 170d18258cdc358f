//! Config file location.
//!
//! Order: `$SET_TAB_COLOR_CONFIG`, then `~/.config/set-tab-color.toml` (on
//! every platform, macOS included, as long as `~/.config` or the file
//! exists), then the platform config directory from `dirs`.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable that overrides the config file path.
pub const CONFIG_ENV_VAR: &str = "SET_TAB_COLOR_CONFIG";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "set-tab-color.toml";

/// Path of the config file for this process.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_path_from(
        std::env::var_os(CONFIG_ENV_VAR),
        dirs::home_dir(),
        dirs::config_dir(),
    )
}

/// Path resolution with every input supplied by the caller.
pub fn config_path_from(
    env_override: Option<OsString>,
    home_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if let Some(home) = home_dir {
        let xdg_dir = home.join(".config");
        let candidate = xdg_dir.join(CONFIG_FILE_NAME);
        if xdg_dir.exists() || candidate.exists() {
            return Ok(candidate);
        }
    }

    config_dir
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}
