//! Log bridge for set-tab-color.
//!
//! Routes all `log::info!()` etc. from this crate and the library crates
//! to stderr, keeping stdout for listings.
//!
//! Level precedence:
//! - `--verbose`: debug
//! - `SET_TAB_COLOR_LOG` (`off`, `error`, `warn`, `info`, `debug`, `trace`)
//! - warn otherwise

use std::io::Write;
use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level when `--verbose` is not given.
pub const LOG_ENV_VAR: &str = "SET_TAB_COLOR_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:<5}] [{}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Pick the log level from the `--verbose` flag and the environment value.
pub fn log_level(verbose: bool, env_value: Option<&str>) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    env_value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Safe to call more than once; later calls
/// leave the first logger in place.
pub fn init_log_bridge(verbose: bool) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let level = log_level(verbose, env_value.as_deref());
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
