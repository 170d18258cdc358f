//! Process table lookup failures.
//!
//! These never escape the walker as hard errors: a failed lookup ends the
//! ancestor chain early. They exist so sources can say *why* a lookup
//! failed and the walker can log it.

/// Why a process table lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessLookupError {
    /// The pid is not (or no longer) in the process table.
    #[error("process {pid} not found")]
    NotFound { pid: u32 },

    /// The current process id could not be determined.
    #[error("could not determine current process id: {0}")]
    CurrentPid(String),
}
