//! Process ancestry sources.
//!
//! [`ProcessSource`] is the seam between detection and the OS process
//! table. [`SysinfoSource`] reads the live table through `sysinfo`;
//! [`StaticProcessSource`] serves a fixed, in-memory table for tests and
//! synthetic detection.

use std::collections::HashMap;

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::error::ProcessLookupError;

/// One row of the process table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    pub pid: u32,
    pub name: String,
    pub parent_pid: u32,
}

/// Read access to a process table.
pub trait ProcessSource {
    /// Pid of the running program.
    fn current_pid(&self) -> Result<u32, ProcessLookupError>;

    /// Name of process `pid`.
    fn process_name(&self, pid: u32) -> Result<String, ProcessLookupError>;

    /// Parent pid of process `pid`. Processes without a parent report 0.
    fn parent_pid(&self, pid: u32) -> Result<u32, ProcessLookupError>;

    /// Name and parent of `pid` in one call.
    fn describe(&self, pid: u32) -> Result<ProcessDescriptor, ProcessLookupError> {
        Ok(ProcessDescriptor {
            pid,
            name: self.process_name(pid)?,
            parent_pid: self.parent_pid(pid)?,
        })
    }
}

impl<S: ProcessSource + ?Sized> ProcessSource for &S {
    fn current_pid(&self) -> Result<u32, ProcessLookupError> {
        (**self).current_pid()
    }

    fn process_name(&self, pid: u32) -> Result<String, ProcessLookupError> {
        (**self).process_name(pid)
    }

    fn parent_pid(&self, pid: u32) -> Result<u32, ProcessLookupError> {
        (**self).parent_pid(pid)
    }
}

/// Live process table, read once through `sysinfo` at construction.
///
/// A single snapshot covers one detection pass; nothing is kept across
/// invocations.
pub struct SysinfoSource {
    system: System,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let mut system = System::new();
        let refreshed = system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );
        log::trace!("Process table snapshot holds {refreshed} processes");
        Self { system }
    }

    fn process(&self, pid: u32) -> Result<&sysinfo::Process, ProcessLookupError> {
        self.system
            .process(Pid::from_u32(pid))
            .ok_or(ProcessLookupError::NotFound { pid })
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSource for SysinfoSource {
    fn current_pid(&self) -> Result<u32, ProcessLookupError> {
        sysinfo::get_current_pid()
            .map(|pid| pid.as_u32())
            .map_err(|e| ProcessLookupError::CurrentPid(e.to_string()))
    }

    fn process_name(&self, pid: u32) -> Result<String, ProcessLookupError> {
        Ok(self.process(pid)?.name().to_string_lossy().into_owned())
    }

    fn parent_pid(&self, pid: u32) -> Result<u32, ProcessLookupError> {
        Ok(self
            .process(pid)?
            .parent()
            .map(|parent| parent.as_u32())
            .unwrap_or(0))
    }
}

/// Fixed process table.
#[derive(Debug, Clone, Default)]
pub struct StaticProcessSource {
    current: u32,
    processes: HashMap<u32, (String, u32)>,
}

impl StaticProcessSource {
    /// Name reported for the current process by [`Self::from_chain`].
    pub const SELF_NAME: &'static str = "set-tab-color";

    /// Empty table whose current process is `current_pid`.
    pub fn new(current_pid: u32) -> Self {
        Self {
            current: current_pid,
            processes: HashMap::new(),
        }
    }

    pub fn with_process(mut self, pid: u32, name: impl Into<String>, parent_pid: u32) -> Self {
        self.processes.insert(pid, (name.into(), parent_pid));
        self
    }

    /// Linear table: the current process, then `ancestors` nearest first,
    /// with the last ancestor's parent being init (pid 1).
    ///
    /// Meant for short synthetic chains; names beyond what fits in the
    /// pid range below `u32::MAX` are dropped.
    pub fn from_chain(ancestors: &[&str]) -> Self {
        // Pids count down towards init so the furthest ancestor is pid 2.
        let depth = u32::try_from(ancestors.len())
            .unwrap_or(u32::MAX)
            .min(u32::MAX - 2);
        let current = depth + 2;
        let mut source = Self::new(current).with_process(current, Self::SELF_NAME, current - 1);
        for (pid, name) in (2..current).rev().zip(ancestors) {
            source = source.with_process(pid, *name, pid - 1);
        }
        source
    }

    fn entry(&self, pid: u32) -> Result<&(String, u32), ProcessLookupError> {
        self.processes
            .get(&pid)
            .ok_or(ProcessLookupError::NotFound { pid })
    }
}

impl ProcessSource for StaticProcessSource {
    fn current_pid(&self) -> Result<u32, ProcessLookupError> {
        Ok(self.current)
    }

    fn process_name(&self, pid: u32) -> Result<String, ProcessLookupError> {
        self.entry(pid).map(|(name, _)| name.clone())
    }

    fn parent_pid(&self, pid: u32) -> Result<u32, ProcessLookupError> {
        self.entry(pid).map(|(_, parent)| *parent)
    }
}
