//! Ancestry walk from the current process towards init.

use std::collections::HashSet;

use crate::source::ProcessSource;

/// One ancestor of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorEntry {
    pub pid: u32,
    pub name: String,
}

/// How a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// The next parent was init (pid ≤ 1).
    ReachedRoot,
    /// A lookup for `pid` failed; the chain is partial.
    LookupFailed { pid: u32 },
    /// `pid` showed up twice, which only a broken table can produce.
    Cycle { pid: u32 },
}

/// Ancestors of the current process, nearest first. The current process
/// itself is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorChain {
    pub entries: Vec<AncestorEntry>,
    pub end: WalkEnd,
}

impl AncestorChain {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the walk ran all the way to init.
    pub fn is_complete(&self) -> bool {
        self.end == WalkEnd::ReachedRoot
    }
}

/// Walks parent links through a [`ProcessSource`].
pub struct AncestryWalker<S> {
    source: S,
}

impl<S: ProcessSource> AncestryWalker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Collect the ancestors of `start_pid`, nearest first.
    ///
    /// Lookup failures end the chain instead of failing the walk; the
    /// returned `end` records where that happened.
    pub fn walk(&self, start_pid: u32) -> AncestorChain {
        let mut entries = Vec::new();
        let mut seen = HashSet::from([start_pid]);

        let mut parent = match self.source.parent_pid(start_pid) {
            Ok(parent) => parent,
            Err(e) => {
                log::debug!("Ancestry walk stopped at {start_pid}: {e}");
                return AncestorChain {
                    entries,
                    end: WalkEnd::LookupFailed { pid: start_pid },
                };
            }
        };

        let end = loop {
            if parent <= 1 {
                break WalkEnd::ReachedRoot;
            }
            if !seen.insert(parent) {
                log::warn!("Process {parent} appears twice in its own ancestry");
                break WalkEnd::Cycle { pid: parent };
            }

            let process = match self.source.describe(parent) {
                Ok(process) => process,
                Err(e) => {
                    log::debug!("Ancestry walk stopped at {parent}: {e}");
                    break WalkEnd::LookupFailed { pid: parent };
                }
            };
            log::trace!("Ancestor {}: {} ({})", entries.len(), process.name, process.pid);
            parent = process.parent_pid;
            entries.push(AncestorEntry {
                pid: process.pid,
                name: process.name,
            });
        };

        AncestorChain { entries, end }
    }

    /// Walk from the running program. If its own pid is unavailable the
    /// chain is empty and marked as a failed lookup.
    pub fn walk_from_current(&self) -> AncestorChain {
        match self.source.current_pid() {
            Ok(pid) => self.walk(pid),
            Err(e) => {
                log::debug!("Ancestry walk not started: {e}");
                AncestorChain {
                    entries: Vec::new(),
                    end: WalkEnd::LookupFailed { pid: 0 },
                }
            }
        }
    }
}
