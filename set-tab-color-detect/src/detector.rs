//! One detection pass: walk the ancestry, then classify it.

use set_tab_color_config::DetectionResult;

use crate::classify::classify_chain;
use crate::source::{ProcessSource, SysinfoSource};
use crate::walker::{AncestorChain, AncestryWalker};

/// Classification result together with the chain it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub chain: AncestorChain,
    pub result: DetectionResult,
}

/// Terminal and shell detector over an explicit process source.
pub struct Detector<S> {
    walker: AncestryWalker<S>,
}

impl<S: ProcessSource> Detector<S> {
    pub fn new(source: S) -> Self {
        Self {
            walker: AncestryWalker::new(source),
        }
    }

    /// Walk from the current process and classify what was found.
    pub fn detect(&self, terminal_override: Option<&str>) -> Detection {
        let chain = self.walker.walk_from_current();
        if chain.is_empty() && !chain.is_complete() {
            log::debug!("Process ancestry unavailable; detection sees no terminal or shell");
        }
        let result = classify_chain(&chain, terminal_override);
        Detection { chain, result }
    }
}

impl Detector<SysinfoSource> {
    /// Detector reading the live process table.
    pub fn live() -> Self {
        Self::new(SysinfoSource::new())
    }
}
