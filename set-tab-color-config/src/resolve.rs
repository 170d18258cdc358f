//! Layered profile resolution: base, then shell sub-profile, then the
//! first terminal sub-profile found along the detected terminal chain.
//!
//! The terminal layer searches `DetectionResult::terminals` in order and
//! applies only the first terminal that has a sub-profile. A session inside
//! tmux inside an Eternal Terminal session therefore picks up the
//! `etterminal` override when no `tmux` override exists, without the
//! config having to declare every terminal that may appear in a chain.

use crate::error::ResolveError;
use crate::profile::Profile;
use crate::store::{ProfileEntry, ProfileNode, ProfileStore};
use crate::types::{DetectionResult, ShellKind, TerminalKind};

/// Effective profile plus the layers that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub profile: Profile,
    /// Shell whose sub-profile was applied
    pub shell_layer: Option<ShellKind>,
    /// Terminal whose sub-profile was applied
    pub terminal_layer: Option<TerminalKind>,
}

/// Resolve `name` against `detection` and return the effective profile.
pub fn resolve(
    store: &ProfileStore,
    name: &str,
    detection: &DetectionResult,
) -> Result<Profile, ResolveError> {
    resolve_layers(store, name, detection).map(|resolution| resolution.profile)
}

/// Like [`resolve`], also reporting which sub-profiles were applied.
pub fn resolve_layers(
    store: &ProfileStore,
    name: &str,
    detection: &DetectionResult,
) -> Result<Resolution, ResolveError> {
    let node = match store.get(name) {
        Some(ProfileEntry::Node(node)) => node,
        Some(ProfileEntry::Invalid(reason)) => {
            return Err(ResolveError::InvalidProfile {
                name: name.to_string(),
                reason: reason.clone(),
            });
        }
        None => return Err(ResolveError::ProfileNotFound(name.to_string())),
    };

    log::debug!("Using base profile {name:?}: {}", node.profile);
    log::debug!(
        "Detection: terminals=[{}], shell={}, valid={}",
        detection.terminal_list(),
        detection.shell,
        detection.valid
    );
    if !detection.valid {
        log::debug!("Shell was not found ahead of the terminal in the process chain");
    }

    let mut profile = node.profile.clone();

    let shell_layer = apply_shell_layer(node, name, detection.shell, &mut profile);
    let terminal_layer = apply_terminal_layer(node, name, &detection.terminals, &mut profile);

    log::debug!("Final profile values after overlays: {profile}");
    Ok(Resolution {
        profile,
        shell_layer,
        terminal_layer,
    })
}

fn apply_shell_layer(
    node: &ProfileNode,
    name: &str,
    shell: ShellKind,
    profile: &mut Profile,
) -> Option<ShellKind> {
    if !shell.is_known() {
        return None;
    }
    let Some(sub) = node.child(shell.as_str()) else {
        log::debug!("No shell-specific sub-profile found for: {name}.{shell}");
        return None;
    };
    log::debug!("Applying shell-specific sub-profile {name}.{shell}: {}", sub.profile);
    *profile = profile.overlay(&sub.profile);
    Some(shell)
}

fn apply_terminal_layer(
    node: &ProfileNode,
    name: &str,
    terminals: &[TerminalKind],
    profile: &mut Profile,
) -> Option<TerminalKind> {
    for &terminal in terminals {
        match node.child(terminal.as_str()) {
            Some(sub) => {
                log::debug!(
                    "Applying terminal-specific sub-profile {name}.{terminal}: {}",
                    sub.profile
                );
                *profile = profile.overlay(&sub.profile);
                return Some(terminal);
            }
            None => {
                log::debug!("No terminal-specific sub-profile found for: {name}.{terminal}");
            }
        }
    }
    if !terminals.is_empty() {
        log::debug!(
            "No terminal sub-profiles found for any terminal in the process chain \
             (sub-profiles of {name}: {})",
            node.child_keys().collect::<Vec<_>>().join(", ")
        );
    }
    None
}
