//! Top-level command flow: listings, profile mode and direct mode.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use set_tab_color_config::{Profile, ProfileStore, Resolution, resolve_layers};
use set_tab_color_detect::{Detection, Detector, ProcessSource};

use crate::apply::{ColorSink, It2SetColor, apply_profile};
use crate::cli::Cli;
use crate::colors::css_color_listing;

/// Run the command described by `cli` against the live process table and
/// the real `it2setcolor` helper.
pub fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    if cli.list_profiles {
        let store = ProfileStore::load().context("loading profiles")?;
        return write_profile_list(&store, &mut io::stdout().lock())
            .context("writing profile list");
    }

    if cli.list_colors {
        let mut out = io::stdout().lock();
        writeln!(out, "Available CSS color names:")?;
        writeln!(out, "{}", css_color_listing())?;
        return Ok(());
    }

    let profile = match &cli.profile {
        Some(name) => {
            let store = ProfileStore::load().context("loading profile")?;
            resolve_profile(&store, name, cli.terminal.as_deref(), &Detector::live())?.profile
        }
        None => {
            let profile = cli.direct_profile();
            if profile.is_empty() {
                bail!("at least one color option, preset, or profile must be specified");
            }
            profile
        }
    };

    if profile.is_empty() {
        log::info!("Profile sets no colors; nothing to apply");
        return Ok(());
    }
    apply(&profile, &mut It2SetColor::locate()?)
}

/// Detect the terminal and shell with `detector` and resolve `name`.
pub fn resolve_profile<S: ProcessSource>(
    store: &ProfileStore,
    name: &str,
    terminal_override: Option<&str>,
    detector: &Detector<S>,
) -> Result<Resolution> {
    let detection = detector.detect(terminal_override);
    log_detection(&detection);

    let resolution = resolve_layers(store, name, &detection.result)
        .with_context(|| format!("loading profile {name:?}"))?;
    log::info!(
        "Resolved profile {name:?} (shell layer: {}, terminal layer: {}): {}",
        resolution
            .shell_layer
            .map_or("none", |shell| shell.as_str()),
        resolution
            .terminal_layer
            .map_or("none", |terminal| terminal.as_str()),
        resolution.profile
    );
    Ok(resolution)
}

fn log_detection(detection: &Detection) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    log::debug!("Process ancestry ({} entries):", detection.chain.len());
    for entry in &detection.chain.entries {
        log::debug!("  ancestor pid {}: {}", entry.pid, entry.name);
    }
    log::debug!("  walk ended: {:?}", detection.chain.end);
}

/// Apply `profile` to `sink`, adding context to failures.
pub fn apply<S: ColorSink + ?Sized>(profile: &Profile, sink: &mut S) -> Result<()> {
    apply_profile(profile, sink).context("applying profile")
}

/// Write the `--list-profiles` output.
pub fn write_profile_list(store: &ProfileStore, out: &mut impl Write) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No profiles found.")?;
        return Ok(());
    }
    writeln!(out, "Available profiles:")?;
    for name in store.names() {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}
