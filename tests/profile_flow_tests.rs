//! End-to-end profile flow over a static process table: detect, resolve,
//! normalize and apply into a recording sink.

mod common;

use common::{RecordingSink, SAMPLE_CONFIG, store_from};
use set_tab_color::app::{apply, resolve_profile, write_profile_list};
use set_tab_color_config::{ResolveError, ShellKind, TerminalKind};
use set_tab_color_detect::{Detector, StaticProcessSource};

fn detector(chain: &[&str]) -> Detector<StaticProcessSource> {
    Detector::new(StaticProcessSource::from_chain(chain))
}

#[test]
fn test_zsh_in_iterm2() {
    let (store, _dir) = store_from(SAMPLE_CONFIG);
    let resolution =
        resolve_profile(&store, "work", None, &detector(&["zsh", "login", "iTerm2"])).unwrap();
    assert_eq!(resolution.shell_layer, Some(ShellKind::Zsh));
    assert_eq!(resolution.terminal_layer, Some(TerminalKind::ITerm2));

    let mut sink = RecordingSink::default();
    apply(&resolution.profile, &mut sink).unwrap();
    assert_eq!(sink.calls, vec!["tab ff8800", "fg ffff00"]);
}

#[test]
fn test_tmux_falls_back_to_etterminal() {
    let (store, _dir) = store_from(SAMPLE_CONFIG);
    let resolution = resolve_profile(
        &store,
        "work",
        None,
        &detector(&["bash", "tmux: server", "etterminal", "iTerm2"]),
    )
    .unwrap();
    assert_eq!(resolution.terminal_layer, Some(TerminalKind::ETTerminal));

    let mut sink = RecordingSink::default();
    apply(&resolution.profile, &mut sink).unwrap();
    assert_eq!(sink.calls, vec!["tab 008000", "fg ffffff"]);
}

#[test]
fn test_terminal_override_wins() {
    let (store, _dir) = store_from(SAMPLE_CONFIG);
    let resolution = resolve_profile(
        &store,
        "dev",
        Some("tmux"),
        &detector(&["fish", "Code Helper"]),
    )
    .unwrap();
    assert_eq!(resolution.terminal_layer, Some(TerminalKind::Tmux));

    let mut sink = RecordingSink::default();
    apply(&resolution.profile, &mut sink).unwrap();
    assert_eq!(
        sink.calls,
        vec!["preset Solarized Dark", "tab 800080", "bg a9a9a9"]
    );
}

#[test]
fn test_unknown_terminal_override_is_ignored() {
    let (store, _dir) = store_from(SAMPLE_CONFIG);
    let resolution =
        resolve_profile(&store, "work", Some("kitty"), &detector(&["sh"])).unwrap();
    assert_eq!(resolution.terminal_layer, None);
    assert_eq!(resolution.shell_layer, None);
    assert_eq!(resolution.profile.tab.as_deref(), Some("blue"));
}

#[test]
fn test_missing_and_invalid_profiles() {
    let (store, _dir) = store_from(SAMPLE_CONFIG);

    let err = resolve_profile(&store, "nonexistent", None, &detector(&["zsh"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ResolveError>(),
        Some(ResolveError::ProfileNotFound(name)) if name == "nonexistent"
    ));

    let err = resolve_profile(&store, "broken", None, &detector(&["zsh"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ResolveError>(),
        Some(ResolveError::InvalidProfile { .. })
    ));
}

#[test]
fn test_unknown_color_in_profile() {
    let (store, _dir) = store_from("[profiles.odd]\ntab = \"blurple\"\n");
    let resolution = resolve_profile(&store, "odd", None, &detector(&["zsh"])).unwrap();
    let mut sink = RecordingSink::default();
    let err = apply(&resolution.profile, &mut sink).unwrap_err();
    assert!(format!("{err:#}").contains("unknown color: blurple"));
    assert!(sink.calls.is_empty());
}

#[test]
fn test_list_profiles_from_file() {
    let (store, _dir) = store_from(SAMPLE_CONFIG);
    let mut out = Vec::new();
    write_profile_list(&store, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Available profiles:\n  broken\n  dev\n  work\n"
    );
}
