use clap::Parser;
use clap::error::ErrorKind;
use set_tab_color::cli::Cli;

#[test]
fn test_direct_flags() {
    let cli = Cli::try_parse_from([
        "set-tab-color",
        "--tab",
        "#ff8800",
        "--fg",
        "lightblue",
        "--preset",
        "Ocean",
    ])
    .unwrap();
    let profile = cli.direct_profile();
    assert_eq!(profile.tab.as_deref(), Some("#ff8800"));
    assert_eq!(profile.foreground.as_deref(), Some("lightblue"));
    assert_eq!(profile.background, None);
    assert_eq!(profile.preset.as_deref(), Some("Ocean"));
    assert!(cli.profile.is_none());
}

#[test]
fn test_profile_with_terminal_override() {
    let cli = Cli::try_parse_from([
        "set-tab-color",
        "--profile",
        "work",
        "--terminal",
        "iterm2",
        "--verbose",
    ])
    .unwrap();
    assert_eq!(cli.profile.as_deref(), Some("work"));
    assert_eq!(cli.terminal.as_deref(), Some("iterm2"));
    assert!(cli.verbose);
    assert!(cli.direct_profile().is_empty());
}

#[test]
fn test_terminal_requires_profile() {
    let err = Cli::try_parse_checked_from(["set-tab-color", "--terminal", "tmux"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_terminal_with_direct_colors_is_rejected() {
    for (flag, value) in [("--tab", "red"), ("--preset", "Ocean"), ("--bg", "black")] {
        let err = Cli::try_parse_checked_from(["set-tab-color", "--terminal", "tmux", flag, value])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument, "{flag}");
    }
}

#[test]
fn test_checked_parse_accepts_profile_with_terminal() {
    let cli =
        Cli::try_parse_checked_from(["set-tab-color", "--profile", "work", "--terminal", "tmux"])
            .unwrap();
    assert_eq!(cli.terminal.as_deref(), Some("tmux"));
}

#[test]
fn test_profile_conflicts_with_direct_colors() {
    for flag in ["--tab", "--fg", "--bg", "--preset"] {
        let err = Cli::try_parse_from(["set-tab-color", "--profile", "work", flag, "red"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "{flag}");
    }
}

#[test]
fn test_listing_flags() {
    let cli = Cli::try_parse_from(["set-tab-color", "--list-profiles"]).unwrap();
    assert!(cli.list_profiles);
    assert!(!cli.list_colors);

    let cli = Cli::try_parse_from(["set-tab-color", "--list-colors"]).unwrap();
    assert!(cli.list_colors);
}
