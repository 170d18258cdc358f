//! Runs a stand-in `it2setcolor` script to check the arguments the real
//! helper receives.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use set_tab_color::apply::{ApplyError, ColorSink, ColorTarget, It2SetColor, apply_profile};
use set_tab_color_config::Profile;
use tempfile::TempDir;

#[test]
fn test_helper_receives_normalized_arguments() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("calls.log");
    let helper_path = dir.path().join("it2setcolor");
    fs::write(
        &helper_path,
        format!(
            "#!/bin/sh\n[ \"$2\" = \"fail\" ] && exit 3\necho \"$1 $2\" >> '{}'\n",
            log_path.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&helper_path, fs::Permissions::from_mode(0o755)).unwrap();

    let mut helper = It2SetColor::at(helper_path.clone()).unwrap();
    assert_eq!(helper.path(), helper_path.as_path());

    let profile = Profile::new()
        .with_tab("#f80")
        .with_background("default")
        .with_preset("Ocean");
    apply_profile(&profile, &mut helper).unwrap();
    assert_eq!(
        fs::read_to_string(&log_path).unwrap(),
        "preset Ocean\ntab ff8800\nbg default\n"
    );

    let err = helper.set_color(ColorTarget::Foreground, "fail").unwrap_err();
    match err {
        ApplyError::HelperFailed { args, status } => {
            assert_eq!(args, "fg fail");
            assert_eq!(status.code(), Some(3));
        }
        other => panic!("unexpected error: {other}"),
    }
}
