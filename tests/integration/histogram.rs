//! End-to-end tests for `picscan histogram`.

#![cfg(unix)]

use assert_cmd::Command;
use picscan::test_utils::{fake_exiftool, init_test_logging};
use predicates::prelude::*;
use std::fs::{self, File};
use tempfile::TempDir;

fn picscan() -> Command {
    let mut cmd = Command::cargo_bin("picscan").expect("binary builds");
    cmd.env("PICSCAN_NO_PROGRESS", "1");
    cmd
}

#[test]
fn renders_a_sorted_proportional_bar_chart() {
    init_test_logging();
    let temp = TempDir::new().unwrap();
    let pics = temp.path().join("pics");
    fs::create_dir(&pics).unwrap();
    for name in ["a.jpg", "b.jpg", "c.jpg", "d.jpg"] {
        File::create(pics.join(name)).unwrap();
    }

    let tool = fake_exiftool(
        temp.path(),
        &[
            ("a.jpg", &["Focal Length                    : 50.0 mm"]),
            ("b.jpg", &["Focal Length                    : 50.4 mm"]),
            ("c.jpg", &["Focal Length                    : 18.0 mm"]),
            // d.jpg has no focal length and must contribute nothing
            ("d.jpg", &["ExifTool Version Number         : 12.50"]),
        ],
    )
    .unwrap();

    // max count is 2 (50mm); 18mm scales to round(60 * 1 / 2) = 30
    let expected = format!("  18 (   1):  {}\n  50 (   2):  {}\n", "#".repeat(30), "#".repeat(60));

    picscan()
        .args(["histogram", pics.to_str().unwrap()])
        .args(["--exiftool", tool.to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn progress_counter_appears_every_fiftieth_file() {
    init_test_logging();
    let temp = TempDir::new().unwrap();
    let pics = temp.path().join("pics");
    fs::create_dir(&pics).unwrap();
    for i in 0..50 {
        File::create(pics.join(format!("img{i:03}.jpg"))).unwrap();
    }

    // No canned metadata: every file is processed but yields no focal length
    let tool = fake_exiftool(temp.path(), &[]).unwrap();

    picscan()
        .args(["histogram", pics.to_str().unwrap()])
        .args(["--exiftool", tool.to_str().unwrap()])
        .assert()
        .success()
        .stdout("50 images processed...\n");
}

#[test]
fn non_ascii_metadata_lines_are_skipped_not_fatal() {
    init_test_logging();
    let temp = TempDir::new().unwrap();
    let pics = temp.path().join("pics");
    fs::create_dir(&pics).unwrap();
    File::create(pics.join("shot.jpg")).unwrap();

    // Hand-written script: emits a latin-1 byte on one line, then a valid
    // focal length. fake_exiftool only emits ASCII, so build this one inline.
    let tool = temp.path().join("fake-exiftool.sh");
    fs::write(
        &tool,
        "#!/bin/sh\n\
         printf 'Artist : Ren\\351e\\n'\n\
         printf 'Focal Length : 35.0 mm\\n'\n",
    )
    .unwrap();
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let expected = format!("  35 (   1):  {}\n", "#".repeat(60));

    picscan()
        .args(["histogram", pics.to_str().unwrap()])
        .args(["--exiftool", tool.to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("non-ASCII"));
}

#[test]
fn stderr_lines_from_the_tool_are_scanned_too() {
    init_test_logging();
    let temp = TempDir::new().unwrap();
    let pics = temp.path().join("pics");
    fs::create_dir(&pics).unwrap();
    File::create(pics.join("shot.jpg")).unwrap();

    // Focal length arrives on stderr with a non-zero exit, mirroring
    // exiftool's behavior on partially readable files.
    let tool = temp.path().join("fake-exiftool.sh");
    fs::write(
        &tool,
        "#!/bin/sh\n\
         printf 'Focal Length : 24.0 mm\\n' >&2\n\
         exit 1\n",
    )
    .unwrap();
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
    }

    picscan()
        .args(["histogram", pics.to_str().unwrap()])
        .args(["--exiftool", tool.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("  24 (   1):"));
}

#[test]
fn empty_tree_produces_no_chart() {
    init_test_logging();
    let temp = TempDir::new().unwrap();
    let pics = temp.path().join("pics");
    fs::create_dir(&pics).unwrap();

    let tool = fake_exiftool(temp.path(), &[]).unwrap();

    picscan()
        .args(["histogram", pics.to_str().unwrap()])
        .args(["--exiftool", tool.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
