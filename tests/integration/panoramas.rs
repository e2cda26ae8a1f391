//! End-to-end tests for `picscan panoramas`.

use assert_cmd::Command;
use predicates::prelude::*;

#[cfg(unix)]
mod with_fake_tool {
    use super::*;
    use picscan::test_utils::{fake_exiftool, fake_exiftool_invocations, init_test_logging};
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn picscan() -> Command {
        let mut cmd = Command::cargo_bin("picscan").expect("binary builds");
        cmd.env("PICSCAN_NO_PROGRESS", "1");
        cmd
    }

    #[test]
    fn prints_exactly_the_files_above_threshold_in_traversal_order() {
        init_test_logging();
        let temp = TempDir::new().unwrap();
        let pics = temp.path().join("pics");
        fs::create_dir(&pics).unwrap();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            File::create(pics.join(name)).unwrap();
        }

        let tool = fake_exiftool(
            temp.path(),
            &[
                ("a.jpg", &["Image Width  : 3000", "Image Height : 2000"]), // 1.5
                ("b.jpg", &["Image Width  : 7000", "Image Height : 2000"]), // 3.5
                ("c.jpg", &["Image Width  : 8000", "Image Height : 2000"]), // 4.0
            ],
        )
        .unwrap();

        let expected = format!(
            "ratio: 3.5  fileName: {}\nratio: 4.0  fileName: {}\n",
            pics.join("b.jpg").display(),
            pics.join("c.jpg").display()
        );

        picscan()
            .args(["panoramas", pics.to_str().unwrap()])
            .args(["--exiftool", tool.to_str().unwrap()])
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn extractor_is_invoked_once_per_allow_listed_file_and_never_otherwise() {
        init_test_logging();
        let temp = TempDir::new().unwrap();
        let pics = temp.path().join("pics");
        fs::create_dir(&pics).unwrap();
        for name in ["a.jpg", "b.JPG", "skipped.png", "skipped.txt", "noext"] {
            File::create(pics.join(name)).unwrap();
        }

        let tool = fake_exiftool(temp.path(), &[]).unwrap();

        picscan()
            .args(["panoramas", pics.to_str().unwrap()])
            .args(["--exiftool", tool.to_str().unwrap()])
            .assert()
            .success();

        assert_eq!(
            fake_exiftool_invocations(temp.path()),
            vec!["a.jpg".to_string(), "b.JPG".to_string()]
        );
    }

    #[test]
    fn custom_threshold_widens_the_report() {
        init_test_logging();
        let temp = TempDir::new().unwrap();
        let pics = temp.path().join("pics");
        fs::create_dir(&pics).unwrap();
        File::create(pics.join("wide.jpg")).unwrap();

        let tool = fake_exiftool(
            temp.path(),
            &[("wide.jpg", &["Image Width  : 4000", "Image Height : 2000"])],
        )
        .unwrap();

        // ratio 2.0 is below the default threshold but above 1.5
        picscan()
            .args(["panoramas", pics.to_str().unwrap()])
            .args(["--exiftool", tool.to_str().unwrap()])
            .args(["--threshold", "1.5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ratio: 2.0"));
    }

    #[test]
    fn files_with_no_dimensions_are_skipped_with_a_warning() {
        init_test_logging();
        let temp = TempDir::new().unwrap();
        let pics = temp.path().join("pics");
        fs::create_dir(&pics).unwrap();
        File::create(pics.join("broken.jpg")).unwrap();

        let tool =
            fake_exiftool(temp.path(), &[("broken.jpg", &["ExifTool Version Number : 12.50"])])
                .unwrap();

        picscan()
            .args(["panoramas", pics.to_str().unwrap()])
            .args(["--exiftool", tool.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("No image dimensions"));
    }
}

#[test]
fn missing_root_directory_is_a_fatal_error() {
    Command::cargo_bin("picscan")
        .expect("binary builds")
        .args(["panoramas", "/definitely/not/a/real/tree"])
        .args(["--exiftool", "exiftool-is-never-invoked"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan"));
}

#[test]
fn missing_exiftool_on_path_is_a_fatal_error_with_a_suggestion() {
    Command::cargo_bin("picscan")
        .expect("binary builds")
        .env("PATH", "")
        .args(["panoramas", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exiftool not found"))
        .stderr(predicate::str::contains("suggestion"));
}
