//! Shared utilities for unit and integration tests.
//!
//! Available to integration tests through the `test-utils` feature, which
//! the dev-dependency on the crate itself enables. The centerpiece is
//! [`fake_exiftool`], a generated shell script that stands in for the real
//! exiftool binary so end-to-end tests never depend on it being installed.

use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize tracing for tests, honoring `RUST_LOG` when set.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Writes a fake exiftool script into `dir` and returns its path.
///
/// The script looks up the base name of the file it is invoked on in
/// `cases` and prints the matching canned metadata to stdout, one line per
/// entry. Every invocation also appends the file argument to
/// `invocations.log` next to the script, so tests can assert exactly which
/// files the extractor was run on.
///
/// Unix only: the stand-in is a `/bin/sh` script.
#[cfg(unix)]
pub fn fake_exiftool(dir: &Path, cases: &[(&str, &[&str])]) -> std::io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let log_path = dir.join("invocations.log");
    let mut script = String::from("#!/bin/sh\n");
    script.push_str(&format!("printf '%s\\n' \"$1\" >> '{}'\n", log_path.display()));
    script.push_str("case \"$(basename \"$1\")\" in\n");
    for (name, lines) in cases {
        script.push_str(&format!("  '{name}')\n"));
        for line in *lines {
            script.push_str(&format!("    printf '%s\\n' '{line}'\n"));
        }
        script.push_str("    ;;\n");
    }
    script.push_str("esac\n");

    let script_path = dir.join("fake-exiftool.sh");
    std::fs::write(&script_path, script)?;
    std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))?;
    Ok(script_path)
}

/// Reads the file names the fake exiftool was invoked on, in order.
///
/// Returns an empty list when the script was never invoked.
#[cfg(unix)]
pub fn fake_exiftool_invocations(dir: &Path) -> Vec<String> {
    let Ok(log) = std::fs::read_to_string(dir.join("invocations.log")) else {
        return Vec::new();
    };
    log.lines()
        .filter_map(|path| {
            Path::new(path).file_name().map(|name| name.to_string_lossy().into_owned())
        })
        .collect()
}
