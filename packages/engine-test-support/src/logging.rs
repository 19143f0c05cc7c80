//! Test logging for the engine crates.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Directives used when `TEST_LOG` is a bare switch (`1`, `true`, `on`).
const ENGINE_DEBUG: &str = "fingerspell=debug,round_simulator=debug,warn";
const QUIET: &str = "warn";

/// Install the test subscriber once per binary.
///
/// `TEST_LOG` takes precedence over `RUST_LOG`. A bare switch such as
/// `TEST_LOG=1` turns on debug output for the engine crates only, so session
/// and host traces show up without tokio's own noise. Output goes through the
/// test writer, without timestamps, so captured logs diff cleanly.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directives = filter_directives(
            std::env::var("TEST_LOG").ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        );

        fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Filter directives from the raw `TEST_LOG` / `RUST_LOG` values.
pub fn filter_directives(test_log: Option<&str>, rust_log: Option<&str>) -> String {
    let chosen = test_log
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| rust_log.map(str::trim).filter(|v| !v.is_empty()));

    match chosen {
        None => QUIET.to_string(),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "on" => ENGINE_DEBUG.to_string(),
            "0" | "false" | "off" => QUIET.to_string(),
            _ => value.to_string(),
        },
    }
}
