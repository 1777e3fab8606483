//! Subscriber setup for processes embedding window memory.

use tracing_subscriber::EnvFilter;

/// Env var selecting JSON output (`WINMEM_LOG_FORMAT=json`).
pub const LOG_FORMAT_ENV: &str = "WINMEM_LOG_FORMAT";

/// Install a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set. Otherwise quiet mode shows warnings and errors only,
/// verbose mode adds lifecycle events. Calling this more than once is harmless;
/// the first subscriber stays installed.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    let result = if wants_json() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    if result.is_err() {
        tracing::debug!(
            event = "core.logging.init_skipped",
            reason = "subscriber already set"
        );
    }
}

fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

fn wants_json() -> bool {
    std::env::var(LOG_FORMAT_ENV)
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
