use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "GISTSCHED_LOG";

/// Diagnostics to stderr, filtered by `GISTSCHED_LOG` (default `warn`).
///
/// User-facing status lines do not go through here; see `render`.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // Already installed (e.g. by a test harness) is fine.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
