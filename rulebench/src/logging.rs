// rulebench/src/logging.rs
//
// Diagnostics go to stderr so `--format json` output on stdout stays parseable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Reads `RUST_LOG`, defaults to `warn`.
///
/// ```bash
/// RUST_LOG=rulebench_core=debug rulebench list
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
