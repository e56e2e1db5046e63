//! Logging setup.
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! left to the embedding application. [`init`] wires up the stderr
//! subscriber an interactive frontend would want.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr at the given default level.
///
/// `RUST_LOG` takes precedence over `level` when set. Calling more than
/// once is harmless; later calls are ignored.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
