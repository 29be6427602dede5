use std::env;

use tracing_subscriber::EnvFilter;

use crate::constants::{DEBUG_ENV, DEFAULT_LOG_FILTER};

/// Install the stderr subscriber used by both binaries.
///
/// `H_DEBUG=true` forces debug level; otherwise `RUST_LOG` applies.
pub fn init() {
    let filter = if env::var(DEBUG_ENV).is_ok_and(|v| v == "true") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // A subscriber may already be installed, e.g. by another test.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
