//! Log setup: `tracing` events rendered to stdout.
//!
//! The filter honours `RUST_LOG` and defaults to `info`, which shows the
//! progress lines. `RUST_LOG=debug` adds one line per assembled transfer.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
