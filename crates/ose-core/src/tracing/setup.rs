//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the OSE tracing/logging system.
///
/// Reads the `OSE_LOG` environment variable for per-crate log levels.
/// Format: `OSE_LOG=ose_spec=debug,ose_sim=info`
///
/// Falls back to `ose=info` if `OSE_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("OSE_LOG").unwrap_or_else(|_| EnvFilter::new("ose=info"));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
