//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "SPEECHNET_LOG";

/// Filter used when `SPEECHNET_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "speechnet_core=info,speechnet_analysis=info";

/// Initialize the tracing/logging system.
///
/// Reads `SPEECHNET_LOG` for per-crate log levels.
/// Format: `SPEECHNET_LOG=speechnet_analysis=debug,speechnet_core=warn`
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
