//! Console logging setup for the CLI.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize console logging.
///
/// Honors `RUST_LOG` and defaults to `info` when unset. Logs go to stderr so
/// command output on stdout stays machine-readable. Safe to call more than
/// once.
pub fn init_telemetry(service_name: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();

        tracing::info!(service.name = service_name, "Telemetry initialized");
    });
}
