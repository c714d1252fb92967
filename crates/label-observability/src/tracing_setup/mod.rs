//! Tracing setup: `fmt` subscriber with an `EnvFilter`, optionally JSON.
//! Logs always go to stderr; stdout belongs to tagging output.

pub mod spans;

use std::sync::Once;

use label_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g.
/// `LABEL_ROUTER_LOG=label_fusion=debug,label_embeddings=warn`.
pub const LOG_ENV_VAR: &str = "LABEL_ROUTER_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the filter from `LABEL_ROUTER_LOG`, falling back to the configured
/// `log_level`. Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs);
}

/// Initialize tracing with an explicit filter string (for tests and tools).
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    install(EnvFilter::new(filter), json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // Leave an already-installed global subscriber in place.
        let _ = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        };
    });
}
