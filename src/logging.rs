//! Tracing subscriber setup.
//!
//! Eddy crates only emit `tracing` events; nothing is printed unless the host
//! installs a subscriber. Applications without their own subscriber can call
//! [`init`] once at startup.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Installs a formatting subscriber filtered by `RUST_LOG` (idempotent).
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid.
pub fn init() {
    install(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)));
}

/// Installs a formatting subscriber with an explicit filter directive (idempotent).
///
/// Useful for tests that want `eddy=trace` regardless of the environment.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    TRACING_INSTALLED.call_once(|| {
        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();

        if result.is_err() {
            eprintln!("eddy tracing subscriber failed to initialize");
        }
    });
}
