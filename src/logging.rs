//! Diagnostic logging
//!
//! `tracing` events go to stderr so stdout stays reserved for the plan.
//! `RELO_LOG` takes an `EnvFilter` directive and beats the configured
//! verbosity.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "RELO_LOG";

/// Filter directive for a verbosity level
pub fn directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "relo=error",
        Verbosity::Normal => "relo=warn",
        Verbosity::Verbose => "relo=info",
        Verbosity::Debug => "relo=debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
