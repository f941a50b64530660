//! # Telemetry
//!
//! Tracing subscriber setup for the service process.
//!
//! ## Filter Defaults
//! With no `RUST_LOG` set, the process logs at `info` globally and `debug`
//! for the dinetab crates, which keeps checkout command traces visible
//! during development without drowning them in dependency noise.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Call once at process startup, before the first checkout command.
/// Honors `RUST_LOG` when present.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dinetab_core=debug,dinetab_service=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
