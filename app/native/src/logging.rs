//! Logging initialization using the `tracing` crate.
//!
//! This module configures the tracing subscriber with sensible defaults:
//! - Uses `RUST_LOG` environment variable for filtering (default: `info`)
//! - Outputs to stderr so command output on stdout stays clean
//! - Includes the thread name, which tells UI-thread work apart from callers

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the default filter: `level` for this crate, warn+ for everything else.
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("warn,uibot={level},uibot_lib={level}"))
}

/// Initializes the global tracing subscriber.
///
/// This should be called once at application startup, before any logging occurs.
///
/// The log level can be controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - Show debug and above
/// - `RUST_LOG=uibot_lib=trace,warn` - Trace for the library, warn for others
///
/// Default level is `info` for release builds and `debug` for debug builds.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed; use [`try_init`]
/// where that can happen.
pub fn init() {
    assert!(try_init(), "a global tracing subscriber is already installed");
}

/// Installs the global tracing subscriber unless one is already installed.
///
/// Returns true if this call installed it. Test binaries call this from every
/// test, so it must tolerate repeated calls.
pub fn try_init() -> bool {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry().with(filter).with(subscriber).try_init().is_ok()
}
