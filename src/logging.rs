//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`, so stdout carries only
//! payloads and mnemonics and can be piped safely.  User-facing messages
//! use `cli::output` instead.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `seedseal=debug`.
pub const LOG_ENV: &str = "SEEDSEAL_LOG";

/// Pick the default filter for a `-v` count.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "seedseal=info",
        _ => "seedseal=debug",
    }
}

/// Install the global subscriber.
///
/// `SEEDSEAL_LOG` wins over `-v`.  Calling this twice is harmless; the
/// second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
