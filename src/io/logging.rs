//! Tracing subscriber setup for the command-line tool

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::io::configuration::DEFAULT_LOG_DIRECTIVE;

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Log filter for the given CLI flags
///
/// `quiet` wins over any number of `-v` flags.
pub const fn log_directive(quiet: bool, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => DEFAULT_LOG_DIRECTIVE,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over `directive` when set. Returns `false`
/// if a subscriber was already installed by an earlier call or by the host.
pub fn init_logging(directive: &str) -> bool {
    if INITIALISED.set(()).is_err() {
        return false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
