//! Log output setup for the command-line client

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::args::Verbosity;

/// Environment variable holding per-target log levels,
/// e.g. `TRUTHDISCOVERY_LOG=truthdiscovery::iteration=debug`
pub const LOG_ENV: &str = "TRUTHDISCOVERY_LOG";

static INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// `TRUTHDISCOVERY_LOG` takes precedence; without it (or if it does not
/// parse) the level comes from `verbosity`. Later calls do nothing, and an
/// already installed global subscriber or logger is left in place.
pub fn init_tracing(verbosity: Verbosity) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

        // Another subscriber or `log` logger may already be installed by the
        // embedding program; keep theirs
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
