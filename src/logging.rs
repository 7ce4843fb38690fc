//! Logging configuration using tracing.

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV: &str = "DESSERT_BOOK_LOG";

const DEFAULT_DIRECTIVES: &str = "dessert_book=info,warn";

/// Install a stderr subscriber for the crate's diagnostics.
///
/// The level is controlled by `DESSERT_BOOK_LOG`:
///
/// ```bash
/// DESSERT_BOOK_LOG=debug my-app
/// DESSERT_BOOK_LOG=dessert_book=trace,reqwest=debug my-app
/// ```
///
/// Fails if a global subscriber is already installed; the host app's
/// subscriber is left in place in that case.
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
