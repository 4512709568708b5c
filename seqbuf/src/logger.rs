//! Logging setup using tracing.
//!
//! Installs a stderr subscriber filtered by an [`EnvFilter`], and forwards
//! `log` crate records to tracing.
//!
//! # Example
//!
//! ```
//! use seqbuf::logger::init_logging;
//!
//! // Call once at startup; later calls are ignored
//! init_logging("warn");
//! ```

use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. An unparseable
/// filter falls back to `warn`, so stdout is never touched and only
/// warnings reach stderr.
pub fn init_logging(default_filter: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        tracing_log::LogTracer::init().ok();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| parse_filter(default_filter));

        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .ok();
    });
}

/// Parse filter directives, falling back to `warn` if they are invalid.
fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Re-export tracing macros for convenience.
pub use tracing::{debug, error, info, trace, warn};
