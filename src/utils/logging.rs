// Tracing subscriber setup for the binary

use std::io::IsTerminal;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

/// Filter used when neither `--log-level` nor `VERBUMP_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a stderr `fmt` layer filtered by `filter`.
///
/// An unparsable filter falls back to [`DEFAULT_LOG_FILTER`]. Calling this
/// more than once leaves the first subscriber in place.
pub fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let output_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(output_layer).try_init();
}
