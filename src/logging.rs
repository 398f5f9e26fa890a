//! Diagnostic logging setup.
//!
//! Log events go to stderr and are filtered by `KLI_LOG`, which takes the
//! usual `tracing` directive syntax (`debug`, `kli::dispatch=trace`, ...).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "KLI_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let filter = resolve_filter(std::env::var(ENV_LOG).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
