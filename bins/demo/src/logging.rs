//! Diagnostic log setup.

use crate::error::CliError;
use crate::format::LogFormat;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter directive.
pub const ENV_LOG_FILTER: &str = "LRD_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber writing to stderr.
pub fn init_logging(format: LogFormat) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|error| CliError::Logging(error.to_string()))
}
