//! Tracing subscriber setup shared by the binaries.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` is used as the filter.
/// `log_format` is `json` for structured output, anything else means text.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is
/// already installed.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {}", e))
    } else {
        builder
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {}", e))
    }
}
