use crate::{config::DocGraphConfig, defaults};
use std::{env, str::FromStr};
use tracing_subscriber::filter::EnvFilter;

const RUST_LOG: &str = "RUST_LOG";
const HUMAN_LOGGING: &str = "HUMAN_LOGGING";

/// Initialize the logging context.
pub fn init_logging(config: &DocGraphConfig) -> anyhow::Result<()> {
    let level = env::var(RUST_LOG).unwrap_or_else(|_| config.log_level.clone());

    // Keep async-graphql at `warn` unless verbose.
    let directives = if config.verbose {
        level
    } else {
        format!("{level},async_graphql=warn")
    };
    let filter = EnvFilter::try_new(directives)?;

    let human_logging = match env::var(HUMAN_LOGGING) {
        Ok(value) => bool::from_str(&value).map_err(|_| {
            anyhow::anyhow!(
                "Expected `true` or `false` to be provided for `{HUMAN_LOGGING}`"
            )
        })?,
        Err(_) => defaults::HUMAN_LOGGING,
    };

    let sub = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    let result = if human_logging {
        sub.with_ansi(true)
            .with_level(true)
            .with_line_number(true)
            .try_init()
    } else {
        sub.with_ansi(false)
            .with_level(true)
            .with_line_number(true)
            .json()
            .try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!("Logging initialized at level {}", config.log_level);
    Ok(())
}
