//! Structured logging setup
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` (taken from
//! `RUST_LOG` when set) and either pretty or JSON formatted output.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "rtrwh_api=debug,rtrwh_core=debug,tower_http=debug";

/// Initialize the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init()?,
        LogFormat::Pretty => {
            registry.with(tracing_subscriber::fmt::layer().with_target(false)).try_init()?
        }
    }

    info!(format = ?config.format, "Logging initialized");
    Ok(())
}
