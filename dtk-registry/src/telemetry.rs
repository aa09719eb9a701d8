//! Tracing setup for programs that drive the emitter.
//!
//! The libraries only emit `tracing` events; installing a subscriber is left
//! to the caller. These helpers install a console subscriber once per process.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Configuration for the console subscriber.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    pub default_level: Option<String>,
    pub log_directives: Vec<String>,
    pub with_target: bool,
}

impl TelemetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default log level (e.g., "debug", "info").
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = Some(level.into());
        self
    }

    /// Add a custom tracing directive (e.g., "dtk_core=debug").
    pub fn with_log_directive(mut self, directive: impl Into<String>) -> Self {
        self.log_directives.push(directive.into());
        self
    }

    /// Print event targets alongside messages.
    pub fn with_target(mut self) -> Self {
        self.with_target = true;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Supported variables:
    /// - `LOG_LEVEL`: Default log level (default: "info")
    /// - `DTK_LOG_TARGETS`: Set to "true" to print event targets
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TelemetryConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default_level: lookup("LOG_LEVEL"),
            log_directives: Vec::new(),
            with_target: lookup("DTK_LOG_TARGETS").is_some_and(|v| v == "true"),
        }
    }

    /// Build the filter: `RUST_LOG` wins, then the default level, then the
    /// extra directives on top.
    pub fn env_filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        let mut filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(self.default_level.as_deref().unwrap_or("info"))?,
        };

        for directive in &self.log_directives {
            filter = filter.add_directive(directive.parse()?);
        }
        Ok(filter)
    }
}

/// Initialize console logging at the given level.
pub fn init_telemetry(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with_config(TelemetryConfig::new().with_log_level(level))
}

/// Initialize console logging.
///
/// Only the first call in a process that gets past filter validation attempts
/// to install a subscriber. If a global subscriber is already set at that
/// point, nothing is installed. Every later call returns `Ok(())` without
/// installing anything.
pub fn init_with_config(
    config: TelemetryConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = config.env_filter()?;

    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(config.with_target);

        if tracing_subscriber::registry().with(filter).with(fmt_layer).try_init().is_ok() {
            tracing::info!(
                log.level = config.default_level.as_deref().unwrap_or("env"),
                log.directives = config.log_directives.len(),
                "Telemetry system initialized"
            );
        }
    });

    Ok(())
}
