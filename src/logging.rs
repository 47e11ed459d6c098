//! # Logging
//! src/logging.rs
//!
//! Subscriber de `tracing` para el binario. `RUST_LOG` tiene prioridad
//! sobre `--log-level`.

use crate::config::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Construye el filtro a partir de `RUST_LOG` o del nivel configurado
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Instala el subscriber global
///
/// Solo la primera llamada tiene efecto; las siguientes se ignoran para que
/// los tests puedan llamarla varias veces.
pub fn init(config: &Config) {
    let filter = env_filter(&config.log_level);

    let result = if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_thread_ids(true))
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(level = %config.log_level, json = config.json_logs, "logging initialized");
    }
}
