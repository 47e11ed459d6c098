//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI con fallback a variables de entorno.
//!
//! ### CLI
//! ```bash
//! ./todo_server --port 8000 --host 0.0.0.0 --log-level debug
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8000 HTTP_HOST=0.0.0.0 JSON_LOGS=true ./todo_server
//! ```

use crate::error::{Result, ServerError};
use clap::Parser;
use std::time::Duration;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Parser)]
#[command(name = "todo_server")]
#[command(about = "Servidor HTTP que expone la lista de tareas en GET /todo")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value = "8000", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Tiempo máximo esperando los bytes del request, en milisegundos
    #[arg(long = "read-timeout-ms", default_value = "5000", env = "READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    /// Nivel de log (trace, debug, info, warn, error). RUST_LOG tiene prioridad
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Emitir logs en formato JSON
    #[arg(long = "json-logs", env = "JSON_LOGS")]
    pub json_logs: bool,
}

impl Config {
    /// Parsea argumentos CLI y variables de entorno
    pub fn new() -> Self {
        Config::parse()
    }

    /// Dirección para bind (host:port)
    ///
    /// ```
    /// use todo_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServerError::invalid_config("host must not be empty"));
        }

        if self.read_timeout_ms == 0 {
            return Err(ServerError::invalid_config("read timeout must be > 0"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ServerError::invalid_config(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Loguea la configuración efectiva
    pub fn print_summary(&self) {
        tracing::info!(
            address = %self.address(),
            read_timeout_ms = self.read_timeout_ms,
            log_level = %self.log_level,
            json_logs = self.json_logs,
            "configuration loaded"
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            read_timeout_ms: 5_000,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
