//! # Errores del Servidor
//! src/error.rs
//!
//! Errores que pueden detener el servidor. Los errores por request
//! (parsing, rutas) nunca llegan aquí: se convierten en respuestas HTTP.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// No se pudo abrir el socket de escucha
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuración inválida (CLI o variables de entorno)
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
