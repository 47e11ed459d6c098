//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes, una por thread
//! 3. Lee y parsea el request HTTP
//! 4. Despacha al router y envía la respuesta

pub mod tcp;

pub use tcp::Server;
