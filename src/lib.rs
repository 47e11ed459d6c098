//! # Todo Server
//! src/lib.rs
//!
//! Servidor HTTP concurrente que expone una lista fija de tareas en
//! `GET /todo`:
//!
//! ```text
//! {"data": [{"id": "1", "item": "Sample todo"}]}
//! ```
//!
//! ## Arquitectura
//!
//! - `http`: parsing de requests y construcción de responses
//! - `router`: rutas por método y path (404 / 405 por defecto)
//! - `todos`: modelo de tareas y su handler
//! - `server`: socket TCP, un thread por conexión
//! - `config`: CLI y variables de entorno
//! - `logging`: subscriber de `tracing`
//! - `error`: errores que detienen el servidor
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use todo_server::config::Config;
//! use todo_server::server::Server;
//!
//! let server = Server::bind(Config::default())?;
//! server.run()?;
//! # Ok::<(), todo_server::error::ServerError>(())
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod todos;
