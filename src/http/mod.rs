//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Protocolo HTTP/1.x implementado a mano, sin frameworks:
//!
//! - Parsing de requests
//! - Construcción de responses
//! - Status codes
//!
//! El servidor atiende un request por conexión y siempre responde con
//! `Connection: close`, así que no hace falta keep-alive ni chunked encoding.

pub mod request;
pub mod response;
pub mod status;

pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
