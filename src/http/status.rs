//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Solo los códigos que el servidor de tareas puede emitir:
//!
//! - **2xx**: 200 para `GET /todo`
//! - **4xx**: 400 (request ilegible), 404 (ruta desconocida), 405 (método no permitido)
//! - **5xx**: 500 (fallo al serializar)

/// Códigos de estado que emite el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok = 200,

    /// 400 Bad Request - El request no se pudo parsear
    BadRequest = 400,

    /// 404 Not Found - Ruta no registrada
    NotFound = 404,

    /// 405 Method Not Allowed - La ruta existe pero no para este método
    MethodNotAllowed = 405,

    /// 500 Internal Server Error
    InternalServerError = 500,
}

impl StatusCode {
    /// Valor numérico del código
    ///
    /// ```
    /// use todo_server::http::StatusCode;
    /// assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Reason phrase estándar (RFC 9110)
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
