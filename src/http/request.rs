//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Parser HTTP/1.x escrito a mano.
//!
//! ```text
//! GET /todo HTTP/1.1\r\n
//! Host: localhost:8000\r\n
//! \r\n
//! ```
//!
//! 1. **Request Line**: `METHOD /path?query VERSION`
//! 2. **Headers**: `Name: Value`, uno por línea
//! 3. **Línea vacía**
//!
//! La query string y el body no se conservan: ninguna ruta los usa.

use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// Métodos HTTP reconocidos por el parser
///
/// Reconocer un método no implica que alguna ruta lo acepte: el router
/// responde 405 a todo lo que no sea GET sobre `/todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::OPTIONS => "OPTIONS",
        }
    }
}

impl FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "PATCH" => Ok(Method::PATCH),
            "OPTIONS" => Ok(Method::OPTIONS),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Path sin query string (ej: "/todo")
    path: String,

    /// Headers con el nombre en minúsculas
    headers: HashMap<String, String>,

    /// "HTTP/1.0" o "HTTP/1.1"
    version: String,
}

/// Errores de parsing del request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Incomplete HTTP request")]
    IncompleteRequest,

    #[error("Invalid request line format")]
    InvalidRequestLine,

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid HTTP version: {0}")]
    InvalidHttpVersion(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Empty request")]
    EmptyRequest,
}

impl Request {
    /// Parsea un request desde los bytes leídos del socket
    ///
    /// ```
    /// use todo_server::http::Request;
    ///
    /// let raw = b"GET /todo?page=2 HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/todo");
    /// assert_eq!(request.header("host"), Some("localhost"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(ParseError::EmptyRequest);
        }

        // El head debe ser UTF-8; el body puede ser cualquier cosa
        let head = match find_subsequence(buffer, b"\r\n\r\n") {
            Some(end) => &buffer[..end],
            None => buffer,
        };

        let head = std::str::from_utf8(head).map_err(|_| ParseError::InvalidRequestLine)?;
        let mut lines = head.split("\r\n");

        let request_line = lines.next().ok_or(ParseError::IncompleteRequest)?;
        let (method, path, version) = Self::parse_request_line(request_line)?;
        let headers = Self::parse_headers(lines)?;

        Ok(Request {
            method,
            path,
            headers,
            version,
        })
    }

    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        let method = parts[0].parse::<Method>()?;
        // "/todo?a=1" → "/todo"
        let path = parts[1].split('?').next().unwrap_or_default().to_string();

        let version = parts[2].to_string();
        if version != "HTTP/1.0" && version != "HTTP/1.1" {
            return Err(ParseError::InvalidHttpVersion(version));
        }

        Ok((method, path, version))
    }

    fn parse_headers<'a>(
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.trim().is_empty() {
                break;
            }

            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }

        Ok(headers)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Busca un header sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(|s| s.as_str())
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Posición de la primera aparición de `needle` en `haystack`
pub(crate) fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET /todo HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.path(), "/todo");
        assert_eq!(request.version(), "HTTP/1.1");
    }

    #[test]
    fn test_parse_http_10() {
        let request = Request::parse(b"GET /todo HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.version(), "HTTP/1.0");
    }

    #[test]
    fn test_query_string_stripped_from_path() {
        let raw = b"GET /todo?page=2&q=hello%20world&flag HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.path(), "/todo");
    }

    #[test]
    fn test_headers_case_insensitive() {
        let raw = b"GET /todo HTTP/1.1\r\nHost: localhost:8000\r\nContent-Type: text/plain\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost:8000"));
        assert_eq!(request.header("content-type"), Some("text/plain"));
        assert_eq!(request.header("CONTENT-TYPE"), Some("text/plain"));
    }

    #[test]
    fn test_post_body_ignored() {
        let raw = b"POST /todo HTTP/1.1\r\nContent-Length: 25\r\n\r\n{\"id\":\"2\",\"item\":\"Other\"}";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.path(), "/todo");
        assert_eq!(request.header("content-length"), Some("25"));
    }

    #[test]
    fn test_all_methods_recognized() {
        for name in ["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"] {
            let raw = format!("{} /todo HTTP/1.1\r\n\r\n", name);
            let request = Request::parse(raw.as_bytes()).unwrap();
            assert_eq!(request.method().as_str(), name);
        }
    }

    #[test]
    fn test_unknown_method() {
        let result = Request::parse(b"BREW /todo HTTP/1.1\r\n\r\n");
        assert_eq!(result.unwrap_err(), ParseError::UnsupportedMethod("BREW".into()));
    }

    #[test]
    fn test_invalid_version() {
        let result = Request::parse(b"GET /todo HTTP/2.0\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidHttpVersion(_))));
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(Request::parse(b"").unwrap_err(), ParseError::EmptyRequest);
        assert_eq!(Request::parse(b"\r\n\r\n").unwrap_err(), ParseError::EmptyRequest);
    }

    #[test]
    fn test_invalid_request_line() {
        let result = Request::parse(b"GET\r\n\r\n");
        assert_eq!(result.unwrap_err(), ParseError::InvalidRequestLine);
    }

    #[test]
    fn test_invalid_header() {
        let result = Request::parse(b"GET /todo HTTP/1.1\r\nno-colon-here\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidHeader(_))));
    }

    #[test]
    fn test_non_utf8_head() {
        let result = Request::parse(b"\xff\xfe /todo HTTP/1.1\r\n\r\n");
        assert_eq!(result.unwrap_err(), ParseError::InvalidRequestLine);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::UnsupportedMethod("BREW".into()).to_string(),
            "Unsupported HTTP method: BREW"
        );
        assert_eq!(ParseError::EmptyRequest.to_string(), "Empty request");
    }

    #[test]
    fn test_find_subsequence() {
        assert_eq!(find_subsequence(b"ab\r\n\r\ncd", b"\r\n\r\n"), Some(2));
        assert_eq!(find_subsequence(b"abcd", b"\r\n\r\n"), None);
    }
}
