//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión. El router se comparte con `Arc` y es de solo
//! lectura, así que los threads no necesitan sincronizarse entre sí.

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::request::find_subsequence;
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use crate::todos;
use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Tamaño máximo de un request (head + body)
pub const MAX_REQUEST_BYTES: usize = 8192;

/// Bytes que se descartan como máximo tras un request truncado
const MAX_DISCARD_BYTES: usize = 64 * 1024;

pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: TcpListener,
}

impl Server {
    /// Valida la configuración y abre el socket con las rutas de la aplicación
    pub fn bind(config: Config) -> Result<Self> {
        Self::with_router(config, todos::routes())
    }

    /// Igual que [`Server::bind`] pero con un router arbitrario
    pub fn with_router(config: Config, router: Router) -> Result<Self> {
        config.validate()?;

        let address = config.address();
        let listener = TcpListener::bind(&address)
            .map_err(|source| ServerError::Bind { address, source })?;

        Ok(Self {
            config,
            router: Arc::new(router),
            listener,
        })
    }

    /// Dirección real del socket (útil con puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Acepta conexiones indefinidamente
    pub fn run(&self) -> Result<()> {
        tracing::info!(address = %self.local_addr()?, "server listening");

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let read_timeout = self.config.read_timeout();

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &router, read_timeout) {
                            tracing::warn!(error = %e, "connection error");
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }

    /// Lee un request, lo despacha y escribe la respuesta
    pub fn handle_connection(
        mut stream: TcpStream,
        router: &Router,
        read_timeout: Duration,
    ) -> io::Result<()> {
        let start = Instant::now();
        let request_id = Uuid::new_v4().to_string();
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_read_timeout(Some(read_timeout))?;
        let buffer = read_request(&mut stream)?;

        if buffer.is_empty() {
            tracing::debug!(%peer, "connection closed without data");
            return Ok(());
        }

        let (mut response, method, path, version, user_agent) = match Request::parse(&buffer) {
            Ok(request) => (
                router.route(&request),
                request.method().as_str(),
                request.path().to_string(),
                request.version().to_string(),
                request.header("user-agent").unwrap_or("-").to_string(),
            ),
            Err(e) => {
                tracing::debug!(%peer, error = %e, "unparseable request");
                let mut response = Response::error(StatusCode::BadRequest, &format!("Invalid: {}", e));
                response.add_header("Connection", "close");
                (response, "-", "-".to_string(), "-".to_string(), "-".to_string())
            }
        };

        response.add_header("X-Request-Id", &request_id);

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        // Request truncado: descartar lo que quede para no cerrar con un RST
        if buffer.len() >= MAX_REQUEST_BYTES && stream.shutdown(Shutdown::Write).is_ok() {
            discard_remaining(&mut stream);
        }

        let status = response.status();
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id, %peer, method, path = %path, %version,
                user_agent = %user_agent, status = status.as_u16(), latency_ms,
                "request failed"
            );
        } else {
            tracing::info!(
                request_id = %request_id, %peer, method, path = %path, %version,
                user_agent = %user_agent, status = status.as_u16(), latency_ms,
                "request served"
            );
        }

        Ok(())
    }
}

/// Lee hasta el fin de los headers más el body declarado en `Content-Length`
///
/// Se detiene en EOF, en [`MAX_REQUEST_BYTES`] o al vencer el timeout de
/// lectura. Un timeout sin bytes leídos devuelve un buffer vacío.
fn read_request(stream: &mut TcpStream) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    while buffer.len() < MAX_REQUEST_BYTES {
        let bytes_read = match stream.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::ConnectionReset => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if bytes_read == 0 {
            break;
        }

        let take = bytes_read.min(MAX_REQUEST_BYTES - buffer.len());
        buffer.extend_from_slice(&chunk[..take]);

        if let Some(head_end) = find_subsequence(&buffer, b"\r\n\r\n") {
            let expected = (head_end + 4).saturating_add(content_length(&buffer[..head_end]));
            if buffer.len() >= expected.min(MAX_REQUEST_BYTES) {
                break;
            }
        }
    }

    Ok(buffer)
}

/// Lee y descarta hasta EOF, error o timeout, con un tope de bytes
fn discard_remaining(stream: &mut TcpStream) {
    let mut chunk = [0u8; 1024];
    let mut discarded = 0;

    while discarded < MAX_DISCARD_BYTES {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => discarded += n,
        }
    }
}

/// Valor de `Content-Length` en el head, acotado a [`MAX_REQUEST_BYTES`].
/// 0 si falta o es inválido
fn content_length(head: &[u8]) -> usize {
    String::from_utf8_lossy(head)
        .split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .map_or(0, |len| len.min(MAX_REQUEST_BYTES))
}
