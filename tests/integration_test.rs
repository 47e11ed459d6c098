//! Tests de integración para el servidor de tareas
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero y le habla
//! HTTP crudo por `TcpStream`.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;

use serde_json::{json, Value};
use todo_server::config::Config;
use todo_server::server::Server;

/// Arranca el servidor en background y retorna su dirección
fn start_server() -> SocketAddr {
    let mut config = Config::default();
    config.port = 0;

    let server = Server::bind(config).expect("bind");
    let addr = server.local_addr().expect("local addr");

    thread::spawn(move || server.run());

    addr
}

/// Envía un request crudo y retorna la response completa
fn send_raw(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw.as_bytes()).unwrap();
    stream.flush().unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

fn send_request(addr: SocketAddr, method: &str, path: &str) -> String {
    send_raw(
        addr,
        &format!("{} {} HTTP/1.1\r\nHost: localhost\r\n\r\n", method, path),
    )
}

fn status_code(response: &str) -> u16 {
    response
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .unwrap_or_else(|| panic!("malformed status line: {}", response))
}

fn extract_body(response: &str) -> &str {
    match response.find("\r\n\r\n") {
        Some(pos) => &response[pos + 4..],
        None => "",
    }
}

fn expected_payload() -> Value {
    json!({"data": [{"id": "1", "item": "Sample todo"}]})
}

#[test]
fn test_get_todo_returns_200() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/todo");

    assert_eq!(status_code(&response), 200, "got: {}", response);
    assert!(response.contains("Content-Type: application/json\r\n"));
}

#[test]
fn test_get_todo_payload() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/todo");

    let body: Value = serde_json::from_str(extract_body(&response)).unwrap();
    assert_eq!(body, expected_payload());
}

#[test]
fn test_get_todo_http_10() {
    let addr = start_server();
    let response = send_raw(addr, "GET /todo HTTP/1.0\r\n\r\n");

    assert_eq!(status_code(&response), 200);
}

#[test]
fn test_get_todo_idempotent() {
    let addr = start_server();

    let first = send_request(addr, "GET", "/todo");
    let first_body = extract_body(&first).to_string();

    for _ in 0..20 {
        let response = send_request(addr, "GET", "/todo");
        assert_eq!(extract_body(&response), first_body);
    }
}

#[test]
fn test_get_todo_concurrent() {
    let addr = start_server();

    let clients: Vec<_> = (0..16)
        .map(|_| thread::spawn(move || send_request(addr, "GET", "/todo")))
        .collect();

    for client in clients {
        let response = client.join().unwrap();
        assert_eq!(status_code(&response), 200);

        let body: Value = serde_json::from_str(extract_body(&response)).unwrap();
        assert_eq!(body, expected_payload());
    }
}

#[test]
fn test_request_ids_are_unique() {
    let addr = start_server();

    let request_id = |response: &str| {
        response
            .lines()
            .find_map(|line| line.strip_prefix("X-Request-Id: "))
            .map(str::to_string)
            .expect("X-Request-Id header")
    };

    let a = send_request(addr, "GET", "/todo");
    let b = send_request(addr, "GET", "/todo");
    assert_ne!(request_id(&a), request_id(&b));
}

#[test]
fn test_non_get_methods_rejected() {
    let addr = start_server();

    for method in ["POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"] {
        let response = send_request(addr, method, "/todo");
        assert_eq!(status_code(&response), 405, "{} /todo", method);
        assert!(response.contains("Allow: GET\r\n"));
    }
}

#[test]
fn test_post_todo_with_json_body_rejected() {
    let addr = start_server();
    let body = r#"{"id": "2", "item": "Buy milk"}"#;
    let response = send_raw(
        addr,
        &format!(
            "POST /todo HTTP/1.1\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ),
    );

    assert_eq!(status_code(&response), 405);

    // El POST no modifica la lista
    let after = send_request(addr, "GET", "/todo");
    let list: Value = serde_json::from_str(extract_body(&after)).unwrap();
    assert_eq!(list, expected_payload());
}

#[test]
fn test_unknown_path_not_found() {
    let addr = start_server();
    let response = send_request(addr, "GET", "/unknown");

    assert_eq!(status_code(&response), 404);
    let body: Value = serde_json::from_str(extract_body(&response)).unwrap();
    assert_eq!(body["error"], "Route not found: /unknown");
}

#[test]
fn test_malformed_request_line() {
    let addr = start_server();
    let response = send_raw(addr, "NOT-HTTP\r\n\r\n");

    assert_eq!(status_code(&response), 400);
}
