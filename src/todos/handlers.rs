//! # Handlers de Tareas
//! src/todos/handlers.rs

use super::model::TODOS;
use crate::http::{Request, Response};

/// Handler para GET /todo
///
/// Ignora query string y body. Siempre responde la misma lista.
///
/// # Ejemplo de response
/// ```json
/// {"data": [{"id": "1", "item": "Sample todo"}]}
/// ```
pub fn list_handler(_req: &Request) -> Response {
    Response::json_value(&*TODOS)
}
