//! # Tareas
//! src/todos/mod.rs
//!
//! Modelo y handler de la única ruta del servidor, `GET /todo`.

pub mod handlers;
pub mod model;

pub use handlers::list_handler;
pub use model::{TodoItem, TodoList, TODOS};

use crate::router::Router;

/// Router de la aplicación con todas sus rutas registradas
pub fn routes() -> Router {
    let mut router = Router::new();
    router.get("/todo", list_handler);
    router
}
