//! # Modelo de Tareas
//! src/todos/model.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Una tarea: identificador y texto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub item: String,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
        }
    }
}

/// Envoltorio de la respuesta: `{"data": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub data: Vec<TodoItem>,
}

/// Lista fija que sirve `GET /todo`. Se construye una vez y nunca se muta.
pub static TODOS: Lazy<TodoList> = Lazy::new(|| TodoList {
    data: vec![TodoItem::new("1", "Sample todo")],
});
