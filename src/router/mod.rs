//! # Sistema de Routing
//! src/router/mod.rs
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se registran por método y path exacto. Para un path conocido
//! con un método no registrado se responde 405 con el header `Allow`;
//! para un path desconocido, 404.

use crate::http::{Method, Request, Response, StatusCode};

/// Un handler recibe un Request y retorna una Response
pub type Handler = fn(&Request) -> Response;

pub struct Router {
    routes: Vec<(Method, String, Handler)>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra un handler para `method` + `path`
    pub fn register(&mut self, method: Method, path: &str, handler: Handler) {
        self.routes.push((method, path.to_string(), handler));
    }

    /// Atajo para rutas GET
    ///
    /// ```
    /// use todo_server::router::Router;
    /// use todo_server::http::{Request, Response, StatusCode};
    ///
    /// fn hello(_req: &Request) -> Response {
    ///     Response::json(r#"{"message": "hello"}"#)
    /// }
    ///
    /// let mut router = Router::new();
    /// router.get("/hello", hello);
    ///
    /// let request = Request::parse(b"GET /hello HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.route(&request).status(), StatusCode::Ok);
    /// ```
    pub fn get(&mut self, path: &str, handler: Handler) -> &mut Self {
        self.register(Method::GET, path, handler);
        self
    }

    /// Ejecuta el handler que corresponde al request
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        let handler = self
            .routes
            .iter()
            .find(|(method, route_path, _)| *method == request.method() && route_path == path)
            .map(|(_, _, handler)| *handler);

        let mut response = match handler {
            Some(handler) => handler(request),
            None => {
                let allowed = self.allowed_methods(path);
                if allowed.is_empty() {
                    Response::error(StatusCode::NotFound, &format!("Route not found: {}", path))
                } else {
                    Response::error(
                        StatusCode::MethodNotAllowed,
                        &format!("Method {} not allowed on {}", request.method(), path),
                    )
                    .with_header("Allow", &allowed.join(", "))
                }
            }
        };

        self.add_common_headers(&mut response);
        response
    }

    /// Métodos registrados para `path`, en orden de registro
    pub fn allowed_methods(&self, path: &str) -> Vec<&'static str> {
        let mut allowed = Vec::new();
        for (method, route_path, _) in &self.routes {
            if route_path == path && !allowed.contains(&method.as_str()) {
                allowed.push(method.as_str());
            }
        }
        allowed
    }

    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Server", concat!("todo_server/", env!("CARGO_PKG_VERSION")));
        response.add_header("Connection", "close");
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
