use super::ResponseBody;
use bytes::Bytes;
use http::{Method, Request, Response};

pub type Handler = fn(&Request<Bytes>) -> Response<ResponseBody>;

/// Result of looking a request up in the [`RouteTable`].
#[derive(Debug, Clone)]
pub enum RouteMatch {
    Found(Handler),
    /// The path exists under other methods.
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

#[derive(Debug, Clone)]
struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

/// Explicit (method, path) → handler registrations, matched exactly.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: Method, path: impl Into<String>, handler: Handler) -> Self {
        let path = path.into();
        self.routes
            .retain(|route| !(route.method == method && route.path == path));
        self.routes.push(Route {
            method,
            path,
            handler,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn lookup(&self, method: &Method, path: &str) -> RouteMatch {
        let mut allowed = Vec::new();
        for route in self.routes.iter().filter(|route| route.path == path) {
            if route.method == *method {
                return RouteMatch::Found(route.handler);
            }
            allowed.push(route.method.clone());
        }

        if allowed.is_empty() {
            RouteMatch::NotFound
        } else {
            RouteMatch::MethodNotAllowed(allowed)
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
