use super::ResponseBody;
use super::handlers::{ApiResponse, empty, json};
use super::http_adapter::{OwnedRequestContext, apply_headers};
use super::routes::{RouteMatch, RouteTable};
use crate::constants::method;
use crate::cors::Cors;
use crate::result::{CorsDecision, Verdict};
use bytes::Bytes;
use http::header::{ALLOW, HeaderValue};
use http::{Method, Request, Response, StatusCode};
use std::sync::Arc;

/// Ordered request stages: evaluate CORS, dispatch to a handler, decorate
/// the response. Each stage is callable on its own.
#[derive(Debug, Clone)]
pub struct Pipeline {
    cors: Arc<Cors>,
    routes: RouteTable,
}

impl Pipeline {
    pub fn new(cors: Arc<Cors>, routes: RouteTable) -> Self {
        Self { cors, routes }
    }

    pub fn handle(&self, request: Request<Bytes>) -> Response<ResponseBody> {
        let decision = self.evaluate_cors(&request);
        self.respond(&request, &decision)
    }

    /// Runs the remaining stages for a request whose CORS decision is
    /// already known.
    pub fn respond(
        &self,
        request: &Request<Bytes>,
        decision: &CorsDecision,
    ) -> Response<ResponseBody> {
        if decision.end_response {
            return short_circuit(decision);
        }

        let mut response = self.dispatch(request);
        decorate(&mut response, decision);
        response
    }

    pub fn evaluate_cors<B>(&self, request: &Request<B>) -> CorsDecision {
        let owned = OwnedRequestContext::from_request(request);
        let ctx = owned.as_request_context();
        let decision = self.cors.evaluate(&ctx);

        match decision.verdict {
            Verdict::Denied => tracing::info!(
                method = ctx.method,
                path = ctx.path,
                origin = ctx.origin.unwrap_or_default(),
                kind = ?decision.kind,
                "cross-origin request denied"
            ),
            verdict => tracing::debug!(
                method = ctx.method,
                path = ctx.path,
                origin = ctx.origin.unwrap_or_default(),
                kind = ?decision.kind,
                ?verdict,
                "cross-origin evaluation"
            ),
        }

        decision
    }

    pub fn dispatch(&self, request: &Request<Bytes>) -> Response<ResponseBody> {
        match self.routes.lookup(request.method(), request.uri().path()) {
            RouteMatch::Found(handler) => handler(request),
            RouteMatch::MethodNotAllowed(methods) if request.method() == Method::OPTIONS => {
                with_allow(empty(StatusCode::OK), &methods)
            }
            RouteMatch::MethodNotAllowed(methods) => with_allow(
                json(
                    StatusCode::METHOD_NOT_ALLOWED,
                    &ApiResponse::error("method not allowed"),
                ),
                &methods,
            ),
            RouteMatch::NotFound => json(StatusCode::NOT_FOUND, &ApiResponse::error("not found")),
        }
    }
}

/// Attaches the decision's headers to a handler response.
pub fn decorate(response: &mut Response<ResponseBody>, decision: &CorsDecision) {
    apply_headers(response.headers_mut(), &decision.headers);
}

/// Answers a preflight without reaching any handler. Denied preflights get
/// the same success status with no CORS headers; the browser does the
/// blocking.
pub fn short_circuit(decision: &CorsDecision) -> Response<ResponseBody> {
    let status = decision
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);
    let mut response = empty(status);
    decorate(&mut response, decision);
    response
}

fn with_allow(mut response: Response<ResponseBody>, methods: &[Method]) -> Response<ResponseBody> {
    let mut names: Vec<&str> = methods.iter().map(Method::as_str).collect();
    if !names.contains(&method::OPTIONS) {
        names.push(method::OPTIONS);
    }
    if let Ok(value) = HeaderValue::from_str(&names.join(", ")) {
        response.headers_mut().insert(ALLOW, value);
    }
    response
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
