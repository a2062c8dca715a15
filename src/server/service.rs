use super::ResponseBody;
use super::handlers::{ApiResponse, json};
use super::pipeline::{Pipeline, decorate, short_circuit};
use http::{Request, Response, StatusCode};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::service::Service;
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Hyper service that evaluates CORS on the request head, buffers the body
/// and hands the request to a shared [`Pipeline`].
#[derive(Clone)]
pub struct CorsService {
    pipeline: Arc<Pipeline>,
}

impl CorsService {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }
}

impl<B> Service<Request<B>> for CorsService
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    type Response = Response<ResponseBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let pipeline = Arc::clone(&self.pipeline);

        Box::pin(async move {
            let decision = pipeline.evaluate_cors(&req);
            if decision.end_response {
                return Ok(short_circuit(&decision));
            }

            let (parts, body) = req.into_parts();
            let response = match Limited::new(body, MAX_BODY_BYTES).collect().await {
                Ok(collected) => {
                    let request = Request::from_parts(parts, collected.to_bytes());
                    pipeline.respond(&request, &decision)
                }
                Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
                    tracing::warn!(limit = MAX_BODY_BYTES, "request body too large");
                    let mut response = json(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        &ApiResponse::error("request body too large"),
                    );
                    decorate(&mut response, &decision);
                    response
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read request body");
                    let mut response = json(
                        StatusCode::BAD_REQUEST,
                        &ApiResponse::error("failed to read request body"),
                    );
                    decorate(&mut response, &decision);
                    response
                }
            };

            Ok(response)
        })
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
