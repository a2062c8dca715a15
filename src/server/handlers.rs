//! Demo banking endpoints that exercise the evaluator under simple and
//! preflighted requests. Authentication is permit-all.

use super::ResponseBody;
use super::routes::RouteTable;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Method, Request, Response, StatusCode};
use http_body_util::Full;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub amount: i64,
    pub to_account: String,
}

/// Routes served by the `cors-demo` binary.
pub fn banking_routes() -> RouteTable {
    RouteTable::new()
        .route(Method::GET, "/api/banking/balance", balance)
        .route(Method::POST, "/api/banking/transfer", transfer)
        .route(Method::GET, "/api/data", data)
        .route(Method::POST, "/api/submit", submit)
}

pub fn balance(_request: &Request<Bytes>) -> Response<ResponseBody> {
    json(StatusCode::OK, &ApiResponse::success("Balance: ₹10,000"))
}

pub fn transfer(request: &Request<Bytes>) -> Response<ResponseBody> {
    match serde_json::from_slice::<TransferRequest>(request.body()) {
        Ok(transfer) => json(
            StatusCode::OK,
            &ApiResponse::success(format!("Transferred ₹{} to account", transfer.amount)),
        ),
        Err(err) => json(
            StatusCode::BAD_REQUEST,
            &ApiResponse::error(format!("invalid transfer request: {err}")),
        ),
    }
}

pub fn data(_request: &Request<Bytes>) -> Response<ResponseBody> {
    let mut body = Map::new();
    body.insert(
        "message".to_string(),
        Value::from("This data is accessible from allowed origins"),
    );
    json(StatusCode::OK, &Value::Object(body))
}

pub fn submit(request: &Request<Bytes>) -> Response<ResponseBody> {
    match serde_json::from_slice::<Map<String, Value>>(request.body()) {
        Ok(payload) => json(
            StatusCode::OK,
            &ApiResponse::success(format!("Data received: {}", Value::Object(payload))),
        ),
        Err(err) => json(
            StatusCode::BAD_REQUEST,
            &ApiResponse::error(format!("invalid payload: {err}")),
        ),
    }
}

pub(crate) fn json<T: Serialize>(status: StatusCode, body: &T) -> Response<ResponseBody> {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            let mut response = Response::new(Full::new(Bytes::from(bytes)));
            *response.status_mut() = status;
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            response
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response body");
            empty(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub(crate) fn empty(status: StatusCode) -> Response<ResponseBody> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;
