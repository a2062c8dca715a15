//! Host layer: wires the evaluator in front of an explicit route table and
//! exposes the result as a hyper service.

pub mod handlers;
pub mod http_adapter;
pub mod pipeline;
pub mod routes;
pub mod service;

pub use pipeline::Pipeline;
pub use routes::{Handler, RouteMatch, RouteTable};
pub use service::CorsService;

use bytes::Bytes;
use http_body_util::Full;

pub type ResponseBody = Full<Bytes>;
