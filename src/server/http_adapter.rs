use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::util::split_list;
use http::header::{HeaderMap, HeaderName, HeaderValue, VARY};
use http::Request;

/// Owned copy of the request fields the evaluator reads, so the borrowed
/// [`RequestContext`] can outlive header parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
    path: String,
}

impl OwnedRequestContext {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: first_value(headers, header::ORIGIN),
            access_control_request_method: first_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: joined_values(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
            path: request.uri().path().to_string(),
        }
    }

    pub fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
            path: &self.path,
        }
    }
}

/// Copies decision headers onto a response. `Vary` is merged with whatever
/// the handler already set; every other header replaces its previous value.
pub fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if name.eq_ignore_ascii_case(header::VARY) {
            merge_vary(map, value);
            continue;
        }

        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            (Ok(header_name), Ok(header_value)) => {
                map.insert(header_name, header_value);
            }
            _ => tracing::warn!(header = %name, "skipping CORS header that is not valid HTTP"),
        }
    }
}

fn merge_vary(map: &mut HeaderMap, incoming: &str) {
    let mut entries: Vec<String> = Vec::new();
    let existing = map
        .get_all(VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(split_list);
    for entry in existing.chain(split_list(incoming)) {
        if !entries
            .iter()
            .any(|known| known.eq_ignore_ascii_case(entry))
        {
            entries.push(entry.to_string());
        }
    }

    if let Ok(value) = HeaderValue::from_str(&entries.join(", ")) {
        map.insert(VARY, value);
    }
}

fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Browsers may split a list header across several lines.
fn joined_values(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[cfg(test)]
#[path = "http_adapter_test.rs"]
mod http_adapter_test;
