/// Borrowed snapshot of the request fields the evaluator reads.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
    pub path: &'a str,
}

/// How the evaluator treats a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `OPTIONS` carrying both `Origin` and `Access-Control-Request-Method`.
    Preflight,
    /// Any other request carrying `Origin`.
    Simple,
    /// No `Origin`: the browser applies no cross-origin restriction.
    SameOrigin,
}

impl RequestContext<'_> {
    pub fn is_options(&self) -> bool {
        self.method == crate::constants::method::OPTIONS
    }

    pub(crate) fn origin(&self) -> Option<&str> {
        self.origin.filter(|value| !value.trim().is_empty())
    }

    pub(crate) fn requested_method(&self) -> Option<&str> {
        self.access_control_request_method
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub(crate) fn requested_headers(&self) -> &str {
        self.access_control_request_headers.unwrap_or_default()
    }

    pub fn kind(&self) -> RequestKind {
        match self.origin() {
            None => RequestKind::SameOrigin,
            Some(_) if self.is_options() && self.requested_method().is_some() => {
                RequestKind::Preflight
            }
            Some(_) => RequestKind::Simple,
        }
    }

    /// `OPTIONS` with `Access-Control-Request-Method` but no `Origin`: the
    /// intended caller cannot be determined.
    pub(crate) fn is_malformed_preflight(&self) -> bool {
        self.origin().is_none() && self.is_options() && self.requested_method().is_some()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
