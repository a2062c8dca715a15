#![allow(dead_code)]

use cors_policy_rs::constants::method;
use cors_policy_rs::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsDecision, CorsOptions, CorsPolicy,
    ExposedHeaders, RequestContext,
};

pub struct PolicyBuilder {
    options: CorsOptions,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            options: CorsOptions::new().origins(AllowedOrigins::list(["https://app.test"])),
        }
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.origins = AllowedOrigins::list(origins);
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.options.origins = AllowedOrigins::any();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_headers = AllowedHeaders::list(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = ExposedHeaders::list(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn path(mut self, pattern: &str) -> Self {
        self.options.path_pattern = pattern.to_string();
        self
    }

    pub fn options_success_status(mut self, status: u16) -> Self {
        self.options.options_success_status = status;
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn build_policy(self) -> CorsPolicy {
        CorsPolicy::new(self.options).expect("valid CORS policy")
    }

    pub fn build(self) -> Cors {
        Cors::from(self.build_policy())
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

#[derive(Clone)]
pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    path: String,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
            request_method: None,
            request_headers: None,
            path: "/api/data".to_string(),
        }
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.to_string());
        self
    }

    pub fn request_method(mut self, method: &str) -> Self {
        self.request_method = Some(method.to_string());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
            path: &self.path,
        }
    }

    pub fn evaluate(&self, cors: &Cors) -> CorsDecision {
        cors.evaluate(&self.context())
    }
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS).request_method(method::GET)
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}
