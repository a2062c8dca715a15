use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::{AllowedOrigins, is_serialized_origin};
use crate::path_pattern::PathPatternError;
use crate::util::is_http_token;
use thiserror::Error;

/// Raw configuration for one CORS policy.
///
/// Turn it into a [`CorsPolicy`](crate::CorsPolicy) to validate it; nothing is
/// checked until then.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// `None` leaves `Access-Control-Max-Age` out; `Some(0)` disables caching.
    pub max_age: Option<u64>,
    pub path_pattern: String,
    /// Status used when answering a preflight directly.
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::list([
                "Authorization",
                "Content-Type",
                "X-Requested-With",
            ]),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: None,
            path_pattern: "/**".to_string(),
            options_success_status: 200,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: AllowedOrigins) -> Self {
        self.origins = origins;
        self
    }

    pub fn methods(mut self, methods: AllowedMethods) -> Self {
        self.methods = methods;
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = headers;
        self
    }

    pub fn exposed_headers(mut self, headers: ExposedHeaders) -> Self {
        self.exposed_headers = headers;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn path_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.path_pattern = pattern.into();
        self
    }

    pub fn options_success_status(mut self, status: u16) -> Self {
        self.options_success_status = status;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && self.origins.is_any() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if let AllowedOrigins::List(values) = &self.origins {
            for origin in values {
                if origin == crate::constants::WILDCARD {
                    return Err(ValidationError::MixedWildcardOrigin);
                }
                if !is_serialized_origin(origin) {
                    return Err(ValidationError::InvalidOrigin(origin.clone()));
                }
            }
        }

        if let Some(method) = self
            .methods
            .values()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        let header_names = self
            .allowed_headers
            .values()
            .iter()
            .chain(self.exposed_headers.values());
        for name in header_names {
            if name == crate::constants::WILDCARD || !is_http_token(name) {
                return Err(ValidationError::InvalidHeaderName(name.clone()));
            }
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidStatusCode(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

/// Configuration problems detected while building policies. All of them are
/// fatal: a process holding one must not serve traffic.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("credentials cannot be combined with the wildcard origin `*`")]
    CredentialsRequireSpecificOrigin,
    #[error("the wildcard origin `*` cannot be mixed with literal origins")]
    MixedWildcardOrigin,
    #[error("`{0}` is not a serialized origin (expected scheme://host[:port])")]
    InvalidOrigin(String),
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("`{0}` is not a valid header name")]
    InvalidHeaderName(String),
    #[error(transparent)]
    InvalidPathPattern(#[from] PathPatternError),
    #[error("path patterns `{first}` and `{second}` are equally specific")]
    AmbiguousPathScope { first: String, second: String },
    #[error("preflight status {0} is not a 2xx success status")]
    InvalidStatusCode(u16),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
