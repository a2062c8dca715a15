use crate::context::{RequestContext, RequestKind};
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::path_pattern::PathPattern;
use crate::result::{CorsDecision, Verdict};

/// A validated, immutable CORS policy scoped to a path pattern.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    options: CorsOptions,
    pattern: PathPattern,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let pattern = PathPattern::new(&options.path_pattern)?;
        Ok(Self { options, pattern })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }

    /// Evaluates the request against this policy alone, ignoring its path
    /// scope. Total: every input yields a decision.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let kind = request.kind();
        if request.is_malformed_preflight() {
            return CorsDecision::denied(kind, Some(self.options.options_success_status));
        }

        match kind {
            RequestKind::SameOrigin => CorsDecision::not_applicable(kind),
            RequestKind::Preflight => self.evaluate_preflight(request),
            RequestKind::Simple => self.evaluate_simple(request),
        }
    }

    fn evaluate_preflight(&self, request: &RequestContext<'_>) -> CorsDecision {
        let status = self.options.options_success_status;
        let builder = HeaderBuilder::new(&self.options);
        let decision = self
            .options
            .origins
            .resolve(request.origin(), self.options.credentials);

        let Some(origin_headers) = builder.build_origin_headers(&decision) else {
            return CorsDecision::denied(RequestKind::Preflight, Some(status));
        };

        let method_allowed = request
            .requested_method()
            .is_some_and(|method| self.options.methods.allows_method(method));
        if !method_allowed {
            return CorsDecision::denied(RequestKind::Preflight, Some(status));
        }
        if !self
            .options
            .allowed_headers
            .allows_headers(request.requested_headers())
        {
            return CorsDecision::denied(RequestKind::Preflight, Some(status));
        }

        let mut headers = HeaderCollection::new();
        headers.extend(origin_headers);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());

        CorsDecision {
            kind: RequestKind::Preflight,
            verdict: Verdict::Allowed,
            headers: headers.into_headers(),
            end_response: true,
            status: Some(status),
        }
    }

    fn evaluate_simple(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let decision = self
            .options
            .origins
            .resolve(request.origin(), self.options.credentials);

        let Some(origin_headers) = builder.build_origin_headers(&decision) else {
            return CorsDecision::denied(RequestKind::Simple, None);
        };

        let mut headers = HeaderCollection::new();
        headers.extend(origin_headers);
        headers.extend(builder.build_vary_origin_header());
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision {
            kind: RequestKind::Simple,
            verdict: Verdict::Allowed,
            headers: headers.into_headers(),
            end_response: false,
            status: None,
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
