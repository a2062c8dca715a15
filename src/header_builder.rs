use crate::constants::{WILDCARD, header};
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Returns `None` unless the origin was allowed.
    pub(crate) fn build_origin_headers(
        &self,
        decision: &OriginDecision,
    ) -> Option<HeaderCollection> {
        match decision {
            OriginDecision::Any => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                    WILDCARD.to_string(),
                );
                Some(headers)
            }
            OriginDecision::Exact(value) => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                    value.clone(),
                );
                headers.add_vary(header::ORIGIN);
                Some(headers)
            }
            OriginDecision::Disallow | OriginDecision::Skip => None,
        }
    }

    pub(crate) fn build_vary_origin_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                "true".to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS.to_string(), value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        match self.options.allowed_headers.header_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(), value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        match self.options.exposed_headers.header_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS.to_string(), value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        match self.options.max_age {
            Some(seconds) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_MAX_AGE.to_string(),
                    seconds.to_string(),
                );
                headers
            }
            None => HeaderCollection::new(),
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
