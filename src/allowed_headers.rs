use crate::util::{equals_ignore_case, normalize_lower, split_list};
use std::collections::HashSet;

/// Request-header names a cross-origin caller may send.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AllowedHeaders(Vec<String>);

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        Self(deduped)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks every token of an `Access-Control-Request-Headers` line against
    /// the list, ignoring case. A blank line requests nothing and passes.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        split_list(request_headers).all(|header| {
            self.0
                .iter()
                .any(|allowed| equals_ignore_case(allowed, header))
        })
    }

    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
