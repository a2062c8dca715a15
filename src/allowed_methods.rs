use crate::constants::method;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Method tokens are case-sensitive, so `post` is not `POST`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Construct an explicit list of allowed methods, dropping blanks and duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if !trimmed.is_empty() && !deduped.contains(&trimmed) {
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

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        !requested.is_empty() && self.0.iter().any(|allowed| allowed == requested)
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
