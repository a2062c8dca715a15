use crate::constants::WILDCARD;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origins permitted to read cross-origin responses.
///
/// Matching is opaque string equality over the full serialized origin
/// (`scheme://host[:port]`). There is no host-only, prefix or suffix matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// The `*` sentinel. Only usable when credentials are disabled.
    Any,
    List(Vec<String>),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Outcome of matching the request `Origin` against [`AllowedOrigins`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit `Access-Control-Allow-Origin: *`.
    Any,
    /// Emit the literal matched origin.
    Exact(String),
    Disallow,
    /// No `Origin` on the request.
    Skip,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if !deduped.contains(&trimmed) {
                deduped.push(trimmed);
            }
        }
        Self::List(deduped)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(values) if values.is_empty())
    }

    pub fn resolve(&self, request_origin: Option<&str>, credentials: bool) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };

        if origin.is_empty() || origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Self::Any if credentials => OriginDecision::Disallow,
            Self::Any => OriginDecision::Any,
            Self::List(values) => {
                if values.iter().any(|allowed| allowed == origin) {
                    OriginDecision::Exact(origin.to_string())
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

/// Reports whether `value` is a serialized origin: `scheme://host[:port]`
/// with no path, query, fragment or trailing slash. The opaque `null` origin
/// is accepted as well.
pub(crate) fn is_serialized_origin(value: &str) -> bool {
    if value == "null" {
        return true;
    }
    if value == WILDCARD {
        return false;
    }

    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };

    let mut scheme_chars = scheme.chars();
    let scheme_ok = scheme_chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && scheme_chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'));
    if !scheme_ok {
        return false;
    }

    if rest.is_empty() || rest.contains(['/', '?', '#', '@', ' ']) {
        return false;
    }

    let (host, port) = split_host_port(rest);
    if host.is_empty() {
        return false;
    }
    match port {
        Some(port) => {
            !port.is_empty() && port.len() <= 5 && port.bytes().all(|byte| byte.is_ascii_digit())
        }
        None => true,
    }
}

fn split_host_port(authority: &str) -> (&str, Option<&str>) {
    if let Some(stripped) = authority.strip_prefix('[') {
        // IPv6 literal
        return match stripped.split_once(']') {
            Some((host, "")) => (host, None),
            Some((host, tail)) => match tail.strip_prefix(':') {
                Some(port) => (host, Some(port)),
                None => ("", None),
            },
            None => ("", None),
        };
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
