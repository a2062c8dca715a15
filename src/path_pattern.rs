use regex_automata::meta::{BuildError, Regex};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 1_024;

#[derive(Debug, Error)]
pub enum PathPatternError {
    #[error("path pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    #[error("path pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
    #[error("failed to compile path pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// Ant-style path scope such as `/api/**`, `/api/*/balance` or `/health`.
///
/// `**` spans any number of whole segments, `*` stays inside one segment,
/// everything else is literal.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
    specificity: Specificity,
}

/// Ranking used to pick the most specific pattern for a path. Exact patterns
/// outrank wildcard ones, then the longer literal prefix wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    exact: bool,
    literal_prefix_len: usize,
}

impl PathPattern {
    pub fn new(pattern: &str) -> Result<Self, PathPatternError> {
        let pattern = pattern.trim();
        if !pattern.starts_with('/') {
            return Err(PathPatternError::MissingLeadingSlash(pattern.to_string()));
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PathPatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let regex = Regex::new(&translate(pattern)).map_err(|err| PathPatternError::Build {
            pattern: pattern.to_string(),
            source: Box::new(err),
        })?;

        let literal_prefix_len = pattern.find('*').unwrap_or(pattern.len());
        Ok(Self {
            source: pattern.to_string(),
            regex,
            specificity: Specificity {
                exact: literal_prefix_len == pattern.len(),
                literal_prefix_len,
            },
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_exact(&self) -> bool {
        self.specificity.exact
    }

    /// Text before the first wildcard, or the whole pattern when exact.
    pub fn literal_prefix(&self) -> &str {
        &self.source[..self.specificity.literal_prefix_len]
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Two patterns tie when neither can be preferred over the other for a
    /// path both match.
    pub fn ties_with(&self, other: &PathPattern) -> bool {
        self.specificity.cmp(&other.specificity) == Ordering::Equal
            && self.literal_prefix() == other.literal_prefix()
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

fn translate(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2 + 2);
    regex.push('^');

    let bytes = pattern.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        let rest = &pattern[idx..];
        if rest.starts_with("/**") && matches!(bytes.get(idx + 3), None | Some(b'/')) {
            regex.push_str("(?:/.*)?");
            idx += 3;
        } else if rest.starts_with("**") {
            regex.push_str(".*");
            idx += 2;
        } else if bytes[idx] == b'*' {
            regex.push_str("[^/]*");
            idx += 1;
        } else {
            let ch = rest.chars().next().unwrap_or_default();
            if "\\.+*?()|[]{}^$".contains(ch) {
                regex.push('\\');
            }
            regex.push(ch);
            idx += ch.len_utf8();
        }
    }

    regex.push('$');
    regex
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
