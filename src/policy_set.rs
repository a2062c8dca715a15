use crate::options::ValidationError;
use crate::policy::CorsPolicy;

/// Ordered collection of path-scoped policies.
///
/// Selection picks the policy whose pattern is most specific for the path.
/// Equally specific overlapping patterns are refused at construction.
#[derive(Debug, Clone, Default)]
pub struct PolicySet {
    policies: Vec<CorsPolicy>,
}

impl PolicySet {
    pub fn new(policies: Vec<CorsPolicy>) -> Result<Self, ValidationError> {
        for (idx, policy) in policies.iter().enumerate() {
            if let Some(other) = policies[idx + 1..]
                .iter()
                .find(|other| policy.pattern().ties_with(other.pattern()))
            {
                return Err(ValidationError::AmbiguousPathScope {
                    first: policy.pattern().as_str().to_string(),
                    second: other.pattern().as_str().to_string(),
                });
            }
        }

        Ok(Self { policies })
    }

    pub fn single(policy: CorsPolicy) -> Self {
        Self {
            policies: vec![policy],
        }
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorsPolicy> {
        self.policies.iter()
    }

    pub fn select(&self, path: &str) -> Option<&CorsPolicy> {
        self.policies
            .iter()
            .filter(|policy| policy.applies_to(path))
            .max_by_key(|policy| policy.pattern().specificity())
    }
}

#[cfg(test)]
#[path = "policy_set_test.rs"]
mod policy_set_test;
