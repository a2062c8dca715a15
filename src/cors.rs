use crate::context::{RequestContext, RequestKind};
use crate::options::ValidationError;
use crate::policy::CorsPolicy;
use crate::policy_set::PolicySet;
use crate::result::CorsDecision;

/// Core CORS engine: selects the policy scoped to the request path and
/// evaluates the request against it.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads behind an `Arc` for the life of the process.
#[derive(Debug, Clone)]
pub struct Cors {
    policies: PolicySet,
}

impl Cors {
    pub fn new(policies: PolicySet) -> Self {
        Self { policies }
    }

    pub fn from_policies(policies: Vec<CorsPolicy>) -> Result<Self, ValidationError> {
        PolicySet::new(policies).map(Self::new)
    }

    pub fn policies(&self) -> &PolicySet {
        &self.policies
    }

    pub fn classify(request: &RequestContext<'_>) -> RequestKind {
        request.kind()
    }

    /// Requests outside every policy's path scope are not applicable.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        match self.policies.select(request.path) {
            Some(policy) => policy.evaluate(request),
            None => CorsDecision::not_applicable(request.kind()),
        }
    }
}

impl From<CorsPolicy> for Cors {
    fn from(policy: CorsPolicy) -> Self {
        Self::new(PolicySet::single(policy))
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
