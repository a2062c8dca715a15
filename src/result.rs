use crate::context::RequestKind;
use crate::headers::Headers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Same-origin, or outside every policy's path scope.
    NotApplicable,
    Allowed,
    /// Signalled to the browser purely by the absence of CORS headers.
    Denied,
}

/// Overall decision returned by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    pub kind: RequestKind,
    pub verdict: Verdict,
    pub headers: Headers,
    /// The host answers the request directly instead of dispatching it.
    pub end_response: bool,
    /// Status for a directly answered request.
    pub status: Option<u16>,
}

impl CorsDecision {
    pub(crate) fn not_applicable(kind: RequestKind) -> Self {
        Self {
            kind,
            verdict: Verdict::NotApplicable,
            headers: Headers::new(),
            end_response: false,
            status: None,
        }
    }

    pub(crate) fn denied(kind: RequestKind, preflight_status: Option<u16>) -> Self {
        Self {
            kind,
            verdict: Verdict::Denied,
            headers: Headers::new(),
            end_response: preflight_status.is_some(),
            status: preflight_status,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.verdict == Verdict::Allowed
    }

    pub fn is_denied(&self) -> bool {
        self.verdict == Verdict::Denied
    }
}
