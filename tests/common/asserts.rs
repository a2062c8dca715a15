#![allow(dead_code)]

use cors_policy_rs::{CorsDecision, Headers, RequestKind, Verdict};

pub fn assert_allowed_simple(decision: CorsDecision) -> Headers {
    assert_eq!(decision.kind, RequestKind::Simple, "{decision:?}");
    assert_eq!(decision.verdict, Verdict::Allowed, "{decision:?}");
    assert!(!decision.end_response);
    decision.headers
}

pub fn assert_allowed_preflight(decision: CorsDecision) -> (Headers, u16) {
    assert_eq!(decision.kind, RequestKind::Preflight, "{decision:?}");
    assert_eq!(decision.verdict, Verdict::Allowed, "{decision:?}");
    assert!(decision.end_response);
    let status = decision.status.expect("preflight carries a status");
    (decision.headers, status)
}

pub fn assert_denied_preflight(decision: &CorsDecision) {
    assert_eq!(decision.kind, RequestKind::Preflight, "{decision:?}");
    assert_eq!(decision.verdict, Verdict::Denied, "{decision:?}");
    assert!(decision.headers.is_empty());
    assert!(decision.end_response);
}

pub fn assert_denied_simple(decision: &CorsDecision) {
    assert_eq!(decision.kind, RequestKind::Simple, "{decision:?}");
    assert_eq!(decision.verdict, Verdict::Denied, "{decision:?}");
    assert!(decision.headers.is_empty());
    assert!(!decision.end_response);
}

pub fn assert_not_applicable(decision: &CorsDecision) {
    assert_eq!(decision.verdict, Verdict::NotApplicable, "{decision:?}");
    assert!(decision.headers.is_empty());
    assert!(!decision.end_response);
}
