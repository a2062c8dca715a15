mod common;

use common::asserts::{assert_allowed_preflight, assert_denied_preflight};
use common::builders::{policy, preflight_request};
use common::headers::{has_header, header_names, header_value};
use cors_policy_rs::constants::{header, method};
use cors_policy_rs::{RequestKind, Verdict};

#[test]
fn should_allow_preflight_when_origin_method_and_headers_match_then_emit_allow_headers() {
    // Arrange
    let cors = policy()
        .origins(["http://localhost:3001"])
        .methods(["GET", "POST", "OPTIONS"])
        .allowed_headers(["Content-Type"])
        .build();

    // Act
    let (headers, status) = assert_allowed_preflight(
        preflight_request()
            .origin("http://localhost:3001")
            .request_method(method::POST)
            .request_headers("Content-Type")
            .evaluate(&cors),
    );

    // Assert
    assert_eq!(status, 200);
    assert_eq!(
        header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some("http://localhost:3001")
    );
    let methods = header_value(&headers, header::ACCESS_CONTROL_ALLOW_METHODS).unwrap();
    assert!(methods.split(',').any(|m| m == method::POST));
    assert_eq!(
        header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
        Some("Content-Type")
    );
}

#[test]
fn should_emit_preflight_headers_in_stable_order_when_every_option_is_set() {
    // Arrange
    let cors = policy()
        .origins(["https://app.test"])
        .methods(["GET", "PUT"])
        .allowed_headers(["X-Trace"])
        .credentials(true)
        .max_age(600)
        .build();

    // Act
    let (headers, _) = assert_allowed_preflight(
        preflight_request()
            .origin("https://app.test")
            .request_method(method::PUT)
            .request_headers("x-trace")
            .evaluate(&cors),
    );

    // Assert
    assert_eq!(
        header_names(&headers),
        vec![
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::VARY,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            header::ACCESS_CONTROL_ALLOW_METHODS,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_MAX_AGE,
        ]
    );
    assert_eq!(header_value(&headers, header::ACCESS_CONTROL_MAX_AGE), Some("600"));
    assert_eq!(
        header_value(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some("true")
    );
}

#[test]
fn should_deny_preflight_when_requested_method_is_not_listed() {
    // Arrange
    let cors = policy().methods(["GET", "POST"]).build();

    // Act
    let decision = preflight_request()
        .origin("https://app.test")
        .request_method(method::DELETE)
        .evaluate(&cors);

    // Assert
    assert_denied_preflight(&decision);
    assert_eq!(decision.status, Some(200));
}

#[test]
fn should_deny_preflight_when_requested_method_differs_in_case() {
    // Arrange
    let cors = policy().methods(["GET", "POST"]).build();

    // Act
    let decision = preflight_request()
        .origin("https://app.test")
        .request_method("post")
        .evaluate(&cors);

    // Assert
    assert_denied_preflight(&decision);
}

#[test]
fn should_deny_preflight_when_any_requested_header_is_unlisted() {
    // Arrange
    let cors = policy().allowed_headers(["Content-Type"]).build();

    // Act
    let decision = preflight_request()
        .origin("https://app.test")
        .request_headers("Content-Type, X-Secret")
        .evaluate(&cors);

    // Assert
    assert_denied_preflight(&decision);
}

#[test]
fn should_allow_preflight_when_requested_headers_are_blank() {
    // Arrange
    let cors = policy().allowed_headers(["Content-Type"]).build();

    // Act
    let decision = preflight_request()
        .origin("https://app.test")
        .request_headers("  ")
        .evaluate(&cors);

    // Assert
    assert_eq!(decision.verdict, Verdict::Allowed);
}

#[test]
fn should_deny_preflight_when_origin_is_not_listed() {
    // Arrange
    let cors = policy().origins(["http://localhost:3001"]).build();

    // Act
    let decision = preflight_request()
        .origin("http://malicious-site.com")
        .evaluate(&cors);

    // Assert
    assert_denied_preflight(&decision);
}

#[test]
fn should_use_configured_success_status_for_allowed_and_denied_preflights() {
    // Arrange
    let cors = policy().options_success_status(204).build();

    // Act
    let allowed = preflight_request().origin("https://app.test").evaluate(&cors);
    let denied = preflight_request().origin("https://other.test").evaluate(&cors);

    // Assert
    assert_eq!(allowed.status, Some(204));
    assert_eq!(denied.status, Some(204));
}

#[test]
fn should_omit_max_age_when_unset_and_emit_zero_when_zero() {
    // Arrange
    let unset = policy().build();
    let zero = policy().max_age(0).build();
    let request = preflight_request().origin("https://app.test");

    // Act
    let (unset_headers, _) = assert_allowed_preflight(request.evaluate(&unset));
    let (zero_headers, _) = assert_allowed_preflight(request.evaluate(&zero));

    // Assert
    assert!(!has_header(&unset_headers, header::ACCESS_CONTROL_MAX_AGE));
    assert_eq!(
        header_value(&zero_headers, header::ACCESS_CONTROL_MAX_AGE),
        Some("0")
    );
}

#[test]
fn should_emit_wildcard_without_vary_when_any_origin_is_allowed() {
    // Arrange
    let cors = policy().any_origin().build();

    // Act
    let (headers, _) = assert_allowed_preflight(
        preflight_request().origin("https://anyone.test").evaluate(&cors),
    );

    // Assert
    assert_eq!(
        header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some("*")
    );
    assert!(!has_header(&headers, header::VARY));
}

#[test]
fn should_answer_malformed_preflight_without_origin_and_without_headers() {
    // Arrange
    let cors = policy().build();

    // Act
    let decision = preflight_request().evaluate(&cors);

    // Assert
    assert_eq!(decision.kind, RequestKind::SameOrigin);
    assert_eq!(decision.verdict, Verdict::Denied);
    assert!(decision.end_response);
    assert!(decision.headers.is_empty());
}

#[test]
fn should_treat_options_without_request_method_as_simple_request() {
    // Arrange
    let cors = policy().build();
    let request = preflight_request().origin("https://app.test");
    let mut context = request.context();
    context.access_control_request_method = None;

    // Act
    let decision = cors.evaluate(&context);

    // Assert
    assert_eq!(decision.kind, RequestKind::Simple);
    assert_eq!(decision.verdict, Verdict::Allowed);
    assert!(!decision.end_response);
}
