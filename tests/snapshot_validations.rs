mod common;

use common::builders::{RequestBuilder, policy, preflight_request, simple_request};
use cors_policy_rs::Cors;
use cors_policy_rs::constants::method;
use insta::assert_yaml_snapshot;
use serde::Serialize;

#[derive(Serialize)]
struct HeaderSnapshot {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct DecisionSnapshot {
    kind: String,
    verdict: String,
    end_response: bool,
    headers: Vec<HeaderSnapshot>,
}

fn capture(cors: &Cors, request: RequestBuilder) -> DecisionSnapshot {
    let decision = request.evaluate(cors);
    DecisionSnapshot {
        kind: format!("{:?}", decision.kind),
        verdict: format!("{:?}", decision.verdict),
        end_response: decision.end_response,
        headers: decision
            .headers
            .into_iter()
            .map(|(name, value)| HeaderSnapshot { name, value })
            .collect(),
    }
}

fn banking_cors() -> Cors {
    policy()
        .origins([
            "http://localhost:8080",
            "http://localhost:3000",
            "http://localhost:3001",
            "http://localhost:3002",
        ])
        .methods(["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(["Authorization", "Content-Type", "X-Requested-With"])
        .credentials(true)
        .max_age(3600)
        .path("/api/**")
        .build()
}

#[test]
fn banking_preflight_snapshot() {
    let snapshot = capture(
        &banking_cors(),
        preflight_request()
            .origin("http://localhost:3001")
            .request_method(method::POST)
            .request_headers("content-type")
            .path("/api/banking/transfer"),
    );

    assert_yaml_snapshot!(snapshot, @r###"
    ---
    kind: Preflight
    verdict: Allowed
    end_response: true
    headers:
      - name: Access-Control-Allow-Origin
        value: "http://localhost:3001"
      - name: Vary
        value: Origin
      - name: Access-Control-Allow-Credentials
        value: "true"
      - name: Access-Control-Allow-Methods
        value: "GET,POST,PUT,DELETE,OPTIONS"
      - name: Access-Control-Allow-Headers
        value: "Authorization,Content-Type,X-Requested-With"
      - name: Access-Control-Max-Age
        value: "3600"
    "###);
}

#[test]
fn banking_simple_snapshot() {
    let snapshot = capture(
        &banking_cors(),
        simple_request()
            .origin("http://localhost:3002")
            .path("/api/banking/balance"),
    );

    assert_yaml_snapshot!(snapshot, @r###"
    ---
    kind: Simple
    verdict: Allowed
    end_response: false
    headers:
      - name: Access-Control-Allow-Origin
        value: "http://localhost:3002"
      - name: Vary
        value: Origin
      - name: Access-Control-Allow-Credentials
        value: "true"
    "###);
}
