//! End-to-end tests for the registry-dispatched v2 API.

use calculator::create_app;
use calculator_config::CalculatorConfig;
use calculator_test::TestClient;
use http::StatusCode;
use serde_json::json;

fn client() -> TestClient {
    TestClient::new(create_app(&CalculatorConfig::default()))
}

#[tokio::test]
async fn test_division() {
    let response = client()
        .post("/api/v2/calculator/division")
        .json(&json!({ "left": -18, "right": 6 }))
        .send()
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json_value().unwrap();
    assert_eq!(body["result"], -3);
    assert_eq!(body["symbol"], "//");
    assert_eq!(body["expression"], "(-18) // 6 = -3");
}

#[tokio::test]
async fn test_every_operator_is_reachable() {
    let client = client();
    for (name, result) in [
        ("addition", 14),
        ("subtraction", 10),
        ("multiplication", 24),
        ("division", 6),
    ] {
        let response = client
            .post(format!("/api/v2/calculator/{name}"))
            .json(&json!({ "left": 12, "right": 2 }))
            .send()
            .await;

        response.assert_status(StatusCode::OK);
        let body = response.json_value().unwrap();
        assert_eq!(body["name"], name);
        assert_eq!(body["result"], result);
    }
}

#[tokio::test]
async fn test_matches_v1() {
    let client = client();
    let payload = json!({ "left": "-7", "right": 2 });

    let v1 = client
        .post("/api/v1/calculator/division")
        .json(&payload)
        .send()
        .await;
    let v2 = client
        .post("/api/v2/calculator/division")
        .json(&payload)
        .send()
        .await;

    assert_eq!(v1.json_value().unwrap(), v2.json_value().unwrap());
}

#[tokio::test]
async fn test_unknown_operation() {
    let response = client()
        .post("/api/v2/calculator/unknown_op")
        .json(&json!({ "left": 1, "right": 2 }))
        .send()
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "calculator.error.validation");
    let message = response.json_value().unwrap()["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("unknown_op"), "{message}");
    for known in ["addition", "subtraction", "multiplication", "division"] {
        assert!(message.contains(known), "{known} missing from {message}");
    }
}

#[tokio::test]
async fn test_invalid_body() {
    let response = client()
        .post("/api/v2/calculator/addition")
        .json(&json!({ "left": "a" }))
        .send()
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "calculator.error.validation");
}

#[tokio::test]
async fn test_division_by_zero() {
    let response = client()
        .post("/api/v2/calculator/division")
        .json(&json!({ "left": 4, "right": 0 }))
        .send()
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "calculator.error.arithmetic");
}

#[tokio::test]
async fn test_oversized_body() {
    let mut config = CalculatorConfig::default();
    config.server.max_body_bytes = 128;
    let client = TestClient::new(create_app(&config));

    let response = client
        .post("/api/v2/calculator/addition")
        .json(&json!({ "left": 1, "right": 2, "pad": "x".repeat(256) }))
        .send()
        .await;

    response.assert_error(StatusCode::PAYLOAD_TOO_LARGE, "calculator.error.payload_too_large");
}

#[tokio::test]
async fn test_percent_encoded_operation_name() {
    let response = client()
        .post("/api/v2/calculator/addi%74ion")
        .json(&json!({ "left": 2, "right": 3 }))
        .send()
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json_value().unwrap()["name"], "addition");
}
