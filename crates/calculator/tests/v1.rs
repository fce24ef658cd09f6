//! End-to-end tests for the fixed-route v1 API.

use calculator::create_app;
use calculator_config::CalculatorConfig;
use calculator_test::TestClient;
use http::StatusCode;
use serde_json::{json, Value};

const VALIDATION: &str = "calculator.error.validation";

fn client() -> TestClient {
    TestClient::new(create_app(&CalculatorConfig::default()))
}

async fn calculate(client: &TestClient, name: &str, left: i64, right: i64) -> Value {
    let response = client
        .post(format!("/api/v1/calculator/{name}"))
        .json(&json!({ "left": left, "right": right }))
        .send()
        .await;
    response.assert_status(StatusCode::OK);
    response.json_value().unwrap()
}

#[tokio::test]
async fn test_addition_response_shape() {
    let body = calculate(&client(), "addition", -1, 2).await;

    assert_eq!(
        body,
        json!({
            "operands": {"left": -1, "right": 2},
            "name": "addition",
            "symbol": "+",
            "result": 1,
            "expression": "(-1) + 2 = 1"
        })
    );
}

#[tokio::test]
async fn test_subtraction() {
    let client = client();
    for (left, right, result, expression) in [
        (1, 2, -1, "1 - 2 = -1"),
        (-1, 2, -3, "(-1) - 2 = -3"),
        (1, -2, 3, "1 - (-2) = 3"),
        (-1, -2, 1, "(-1) - (-2) = 1"),
    ] {
        let body = calculate(&client, "subtraction", left, right).await;
        assert_eq!(body["result"], result);
        assert_eq!(body["expression"], expression);
    }
}

#[tokio::test]
async fn test_multiplication() {
    let client = client();
    for (left, right, result, expression) in [
        (3, 4, 12, "3 * 4 = 12"),
        (-3, 4, -12, "(-3) * 4 = -12"),
        (3, -4, -12, "3 * (-4) = -12"),
        (-3, -4, 12, "(-3) * (-4) = 12"),
    ] {
        let body = calculate(&client, "multiplication", left, right).await;
        assert_eq!(body["symbol"], "*");
        assert_eq!(body["result"], result);
        assert_eq!(body["expression"], expression);
    }
}

#[tokio::test]
async fn test_division_floors() {
    let client = client();
    for (left, right, result, expression) in [
        (12, 4, 3, "12 // 4 = 3"),
        (-18, 6, -3, "(-18) // 6 = -3"),
        (17, -2, -9, "17 // (-2) = -9"),
        (5, -8, -1, "5 // (-8) = -1"),
    ] {
        let body = calculate(&client, "division", left, right).await;
        assert_eq!(body["result"], result);
        assert_eq!(body["expression"], expression);
    }
}

#[tokio::test]
async fn test_string_operands_are_coerced() {
    let response = client()
        .post("/api/v1/calculator/addition")
        .json(&json!({ "left": "3", "right": "-4" }))
        .send()
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json_value().unwrap();
    assert_eq!(body["operands"], json!({"left": 3, "right": -4}));
    assert_eq!(body["expression"], "3 + (-4) = -1");
}

#[tokio::test]
async fn test_invalid_bodies_are_rejected() {
    let client = client();
    for body in [
        json!({}),
        json!({"left": 0}),
        json!({"right": 0}),
        json!({"left": 0, "right": "a"}),
        json!({"left": "a", "right": 0}),
        json!({"left": 1.5, "right": 0}),
        json!({"left": true, "right": 0}),
        json!([1, 2]),
    ] {
        let response = client
            .post("/api/v1/calculator/addition")
            .json(&body)
            .send()
            .await;
        response.assert_error(StatusCode::BAD_REQUEST, VALIDATION);
    }
}

#[tokio::test]
async fn test_missing_body_is_rejected() {
    let response = client().post("/api/v1/calculator/multiplication").send().await;

    response.assert_error(StatusCode::BAD_REQUEST, VALIDATION);
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let response = client()
        .post("/api/v1/calculator/addition")
        .header("content-type", "text/plain")
        .body(r#"{"left": 1, "right": 2}"#)
        .send()
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, VALIDATION);
}

#[tokio::test]
async fn test_division_by_zero() {
    let response = client()
        .post("/api/v1/calculator/division")
        .json(&json!({ "left": 1, "right": 0 }))
        .send()
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "calculator.error.arithmetic");
    let body = response.json_value().unwrap();
    assert_eq!(body["message"], "division by zero");
}

#[tokio::test]
async fn test_overflow() {
    let response = client()
        .post("/api/v1/calculator/multiplication")
        .json(&json!({ "left": i64::MAX, "right": 2 }))
        .send()
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "calculator.error.arithmetic");
}

#[tokio::test]
async fn test_wrong_method() {
    let response = client().get("/api/v1/calculator/addition").send().await;

    response.assert_error(StatusCode::METHOD_NOT_ALLOWED, "calculator.error.method_not_allowed");
    assert_eq!(response.header_str("allow"), Some("POST"));
}

#[tokio::test]
async fn test_unknown_v1_route() {
    let response = client()
        .post("/api/v1/calculator/modulo")
        .json(&json!({ "left": 1, "right": 2 }))
        .send()
        .await;

    response.assert_error(StatusCode::NOT_FOUND, "calculator.error.not_found");
}

#[tokio::test]
async fn test_integral_float_operand_is_rejected() {
    let client = client();
    for body in [
        json!({"left": 5.0, "right": 1}),
        json!({"left": 1, "right": -2.0}),
        json!({"left": 1, "right": "5.0"}),
    ] {
        let response = client
            .post("/api/v1/calculator/multiplication")
            .json(&body)
            .send()
            .await;
        response.assert_error(StatusCode::BAD_REQUEST, VALIDATION);
    }
}
