//! Whole-service tests: health probe, registry discovery, and a real socket.

use std::time::Duration;

use calculator::create_app;
use calculator::domain::{discover_operators, operators, Operands};
use calculator_config::CalculatorConfig;
use calculator_server::ShutdownSignal;
use calculator_test::TestClient;
use http::StatusCode;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[tokio::test]
async fn test_status() {
    let client = TestClient::new(create_app(&CalculatorConfig::default()));

    let response = client.get("/status").send().await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json_value().unwrap(), json!({"success": true}));
}

#[test]
fn test_registry_discovers_builtin_operators() {
    operators().collect().unwrap();

    let names = operators().names();
    for expected in ["addition", "subtraction", "multiplication", "division"] {
        assert!(names.iter().any(|n| n == expected), "{expected} not in {names:?}");
    }
    assert_eq!(names.len(), discover_operators().len());
}

#[test]
fn test_registry_operator_runs() {
    let operation = operators()
        .get("addition")
        .unwrap()
        .run(Operands::parse("-1", "2").unwrap())
        .unwrap();

    assert_eq!(operation.expression(), "(-1) + 2 = 1");
}

#[tokio::test]
async fn test_serves_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = ShutdownSignal::new();

    let server = create_app(&CalculatorConfig::default());
    let handle = tokio::spawn(server.serve(listener, shutdown.clone()));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let body = r#"{"left": "12", "right": 4}"#;
    let raw = format!(
        "POST /api/v2/calculator/division HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.contains(r#""expression":"12 // 4 = 3""#), "{response}");

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("server should stop")
        .expect("server task should not panic")
        .expect("server should exit cleanly");
}
