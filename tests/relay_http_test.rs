mod common;

use loan_reminder::application::dispatcher::BatchDispatcher;
use loan_reminder::config::Config;
use loan_reminder::domain::ports::MessageRelay;
use loan_reminder::error::ReminderError;
use loan_reminder::infrastructure::wasender::WaSenderRelay;
use std::time::Duration;

fn config(url: String) -> Config {
    Config {
        relay_url: url,
        relay_api_key: "test-key".into(),
        payment_link_base: "https://pay.example/".into(),
        pacing: Duration::ZERO,
        request_timeout: Duration::from_secs(5),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_wasender_wire_format() {
    let (url, server) = common::spawn_relay(vec![200]).await;
    let relay = WaSenderRelay::new(&config(url)).unwrap();

    let response = relay.send("+919876543210", "hello").await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"success":true}"#);

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.head.starts_with("post /api/send-message http/1.1"));
    assert!(request.head.contains("authorization: bearer test-key"));
    assert!(request.head.contains("content-type: application/json"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"to": "+919876543210", "text": "hello"})
    );
}

#[tokio::test]
async fn test_wasender_reports_non_200_as_response() {
    let (url, server) = common::spawn_relay(vec![500]).await;
    let relay = WaSenderRelay::new(&config(url)).unwrap();

    let response = relay.send("+919876543210", "hello").await.unwrap();
    assert_eq!(response.status, 500);
    server.await.unwrap();
}

#[tokio::test]
async fn test_wasender_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let relay = WaSenderRelay::new(&config(format!("http://{addr}/send"))).unwrap();
    let result = relay.send("+919876543210", "hello").await;

    assert!(matches!(result, Err(ReminderError::TransportError(_))));
}

#[tokio::test]
async fn test_wasender_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        // accept and never answer
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(stream);
    });

    let mut config = config(format!("http://{addr}/send"));
    config.request_timeout = Duration::from_millis(200);
    let relay = WaSenderRelay::new(&config).unwrap();

    let result = relay.send("+919876543210", "hello").await;
    assert!(matches!(result, Err(ReminderError::TransportError(_))));
    server.abort();
}

#[tokio::test]
async fn test_batch_over_http_survives_relay_error() {
    let (url, server) = common::spawn_relay(vec![200, 500, 200]).await;
    let config = config(url);
    let relay = WaSenderRelay::new(&config).unwrap();
    let dispatcher = BatchDispatcher::new(&config, Box::new(relay));

    let ledger = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    common::write_ledger(
        ledger.path(),
        &[
            ["L1", "Ravi", "9876543210", "500", "200", "100"],
            ["L2", "Sita", "9876543211", "0", "0", "0"],
            ["L3", "Anu", "9876543212", "300", "0", "0"],
            ["L4", "", "9876543213", "100", "100", "0"],
        ],
    )
    .unwrap();

    let result = dispatcher.dispatch_file(ledger.path()).await.unwrap();

    assert_eq!(result.total_rows, 4);
    assert_eq!(result.attempted, 3);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.succeeded, 2);
    assert_eq!(result.failed, 1);
    assert!(!result.outcomes[1].is_success());
    assert_eq!(result.outcomes[1].loan_number, "L3");

    let requests = server.await.unwrap();
    let first: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(first["to"], "+919876543210");
    let text = first["text"].as_str().unwrap();
    assert!(text.contains("ప్రియమైన Ravi గారు"));
    assert!(text.contains("₹600.00"));
    assert!(text.ends_with("https://pay.example/L1"));

    let last: serde_json::Value = serde_json::from_str(&requests[2].body).unwrap();
    assert!(last["text"].as_str().unwrap().contains("ప్రియమైన Customer గారు"));
}
