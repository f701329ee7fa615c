use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::json;
use spotctl::{
    Error,
    spotify::{Session, classify, devices},
};

#[test]
fn test_classify_status_codes() {
    assert!(classify(StatusCode::OK).is_ok());
    assert!(classify(StatusCode::NO_CONTENT).is_ok());
    assert!(classify(StatusCode::ACCEPTED).is_ok());

    assert!(matches!(
        classify(StatusCode::UNAUTHORIZED),
        Err(Error::Unauthorized)
    ));
    assert!(matches!(
        classify(StatusCode::NOT_FOUND),
        Err(Error::NotFound)
    ));
    assert!(matches!(
        classify(StatusCode::FORBIDDEN),
        Err(Error::Status(403))
    ));
    assert!(matches!(
        classify(StatusCode::BAD_GATEWAY),
        Err(Error::Status(502))
    ));
}

#[tokio::test]
async fn test_list_devices_sends_bearer_token() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/me/player/devices")
            .header("authorization", "Bearer tkn-123");
        then.status(200).json_body(json!({
            "devices": [
                { "id": "d1", "name": "Laptop", "is_active": true, "type": "Computer" },
                { "id": "d2", "name": "Kitchen", "is_active": false, "type": "Speaker" }
            ]
        }));
    });

    let session = Session::new(server.base_url(), "tkn-123");
    let found = devices::list_devices(&session).await.expect("devices");

    list.assert_calls(1);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].name, "Laptop");
    assert!(found[0].is_active);
    assert!(!found[1].is_active);
}

#[tokio::test]
async fn test_list_devices_empty_is_no_devices() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/me/player/devices");
        then.status(200).json_body(json!({ "devices": [] }));
    });

    let session = Session::new(server.base_url(), "tkn");
    let err = devices::list_devices(&session).await.expect_err("empty");
    assert!(matches!(err, Error::NoDevices));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_list_devices_unauthorized() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/me/player/devices");
        then.status(401)
            .json_body(json!({ "error": { "status": 401, "message": "The access token expired" } }));
    });

    let session = Session::new(server.base_url(), "expired");
    let err = devices::list_devices(&session).await.expect_err("401");
    assert!(matches!(err, Error::Unauthorized));
}

#[tokio::test]
async fn test_list_devices_unexpected_body_is_fatal() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/me/player/devices");
        then.status(200).body("<html>not json</html>");
    });

    let session = Session::new(server.base_url(), "tkn");
    let err = devices::list_devices(&session).await.expect_err("decode");
    assert!(matches!(err, Error::Decode(_)));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_switch_device_sends_device_ids() {
    let server = MockServer::start_async().await;
    let switch = server.mock(|when, then| {
        when.method(PUT)
            .path("/me/player")
            .header("authorization", "Bearer tkn")
            .json_body(json!({ "device_ids": ["d2"], "play": true }));
        then.status(204);
    });

    let session = Session::new(server.base_url(), "tkn");
    devices::switch_device(&session, "d2").await.expect("switch");
    switch.assert_calls(1);
}

#[tokio::test]
async fn test_switch_device_reports_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/me/player");
        then.status(500);
    });

    let session = Session::new(server.base_url(), "tkn");
    let err = devices::switch_device(&session, "d2")
        .await
        .expect_err("500");
    assert!(matches!(err, Error::Status(500)));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // nothing listens on port 1
    let session = Session::new("http://127.0.0.1:1", "tkn");
    let err = devices::list_devices(&session).await.expect_err("refused");
    assert!(matches!(err, Error::Transport(_)));
    assert!(!err.is_fatal());
}
