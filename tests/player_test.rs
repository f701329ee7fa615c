use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Extension, Json, Router,
    extract::Query,
    http::StatusCode,
    routing::{get, put},
};
use httpmock::prelude::*;
use serde_json::{Value, json};
use spotctl::{
    Error,
    spotify::{Session, player},
};

fn devices_body() -> Value {
    json!({
        "devices": [
            { "id": "first&shuffle=true", "name": "Laptop", "is_active": false },
            { "id": "second", "name": "Kitchen", "is_active": true }
        ]
    })
}

#[tokio::test]
async fn test_play_on_current_device() {
    let server = MockServer::start_async().await;
    let play = server.mock(|when, then| {
        when.method(PUT)
            .path("/me/player/play")
            .header("authorization", "Bearer tkn")
            .json_body(json!({ "context_uri": "spotify:playlist:37i9dQ" }));
        then.status(204);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/me/player/devices");
        then.status(200).json_body(devices_body());
    });

    let session = Session::new(server.base_url(), "tkn");
    player::play(&session, "playlist", "37i9dQ")
        .await
        .expect("play");

    play.assert_calls(1);
    list.assert_calls(0);
}

#[tokio::test]
async fn test_play_other_failure_does_not_fall_back() {
    for status in [400, 403, 429, 500, 502] {
        let server = MockServer::start_async().await;
        let play = server.mock(|when, then| {
            when.method(PUT).path("/me/player/play");
            then.status(status);
        });
        let list = server.mock(|when, then| {
            when.method(GET).path("/me/player/devices");
            then.status(200).json_body(devices_body());
        });

        let session = Session::new(server.base_url(), "tkn");
        let err = player::play(&session, "playlist", "p1")
            .await
            .expect_err("failure");

        assert_eq!(err.status(), Some(status));
        play.assert_calls(1);
        list.assert_calls(0);
    }
}

#[tokio::test]
async fn test_play_unauthorized_does_not_fall_back() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/me/player/play");
        then.status(401);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/me/player/devices");
        then.status(200).json_body(devices_body());
    });

    let session = Session::new(server.base_url(), "tkn");
    let err = player::play(&session, "playlist", "p1")
        .await
        .expect_err("401");

    assert!(matches!(err, Error::Unauthorized));
    list.assert_calls(0);
}

#[tokio::test]
async fn test_play_not_found_falls_back_exactly_once() {
    let server = MockServer::start_async().await;
    // both the implicit and the explicit attempt keep answering 404
    let play = server.mock(|when, then| {
        when.method(PUT).path("/me/player/play");
        then.status(404);
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/me/player/devices");
        then.status(200).json_body(devices_body());
    });

    let session = Session::new(server.base_url(), "tkn");
    let err = player::play(&session, "playlist", "p1")
        .await
        .expect_err("still 404");

    assert!(matches!(err, Error::NotFound));
    list.assert_calls(1);
    play.assert_calls(2);
}

#[tokio::test]
async fn test_play_not_found_without_devices() {
    let server = MockServer::start_async().await;
    let play = server.mock(|when, then| {
        when.method(PUT).path("/me/player/play");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/me/player/devices");
        then.status(200).json_body(json!({ "devices": [] }));
    });

    let session = Session::new(server.base_url(), "tkn");
    let err = player::play(&session, "playlist", "p1")
        .await
        .expect_err("no devices");

    assert!(matches!(err, Error::DeviceAccess));
    play.assert_calls(1);
}

#[derive(Clone, Default)]
struct PlayLog {
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

async fn stub_play(
    Query(params): Query<HashMap<String, String>>,
    Extension(log): Extension<PlayLog>,
    Json(body): Json<Value>,
) -> StatusCode {
    assert_eq!(body["context_uri"], "spotify:album:a1");
    assert!(!params.contains_key("shuffle"));
    let device = params.get("device_id").cloned();
    let status = if device.is_some() {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    };
    log.calls.lock().unwrap().push(device);
    status
}

async fn stub_devices() -> Json<Value> {
    Json(devices_body())
}

async fn start_stub(log: PlayLog) -> SocketAddr {
    let app = Router::new()
        .route("/me/player/play", put(stub_play))
        .route("/me/player/devices", get(stub_devices))
        .layer(Extension(log));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

#[tokio::test]
async fn test_play_fallback_targets_first_listed_device() {
    let log = PlayLog::default();
    let addr = start_stub(log.clone()).await;

    let session = Session::new(format!("http://{}", addr), "tkn");
    player::play(&session, "album", "a1").await.expect("play");

    let calls = log.calls.lock().unwrap().clone();
    // the first device wins even though the second one is the active one,
    // and its id arrives intact as a single query value
    assert_eq!(calls, vec![None, Some("first&shuffle=true".to_string())]);
}
