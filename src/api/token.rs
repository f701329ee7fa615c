use std::collections::HashMap;

use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde_json::{Value, json};

use crate::{server::CallbackState, types::TokenReceipt, warning};

/// Receives the token forwarded by the redirect bridge page.
///
/// An empty `access_token` is stored and reported as a bad token; a request
/// without the parameter at all means the provider answered with something
/// this tool does not understand. Once a receipt has been recorded, later
/// requests are acknowledged without touching the token file.
pub async fn store_token(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<CallbackState>,
) -> (StatusCode, Json<Value>) {
    let _intake = state.intake.lock().await;
    if state.signal.receipt().is_some() {
        return acknowledged();
    }

    let Some(token) = params.get("access_token") else {
        warning!("Authorization redirect carried no access_token parameter.");
        state.signal.record(TokenReceipt::Malformed);
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "missing access_token parameter" })),
        );
    };

    if let Err(e) = state.store.write(token).await {
        warning!("Failed to store token: {}", e);
        state.signal.record(TokenReceipt::WriteFailed);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "cannot store token" })),
        );
    }

    let receipt = if token.is_empty() {
        TokenReceipt::EmptyToken
    } else {
        TokenReceipt::Token
    };
    state.signal.record(receipt);

    acknowledged()
}

fn acknowledged() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "message": "thanks! you can close this window now." })),
    )
}

pub async fn stop(Extension(state): Extension<CallbackState>) -> &'static str {
    state.shutdown.notify_one();
    "stopping"
}
