use std::{
    net::SocketAddr,
    sync::{Arc, OnceLock},
};

use axum::{Extension, Router, routing::get};
use tokio::{
    sync::{Mutex, Notify},
    task::JoinHandle,
};

use crate::{Error, Res, api, management::TokenStore, types::TokenReceipt};

/// One-shot completion signal between the token intake route and the login flow.
///
/// Only the first receipt is kept; later intake requests cannot change the
/// outcome of a login attempt that already completed.
#[derive(Debug, Default)]
pub struct AuthSignal {
    receipt: OnceLock<TokenReceipt>,
}

impl AuthSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `receipt`; returns `false` if a receipt was already recorded.
    pub fn record(&self, receipt: TokenReceipt) -> bool {
        self.receipt.set(receipt).is_ok()
    }

    pub fn receipt(&self) -> Option<TokenReceipt> {
        self.receipt.get().copied()
    }
}

/// State shared by the callback routes.
#[derive(Debug, Clone)]
pub struct CallbackState {
    pub store: TokenStore,
    pub signal: Arc<AuthSignal>,
    pub shutdown: Arc<Notify>,
    /// Serializes token intake so only the first receipt reaches the store.
    pub intake: Arc<Mutex<()>>,
}

pub fn router(state: CallbackState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/token/store", get(api::store_token))
        .route("/ok", get(api::bridge))
        .route("/ok/", get(api::bridge))
        .route("/stop", get(api::stop))
        .layer(Extension(state))
}

/// Running callback server.
pub struct ServerHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<Res<()>>,
}

impl ServerHandle {
    /// `true` once the server stopped, e.g. because the address was taken.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the server gracefully and reports how it ended.
    pub async fn shutdown(self) -> Res<()> {
        self.shutdown.notify_one();
        self.task
            .await
            .map_err(|e| Error::Environment(format!("callback server task failed: {}", e)))?
    }
}

/// Starts the callback server on `addr` in a background task.
///
/// Returns immediately; use the `/health` route to find out when the listener
/// is bound.
pub fn start_api_server(
    addr: SocketAddr,
    store: TokenStore,
    signal: Arc<AuthSignal>,
) -> ServerHandle {
    let shutdown = Arc::new(Notify::new());
    let state = CallbackState {
        store,
        signal,
        shutdown: Arc::clone(&shutdown),
        intake: Arc::new(Mutex::new(())),
    };

    let task = tokio::spawn(serve(addr, router(state), Arc::clone(&shutdown)));
    ServerHandle { shutdown, task }
}

async fn serve(addr: SocketAddr, app: Router, shutdown: Arc<Notify>) -> Res<()> {
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Environment(format!("cannot bind callback server to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.notified().await })
        .await?;
    Ok(())
}
