use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;

use crate::{Error, Res, utils};

/// Authenticated view of the Web API for one command invocation.
///
/// Holds the bearer token read from the token store together with the API base
/// URL, and is passed explicitly to everything that talks to the remote.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    api_url: String,
    token: String,
}

impl Session {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Sends an authenticated request and returns the raw response.
    ///
    /// `body`, when present, is serialized as the JSON payload. Transport
    /// failures are returned as [`Error::Transport`] and never retried; the
    /// status code is left for the caller to [`classify`].
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Res<Response> {
        self.request_with_query(method, path, &[], body).await
    }

    /// [`Session::request`] with query parameters, percent-encoded by reqwest.
    pub async fn request_with_query<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Res<Response> {
        let url = utils::join_url(&self.api_url, path);
        let mut req = self.client.request(method, &url).bearer_auth(&self.token);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        Ok(req.send().await?)
    }

    /// [`Session::request`] without a body.
    pub async fn send(&self, method: Method, path: &str) -> Res<Response> {
        self.request::<()>(method, path, None).await
    }
}

/// Maps a response status onto the shared convention.
///
/// - `< 300`: success
/// - `401`: the token is invalid or expired, the user has to log in again
/// - `404`: the target is gone (for playback: the current device)
/// - anything else: generic failure carrying the status code
pub fn classify(status: StatusCode) -> Res<StatusCode> {
    match status.as_u16() {
        code if code < 300 => Ok(status),
        401 => Err(Error::Unauthorized),
        404 => Err(Error::NotFound),
        code => Err(Error::Status(code)),
    }
}
