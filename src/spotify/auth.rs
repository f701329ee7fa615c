use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    sync::Arc,
    time::{Duration, Instant},
};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode, Url};

use crate::{
    Error, Res, config, info,
    management::TokenStore,
    server::{AuthSignal, ServerHandle, start_api_server},
    types::{LoginOutcome, TokenReceipt},
    warning,
};

/// Opens the authorization page for the user.
pub trait Browser {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Uses the desktop's default browser.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

/// Everything the login flow needs to know about where to listen and whom to ask.
#[derive(Debug, Clone)]
pub struct LoginConfig {
    pub server_addr: SocketAddr,
    pub auth_url: String,
    pub client_id: String,
    pub scope: String,
    /// Granularity of both waits.
    pub poll_interval: Duration,
    /// How long the callback server may take to come up. Exceeding it is fatal.
    pub ready_timeout: Duration,
    /// How long the user has to authorize in the browser.
    pub auth_timeout: Duration,
    /// Liveness URL polled during startup; derived from `server_addr` when unset.
    pub health_url: Option<String>,
}

impl LoginConfig {
    /// Builds the configuration from the environment, see [`crate::config`].
    pub fn from_env() -> Res<Self> {
        let server_addr = SocketAddr::from_str(&config::server_addr()).map_err(|e| {
            Error::Environment(format!(
                "invalid SERVER_ADDRESS {}: {}",
                config::server_addr(),
                e
            ))
        })?;
        let ready_timeout = config::ready_timeout();

        Ok(Self {
            server_addr,
            auth_url: config::spotify_apiauth_url(),
            client_id: config::spotify_client_id(),
            scope: config::spotify_scope(),
            poll_interval: Duration::from_secs(1),
            ready_timeout,
            auth_timeout: ready_timeout * 2,
            health_url: None,
        })
    }

    /// Where the provider sends the browser after authorization: the bridge page.
    ///
    /// Uses the same host the callback server listens on, so the redirect never
    /// resolves to an address family the listener is not bound to.
    pub fn redirect_uri(&self) -> String {
        format!("http://{}/ok", self.loopback_addr())
    }

    /// The implicit-grant authorization URL opened in the browser.
    pub fn authorize_url(&self) -> Res<Url> {
        Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri().as_str()),
                ("response_type", "token"),
                ("scope", self.scope.as_str()),
            ],
        )
        .map_err(|e| Error::Environment(format!("invalid authorization url {}: {}", self.auth_url, e)))
    }

    fn health_url(&self) -> String {
        match &self.health_url {
            Some(url) => url.clone(),
            None => format!("http://{}/health", self.loopback_addr()),
        }
    }

    /// The listen address as a browser or client reaches it.
    fn loopback_addr(&self) -> SocketAddr {
        let mut addr = self.server_addr;
        if addr.ip().is_unspecified() {
            addr.set_ip(IpAddr::V4(Ipv4Addr::LOCALHOST));
        }
        addr
    }
}

/// Runs the implicit-grant login.
///
/// 1. Starts the callback server in the background
/// 2. Polls `/health` until it answers (fatal after `ready_timeout`)
/// 3. Opens the authorization URL in the browser
/// 4. Polls the completion signal for up to `auth_timeout`
///
/// The callback server is shut down before returning, whatever the outcome.
///
/// # Errors
///
/// [`Error::Environment`] if the server cannot be started or becomes ready too
/// late, or if the provider's redirect carried no token parameter at all.
pub async fn login(
    store: &TokenStore,
    config: &LoginConfig,
    browser: &dyn Browser,
) -> Res<LoginOutcome> {
    let signal = Arc::new(AuthSignal::new());
    let server = start_api_server(config.server_addr, store.clone(), Arc::clone(&signal));

    let result = run(&server, &signal, config, browser).await;
    let stopped = server.shutdown().await;

    match result {
        Ok(outcome) => {
            if let Err(e) = stopped {
                warning!("Callback server did not stop cleanly: {}", e);
            }
            Ok(outcome)
        }
        // a server that died on its own knows best what went wrong
        Err(e) => Err(stopped.err().unwrap_or(e)),
    }
}

async fn run(
    server: &ServerHandle,
    signal: &AuthSignal,
    config: &LoginConfig,
    browser: &dyn Browser,
) -> Res<LoginOutcome> {
    wait_for_server(server, config).await?;

    let auth_url = config.authorize_url()?;
    info!("Prompting authorization page...");
    if browser.open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        );
    }

    match wait_for_token(signal, config).await {
        Some(TokenReceipt::Token) => Ok(LoginOutcome::Succeeded),
        Some(TokenReceipt::EmptyToken) => Ok(LoginOutcome::BadToken),
        Some(TokenReceipt::Malformed) => Err(Error::Environment(
            "authorization redirect carried no access_token parameter".to_string(),
        )),
        Some(TokenReceipt::WriteFailed) => Err(Error::Environment(
            "received token could not be written to the token file".to_string(),
        )),
        None => Ok(LoginOutcome::TimedOut),
    }
}

/// Polls the liveness route until the callback server answers.
async fn wait_for_server(server: &ServerHandle, config: &LoginConfig) -> Res<()> {
    let client = Client::builder()
        .timeout(config.poll_interval.max(Duration::from_millis(500)))
        .build()?;
    let health_url = config.health_url();
    let start = Instant::now();

    loop {
        if server.is_finished() {
            return Err(Error::Environment(
                "callback server stopped before becoming ready".to_string(),
            ));
        }

        if let Ok(res) = client.get(&health_url).send().await {
            if res.status() == StatusCode::OK {
                return Ok(());
            }
        }

        if start.elapsed() >= config.ready_timeout {
            return Err(Error::Environment(format!(
                "callback server on {} was not ready after {:?}",
                config.server_addr, config.ready_timeout
            )));
        }
        tokio::time::sleep(config.poll_interval).await;
    }
}

/// Waits for the token intake route to record a receipt.
///
/// Returns `None` once `auth_timeout` has elapsed without one.
async fn wait_for_token(signal: &AuthSignal, config: &LoginConfig) -> Option<TokenReceipt> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization in the browser...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let start = Instant::now();
    while start.elapsed() < config.auth_timeout {
        if let Some(receipt) = signal.receipt() {
            pb.finish_and_clear();
            return Some(receipt);
        }
        tokio::time::sleep(config.poll_interval).await;
    }

    pb.finish_and_clear();
    signal.receipt()
}
