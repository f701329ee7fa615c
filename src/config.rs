//! Configuration management for the playback remote.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default, so the tool works out of
//! the box once a Spotify client id is provided.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::Res;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:7911";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SCOPE: &str = "ugc-image-upload user-read-playback-state user-modify-playback-state user-read-currently-playing streaming app-remote-control";
pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `spotctl/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/spotctl/.env`
/// - macOS: `~/Library/Application Support/spotctl/.env`
/// - Windows: `%LOCALAPPDATA%/spotctl/.env`
///
/// A missing file is not an error; values already present in the process
/// environment are never overridden.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the parent directory cannot be created, and
/// [`crate::Error::Environment`] if the file exists but cannot be parsed.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotctl/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| {
            crate::Error::Environment(format!("cannot load {}: {}", path.display(), e))
        })?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Spotify application client id (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// Registered at the Spotify developer dashboard. Empty when unset; the
/// authorization page will then reject the request.
pub fn spotify_client_id() -> String {
    var_or("SPOTIFY_API_AUTH_CLIENT_ID", "")
}

/// Space separated scope list requested at login (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Spotify OAuth authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`), e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Directory searched for the token file (`SPOTCTL_TOKEN_DIR`).
///
/// Defaults to the OS temp directory.
pub fn token_dir() -> PathBuf {
    match env::var("SPOTCTL_TOKEN_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => env::temp_dir(),
    }
}

/// How long the login flow waits for the callback server to come up
/// (`SPOTCTL_READY_TIMEOUT_SECS`). The authorization wait is twice as long.
pub fn ready_timeout() -> Duration {
    let secs = env::var("SPOTCTL_READY_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_READY_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
