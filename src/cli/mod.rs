//! # CLI Module
//!
//! Command handlers behind `spotctl <command>`. Each handler takes the token
//! store, does its work against the Web API and returns the line to print.
//!
//! ## Commands
//!
//! - [`login`] - authorize through the browser and store the token
//! - [`next`] - skip to the next track
//! - [`device`] - pick the playback device from an indexed menu
//! - [`random`] - play a random playlist from a random browse category
//!
//! ## Error Handling
//!
//! Recoverable failures are rendered as text, so a command always "succeeds"
//! from the process' point of view. A missing token and a token rejected by
//! the remote both ask the user to log in again. Only fatal conditions
//! ([`crate::Error::is_fatal`]) come back as `Err`, for `main` to report and
//! exit.

mod device;
mod login;
mod next;
mod random;

pub use device::device;
pub use login::login;
pub use next::next;
pub use random::random;

use crate::{Error, Res, management::TokenStore, spotify::Session};

pub const RELOGIN: &str = "You need to re-login.";

async fn open_session(store: &TokenStore, api_url: &str) -> Res<Session> {
    let token = store.read().await?;
    Ok(Session::new(api_url, token))
}

/// Turns an error into the line shown to the user, or passes fatal ones on.
fn render(e: Error, fallback: impl FnOnce(Error) -> String) -> Res<String> {
    match e {
        Error::NoToken | Error::Unauthorized => Ok(RELOGIN.to_string()),
        e if e.is_fatal() => Err(e),
        e => Ok(fallback(e)),
    }
}
