//! # API Module
//!
//! HTTP handlers for the short-lived callback server that completes the login.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, answers `alive` once the listener is bound.
//!   The login flow polls it before opening the browser.
//! - [`bridge`] - `GET /ok` and `GET /ok/`, the redirect target registered with
//!   Spotify. Forwards the fragment-encoded token to the intake route.
//! - [`store_token`] - `GET /token/store?access_token=...`, writes the token to
//!   the token file and completes the login signal.
//! - [`stop`] - `GET /stop`, shuts the server down.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotctl::api::{health, store_token};
//!
//! let app = Router::new()
//!     .route("/token/store", get(store_token))
//!     .route("/health", get(health));
//! ```

mod bridge;
mod health;
mod token;

pub use bridge::bridge;
pub use health::health;
pub use token::{stop, store_token};
