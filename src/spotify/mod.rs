//! # Spotify Integration Module
//!
//! Client side of the Spotify Web API as far as this tool needs it, plus the
//! login flow that produces the bearer token everything else relies on.
//!
//! ## Architecture
//!
//! ```text
//! Command handlers (cli)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (implicit grant over a local callback server)
//!     ├── Player (next, play with device fallback)
//!     ├── Devices (list, switch)
//!     └── Browse (categories, category playlists)
//!          ↓
//! Request executor (Session: bearer token, JSON body, status classification)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 implicit grant. Spotify redirects the
//! browser to the local bridge page with the token in the URL fragment; the page
//! hands it to the callback server, which stores it and completes the login.
//! There is no refresh token: when the token expires the remote answers `401`
//! and the user logs in again.
//!
//! ## Error Handling
//!
//! Every call goes through [`request::classify`]:
//! - `< 300` succeeds
//! - `401` becomes [`crate::Error::Unauthorized`]
//! - `404` becomes [`crate::Error::NotFound`], which [`player::play`] answers by
//!   retrying once on the first listed device
//! - everything else becomes [`crate::Error::Status`] with the code
//!
//! Nothing else is retried.
//!
//! ## API Coverage
//!
//! - `GET /me/player/devices` - available playback devices
//! - `PUT /me/player` - transfer playback to a device
//! - `POST /me/player/next` - skip to the next track
//! - `PUT /me/player/play[?device_id=]` - start playing a context
//! - `GET /browse/categories` - browse categories
//! - `GET /browse/categories/{id}/playlists` - playlists of a category

pub mod auth;
pub mod browse;
pub mod devices;
pub mod player;
pub mod request;

pub use request::{Session, classify};
