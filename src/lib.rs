//! Spotify playback remote library
//!
//! This library backs the `spotctl` command-line tool. It authorizes a Spotify
//! account through the OAuth implicit grant using a short-lived local callback
//! server, keeps the resulting bearer token in a file in the temp directory, and
//! sends a handful of playback-control requests to the Spotify Web API.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local callback server
//! - `cli` - Command handlers (`login`, `next`, `device`, `random`)
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every layer
//! - `management` - Local persistence of the bearer token
//! - `server` - Local HTTP server for the OAuth redirect
//! - `spotify` - Spotify Web API client and the login orchestration
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotctl::{cli, config, management::TokenStore};
//!
//! #[tokio::main]
//! async fn main() -> spotctl::Res<()> {
//!     config::load_env().await?;
//!     let store = TokenStore::open_or_create(&config::token_dir()).await?;
//!     println!("{}", cli::next(&store, &config::spotify_apiurl()).await?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every layer of the crate reports failures through [`Error`], which lets the
/// command handlers tell recoverable conditions (missing token, rejected token,
/// no devices) apart from fatal environment problems.
///
/// # Example
///
/// ```
/// use spotctl::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Prompting authorization page...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only `main` uses this: library code returns [`Error`] and lets the
/// top-level boundary decide whether the condition is fatal.
///
/// # Example
///
/// ```
/// error!("Cannot open token file: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that the user should notice, such as a browser
/// that failed to open or a malformed request reaching the callback server.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
