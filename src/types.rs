use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferPlaybackRequest {
    pub device_ids: Vec<String>,
    pub play: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartPlaybackRequest {
    pub context_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Page<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Playlist pages may contain `null` entries for unavailable playlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPlaylistsResponse {
    pub playlists: Page<Option<Playlist>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// What the token intake route received, recorded once per login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenReceipt {
    /// A non-empty token was stored.
    Token,
    /// The provider redirect carried an empty token.
    EmptyToken,
    /// The intake request had no `access_token` parameter at all.
    Malformed,
    /// The token could not be written to the token file.
    WriteFailed,
}

/// Terminal states of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Succeeded,
    BadToken,
    TimedOut,
}

impl LoginOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Succeeded => "You are successfully logged in. Lets go play some music!",
            LoginOutcome::BadToken => "Received an empty token. Please try logging in again.",
            LoginOutcome::TimedOut => "Timeout exceeded on login",
        }
    }
}
